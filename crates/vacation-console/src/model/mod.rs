//! Domain models for the vacation console.
//!
//! Plain data structures deserialized from the console backend's JSON
//! payloads. They carry no behavior; normalization policies live with each
//! resource's store module.

pub mod absence;
pub mod acceptance;
pub mod presence;
pub mod vacation;
pub mod worker;

pub use absence::AbsenceEvent;
pub use acceptance::{Acceptance, AcceptanceStatus};
pub use presence::PresenceConfirmation;
pub use vacation::VacationDays;
pub use worker::Worker;
