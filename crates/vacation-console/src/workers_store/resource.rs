use crate::model::Worker;
use fetch_store::{normalize, StoreResource};

/// Marker type for the workers resource.
pub struct Workers;

/// Shaped outcomes of the workers actions.
#[derive(Debug)]
pub enum WorkersResponse {
    /// Full roster refresh.
    Fetched(Vec<Worker>),
    /// The backend confirmed a new work time for one worker.
    WorkTimeChanged { user_id: u64, work_time: f32 },
}

impl StoreResource for Workers {
    type Data = Vec<Worker>;
    type Response = WorkersResponse;

    fn initial() -> Vec<Worker> {
        Vec::new()
    }

    fn merge(data: &Vec<Worker>, response: WorkersResponse) -> Vec<Worker> {
        match response {
            WorkersResponse::Fetched(workers) => workers,
            WorkersResponse::WorkTimeChanged { user_id, work_time } => normalize::patch_entity(
                data,
                |w| w.user_id == user_id,
                |w| w.work_time = work_time,
            ),
        }
    }
}
