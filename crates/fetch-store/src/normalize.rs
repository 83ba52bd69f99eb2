//! # Normalization Helpers
//!
//! Small combinators for the two non-trivial normalization policies, shared
//! by every resource's [`merge`](crate::resource::StoreResource::merge).

use std::collections::BTreeMap;

/// Rebuilds a keyed mapping from a full list response.
///
/// This is a full replace-by-rebuild, not an incremental patch: keys that are
/// absent from `entities` are gone from the result, so an entry removed
/// server-side disappears client-side on the next fetch.
pub fn keyed_by<E, K, F>(entities: Vec<E>, key: F) -> BTreeMap<K, E>
where
    K: Ord,
    F: Fn(&E) -> K,
{
    entities.into_iter().map(|e| (key(&e), e)).collect()
}

/// Patches the entities selected by `is_target`, leaving every other entity
/// and the collection order untouched.
pub fn patch_entity<E, F, P>(entities: &[E], is_target: F, patch: P) -> Vec<E>
where
    E: Clone,
    F: Fn(&E) -> bool,
    P: Fn(&mut E),
{
    entities
        .iter()
        .map(|e| {
            if is_target(e) {
                let mut updated = e.clone();
                patch(&mut updated);
                updated
            } else {
                e.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_by_drops_stale_keys_on_rebuild() {
        let first = keyed_by(vec![("a", 1), ("b", 2)], |e| e.0.to_string());
        assert_eq!(first.len(), 2);

        // The next response no longer contains "a".
        let second = keyed_by(vec![("b", 3)], |e| e.0.to_string());
        assert_eq!(second.len(), 1);
        assert_eq!(second.get("b"), Some(&("b", 3)));
    }

    #[test]
    fn patch_entity_touches_only_the_target() {
        let entities = vec![(1, "x"), (2, "y"), (3, "z")];
        let patched = patch_entity(&entities, |e| e.0 == 2, |e| e.1 = "patched");
        assert_eq!(patched, vec![(1, "x"), (2, "patched"), (3, "z")]);
    }
}
