// src/domain/slug/allocator.rs
use std::collections::HashSet;

/// Pick the first variant of `base` that is not in `existing`.
///
/// Tries `base` itself, then `base-1`, `base-2`, ... in ascending order.
/// `existing` is never mutated; batch callers insert the returned slug
/// themselves once it has been persisted.
pub fn allocate_unique_slug(base: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base) {
        return base.to_string();
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = format!("{base}-{counter}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
