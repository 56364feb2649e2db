//! Derived view projection
//!
//! Pure functions that flatten location entries into addressable
//! repository options. No caching of output: recomputed on read.

use crate::model::{LocationEntry, RepositoryOption};

/// Flatten entries into one option per (location, repository) pair
///
/// Only `Loaded` entries contribute; error entries add nothing to the
/// derived view until a valid payload arrives. Output is sorted
/// lexicographically by the composite key `location_name:repository_name`.
pub fn build_repo_options<'a>(
    entries: impl IntoIterator<Item = &'a LocationEntry>,
) -> Vec<RepositoryOption> {
    let mut options: Vec<RepositoryOption> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            LocationEntry::Loaded(data) => Some(data),
            LocationEntry::LoadError { .. } => None,
        })
        .flat_map(|data| {
            data.repositories.iter().map(|repo| RepositoryOption {
                location_name: data.name.clone(),
                repository_name: repo.name.clone(),
                schedules: repo.schedules.clone(),
                sensors: repo.sensors.clone(),
            })
        })
        .collect();

    options.sort_by_key(RepositoryOption::sort_key);
    options
}
