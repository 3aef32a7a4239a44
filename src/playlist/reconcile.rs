use std::collections::HashSet;

use crate::types::Track;

/// Difference between an archived snapshot and a new track list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// In the new list but not in the archive, in new-list order.
    pub added: Vec<Track>,
    /// In the archive but not in the new list, in archive order.
    pub removed: Vec<Track>,
}

/// Set difference of `archive` and `current`, keyed by track id.
pub fn reconcile(archive: &[Track], current: &[Track]) -> Reconciliation {
    let archive_ids: HashSet<&str> = archive.iter().map(|t| t.id.as_str()).collect();
    let current_ids: HashSet<&str> = current.iter().map(|t| t.id.as_str()).collect();

    Reconciliation {
        added: current
            .iter()
            .filter(|t| !archive_ids.contains(t.id.as_str()))
            .cloned()
            .collect(),
        removed: archive
            .iter()
            .filter(|t| !current_ids.contains(t.id.as_str()))
            .cloned()
            .collect(),
    }
}
