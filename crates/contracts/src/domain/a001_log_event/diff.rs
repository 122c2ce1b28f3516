use std::collections::BTreeSet;

use super::dimension::{MultiDimension, SingleDimension};
use super::selection::FilterSelection;
use super::storage::FilterSnapshot;

/// `true` when the live selection differs from the last applied snapshot.
///
/// No snapshot means nothing was applied yet, which counts as a change.
/// Checkbox groups compare as sets, everything else by exact value.
pub fn has_unapplied_changes(selection: &FilterSelection, applied: Option<&FilterSnapshot>) -> bool {
    let Some(applied) = applied else {
        return true;
    };

    let range = selection.time_range();
    if applied.creation_time() != Some((range.start.as_str(), range.end.as_str())) {
        return true;
    }

    for dim in SingleDimension::all() {
        if applied.value(dim) != Some(selection.value(dim)) {
            return true;
        }
    }

    MultiDimension::all().into_iter().any(|dim| {
        let Some(stored) = applied.members(dim) else {
            return true;
        };
        let stored: BTreeSet<&str> = stored.iter().map(String::as_str).collect();
        let current = selection.selected(dim);
        stored.len() != current.len() || !current.iter().all(|label| stored.contains(label))
    })
}
