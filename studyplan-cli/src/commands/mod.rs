pub mod add;
pub mod clear;
pub mod config;
pub mod dashboard;
pub mod list;
pub mod remove;
pub mod show;
pub mod subjects;

use anyhow::Result;
use studyplan_core::EntryId;

/// Find the one id in `ids` that equals `input` or starts with it.
///
/// `Ok(None)` when nothing matches; an error when a prefix is ambiguous.
pub fn resolve_id<'a>(
    input: &str,
    ids: impl IntoIterator<Item = &'a EntryId>,
) -> Result<Option<EntryId>> {
    let mut matches: Vec<&EntryId> = Vec::new();

    for id in ids {
        if id.as_str() == input {
            return Ok(Some(id.clone()));
        }
        if !input.is_empty() && id.as_str().starts_with(input) {
            matches.push(id);
        }
    }

    match matches.as_slice() {
        [] => Ok(None),
        [one] => Ok(Some((*one).clone())),
        _ => anyhow::bail!(
            "Id '{}' is ambiguous ({} matches). Use more characters.",
            input,
            matches.len()
        ),
    }
}
