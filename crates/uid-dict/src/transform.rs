//! Global substitutions applied to every record after extraction.

use crate::model::UidEntry;

/// Apply the two document-wide cleanup rules in place:
/// ampersands in names become the word "and", and soft hyphens
/// (U+00AD) are removed from UID values. No other field is touched.
pub fn apply_substitutions(entries: &mut [UidEntry]) {
    for entry in entries {
        if entry.name.contains('&') {
            entry.name = entry.name.replace('&', "and");
        }
        if entry.value.contains('\u{00ad}') {
            entry.value = entry.value.replace('\u{00ad}', "");
        }
    }
}
