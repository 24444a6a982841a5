//! Revision check against the document subtitle.
//!
//! Part 6 carries its revision in the book subtitle, e.g.
//! "DICOM PS3.6 2025b - Data Dictionary"; the third whitespace-delimited
//! token is the revision. A mismatch against the locally tracked revision
//! is reported as a warning and never aborts the run.

use crate::error::GenerateError;

/// Outcome of comparing the document revision with the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionCheck {
    Match,
    Mismatch { document: String, expected: String },
}

/// Extract the revision token from the subtitle text.
pub fn revision_token(subtitle: &str) -> Result<&str, GenerateError> {
    subtitle
        .split_whitespace()
        .nth(2)
        .ok_or_else(|| GenerateError::MalformedSubtitle {
            text: subtitle.to_string(),
        })
}

/// Compare the document revision against the expected revision.
pub fn check_revision(document: &str, expected: &str) -> RevisionCheck {
    if document == expected {
        RevisionCheck::Match
    } else {
        RevisionCheck::Mismatch {
            document: document.to_string(),
            expected: expected.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_third_token() {
        let token = revision_token("DICOM PS3.6 2025b - Data Dictionary").unwrap();
        assert_eq!(token, "2025b");
    }

    #[test]
    fn short_subtitle_is_malformed() {
        let error = revision_token("DICOM PS3.6").unwrap_err();
        assert!(matches!(error, GenerateError::MalformedSubtitle { .. }));
    }

    #[test]
    fn empty_subtitle_is_malformed() {
        assert!(revision_token("").is_err());
    }

    #[test]
    fn matching_revision() {
        assert_eq!(check_revision("2025b", "2025b"), RevisionCheck::Match);
    }

    #[test]
    fn mismatching_revision_names_both_values() {
        let check = check_revision("2026a", "2025b");
        assert_eq!(
            check,
            RevisionCheck::Mismatch {
                document: "2026a".to_string(),
                expected: "2025b".to_string(),
            }
        );
    }
}
