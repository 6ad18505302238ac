//! Marker-based document splicing.
//!
//! Generated content lives between two marker lines. Splicing keeps
//! everything up to and including the below-marker line and everything from
//! the above-marker line onwards, and replaces what lies between. A document
//! with neither marker is replaced entirely.
//!
//! Marker lines match exactly; a trailing `\r` is ignored so CRLF documents
//! work.

use argmark_core::config::MarkerPair;

use crate::error::SpliceError;

/// Byte span of a marker line, excluding its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    start: usize,
    end: usize,
}

/// Location of the replaceable region inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    /// End of the below-marker line (before its newline).
    below_end: usize,
    /// Start of the above-marker line.
    above_start: usize,
}

/// Splice `content` into `existing` between the marker lines.
///
/// With `collapse` set, runs of two or more blank lines anywhere
/// in the result are reduced to one.
///
/// # Errors
///
/// Returns [`SpliceError`] if only one marker is present or the markers are
/// in the wrong order.
pub fn splice(
    existing: &str,
    content: &str,
    markers: &MarkerPair,
    collapse: bool,
) -> Result<String, SpliceError> {
    let spliced = match locate(existing, markers)? {
        Some(region) => {
            let mut out = String::with_capacity(existing.len() + content.len() + 2);
            out.push_str(&existing[..region.below_end]);
            out.push('\n');
            out.push_str(content);
            out.push('\n');
            out.push_str(&existing[region.above_start..]);
            out
        }
        None => content.to_string(),
    };

    Ok(if collapse {
        collapse_blank_lines(&spliced)
    } else {
        spliced
    })
}

/// Return the text between the marker lines, or `None` if the document has
/// no markers.
///
/// # Errors
///
/// Returns [`SpliceError`] under the same conditions as [`splice`].
pub fn extract_region<'a>(
    text: &'a str,
    markers: &MarkerPair,
) -> Result<Option<&'a str>, SpliceError> {
    Ok(locate(text, markers)?.map(|region| &text[region.below_end + 1..region.above_start]))
}

/// Reduce every run of consecutive blank (whitespace-only) lines to its
/// first line.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_blank = false;

    for line in text.split_inclusive('\n') {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        previous_blank = blank;
        out.push_str(line);
    }

    out
}

fn locate(text: &str, markers: &MarkerPair) -> Result<Option<Region>, SpliceError> {
    let Some(below) = find_marker_line(text, &markers.below, 0) else {
        return match find_marker_line(text, &markers.above, 0) {
            Some(_) => Err(SpliceError::MissingMarker {
                found: markers.above.clone(),
                missing: markers.below.clone(),
            }),
            None => Ok(None),
        };
    };

    // The above-marker is searched after the below-marker line so that
    // identical markers still delimit a region.
    let after_below = text[below.end..]
        .find('\n')
        .map_or(text.len(), |offset| below.end + offset + 1);

    match find_marker_line(text, &markers.above, after_below) {
        Some(above) => Ok(Some(Region {
            below_end: below.end,
            above_start: above.start,
        })),
        None if find_marker_line(text, &markers.above, 0)
            .is_some_and(|above| above.start != below.start) =>
        {
            Err(SpliceError::MarkersOutOfOrder {
                below: markers.below.clone(),
                above: markers.above.clone(),
            })
        }
        None => Err(SpliceError::MissingMarker {
            found: markers.below.clone(),
            missing: markers.above.clone(),
        }),
    }
}

fn find_marker_line(text: &str, marker: &str, from: usize) -> Option<LineSpan> {
    let mut start = from;
    for line in text[from..].split_inclusive('\n') {
        let without_newline = line.strip_suffix('\n').unwrap_or(line);
        let content = without_newline
            .strip_suffix('\r')
            .unwrap_or(without_newline);
        if content == marker {
            return Some(LineSpan {
                start,
                end: start + without_newline.len(),
            });
        }
        start += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmark_core::config::{DEFAULT_REPLACE_ABOVE, DEFAULT_REPLACE_BELOW};
    use proptest::prelude::*;

    fn markers() -> MarkerPair {
        MarkerPair::default()
    }

    fn document(region: &str) -> String {
        format!("# Title\n\nIntro.\n\n{DEFAULT_REPLACE_BELOW}\n{region}\n{DEFAULT_REPLACE_ABOVE}\n\nOutro.\n")
    }

    #[test]
    fn test_splice_between_markers() {
        let doc = document("old content");
        let result = splice(&doc, "new content", &markers(), false).unwrap();
        assert_eq!(result, document("new content"));
    }

    #[test]
    fn test_splice_without_markers_replaces_everything() {
        let result = splice("anything\nat all\n", "replacement", &markers(), false).unwrap();
        assert_eq!(result, "replacement");
    }

    #[test]
    fn test_splice_empty_region() {
        let doc = format!("{DEFAULT_REPLACE_BELOW}\n{DEFAULT_REPLACE_ABOVE}\n");
        let result = splice(&doc, "inserted", &markers(), false).unwrap();
        assert_eq!(result, format!("{DEFAULT_REPLACE_BELOW}\ninserted\n{DEFAULT_REPLACE_ABOVE}\n"));
    }

    #[test]
    fn test_only_below_marker_is_error() {
        let doc = format!("intro\n{DEFAULT_REPLACE_BELOW}\nbody\n");
        let err = splice(&doc, "x", &markers(), false).unwrap_err();
        assert_eq!(
            err,
            SpliceError::MissingMarker {
                found: DEFAULT_REPLACE_BELOW.to_string(),
                missing: DEFAULT_REPLACE_ABOVE.to_string(),
            }
        );
    }

    #[test]
    fn test_only_above_marker_is_error() {
        let doc = format!("intro\n{DEFAULT_REPLACE_ABOVE}\n");
        let err = splice(&doc, "x", &markers(), false).unwrap_err();
        assert!(matches!(err, SpliceError::MissingMarker { ref found, .. } if found == DEFAULT_REPLACE_ABOVE));
    }

    #[test]
    fn test_reversed_markers_is_error() {
        let doc = format!("{DEFAULT_REPLACE_ABOVE}\nbody\n{DEFAULT_REPLACE_BELOW}\n");
        let err = splice(&doc, "x", &markers(), false).unwrap_err();
        assert!(matches!(err, SpliceError::MarkersOutOfOrder { .. }));
    }

    #[test]
    fn test_marker_must_match_whole_line() {
        let doc = format!("see `{DEFAULT_REPLACE_BELOW}` and `{DEFAULT_REPLACE_ABOVE}`\n");
        let result = splice(&doc, "whole", &markers(), false).unwrap();
        assert_eq!(result, "whole");
    }

    #[test]
    fn test_crlf_markers() {
        let doc = format!("a\r\n{DEFAULT_REPLACE_BELOW}\r\nold\r\n{DEFAULT_REPLACE_ABOVE}\r\nb\r\n");
        let result = splice(&doc, "new", &markers(), false).unwrap();
        assert_eq!(
            result,
            format!("a\r\n{DEFAULT_REPLACE_BELOW}\r\nnew\n{DEFAULT_REPLACE_ABOVE}\r\nb\r\n")
        );
    }

    #[test]
    fn test_identical_markers() {
        let same = MarkerPair {
            below: "<!-- usage -->".into(),
            above: "<!-- usage -->".into(),
        };
        let doc = "top\n<!-- usage -->\nold\n<!-- usage -->\nbottom";
        let result = splice(doc, "new", &same, false).unwrap();
        assert_eq!(result, "top\n<!-- usage -->\nnew\n<!-- usage -->\nbottom");
    }

    #[test]
    fn test_single_identical_marker_is_missing_pair() {
        let same = MarkerPair {
            below: "<!-- usage -->".into(),
            above: "<!-- usage -->".into(),
        };
        let err = splice("top\n<!-- usage -->\nbottom", "new", &same, false).unwrap_err();
        assert!(matches!(err, SpliceError::MissingMarker { .. }), "{err:?}");
    }

    #[test]
    fn test_custom_markers() {
        let custom = MarkerPair {
            below: "<!-- BEGIN -->".into(),
            above: "<!-- END -->".into(),
        };
        let doc = "<!-- BEGIN -->\nstale\n<!-- END -->";
        let result = splice(doc, "fresh", &custom, false).unwrap();
        assert_eq!(result, "<!-- BEGIN -->\nfresh\n<!-- END -->");
    }

    #[test]
    fn test_collapse_blank_lines_whole_document() {
        let doc = format!("a\n\n\n\nb\n{DEFAULT_REPLACE_BELOW}\n{DEFAULT_REPLACE_ABOVE}\n");
        let result = splice(&doc, "\n\n\ncontent\n\n\n", &markers(), true).unwrap();
        assert_eq!(
            result,
            format!("a\n\nb\n{DEFAULT_REPLACE_BELOW}\n\ncontent\n\n{DEFAULT_REPLACE_ABOVE}\n")
        );
    }

    #[test]
    fn test_collapse_whitespace_only_lines() {
        assert_eq!(collapse_blank_lines("a\n  \n\t\n\nb"), "a\n  \nb");
        assert_eq!(collapse_blank_lines("a\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_collapse_applies_in_whole_file_mode() {
        let result = splice("old", "x\n\n\n\ny", &markers(), true).unwrap();
        assert_eq!(result, "x\n\ny");
    }

    #[test]
    fn test_extract_region() {
        let doc = document("line one\nline two");
        assert_eq!(extract_region(&doc, &markers()).unwrap(), Some("line one\nline two\n"));
        assert_eq!(extract_region("no markers", &markers()).unwrap(), None);
    }

    fn content_strategy() -> impl Strategy<Value = String> {
        "[a-z |*#\n-]{0,60}"
    }

    proptest! {
        #[test]
        fn prop_splice_round_trip(region in content_strategy(), content in content_strategy()) {
            let doc = document(&region);
            let spliced = splice(&doc, &content, &markers(), false).unwrap();
            let extracted = extract_region(&spliced, &markers()).unwrap();
            let expected = format!("{content}\n");
            prop_assert_eq!(extracted, Some(expected.as_str()));
        }

        #[test]
        fn prop_splice_idempotent(region in content_strategy(), content in content_strategy()) {
            let doc = document(&region);
            let once = splice(&doc, &content, &markers(), false).unwrap();
            let twice = splice(&once, &content, &markers(), false).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_collapse_leaves_no_blank_runs(region in content_strategy(), content in "[a \n]{0,80}") {
            let doc = document(&region);
            let spliced = splice(&doc, &content, &markers(), true).unwrap();
            let lines: Vec<&str> = spliced.split_inclusive('\n').collect();
            for pair in lines.windows(2) {
                prop_assert!(!(pair[0].trim().is_empty() && pair[1].trim().is_empty()));
            }
        }
    }
}
