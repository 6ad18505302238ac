//! Error types for `argmark` markdown splicing.

use thiserror::Error;

/// Errors raised when the marker lines of a document are inconsistent.
///
/// A document containing neither marker is not an error: the whole
/// document is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    /// One marker is present without its pair.
    #[error("found marker '{found}' but not its pair '{missing}'")]
    MissingMarker {
        /// The marker line that was found.
        found: String,
        /// The marker line that was not found.
        missing: String,
    },

    /// The above-marker appears before the below-marker.
    #[error("marker '{above}' appears before marker '{below}'")]
    MarkersOutOfOrder {
        /// The marker content is written below.
        below: String,
        /// The marker content is written above.
        above: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker_display() {
        let err = SpliceError::MissingMarker {
            found: "<!-- start -->".to_string(),
            missing: "<!-- end -->".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "found marker '<!-- start -->' but not its pair '<!-- end -->'"
        );
    }

    #[test]
    fn test_out_of_order_display() {
        let err = SpliceError::MarkersOutOfOrder {
            below: "B".to_string(),
            above: "A".to_string(),
        };
        assert_eq!(err.to_string(), "marker 'A' appears before marker 'B'");
    }
}
