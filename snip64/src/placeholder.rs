//! Placeholder text for accepted candidates.
//!
//! The format is fixed:
//!
//! ```text
//! [base64 payload ~<bytes> bytes | preview: <preview><ellipsis> ]
//! ```
//!
//! The preview only ever contains encoded characters, never decoded bytes.

use crate::candidate::Candidate;

const ELLIPSIS: &str = "...";

pub(crate) fn build(candidate: &Candidate, preview_length: usize) -> String {
    let bytes = candidate.decoded_len();

    // An empty preview still keeps the space on both sides of the field.
    if preview_length == 0 {
        return format!("[base64 payload ~{bytes} bytes | preview:  ]");
    }

    let normalized = candidate.normalized();
    // Candidates are pure ASCII, so a byte index is a char boundary.
    let end = preview_length.min(normalized.len());
    let preview = &normalized[..end];
    let ellipsis = if normalized.len() > preview_length {
        ELLIPSIS
    } else {
        ""
    };

    format!("[base64 payload ~{bytes} bytes | preview: {preview}{ellipsis} ]")
}
