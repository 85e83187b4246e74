//! Candidate analysis for a single string.
//!
//! A string is a candidate when, after removing whitespace, it is long enough,
//! uses only base64 characters (standard or URL-safe), decodes strictly, and
//! re-encodes to the same text. Each failed gate maps to a [`Rejection`].

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

/// Every character a candidate may contain once whitespace is removed.
///
/// This is the standard base64 alphabet, the `=` padding character and the
/// URL-safe substitutes `-` and `_`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=_-";

/// Why a string was not treated as a base64 payload.
///
/// Rejections are diagnostics only. Snipping never surfaces them; a rejected
/// string is simply returned unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("normalized length {length} is below the minimum of {min_length}")]
    TooShort { length: usize, min_length: usize },
    #[error("empty input")]
    Empty,
    #[error("character {character:?} at byte {offset} is not in the base64 alphabet")]
    InvalidAlphabet { character: char, offset: usize },
    #[error("strict base64 decoding failed: {0}")]
    DecodeFailed(#[from] base64::DecodeError),
    #[error("decoded bytes do not re-encode to the original text")]
    RoundTripMismatch,
}

/// A string accepted as a base64 payload.
///
/// Holds the whitespace-stripped (still encoded) text and the decoded bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    normalized: String,
    decoded: Vec<u8>,
}

impl Candidate {
    /// The input with all whitespace removed, in its original alphabet.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn decoded(&self) -> &[u8] {
        &self.decoded
    }

    /// Number of bytes the payload decodes to.
    pub fn decoded_len(&self) -> usize {
        self.decoded.len()
    }
}

/// Whitespace as matched by a classic `\s` class: space, tab, LF, VT, FF, CR.
const fn is_stripped_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

const fn in_alphabet(byte: u8) -> bool {
    matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' | b'=' | b'_' | b'-')
}

pub(crate) fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|&ch| !is_stripped_whitespace(ch))
        .collect()
}

fn check_alphabet(normalized: &str) -> Result<(), Rejection> {
    if normalized.is_empty() {
        return Err(Rejection::Empty);
    }
    match normalized
        .char_indices()
        .find(|&(_, ch)| u8::try_from(ch).map_or(true, |byte| !in_alphabet(byte)))
    {
        Some((offset, character)) => Err(Rejection::InvalidAlphabet { character, offset }),
        None => Ok(()),
    }
}

/// Maps URL-safe characters onto the standard alphabet.
pub(crate) fn canonicalize(normalized: &str) -> String {
    normalized
        .chars()
        .map(|ch| match ch {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}

/// Pads and decodes `canonical`, then checks the bytes re-encode to it.
///
/// With the strict `STANDARD` engine a successful decode already implies a
/// matching re-encode. Engines that accept non-zero trailing bits can fail
/// the comparison.
fn decode_canonical<E: Engine>(engine: &E, canonical: &str) -> Result<Vec<u8>, Rejection> {
    let mut padded = canonical.to_owned();
    let remainder = padded.len() % 4;
    if remainder != 0 {
        padded.extend(std::iter::repeat('=').take(4 - remainder));
    }

    let decoded = engine.decode(padded.as_bytes())?;

    let reconstituted = engine.encode(&decoded);
    if reconstituted.trim_end_matches('=') != canonical.trim_end_matches('=') {
        return Err(Rejection::RoundTripMismatch);
    }
    Ok(decoded)
}

pub(crate) fn analyse(value: &str, min_length: usize) -> Result<Candidate, Rejection> {
    let normalized = normalize(value);

    if normalized.len() < min_length {
        return Err(Rejection::TooShort {
            length: normalized.len(),
            min_length,
        });
    }

    check_alphabet(&normalized)?;

    let decoded = decode_canonical(&STANDARD, &canonicalize(&normalized))?;

    Ok(Candidate {
        normalized,
        decoded,
    })
}
