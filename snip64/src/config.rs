//! Redactor configuration.
//!
//! The configuration is a small `Copy` value. It is built once, handed to a
//! [`crate::Redactor`], and never mutated afterwards.

/// Default minimum whitespace-stripped length for a string to be considered.
pub const DEFAULT_MIN_LENGTH: usize = 256;

/// Default number of encoded characters shown in the placeholder preview.
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

/// Default nesting depth past which dynamic containers are left untouched.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Thresholds that control candidate detection and placeholder output.
///
/// Use [`SnipConfig::default`] and the `with_*` methods to build instances:
///
/// ```rust
/// use snip64::SnipConfig;
///
/// let config = SnipConfig::default()
///     .with_min_length(64)
///     .with_preview_length(16);
/// assert_eq!(config.min_length(), 64);
/// assert_eq!(config.preview_length(), 16);
/// ```
///
/// With the `serde` feature the configuration can be embedded in a host
/// application's own config file. Missing fields take their defaults and
/// negative numbers are clamped to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SnipConfig {
    /// Strings whose normalized length is below this are never candidates.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "clamp::non_negative"))]
    min_length: usize,
    /// Number of leading encoded characters kept in the preview.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "clamp::non_negative"))]
    preview_length: usize,
    /// Containers nested deeper than this are returned unchanged.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "clamp::non_negative"))]
    max_depth: usize,
}

impl SnipConfig {
    /// Constructs a configuration from explicit thresholds.
    #[must_use]
    pub const fn new(min_length: usize, preview_length: usize) -> Self {
        Self {
            min_length,
            preview_length,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the minimum normalized length.
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the preview length. Zero disables the preview entirely.
    #[must_use]
    pub const fn with_preview_length(mut self, preview_length: usize) -> Self {
        self.preview_length = preview_length;
        self
    }

    /// Sets the maximum container nesting depth that is traversed.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    pub const fn preview_length(&self) -> usize {
        self.preview_length
    }

    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for SnipConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_PREVIEW_LENGTH)
    }
}

#[cfg(feature = "serde")]
mod clamp {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};

    struct NonNegative;

    impl Visitor<'_> for NonNegative {
        type Value = usize;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<usize, E> {
            Ok(usize::try_from(value).unwrap_or(usize::MAX))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<usize, E> {
            // Negative thresholds clamp to zero.
            Ok(usize::try_from(value.max(0)).unwrap_or(usize::MAX))
        }
    }

    pub(super) fn non_negative<'de, D>(deserializer: D) -> Result<usize, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(NonNegative)
    }
}
