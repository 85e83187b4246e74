//! Replace long base64 payloads in structured data with readable placeholders.
//!
//! Logs and debug dumps often carry attachments, images or encrypted blobs as
//! base64 text. This crate walks your data and swaps every string that looks
//! like such a payload for a short summary:
//!
//! ```text
//! [base64 payload ~320 bytes | preview: AAECAwQFBgcI... ]
//! ```
//!
//! The crate is split into:
//! - **Detection**: [`Redactor::analyse`] decides whether a single string is a
//!   base64 candidate (whitespace stripped, alphabet checked, strict decode,
//!   round-trip verified).
//! - **Traversal**: [`Redactor::snip`] walks a dynamic [`Value`] tree, and the
//!   [`Snippable`] trait (derivable with `#[derive(Snippable)]`) walks your own
//!   typed structs and enums.
//!
//! Key rules:
//! - Strings shorter than [`SnipConfig::min_length`] are never touched.
//! - Map keys are never inspected or rewritten.
//! - Containers keep their kind, key set and key order.
//! - Snipping never fails; values that are not candidates pass through.
//!
//! What it does not do:
//! - perform I/O or logging on its own (see the `slog` feature)
//! - act as a general-purpose base64 codec
//! - guarantee that every encoded payload is found; this is a heuristic

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use snip64_derive::Snippable;

#[allow(unused_extern_crates)]
extern crate self as snip64;

// Module declarations
mod candidate;
mod config;
#[cfg(feature = "serde")]
mod json;
mod placeholder;
mod redactor;
#[cfg(feature = "slog")]
pub mod slog;
mod snippable;
mod value;

// Re-exports
pub use candidate::{Candidate, Rejection, ALPHABET};
pub use config::{SnipConfig, DEFAULT_MAX_DEPTH, DEFAULT_MIN_LENGTH, DEFAULT_PREVIEW_LENGTH};
#[cfg(feature = "serde")]
pub use json::SERIALIZE_FAILURE_PLACEHOLDER;
pub use redactor::Redactor;
pub use snippable::{Snip, Snippable};
#[cfg(feature = "serde")]
pub use value::Serialized;
pub use value::{Convertible, Map, Rendered, Value};
