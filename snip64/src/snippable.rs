//! Typed traversal: types that contain strings which may need snipping.
//!
//! - [`Snippable`]: walks a value and snips every string leaf it owns.
//! - [`Snip`]: user-facing `.snip()` using the default configuration.
//!
//! ## Container Implementations
//!
//! `Option`, `Result`, `Vec`, `VecDeque`, `Box` and the std maps recurse into
//! their contents. Map keys are never touched. Sets are deliberately absent:
//! two different payloads can snip to the same placeholder, which would
//! silently drop elements.
//!
//! ## Derived Types
//!
//! `#[derive(Snippable)]` walks every field of a struct or enum. Fields
//! marked `#[snip(skip)]` pass through unchanged, which is how external types
//! without a `Snippable` impl are carried.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    hash::{BuildHasher, Hash},
};

use crate::{redactor::Redactor, value::Value};

/// A type whose string leaves can be snipped.
///
/// Derive it for records with `#[derive(Snippable)]`, or implement it by hand:
///
/// ```rust
/// use snip64::{Redactor, SnipConfig, Snippable};
///
/// struct Upload {
///     file_name: String,
///     body: String,
///     size: u64,
/// }
///
/// impl Snippable for Upload {
///     fn snip_with(self, redactor: &Redactor) -> Self {
///         Self {
///             body: self.body.snip_with(redactor),
///             ..self
///         }
///     }
/// }
///
/// let upload = Upload {
///     file_name: "logo.png".into(),
///     body: "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==".into(),
///     size: 70,
/// };
/// let snipped = Redactor::new(SnipConfig::new(32, 8)).snip_typed(upload);
/// assert_eq!(snipped.file_name, "logo.png");
/// assert_eq!(snipped.body, "[base64 payload ~70 bytes | preview: iVBORw0K... ]");
/// assert_eq!(snipped.size, 70);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Snippable`",
    label = "this type cannot be walked for base64 payloads",
    note = "use `#[derive(Snippable)]` on the type definition",
    note = "or mark the field `#[snip(skip)]` to pass it through unchanged"
)]
pub trait Snippable: Sized {
    /// Snips every string reachable from `self`.
    #[must_use]
    fn snip_with(self, redactor: &Redactor) -> Self;
}

/// Convenience entrypoint blanket-implemented for every [`Snippable`] type.
pub trait Snip: Snippable {
    /// Snips using [`Redactor::default`].
    #[must_use]
    fn snip(self) -> Self {
        self.snip_with(&Redactor::default())
    }
}

impl<T> Snip for T where T: Snippable {}

impl Snippable for String {
    fn snip_with(self, redactor: &Redactor) -> Self {
        redactor.snip_string(self)
    }
}

impl Snippable for Cow<'_, str> {
    fn snip_with(self, redactor: &Redactor) -> Self {
        let placeholder = match redactor.snip_text(&self) {
            Cow::Owned(placeholder) => Some(placeholder),
            Cow::Borrowed(_) => None,
        };
        placeholder.map_or(self, Cow::Owned)
    }
}

impl Snippable for Value {
    fn snip_with(self, redactor: &Redactor) -> Self {
        redactor.snip(self)
    }
}

macro_rules! impl_snippable_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Snippable for $ty {
                fn snip_with(self, _redactor: &Redactor) -> Self {
                    self
                }
            }
        )*
    };
}

impl_snippable_passthrough!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
);

impl<T> Snippable for Option<T>
where
    T: Snippable,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        self.map(|value| value.snip_with(redactor))
    }
}

impl<T, E> Snippable for Result<T, E>
where
    T: Snippable,
    E: Snippable,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        match self {
            Ok(value) => Ok(value.snip_with(redactor)),
            Err(err) => Err(err.snip_with(redactor)),
        }
    }
}

impl<T> Snippable for Vec<T>
where
    T: Snippable,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        self.into_iter()
            .map(|value| value.snip_with(redactor))
            .collect()
    }
}

impl<T> Snippable for VecDeque<T>
where
    T: Snippable,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        self.into_iter()
            .map(|value| value.snip_with(redactor))
            .collect()
    }
}

impl<T> Snippable for Box<T>
where
    T: Snippable,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        Box::new((*self).snip_with(redactor))
    }
}

impl<K, V, S> Snippable for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Snippable,
    S: BuildHasher + Clone,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        let hasher = self.hasher().clone();
        let mut result = HashMap::with_capacity_and_hasher(self.len(), hasher);
        result.extend(self.into_iter().map(|(k, v)| (k, v.snip_with(redactor))));
        result
    }
}

impl<K, V> Snippable for BTreeMap<K, V>
where
    K: Ord,
    V: Snippable,
{
    fn snip_with(self, redactor: &Redactor) -> Self {
        self.into_iter()
            .map(|(k, v)| (k, v.snip_with(redactor)))
            .collect()
    }
}
