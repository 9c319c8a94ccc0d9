use crate::{SAFE_ALPHABET, format_context};
use std::borrow::Cow;

/// Number of random characters following the `<prefix>_` separator.
pub const PUBLIC_ID_SUFFIX_LEN: usize = 10;

const SEPARATOR: char = '_';

/// Public id validation error.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("Public id validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait IdErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, IdError>;
}

impl<T> IdErrorExt<T> for Result<T, IdError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                IdError::Validation { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

/// Generates a public id of the form `<prefix>_<suffix>`.
///
/// The suffix is drawn from [`SAFE_ALPHABET`].
#[must_use]
pub fn new_public_id(prefix: &str) -> String {
    format!("{prefix}{SEPARATOR}{}", crate::safe_nanoid!(PUBLIC_ID_SUFFIX_LEN))
}

/// Returns `true` when `id` is a well-formed public id for `prefix`.
#[must_use]
pub fn is_public_id(prefix: &str, id: &str) -> bool {
    verify(prefix, id).is_ok()
}

/// Validates that `id` belongs to the resource type identified by `prefix`.
///
/// Prevents a public id minted for one resource type from being accepted for another
/// (e.g., a host set id supplied where a host id is expected).
///
/// # Errors
/// Returns [`IdError::Validation`] if the prefix does not match or the suffix is malformed.
pub fn verify<'a>(prefix: &str, id: &'a str) -> Result<&'a str, IdError> {
    let Some((actual, suffix)) = id.split_once(SEPARATOR) else {
        return Err(IdError::Validation {
            message: format!("Missing '{SEPARATOR}' separator in '{id}'").into(),
            context: None,
        });
    };

    if actual != prefix {
        return Err(IdError::Validation {
            message: format!("Expected '{prefix}', got '{actual}'").into(),
            context: Some("Prefix mismatch".into()),
        });
    }

    if suffix.chars().count() != PUBLIC_ID_SUFFIX_LEN {
        return Err(IdError::Validation {
            message: format!("Suffix must be {PUBLIC_ID_SUFFIX_LEN} characters, got '{suffix}'")
                .into(),
            context: None,
        });
    }

    if let Some(ch) = suffix.chars().find(|ch| !SAFE_ALPHABET.contains(ch)) {
        return Err(IdError::Validation {
            message: format!("Unexpected character '{ch}' in '{suffix}'").into(),
            context: None,
        });
    }

    Ok(id)
}
