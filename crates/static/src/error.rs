use hostcat_kernel::format_context;
use hostcat_kernel::id::IdError;
use std::borrow::Cow;

/// Static resource error type.
#[derive(Debug, thiserror::Error)]
pub enum StaticError {
    #[error("Invalid parameter{}: {message}", format_context(.context))]
    InvalidParameter { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid public id{}: {source}", format_context(.context))]
    InvalidPublicId { source: IdError, context: Option<Cow<'static, str>> },
}

pub trait StaticErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StaticError>;
}

impl<T> StaticErrorExt<T> for Result<T, StaticError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                StaticError::InvalidParameter { context: c, .. }
                | StaticError::InvalidPublicId { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> StaticErrorExt<T> for Result<T, IdError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StaticError> {
        self.map_err(|source| StaticError::InvalidPublicId { source, context: Some(context.into()) })
    }
}

impl From<IdError> for StaticError {
    #[inline]
    fn from(source: IdError) -> Self {
        Self::InvalidPublicId { source, context: None }
    }
}
