use crate::error::{StaticError, StaticErrorExt};
use crate::options::Options;
use hostcat_kernel::id::{new_public_id, verify};

/// Public id prefix for host catalogs.
pub const HOST_CATALOG_PREFIX: &str = "hcst";
/// Public id prefix for hosts.
pub const HOST_PREFIX: &str = "hst";
/// Public id prefix for host sets.
pub const HOST_SET_PREFIX: &str = "hsst";

/// Rejects a blank parent id; `field` names it in the error.
pub(crate) fn require_parent(field: &'static str, value: &str) -> Result<(), StaticError> {
    if value.trim().is_empty() {
        return Err(StaticError::InvalidParameter {
            message: format!("no {field}").into(),
            context: None,
        });
    }
    Ok(())
}

/// Uses the caller's public id when one was given, otherwise mints one.
pub(crate) fn resolve_public_id(prefix: &'static str, opts: &Options) -> Result<String, StaticError> {
    if opts.public_id().is_empty() {
        return Ok(new_public_id(prefix));
    }
    let id = verify(prefix, opts.public_id()).context(prefix)?;
    Ok(id.to_owned())
}
