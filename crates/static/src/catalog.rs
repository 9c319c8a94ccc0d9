use crate::error::StaticError;
use crate::options::{HostOption, get_opts};
use crate::resource::{HOST_CATALOG_PREFIX, require_parent, resolve_public_id};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A catalog of statically defined hosts, owned by a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCatalog {
    pub public_id: String,
    pub scope_id: String,
    pub name: String,
    pub description: String,
}

impl HostCatalog {
    /// Creates a host catalog in `scope_id`.
    ///
    /// Supported options: public id, name, description.
    /// A public id is generated with the `hcst` prefix when none is given.
    ///
    /// # Errors
    /// Returns [`StaticError::InvalidParameter`] if `scope_id` is blank and
    /// [`StaticError::InvalidPublicId`] if the given public id is not a host catalog id.
    pub fn new(
        scope_id: impl Into<String>,
        opts: impl IntoIterator<Item = HostOption>,
    ) -> Result<Self, StaticError> {
        let scope_id = scope_id.into();
        require_parent("scope id", &scope_id)?;

        let opts = get_opts(opts);
        let public_id = resolve_public_id(HOST_CATALOG_PREFIX, &opts)?;

        debug!(%public_id, %scope_id, "Host catalog created");

        Ok(Self {
            public_id,
            scope_id,
            name: opts.name().to_owned(),
            description: opts.description().to_owned(),
        })
    }
}
