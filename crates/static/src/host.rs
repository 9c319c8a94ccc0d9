use crate::error::StaticError;
use crate::options::{HostOption, get_opts};
use crate::resource::{HOST_PREFIX, require_parent, resolve_public_id};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A statically defined host inside a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub public_id: String,
    pub catalog_id: String,
    pub name: String,
    pub description: String,
}

impl Host {
    /// Creates a host in `catalog_id`.
    ///
    /// # Errors
    /// Returns [`StaticError::InvalidParameter`] if `catalog_id` is blank and
    /// [`StaticError::InvalidPublicId`] if the given public id is not a host id.
    pub fn new(
        catalog_id: impl Into<String>,
        opts: impl IntoIterator<Item = HostOption>,
    ) -> Result<Self, StaticError> {
        let catalog_id = catalog_id.into();
        require_parent("catalog id", &catalog_id)?;

        let opts = get_opts(opts);
        let public_id = resolve_public_id(HOST_PREFIX, &opts)?;

        debug!(%public_id, %catalog_id, "Host created");

        Ok(Self {
            public_id,
            catalog_id,
            name: opts.name().to_owned(),
            description: opts.description().to_owned(),
        })
    }
}
