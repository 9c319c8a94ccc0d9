use crate::error::StaticError;
use crate::options::{HostOption, get_opts};
use crate::resource::{HOST_SET_PREFIX, require_parent, resolve_public_id};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named group of hosts from one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSet {
    pub public_id: String,
    pub catalog_id: String,
    pub name: String,
    pub description: String,
}

impl HostSet {
    /// Creates a host set in `catalog_id`.
    ///
    /// # Errors
    /// Returns [`StaticError::InvalidParameter`] if `catalog_id` is blank and
    /// [`StaticError::InvalidPublicId`] if the given public id is not a host set id.
    pub fn new(
        catalog_id: impl Into<String>,
        opts: impl IntoIterator<Item = HostOption>,
    ) -> Result<Self, StaticError> {
        let catalog_id = catalog_id.into();
        require_parent("catalog id", &catalog_id)?;

        let opts = get_opts(opts);
        let public_id = resolve_public_id(HOST_SET_PREFIX, &opts)?;

        debug!(%public_id, %catalog_id, "Host set created");

        Ok(Self {
            public_id,
            catalog_id,
            name: opts.name().to_owned(),
            description: opts.description().to_owned(),
        })
    }
}
