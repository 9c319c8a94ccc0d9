//! Static host resources.
//!
//! Host catalogs, hosts and host sets whose members are declared up front rather
//! than discovered. Every constructor takes its required parent id plus a list of
//! [`HostOption`]s resolved by [`get_opts`].
//!
//! ## Example
//! ```rust
//! use hostcat_static::prelude::*;
//!
//! # fn main() -> Result<(), StaticError> {
//! let catalog = HostCatalog::new("o_1234567890", [with_name("lab")])?;
//! let host = Host::new(&catalog.public_id, [with_name("db-1"), with_description("primary")])?;
//!
//! assert_eq!(host.catalog_id, catalog.public_id);
//! assert!(host.public_id.starts_with("hst_"));
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod host;
pub mod options;
mod resource;
mod set;

pub use catalog::HostCatalog;
pub use error::{StaticError, StaticErrorExt};
pub use host::Host;
pub use options::{HostOption, Options, get_opts, with_description, with_name, with_public_id};
pub use resource::{HOST_CATALOG_PREFIX, HOST_PREFIX, HOST_SET_PREFIX};
pub use set::HostSet;

pub mod prelude {
    pub use crate::catalog::HostCatalog;
    pub use crate::error::{StaticError, StaticErrorExt};
    pub use crate::host::Host;
    pub use crate::options::{
        HostOption, Options, get_opts, with_description, with_name, with_public_id,
    };
    pub use crate::set::HostSet;
}
