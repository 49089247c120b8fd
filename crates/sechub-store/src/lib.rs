#![forbid(unsafe_code)]
//! Read surface of the catalog and the backends that implement it.

mod file;
mod index;
mod memory;
pub mod sqlite;

use sechub_core::CatalogError;
use sechub_model::{Resource, Vendor};

pub use file::{FileResourceRepository, FileVendorRepository};
pub use memory::{MemoryResourceRepository, MemoryVendorRepository};
pub use sqlite::{SqliteDatabase, SqliteResourceRepository, SqliteVendorRepository};

pub const CRATE_NAME: &str = "sechub-store";

/// Query surface over resource versions. `id` arguments are matched
/// case-insensitively, `version` arguments exactly.
pub trait ResourceRepository: Send + Sync {
    fn find_all(&self) -> Result<Vec<Resource>, CatalogError>;
    /// One entry per logical id: its newest version.
    fn find_all_latest_versions(&self) -> Result<Vec<Resource>, CatalogError>;
    /// Every version of `id`, newest first.
    fn find_by_id(&self, id: &str) -> Result<Vec<Resource>, CatalogError>;
    fn find_by_id_latest_version(&self, id: &str) -> Result<Resource, CatalogError>;
    fn find_by_id_and_version(&self, id: &str, version: &str) -> Result<Resource, CatalogError>;
}

pub trait VendorRepository: Send + Sync {
    fn find_all(&self) -> Result<Vec<Vendor>, CatalogError>;
    fn find_by_id(&self, id: &str) -> Result<Vendor, CatalogError>;
}
