use crate::index::ResourceIndex;
use crate::{ResourceRepository, VendorRepository};
use sechub_core::CatalogError;
use sechub_model::{Resource, Vendor};

/// Resource catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceRepository {
    index: ResourceIndex,
}

impl MemoryResourceRepository {
    #[must_use]
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            index: ResourceIndex::from_resources(resources),
        }
    }
}

impl ResourceRepository for MemoryResourceRepository {
    fn find_all(&self) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.index.all())
    }

    fn find_all_latest_versions(&self) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.index.latest())
    }

    fn find_by_id(&self, id: &str) -> Result<Vec<Resource>, CatalogError> {
        self.index.versions(id)
    }

    fn find_by_id_latest_version(&self, id: &str) -> Result<Resource, CatalogError> {
        self.index.latest_of(id)
    }

    fn find_by_id_and_version(&self, id: &str, version: &str) -> Result<Resource, CatalogError> {
        self.index.version_of(id, version)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryVendorRepository {
    vendors: Vec<Vendor>,
}

impl MemoryVendorRepository {
    #[must_use]
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }
}

impl VendorRepository for MemoryVendorRepository {
    fn find_all(&self) -> Result<Vec<Vendor>, CatalogError> {
        Ok(self.vendors.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Vendor, CatalogError> {
        self.vendors
            .iter()
            .find(|v| v.matches_id(id))
            .cloned()
            .ok_or_else(CatalogError::not_found)
    }
}
