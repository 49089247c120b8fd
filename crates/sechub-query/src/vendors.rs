use sechub_core::CatalogError;
use sechub_model::{Resource, Vendor};
use sechub_store::{ResourceRepository, VendorRepository};
use std::sync::Arc;

pub struct RetrieveAllVendors {
    pub vendors: Arc<dyn VendorRepository>,
}

impl RetrieveAllVendors {
    pub fn execute(&self) -> Result<Vec<Vendor>, CatalogError> {
        self.vendors.find_all()
    }
}

pub struct RetrieveOneVendor {
    pub vendors: Arc<dyn VendorRepository>,
    pub vendor_id: String,
}

impl RetrieveOneVendor {
    pub fn execute(&self) -> Result<Vendor, CatalogError> {
        self.vendors.find_by_id(&self.vendor_id)
    }
}

/// Latest versions of every resource published by one vendor.
///
/// An unknown vendor is `NotFound`; a known vendor without resources is the
/// distinct `NoResources` failure.
pub struct RetrieveAllResourcesFromVendor {
    pub vendors: Arc<dyn VendorRepository>,
    pub resources: Arc<dyn ResourceRepository>,
    pub vendor_id: String,
}

impl RetrieveAllResourcesFromVendor {
    pub fn execute(&self) -> Result<Vec<Resource>, CatalogError> {
        let vendor = self.vendors.find_by_id(&self.vendor_id)?;
        let owned: Vec<Resource> = self
            .resources
            .find_all_latest_versions()?
            .into_iter()
            .filter(|r| r.vendor == vendor.name)
            .collect();
        if owned.is_empty() {
            return Err(CatalogError::no_resources(format!(
                "vendor {} has no resources",
                vendor.name
            )));
        }
        Ok(owned)
    }
}
