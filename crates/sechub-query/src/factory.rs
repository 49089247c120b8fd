// SPDX-License-Identifier: Apache-2.0

use crate::resources::{
    RetrieveAllResourceVersions, RetrieveAllResourcesLatestVersions,
    RetrieveFalcoRulesForHelmChart, RetrieveFalcoRulesForHelmChartVersion, RetrieveOneResource,
    RetrieveOneResourceVersion,
};
use crate::vendors::{RetrieveAllResourcesFromVendor, RetrieveAllVendors, RetrieveOneVendor};
use sechub_core::{CatalogError, DatabaseConfig, FileCatalogConfig};
use sechub_store::{
    FileResourceRepository, FileVendorRepository, ResourceRepository, SqliteDatabase,
    SqliteResourceRepository, SqliteVendorRepository, VendorRepository,
};
use std::sync::Arc;
use tracing::info;

/// Builds use cases over one pair of repositories.
#[derive(Clone)]
pub struct UseCaseFactory {
    resources: Arc<dyn ResourceRepository>,
    vendors: Arc<dyn VendorRepository>,
}

impl UseCaseFactory {
    #[must_use]
    pub fn new(resources: Arc<dyn ResourceRepository>, vendors: Arc<dyn VendorRepository>) -> Self {
        Self { resources, vendors }
    }

    pub fn from_file_config(cfg: &FileCatalogConfig) -> Result<Self, CatalogError> {
        let resources = FileResourceRepository::from_path(&cfg.resources_path)?;
        let vendors = FileVendorRepository::from_path(&cfg.vendor_path)?;
        info!(
            resources = %cfg.resources_path.display(),
            vendors = %cfg.vendor_path.display(),
            "file catalog configured"
        );
        Ok(Self::new(Arc::new(resources), Arc::new(vendors)))
    }

    pub fn from_database_config(cfg: &DatabaseConfig) -> Result<Self, CatalogError> {
        let db = Arc::new(SqliteDatabase::open(&cfg.database_path())?);
        db.migrate()?;
        info!(
            host = %cfg.host,
            port = cfg.port,
            database = %cfg.name,
            user = %cfg.user,
            "relational catalog opened"
        );
        Ok(Self::new(
            Arc::new(SqliteResourceRepository::new(Arc::clone(&db))),
            Arc::new(SqliteVendorRepository::new(db)),
        ))
    }

    #[must_use]
    pub fn resource_repository(&self) -> Arc<dyn ResourceRepository> {
        Arc::clone(&self.resources)
    }

    #[must_use]
    pub fn vendor_repository(&self) -> Arc<dyn VendorRepository> {
        Arc::clone(&self.vendors)
    }

    #[must_use]
    pub fn retrieve_all_resources_latest_versions(&self) -> RetrieveAllResourcesLatestVersions {
        RetrieveAllResourcesLatestVersions {
            resources: self.resource_repository(),
        }
    }

    #[must_use]
    pub fn retrieve_all_resource_versions(&self, resource_id: &str) -> RetrieveAllResourceVersions {
        RetrieveAllResourceVersions {
            resources: self.resource_repository(),
            resource_id: resource_id.to_string(),
        }
    }

    #[must_use]
    pub fn retrieve_one_resource(&self, resource_id: &str) -> RetrieveOneResource {
        RetrieveOneResource {
            resources: self.resource_repository(),
            resource_id: resource_id.to_string(),
        }
    }

    #[must_use]
    pub fn retrieve_one_resource_version(
        &self,
        resource_id: &str,
        version: &str,
    ) -> RetrieveOneResourceVersion {
        RetrieveOneResourceVersion {
            resources: self.resource_repository(),
            resource_id: resource_id.to_string(),
            version: version.to_string(),
        }
    }

    #[must_use]
    pub fn retrieve_falco_rules_for_helm_chart(
        &self,
        resource_id: &str,
    ) -> RetrieveFalcoRulesForHelmChart {
        RetrieveFalcoRulesForHelmChart {
            resources: self.resource_repository(),
            resource_id: resource_id.to_string(),
        }
    }

    #[must_use]
    pub fn retrieve_falco_rules_for_helm_chart_version(
        &self,
        resource_id: &str,
        version: &str,
    ) -> RetrieveFalcoRulesForHelmChartVersion {
        RetrieveFalcoRulesForHelmChartVersion {
            resources: self.resource_repository(),
            resource_id: resource_id.to_string(),
            version: version.to_string(),
        }
    }

    #[must_use]
    pub fn retrieve_all_vendors(&self) -> RetrieveAllVendors {
        RetrieveAllVendors {
            vendors: self.vendor_repository(),
        }
    }

    #[must_use]
    pub fn retrieve_one_vendor(&self, vendor_id: &str) -> RetrieveOneVendor {
        RetrieveOneVendor {
            vendors: self.vendor_repository(),
            vendor_id: vendor_id.to_string(),
        }
    }

    #[must_use]
    pub fn retrieve_all_resources_from_vendor(
        &self,
        vendor_id: &str,
    ) -> RetrieveAllResourcesFromVendor {
        RetrieveAllResourcesFromVendor {
            vendors: self.vendor_repository(),
            resources: self.resource_repository(),
            vendor_id: vendor_id.to_string(),
        }
    }
}
