use sechub_core::CatalogError;
use sechub_model::{rules_for_helm_chart, Resource};
use sechub_store::ResourceRepository;
use std::sync::Arc;

pub struct RetrieveAllResourcesLatestVersions {
    pub resources: Arc<dyn ResourceRepository>,
}

impl RetrieveAllResourcesLatestVersions {
    pub fn execute(&self) -> Result<Vec<Resource>, CatalogError> {
        self.resources.find_all_latest_versions()
    }
}

pub struct RetrieveAllResourceVersions {
    pub resources: Arc<dyn ResourceRepository>,
    pub resource_id: String,
}

impl RetrieveAllResourceVersions {
    pub fn execute(&self) -> Result<Vec<Resource>, CatalogError> {
        self.resources.find_by_id(&self.resource_id)
    }
}

pub struct RetrieveOneResource {
    pub resources: Arc<dyn ResourceRepository>,
    pub resource_id: String,
}

impl RetrieveOneResource {
    pub fn execute(&self) -> Result<Resource, CatalogError> {
        self.resources.find_by_id_latest_version(&self.resource_id)
    }
}

pub struct RetrieveOneResourceVersion {
    pub resources: Arc<dyn ResourceRepository>,
    pub resource_id: String,
    pub version: String,
}

impl RetrieveOneResourceVersion {
    pub fn execute(&self) -> Result<Resource, CatalogError> {
        self.resources
            .find_by_id_and_version(&self.resource_id, &self.version)
    }
}

/// Helm values fragment for the newest version of a resource.
pub struct RetrieveFalcoRulesForHelmChart {
    pub resources: Arc<dyn ResourceRepository>,
    pub resource_id: String,
}

impl RetrieveFalcoRulesForHelmChart {
    pub fn execute(&self) -> Result<String, CatalogError> {
        let resource = self.resources.find_by_id_latest_version(&self.resource_id)?;
        Ok(rules_for_helm_chart(&resource)?)
    }
}

pub struct RetrieveFalcoRulesForHelmChartVersion {
    pub resources: Arc<dyn ResourceRepository>,
    pub resource_id: String,
    pub version: String,
}

impl RetrieveFalcoRulesForHelmChartVersion {
    pub fn execute(&self) -> Result<String, CatalogError> {
        let resource = self
            .resources
            .find_by_id_and_version(&self.resource_id, &self.version)?;
        Ok(rules_for_helm_chart(&resource)?)
    }
}
