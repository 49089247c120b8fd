#![forbid(unsafe_code)]
//! Use cases: one repository call plus the domain step that goes with it.

mod factory;
mod resources;
mod vendors;

pub use factory::UseCaseFactory;
pub use resources::{
    RetrieveAllResourceVersions, RetrieveAllResourcesLatestVersions,
    RetrieveFalcoRulesForHelmChart, RetrieveFalcoRulesForHelmChartVersion, RetrieveOneResource,
    RetrieveOneResourceVersion,
};
pub use vendors::{RetrieveAllResourcesFromVendor, RetrieveAllVendors, RetrieveOneVendor};

pub const CRATE_NAME: &str = "sechub-query";
