#![forbid(unsafe_code)]
//! Catalog descriptors and the rules that order, validate and render them.

pub mod helm;
mod resource;
mod serde_helpers;
mod validation;
mod vendor;
pub mod version;

pub use helm::{rules_for_helm_chart, SynthesisError, HELM_RULES_CONTENT_TYPE};
pub use resource::{derive_id, Maintainer, Resource, ResourceKind, Rule, FALCO_RULE_KIND};
pub use validation::ValidationError;
pub use vendor::{Vendor, VENDOR_KIND};
pub use version::{compare_versions_descending, sort_newest_first};

pub const CRATE_NAME: &str = "sechub-model";
