// SPDX-License-Identifier: Apache-2.0

//! Reduces a resource version to the `customRules` values fragment read by the
//! Falco Helm chart.

use crate::Resource;
use sechub_core::CatalogError;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

pub const HELM_VALUES_ROOT_KEY: &str = "customRules";
pub const HELM_RULES_CONTENT_TYPE: &str = "application/x-yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisError(pub String);

impl Display for SynthesisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SynthesisError {}

impl From<SynthesisError> for CatalogError {
    fn from(err: SynthesisError) -> Self {
        CatalogError::malformed(err.0)
    }
}

#[must_use]
pub fn helm_rules_file_name(resource: &Resource) -> String {
    format!("rules-{}.yaml", resource.id())
}

/// Concatenation of every rule fragment, in declaration order.
#[must_use]
pub fn concatenated_rules(resource: &Resource) -> String {
    resource.rules.iter().map(|rule| rule.raw.as_str()).collect()
}

/// Renders `customRules: {rules-<id>.yaml: <rules>}`. Multi-line rule text is
/// emitted as a literal block scalar; a resource without rules still gets its key
/// with an empty value.
pub fn rules_for_helm_chart(resource: &Resource) -> Result<String, SynthesisError> {
    let mut files = BTreeMap::new();
    files.insert(helm_rules_file_name(resource), concatenated_rules(resource));
    let mut values = BTreeMap::new();
    values.insert(HELM_VALUES_ROOT_KEY, files);
    serde_yaml::to_string(&values).map_err(|e| SynthesisError(e.to_string()))
}
