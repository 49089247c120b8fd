use crate::serde_helpers::{null_as_default, scalar_string};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const FALCO_RULE_KIND: &str = "FalcoRule";

/// Identifier shared by every descriptor with the same display name.
#[must_use]
pub fn derive_id(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum ResourceKind {
    FalcoRule,
    Other(String),
}

impl ResourceKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FalcoRule => FALCO_RULE_KIND,
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for ResourceKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for ResourceKind {
    fn from(raw: String) -> Self {
        if raw == FALCO_RULE_KIND {
            Self::FalcoRule
        } else {
            Self::Other(raw)
        }
    }
}

impl From<&str> for ResourceKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::FalcoRule => FALCO_RULE_KIND.to_string(),
            ResourceKind::Other(raw) => raw,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Maintainer {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub email: String,
}

impl Maintainer {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One Falco rule fragment, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default, deserialize_with = "scalar_string")]
    pub raw: String,
}

impl Rule {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// A single version of a catalog resource.
///
/// The identifier is never stored: [`Resource::id`] derives it from `name`, and the
/// on-disk and wire formats re-derive it on every read and write, discarding any
/// `id` the source document carried.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ResourceDocument", into = "ResourceDocument")]
pub struct Resource {
    pub kind: ResourceKind,
    pub vendor: String,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub icon: String,
    pub website: String,
    pub maintainers: Vec<Maintainer>,
    pub version: String,
    pub rules: Vec<Rule>,
}

impl Resource {
    #[must_use]
    pub fn id(&self) -> String {
        derive_id(&self.name)
    }

    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == derive_id(id)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceDocument {
    #[serde(default, deserialize_with = "scalar_string")]
    id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    kind: String,
    #[serde(default, deserialize_with = "scalar_string")]
    vendor: String,
    #[serde(default, deserialize_with = "scalar_string")]
    name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    short_description: String,
    #[serde(default, deserialize_with = "scalar_string")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    keywords: Vec<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    icon: String,
    #[serde(default, deserialize_with = "scalar_string")]
    website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    maintainers: Vec<Maintainer>,
    #[serde(default, deserialize_with = "scalar_string")]
    version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    rules: Vec<Rule>,
}

impl From<ResourceDocument> for Resource {
    fn from(doc: ResourceDocument) -> Self {
        Self {
            kind: ResourceKind::from(doc.kind),
            vendor: doc.vendor,
            name: doc.name,
            short_description: doc.short_description,
            description: doc.description,
            keywords: doc.keywords,
            icon: doc.icon,
            website: doc.website,
            maintainers: doc.maintainers,
            version: doc.version,
            rules: doc.rules,
        }
    }
}

impl From<Resource> for ResourceDocument {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id(),
            kind: resource.kind.into(),
            vendor: resource.vendor,
            name: resource.name,
            short_description: resource.short_description,
            description: resource.description,
            keywords: resource.keywords,
            icon: resource.icon,
            website: resource.website,
            maintainers: resource.maintainers,
            version: resource.version,
            rules: resource.rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"
id: something-else
kind: FalcoRule
vendor: Apache
name: Apache
shortDescription: Falco rules for Apache
description: |
  # Apache Falco Rules
keywords:
  - web
icon: https://example.org/apache.png
website: https://apache.org/
maintainers:
  - name: nestorsalceda
    email: nestor.salceda@sysdig.com
version: 1.0.1
rules:
  - raw: "- macro: apache_consider_syscalls"
"#;

    #[test]
    fn source_id_is_discarded_and_rederived() {
        let resource: Resource = serde_yaml::from_str(DESCRIPTOR).expect("parse descriptor");
        assert_eq!(resource.id(), "apache");
        assert_eq!(resource.kind, ResourceKind::FalcoRule);
        assert_eq!(resource.short_description, "Falco rules for Apache");
        assert_eq!(resource.version, "1.0.1");
        assert_eq!(resource.rules.len(), 1);
    }

    #[test]
    fn json_emits_id_first_in_declaration_order() {
        let resource = Resource {
            kind: ResourceKind::FalcoRule,
            name: "MongoDB".to_string(),
            version: "1.0.0".to_string(),
            ..Resource::default()
        };
        let json = serde_json::to_string(&resource).expect("serialize");
        assert!(json.starts_with(r#"{"id":"mongodb","kind":"FalcoRule","vendor":"","name":"MongoDB","shortDescription":"#));
        let id_pos = json.find("\"id\"").expect("id key");
        let rules_pos = json.find("\"rules\"").expect("rules key");
        let version_pos = json.find("\"version\"").expect("version key");
        assert!(id_pos < version_pos && version_pos < rules_pos);
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let resource: Resource =
            serde_yaml::from_str("kind: GrafanaDashboard\nname: Traefik\n").expect("parse");
        assert_eq!(resource.kind.as_str(), "GrafanaDashboard");
        let back = serde_json::to_value(&resource).expect("serialize");
        assert_eq!(back["kind"], "GrafanaDashboard");
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let resource: Resource = serde_yaml::from_str("name: Bare\n").expect("parse");
        assert!(resource.keywords.is_empty());
        assert!(resource.maintainers.is_empty());
        assert!(resource.rules.is_empty());
        assert!(resource.kind.is_empty());
    }

    #[test]
    fn has_id_is_case_insensitive() {
        let resource = Resource {
            name: "Nginx".to_string(),
            ..Resource::default()
        };
        assert!(resource.has_id("NGINX"));
        assert!(!resource.has_id("apache"));
    }
}
