use sechub_core::CatalogError;
use sechub_model::{derive_id, sort_newest_first, Resource};
use std::collections::BTreeMap;

/// Resource versions grouped by logical id, newest first within each group.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResourceIndex {
    by_id: BTreeMap<String, Vec<Resource>>,
}

impl ResourceIndex {
    pub(crate) fn from_resources<I>(resources: I) -> Self
    where
        I: IntoIterator<Item = Resource>,
    {
        let mut by_id: BTreeMap<String, Vec<Resource>> = BTreeMap::new();
        for resource in resources {
            by_id.entry(resource.id()).or_default().push(resource);
        }
        for versions in by_id.values_mut() {
            sort_newest_first(versions, |r| r.version.as_str());
        }
        Self { by_id }
    }

    pub(crate) fn id_count(&self) -> usize {
        self.by_id.len()
    }

    pub(crate) fn version_count(&self) -> usize {
        self.by_id.values().map(Vec::len).sum()
    }

    pub(crate) fn all(&self) -> Vec<Resource> {
        self.by_id.values().flatten().cloned().collect()
    }

    pub(crate) fn latest(&self) -> Vec<Resource> {
        self.by_id
            .values()
            .filter_map(|versions| versions.first())
            .cloned()
            .collect()
    }

    fn group(&self, id: &str) -> Result<&[Resource], CatalogError> {
        self.by_id
            .get(&derive_id(id))
            .map(Vec::as_slice)
            .filter(|versions| !versions.is_empty())
            .ok_or_else(CatalogError::not_found)
    }

    pub(crate) fn versions(&self, id: &str) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.group(id)?.to_vec())
    }

    pub(crate) fn latest_of(&self, id: &str) -> Result<Resource, CatalogError> {
        self.group(id)?
            .first()
            .cloned()
            .ok_or_else(CatalogError::not_found)
    }

    pub(crate) fn version_of(&self, id: &str, version: &str) -> Result<Resource, CatalogError> {
        self.group(id)?
            .iter()
            .find(|r| r.version == version)
            .cloned()
            .ok_or_else(CatalogError::not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(name: &str, v: &str) -> Resource {
        Resource {
            name: name.to_string(),
            version: v.to_string(),
            ..Resource::default()
        }
    }

    #[test]
    fn groups_by_derived_id_and_sorts_newest_first() {
        let index = ResourceIndex::from_resources(vec![
            version("Nginx", "1.0.0"),
            version("Apache", "1.0.0"),
            version("NGINX", "2.0.0"),
            version("Nginx", "1.5.0"),
        ]);
        assert_eq!(index.id_count(), 2);
        assert_eq!(index.version_count(), 4);
        let nginx: Vec<String> = index
            .versions("nginx")
            .expect("nginx")
            .into_iter()
            .map(|r| r.version)
            .collect();
        assert_eq!(nginx, vec!["2.0.0", "1.5.0", "1.0.0"]);
        assert_eq!(index.latest().len(), 2);
        assert_eq!(index.latest_of("Nginx").expect("latest").version, "2.0.0");
    }

    #[test]
    fn lookups_report_not_found() {
        let index = ResourceIndex::from_resources(vec![version("Apache", "1.0.0")]);
        assert!(index.versions("nope").expect_err("missing").is_not_found());
        assert!(index
            .version_of("apache", "9.9.9")
            .expect_err("missing version")
            .is_not_found());
        assert!(index.version_of("APACHE", "1.0.0").is_ok());
    }
}
