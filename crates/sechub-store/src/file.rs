// SPDX-License-Identifier: Apache-2.0

use crate::index::ResourceIndex;
use crate::{ResourceRepository, VendorRepository};
use sechub_core::CatalogError;
use sechub_model::{Resource, Vendor};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, error};
use walkdir::WalkDir;

const DESCRIPTOR_EXTENSION: &str = "yaml";

fn ensure_root_exists(root: &Path) -> Result<(), CatalogError> {
    if root.exists() {
        Ok(())
    } else {
        Err(CatalogError::backend(format!(
            "catalog path does not exist: {}",
            root.display()
        )))
    }
}

/// Reads every `*.yaml` file under `root`, in file-name order, one descriptor per file.
fn read_descriptors<T>(root: &Path) -> Result<Vec<T>, CatalogError>
where
    T: DeserializeOwned,
{
    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| CatalogError::backend(e.to_string()))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|x| x.to_str()) != Some(DESCRIPTOR_EXTENSION)
        {
            continue;
        }
        let text = fs::read_to_string(path)
            .map_err(|e| CatalogError::backend(format!("{}: {e}", path.display())))?;
        let descriptor = serde_yaml::from_str(&text).map_err(|e| {
            error!(path = %path.display(), "descriptor parse failed: {e}");
            CatalogError::malformed(format!("{}: {e}", path.display()))
        })?;
        out.push(descriptor);
    }
    Ok(out)
}

/// Resource catalog backed by a directory tree of descriptors.
///
/// The tree is read once, on the first query. Concurrent first callers block on the
/// same initialization and every later query sees the same index, or the same
/// error if any descriptor failed to load.
#[derive(Debug)]
pub struct FileResourceRepository {
    root: PathBuf,
    index: OnceLock<Result<ResourceIndex, CatalogError>>,
}

impl FileResourceRepository {
    pub fn from_path(root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let root = root.into();
        ensure_root_exists(&root)?;
        Ok(Self {
            root,
            index: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn index(&self) -> Result<&ResourceIndex, CatalogError> {
        self.index
            .get_or_init(|| {
                let index = ResourceIndex::from_resources(read_descriptors::<Resource>(&self.root)?);
                debug!(
                    root = %self.root.display(),
                    ids = index.id_count(),
                    versions = index.version_count(),
                    "resource index built"
                );
                Ok(index)
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl ResourceRepository for FileResourceRepository {
    fn find_all(&self) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.index()?.all())
    }

    fn find_all_latest_versions(&self) -> Result<Vec<Resource>, CatalogError> {
        Ok(self.index()?.latest())
    }

    fn find_by_id(&self, id: &str) -> Result<Vec<Resource>, CatalogError> {
        self.index()?.versions(id)
    }

    fn find_by_id_latest_version(&self, id: &str) -> Result<Resource, CatalogError> {
        self.index()?.latest_of(id)
    }

    fn find_by_id_and_version(&self, id: &str, version: &str) -> Result<Resource, CatalogError> {
        self.index()?.version_of(id, version)
    }
}

#[derive(Debug)]
pub struct FileVendorRepository {
    root: PathBuf,
    vendors: OnceLock<Result<Vec<Vendor>, CatalogError>>,
}

impl FileVendorRepository {
    pub fn from_path(root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let root = root.into();
        ensure_root_exists(&root)?;
        Ok(Self {
            root,
            vendors: OnceLock::new(),
        })
    }

    fn vendors(&self) -> Result<&[Vendor], CatalogError> {
        self.vendors
            .get_or_init(|| read_descriptors::<Vendor>(&self.root))
            .as_deref()
            .map_err(Clone::clone)
    }
}

impl VendorRepository for FileVendorRepository {
    fn find_all(&self) -> Result<Vec<Vendor>, CatalogError> {
        Ok(self.vendors()?.to_vec())
    }

    fn find_by_id(&self, id: &str) -> Result<Vendor, CatalogError> {
        self.vendors()?
            .iter()
            .find(|v| v.matches_id(id))
            .cloned()
            .ok_or_else(CatalogError::not_found)
    }
}
