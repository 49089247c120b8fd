// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Idempotent import of descriptor trees into the relational catalog.

mod report;
mod sqlite;

use sechub_core::CatalogError;
use sechub_model::{Resource, Vendor};
use sechub_store::{ResourceRepository, SqliteDatabase, VendorRepository};
use tracing::info;

pub use report::{ImportEvent, ImportReport};

pub const CRATE_NAME: &str = "sechub-ingest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Reject the import when any resource version fails descriptor validation.
    pub validate: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// Migrates the schema, then imports vendors followed by resources. Rows that
/// already exist are left untouched, so repeating an import is a no-op.
pub fn import_catalog(
    db: &SqliteDatabase,
    vendors: &dyn VendorRepository,
    resources: &dyn ResourceRepository,
    options: ImportOptions,
) -> Result<ImportReport, CatalogError> {
    db.migrate()?;
    let mut report = ImportReport::default();
    import_vendors(db, vendors, &mut report)?;
    import_resources(db, resources, options, &mut report)?;
    info!(
        target: "sechub_import",
        vendors_imported = report.vendors_imported(),
        resources_imported = report.resources_imported(),
        noop = report.is_noop(),
        "catalog import finished"
    );
    Ok(report)
}

pub fn import_vendors(
    db: &SqliteDatabase,
    vendors: &dyn VendorRepository,
    report: &mut ImportReport,
) -> Result<(), CatalogError> {
    for vendor in vendors.find_all()? {
        let event = db.with_connection(|conn| {
            if sqlite::vendor_row_id(conn, &vendor.name)?.is_some() {
                return Ok(ImportEvent::VendorSkipped {
                    name: vendor.name.clone(),
                });
            }
            sqlite::insert_vendor(conn, &vendor)?;
            Ok(ImportEvent::VendorImported {
                name: vendor.name.clone(),
            })
        })?;
        info!(target: "sechub_import", vendor = %vendor.name, "{event}");
        report.push(event);
    }
    Ok(())
}

fn validate_versions(id: &str, versions: &[Resource]) -> Result<(), CatalogError> {
    for version in versions {
        version.validate().map_err(|e| {
            CatalogError::malformed(format!("resource {id}@{}: {e}", version.version))
        })?;
    }
    Ok(())
}

pub fn import_resources(
    db: &SqliteDatabase,
    resources: &dyn ResourceRepository,
    options: ImportOptions,
    report: &mut ImportReport,
) -> Result<(), CatalogError> {
    for latest in resources.find_all_latest_versions()? {
        let id = latest.id();
        if db.with_connection(|conn| sqlite::resource_exists(conn, &id))? {
            let event = ImportEvent::ResourceSkipped {
                id: id.clone(),
                name: latest.name.clone(),
            };
            info!(target: "sechub_import", resource = %id, "already exists, skipping");
            report.push(event);
            continue;
        }

        let versions = resources.find_by_id(&id)?;
        if options.validate {
            validate_versions(&id, &versions)?;
        }

        let vendor_event = db.with_connection(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| CatalogError::backend(e.to_string()))?;
            let (vendor_id, vendor_event) = if latest.vendor.is_empty() {
                (None, None)
            } else if let Some(row) = sqlite::vendor_row_id(&tx, &latest.vendor)? {
                (
                    Some(row),
                    Some(ImportEvent::AttachedToVendor {
                        name: latest.vendor.clone(),
                    }),
                )
            } else {
                let placeholder = Vendor {
                    name: latest.vendor.clone(),
                    ..Vendor::default()
                };
                (
                    Some(sqlite::insert_vendor(&tx, &placeholder)?),
                    Some(ImportEvent::PlaceholderVendorCreated {
                        name: latest.vendor.clone(),
                    }),
                )
            };
            sqlite::insert_resource_tree(&tx, &id, latest.kind.as_str(), vendor_id, &versions)?;
            tx.commit()
                .map_err(|e| CatalogError::backend(e.to_string()))?;
            Ok(vendor_event)
        })?;

        info!(
            target: "sechub_import",
            resource = %id,
            versions = versions.len(),
            "importing resource"
        );
        report.push(ImportEvent::ResourceImported {
            id: id.clone(),
            name: latest.name.clone(),
            versions: versions.len(),
        });
        if let Some(event) = vendor_event {
            report.push(event);
        }
    }
    Ok(())
}
