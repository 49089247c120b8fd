use super::SqliteDatabase;
use crate::VendorRepository;
use rusqlite::{params, Connection, OptionalExtension, Row};
use sechub_core::CatalogError;
use sechub_model::{derive_id, Vendor};
use std::sync::Arc;

const VENDOR_COLUMNS: &str = "SELECT name, description, icon, website FROM vendors";

fn sql_err(e: rusqlite::Error) -> CatalogError {
    CatalogError::backend(e.to_string())
}

fn vendor_row(row: &Row<'_>) -> rusqlite::Result<Vendor> {
    Ok(Vendor {
        name: row.get(0)?,
        description: row.get(1)?,
        icon: row.get(2)?,
        website: row.get(3)?,
    })
}

fn all_vendors(conn: &Connection) -> Result<Vec<Vendor>, CatalogError> {
    let mut stmt = conn
        .prepare_cached(&format!("{VENDOR_COLUMNS} ORDER BY id"))
        .map_err(sql_err)?;
    let vendors = stmt
        .query_map([], vendor_row)
        .map_err(sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(sql_err)?;
    Ok(vendors)
}

/// `vendor_id` is a derived id; SQLite `lower()` folds ASCII only, which
/// matches how vendor names are written.
fn vendor_by_id(conn: &Connection, vendor_id: &str) -> Result<Option<Vendor>, CatalogError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{VENDOR_COLUMNS} WHERE lower(name) = ?1 ORDER BY id LIMIT 1"
        ))
        .map_err(sql_err)?;
    stmt.query_row(params![vendor_id], vendor_row)
        .optional()
        .map_err(sql_err)
}

#[derive(Debug, Clone)]
pub struct SqliteVendorRepository {
    db: Arc<SqliteDatabase>,
}

impl SqliteVendorRepository {
    #[must_use]
    pub fn new(db: Arc<SqliteDatabase>) -> Self {
        Self { db }
    }
}

impl VendorRepository for SqliteVendorRepository {
    /// Placeholder rows written for resources whose vendor has no descriptor are
    /// left out.
    fn find_all(&self) -> Result<Vec<Vendor>, CatalogError> {
        let vendors = self.db.with_connection(|conn| all_vendors(conn))?;
        Ok(vendors
            .into_iter()
            .filter(|v| !v.is_placeholder())
            .collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Vendor, CatalogError> {
        let vendor_id = derive_id(id);
        self.db
            .with_connection(|conn| vendor_by_id(conn, &vendor_id))?
            .ok_or_else(CatalogError::not_found)
    }
}
