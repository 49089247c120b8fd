use rusqlite::{params, Connection, OptionalExtension, Transaction};
use sechub_core::CatalogError;
use sechub_model::{Resource, Vendor};
use sechub_store::sqlite::join_keywords;

fn sql_err(e: rusqlite::Error) -> CatalogError {
    CatalogError::backend(e.to_string())
}

pub(crate) fn vendor_row_id(conn: &Connection, name: &str) -> Result<Option<i64>, CatalogError> {
    conn.query_row(
        "SELECT id FROM vendors WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )
    .optional()
    .map_err(sql_err)
}

pub(crate) fn resource_exists(conn: &Connection, resource_id: &str) -> Result<bool, CatalogError> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM resources WHERE resource_id = ?1",
            params![resource_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(sql_err)?;
    Ok(found.is_some())
}

pub(crate) fn insert_vendor(conn: &Connection, vendor: &Vendor) -> Result<i64, CatalogError> {
    conn.execute(
        "INSERT INTO vendors (name, description, icon, website) VALUES (?1, ?2, ?3, ?4)",
        params![vendor.name, vendor.description, vendor.icon, vendor.website],
    )
    .map_err(sql_err)?;
    Ok(conn.last_insert_rowid())
}

/// Inserts one logical resource and its whole version subtree. `versions` must
/// all share the same id.
pub(crate) fn insert_resource_tree(
    tx: &Transaction<'_>,
    resource_id: &str,
    kind: &str,
    vendor_id: Option<i64>,
    versions: &[Resource],
) -> Result<(), CatalogError> {
    tx.execute(
        "INSERT INTO resources (resource_id, kind, vendor_id) VALUES (?1, ?2, ?3)",
        params![resource_id, kind, vendor_id],
    )
    .map_err(sql_err)?;
    let resource_row = tx.last_insert_rowid();

    let mut version_stmt = tx
        .prepare(
            "INSERT INTO resource_versions (
               resource_id, name, short_description, description, keywords, icon, website, version
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .map_err(sql_err)?;
    let mut maintainer_stmt = tx
        .prepare(
            "INSERT INTO maintainers (resource_version_id, name, email) VALUES (?1, ?2, ?3)",
        )
        .map_err(sql_err)?;
    let mut rule_stmt = tx
        .prepare("INSERT INTO falco_rule_data (resource_version_id, raw) VALUES (?1, ?2)")
        .map_err(sql_err)?;

    for version in versions {
        version_stmt
            .execute(params![
                resource_row,
                version.name,
                version.short_description,
                version.description,
                join_keywords(&version.keywords),
                version.icon,
                version.website,
                version.version
            ])
            .map_err(sql_err)?;
        let version_row = tx.last_insert_rowid();
        for maintainer in &version.maintainers {
            maintainer_stmt
                .execute(params![version_row, maintainer.name, maintainer.email])
                .map_err(sql_err)?;
        }
        for rule in &version.rules {
            rule_stmt
                .execute(params![version_row, rule.raw])
                .map_err(sql_err)?;
        }
    }
    Ok(())
}
