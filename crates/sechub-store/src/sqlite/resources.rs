use super::{split_keywords, SqliteDatabase};
use crate::ResourceRepository;
use rusqlite::{params, Connection, OptionalExtension, Row};
use sechub_core::CatalogError;
use sechub_model::{derive_id, sort_newest_first, Maintainer, Resource, ResourceKind, Rule};
use std::collections::BTreeMap;
use std::sync::Arc;

const VERSION_COLUMNS: &str = "
  SELECT rv.id, r.resource_id, r.kind, v.name, rv.name, rv.short_description,
         rv.description, rv.keywords, rv.icon, rv.website, rv.version
  FROM resource_versions rv
  JOIN resources r ON r.id = rv.resource_id
  LEFT JOIN vendors v ON v.id = r.vendor_id";

struct VersionRow {
    row_id: i64,
    resource_id: String,
    resource: Resource,
}

fn sql_err(e: rusqlite::Error) -> CatalogError {
    CatalogError::backend(e.to_string())
}

fn version_row(row: &Row<'_>) -> rusqlite::Result<VersionRow> {
    let kind: String = row.get(2)?;
    let vendor: Option<String> = row.get(3)?;
    let keywords: String = row.get(7)?;
    Ok(VersionRow {
        row_id: row.get(0)?,
        resource_id: row.get(1)?,
        resource: Resource {
            kind: ResourceKind::from(kind),
            vendor: vendor.unwrap_or_default(),
            name: row.get(4)?,
            short_description: row.get(5)?,
            description: row.get(6)?,
            keywords: split_keywords(&keywords),
            icon: row.get(8)?,
            website: row.get(9)?,
            maintainers: Vec::new(),
            version: row.get(10)?,
            rules: Vec::new(),
        },
    })
}

fn attach_children(conn: &Connection, row: VersionRow) -> Result<VersionRow, CatalogError> {
    let mut row = row;
    let mut maintainers = conn
        .prepare_cached(
            "SELECT name, email FROM maintainers WHERE resource_version_id = ?1 ORDER BY id",
        )
        .map_err(sql_err)?;
    row.resource.maintainers = maintainers
        .query_map(params![row.row_id], |r| {
            Ok(Maintainer::new(r.get::<_, String>(0)?, r.get::<_, String>(1)?))
        })
        .map_err(sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(sql_err)?;

    let mut rules = conn
        .prepare_cached("SELECT raw FROM falco_rule_data WHERE resource_version_id = ?1 ORDER BY id")
        .map_err(sql_err)?;
    row.resource.rules = rules
        .query_map(params![row.row_id], |r| Ok(Rule::new(r.get::<_, String>(0)?)))
        .map_err(sql_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(sql_err)?;
    Ok(row)
}

fn load_versions(conn: &Connection, resource_id: Option<&str>) -> Result<Vec<VersionRow>, CatalogError> {
    let rows = match resource_id {
        Some(id) => {
            let mut stmt = conn
                .prepare_cached(&format!(
                    "{VERSION_COLUMNS} WHERE r.resource_id = ?1 ORDER BY rv.id"
                ))
                .map_err(sql_err)?;
            let rows = stmt
                .query_map(params![id], version_row)
                .map_err(sql_err)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(sql_err)?;
            rows
        }
        None => {
            let mut stmt = conn
                .prepare_cached(&format!("{VERSION_COLUMNS} ORDER BY r.resource_id, rv.id"))
                .map_err(sql_err)?;
            let rows = stmt
                .query_map([], version_row)
                .map_err(sql_err)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(sql_err)?;
            rows
        }
    };
    rows.into_iter()
        .map(|row| attach_children(conn, row))
        .collect()
}

/// Versions grouped by their `resources.resource_id`, newest first in each group.
fn group_newest_first(rows: Vec<VersionRow>) -> BTreeMap<String, Vec<Resource>> {
    let mut grouped: BTreeMap<String, Vec<Resource>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.resource_id).or_default().push(row.resource);
    }
    for versions in grouped.values_mut() {
        sort_newest_first(versions, |r| r.version.as_str());
    }
    grouped
}

#[derive(Debug, Clone)]
pub struct SqliteResourceRepository {
    db: Arc<SqliteDatabase>,
}

impl SqliteResourceRepository {
    #[must_use]
    pub fn new(db: Arc<SqliteDatabase>) -> Self {
        Self { db }
    }

    fn versions_of(&self, id: &str) -> Result<Vec<Resource>, CatalogError> {
        let resource_id = derive_id(id);
        let rows = self
            .db
            .with_connection(|conn| load_versions(conn, Some(&resource_id)))?;
        let versions = group_newest_first(rows)
            .remove(&resource_id)
            .unwrap_or_default();
        if versions.is_empty() {
            return Err(CatalogError::not_found());
        }
        Ok(versions)
    }
}

impl ResourceRepository for SqliteResourceRepository {
    fn find_all(&self) -> Result<Vec<Resource>, CatalogError> {
        let rows = self.db.with_connection(|conn| load_versions(conn, None))?;
        Ok(rows.into_iter().map(|row| row.resource).collect())
    }

    fn find_all_latest_versions(&self) -> Result<Vec<Resource>, CatalogError> {
        let rows = self.db.with_connection(|conn| load_versions(conn, None))?;
        Ok(group_newest_first(rows)
            .into_values()
            .filter_map(|versions| versions.into_iter().next())
            .collect())
    }

    fn find_by_id(&self, id: &str) -> Result<Vec<Resource>, CatalogError> {
        self.versions_of(id)
    }

    fn find_by_id_latest_version(&self, id: &str) -> Result<Resource, CatalogError> {
        self.versions_of(id)?
            .into_iter()
            .next()
            .ok_or_else(CatalogError::not_found)
    }

    fn find_by_id_and_version(&self, id: &str, version: &str) -> Result<Resource, CatalogError> {
        let resource_id = derive_id(id);
        self.db.with_connection(|conn| {
            let row = conn
                .query_row(
                    &format!("{VERSION_COLUMNS} WHERE r.resource_id = ?1 AND rv.version = ?2"),
                    params![resource_id, version],
                    version_row,
                )
                .optional()
                .map_err(sql_err)?
                .ok_or_else(CatalogError::not_found)?;
            Ok(attach_children(conn, row)?.resource)
        })
    }
}
