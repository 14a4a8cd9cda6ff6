//! Preset repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create, rename and lookup APIs over the `presets` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Name uniqueness is enforced by `presets_name_unique`; inserts and
//!   renames are single statements and never pre-check existence.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing order is store insertion order.

use crate::model::preset::{Preset, PresetId, PresetValidationError};
use crate::repo::error::{is_unique_violation, RepoError, RepoResult};
use crate::repo::with_write_lock;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const PRESET_COLUMNS: &str = "id, name, type, is_factory_preset, is_factory_presets";

/// Repository interface for preset persistence.
pub trait PresetRepository {
    /// Returns every preset in insertion order.
    fn list_presets(&self) -> RepoResult<Vec<Preset>>;
    /// Looks up one preset by exact, case-sensitive name.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Preset>>;
    /// Inserts a new preset; a taken name yields `PresetNameTaken`.
    fn insert_preset(&self, preset: &Preset) -> RepoResult<PresetId>;
    /// Renames in place and returns the updated record.
    ///
    /// Renaming to the current name succeeds without changes.
    fn rename_preset(&self, current_name: &str, new_name: &str) -> RepoResult<Preset>;
}

/// SQLite-backed preset repository.
pub struct SqlitePresetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePresetRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PresetRepository for SqlitePresetRepository<'_> {
    fn list_presets(&self) -> RepoResult<Vec<Preset>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PRESET_COLUMNS} FROM presets ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut presets = Vec::new();
        while let Some(row) = rows.next()? {
            presets.push(parse_preset_row(row)?);
        }
        Ok(presets)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Preset>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PRESET_COLUMNS} FROM presets WHERE name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_preset_row(row)?)),
            None => Ok(None),
        }
    }

    fn insert_preset(&self, preset: &Preset) -> RepoResult<PresetId> {
        preset.validate()?;

        with_write_lock(self.conn, |conn| {
            conn.execute(
                "INSERT INTO presets (id, name, type, is_factory_preset, is_factory_presets)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    preset.id.to_string(),
                    preset.name.as_str(),
                    preset.kind.as_str(),
                    preset.is_factory_preset,
                    preset.is_factory_presets,
                ],
            )
            .map_err(|err| {
                if is_unique_violation(&err) {
                    RepoError::PresetNameTaken(preset.name.clone())
                } else {
                    err.into()
                }
            })
        })?;

        Ok(preset.id)
    }

    fn rename_preset(&self, current_name: &str, new_name: &str) -> RepoResult<Preset> {
        if new_name.is_empty() {
            return Err(PresetValidationError::EmptyNewName.into());
        }

        with_write_lock(self.conn, |conn| {
            let renamed = conn
                .query_row(
                    &format!(
                        "UPDATE presets SET name = ?2 WHERE name = ?1 RETURNING {PRESET_COLUMNS};"
                    ),
                    params![current_name, new_name],
                    |row| Ok(parse_preset_row(row)),
                )
                .optional()
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        RepoError::PresetNameTaken(new_name.to_string())
                    } else {
                        RepoError::from(err)
                    }
                })?;

            match renamed {
                Some(preset) => preset,
                None => Err(RepoError::PresetNotFound(current_name.to_string())),
            }
        })
    }
}

pub(crate) fn parse_preset_row(row: &Row<'_>) -> RepoResult<Preset> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in presets.id"))
    })?;

    Ok(Preset {
        id,
        name: row.get("name")?,
        kind: row.get("type")?,
        is_factory_preset: parse_flag(row, "is_factory_preset")?,
        is_factory_presets: parse_flag(row, "is_factory_presets")?,
    })
}

fn parse_flag(row: &Row<'_>, column: &'static str) -> RepoResult<Option<bool>> {
    match row.get::<_, Option<i64>>(column)? {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(other) => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in presets.{column}"
        ))),
    }
}
