//! Sound repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide per-preset lookup and rename over the `sounds` table.
//! - Accept inserts from the import path only; the HTTP surface never
//!   creates sounds.
//!
//! # Invariants
//! - `(preset_id, name)` is unique via `sounds_preset_name_unique`.
//! - Sounds whose `preset_id` matches no preset are never repaired; they
//!   simply never show up in a join.
//! - Rename resolves the preset and updates the sound inside one immediate
//!   transaction so the reported preset name matches the row it touched.

use crate::model::preset::PresetId;
use crate::model::sound::{Sound, SoundId, SoundValidationError};
use crate::repo::error::{is_unique_violation, RepoError, RepoResult};
use crate::repo::preset_repo::{PresetRepository, SqlitePresetRepository};
use crate::repo::with_write_lock;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const SOUND_SELECT_SQL: &str = "SELECT id, preset_id, name, url FROM sounds";

/// Outcome of a successful sound rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedSound {
    pub old_name: String,
    pub new_name: String,
    /// Current name of the owning preset, read in the rename transaction.
    pub preset_name: String,
}

/// Repository interface for sound persistence.
pub trait SoundRepository {
    /// Inserts one sound; a name already used under the same preset yields
    /// `SoundNameTaken`.
    fn insert_sound(&self, sound: &Sound) -> RepoResult<SoundId>;
    /// Lists sounds owned by one preset in insertion order.
    fn list_by_preset(&self, preset_id: PresetId) -> RepoResult<Vec<Sound>>;
    /// Lists every sound in insertion order, orphans included.
    fn list_all(&self) -> RepoResult<Vec<Sound>>;
    /// Renames a sound identified by its preset name and current name.
    fn rename_sound(
        &self,
        preset_name: &str,
        current_name: &str,
        new_name: &str,
    ) -> RepoResult<RenamedSound>;
}

/// SQLite-backed sound repository.
pub struct SqliteSoundRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSoundRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SoundRepository for SqliteSoundRepository<'_> {
    fn insert_sound(&self, sound: &Sound) -> RepoResult<SoundId> {
        sound.validate()?;

        with_write_lock(self.conn, |conn| {
            let inserted = conn.execute(
                "INSERT INTO sounds (id, preset_id, name, url) VALUES (?1, ?2, ?3, ?4);",
                params![
                    sound.id.to_string(),
                    sound.preset_id.to_string(),
                    sound.name.as_str(),
                    sound.url.as_str(),
                ],
            );

            match inserted {
                Ok(_) => Ok(sound.id),
                Err(err) if is_unique_violation(&err) => Err(RepoError::SoundNameTaken {
                    preset: preset_label(conn, sound.preset_id)?,
                    sound: sound.name.clone(),
                }),
                Err(err) => Err(err.into()),
            }
        })
    }

    fn list_by_preset(&self, preset_id: PresetId) -> RepoResult<Vec<Sound>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SOUND_SELECT_SQL} WHERE preset_id = ?1 ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([preset_id.to_string()])?;
        let mut sounds = Vec::new();
        while let Some(row) = rows.next()? {
            sounds.push(parse_sound_row(row)?);
        }
        Ok(sounds)
    }

    fn list_all(&self) -> RepoResult<Vec<Sound>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SOUND_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut sounds = Vec::new();
        while let Some(row) = rows.next()? {
            sounds.push(parse_sound_row(row)?);
        }
        Ok(sounds)
    }

    fn rename_sound(
        &self,
        preset_name: &str,
        current_name: &str,
        new_name: &str,
    ) -> RepoResult<RenamedSound> {
        if new_name.is_empty() {
            return Err(SoundValidationError::EmptyNewName.into());
        }
        if preset_name.is_empty() {
            return Err(SoundValidationError::EmptyPresetName.into());
        }

        with_write_lock(self.conn, |conn| {
            rename_in_preset(conn, preset_name, current_name, new_name)
        })
    }
}

fn rename_in_preset(
    conn: &Connection,
    preset_name: &str,
    current_name: &str,
    new_name: &str,
) -> RepoResult<RenamedSound> {
    let preset = SqlitePresetRepository::new(conn)
        .find_by_name(preset_name)?
        .ok_or_else(|| RepoError::PresetNotFound(preset_name.to_string()))?;

    let changed = conn
        .execute(
            "UPDATE sounds SET name = ?3 WHERE preset_id = ?1 AND name = ?2;",
            params![preset.id.to_string(), current_name, new_name],
        )
        .map_err(|err| {
            if is_unique_violation(&err) {
                RepoError::SoundNameTaken {
                    preset: preset.name.clone(),
                    sound: new_name.to_string(),
                }
            } else {
                err.into()
            }
        })?;

    if changed == 0 {
        return Err(RepoError::SoundNotFound {
            preset: preset.name,
            sound: current_name.to_string(),
        });
    }

    Ok(RenamedSound {
        old_name: current_name.to_string(),
        new_name: new_name.to_string(),
        preset_name: preset.name,
    })
}

fn parse_sound_row(row: &Row<'_>) -> RepoResult<Sound> {
    Ok(Sound {
        id: parse_uuid(row, "id")?,
        preset_id: parse_uuid(row, "preset_id")?,
        name: row.get("name")?,
        url: row.get("url")?,
    })
}

fn parse_uuid(row: &Row<'_>, column: &'static str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in sounds.{column}")))
}

/// Resolves a preset name for error reporting, falling back to the raw id.
fn preset_label(conn: &Connection, preset_id: PresetId) -> RepoResult<String> {
    let id_text = preset_id.to_string();
    let name = conn
        .query_row(
            "SELECT name FROM presets WHERE id = ?1;",
            [id_text.as_str()],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(name.unwrap_or(id_text))
}
