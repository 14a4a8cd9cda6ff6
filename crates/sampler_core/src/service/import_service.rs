//! Catalog import: the ingestion path for presets and their sounds.
//!
//! # Responsibility
//! - Load a catalog document in the public listing shape into storage.
//! - Preserve whichever factory-flag spelling the document carries.
//!
//! # Invariants
//! - One document is imported in a single transaction; any conflict or
//!   validation failure leaves storage untouched.

use crate::model::preset::Preset;
use crate::model::sound::Sound;
use crate::repo::error::RepoResult;
use crate::repo::preset_repo::{PresetRepository, SqlitePresetRepository};
use crate::repo::sound_repo::{SoundRepository, SqliteSoundRepository};
use crate::service::catalog::SampleView;
use log::info;
use rusqlite::{Connection, TransactionBehavior};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One preset entry of an import document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedPreset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "isFactoryPreset", default)]
    pub is_factory_preset: Option<bool>,
    #[serde(rename = "isFactoryPresets", default)]
    pub is_factory_presets: Option<bool>,
    #[serde(default)]
    pub samples: Vec<SampleView>,
}

/// Import document: a JSON array of presets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDocument {
    pub presets: Vec<ImportedPreset>,
}

impl CatalogDocument {
    pub fn from_json_str(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub presets: usize,
    pub sounds: usize,
}

pub struct ImportService<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> ImportService<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }

    /// Imports every preset and sound of `document` atomically.
    ///
    /// # Errors
    /// - `PresetNameTaken` / `SoundNameTaken` on any duplicate, whether
    ///   against existing rows or within the document itself.
    /// - Validation errors for empty preset names, types or sound names.
    pub fn import_catalog(&mut self, document: &CatalogDocument) -> RepoResult<ImportSummary> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut summary = ImportSummary::default();
        {
            let presets = SqlitePresetRepository::new(&tx);
            let sounds = SqliteSoundRepository::new(&tx);

            for entry in &document.presets {
                let preset = Preset {
                    id: Uuid::new_v4(),
                    name: entry.name.clone(),
                    kind: entry.kind.clone(),
                    is_factory_preset: entry.is_factory_preset,
                    is_factory_presets: entry.is_factory_presets,
                };
                let preset_id = presets.insert_preset(&preset)?;
                summary.presets += 1;

                for sample in &entry.samples {
                    sounds.insert_sound(&Sound::new(
                        preset_id,
                        sample.name.clone(),
                        sample.url.clone(),
                    ))?;
                    summary.sounds += 1;
                }
            }
        }
        tx.commit()?;

        info!(
            "event=catalog_import module=service status=ok presets={} sounds={}",
            summary.presets, summary.sounds
        );
        Ok(summary)
    }
}
