//! Preset use-case service.
//!
//! # Responsibility
//! - Provide list, lookup, add and rename entry points for presets.
//! - Join read results with sounds through the catalog assembler.
//!
//! # Invariants
//! - `add` and `rename` rely on the repository's guarded writes for
//!   uniqueness; no existence pre-check happens here.
//! - The generated preset id is never returned to callers.

use crate::model::preset::Preset;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::preset_repo::PresetRepository;
use crate::repo::sound_repo::SoundRepository;
use crate::service::catalog::{assemble, assemble_all, PresetView};
use log::info;

/// Request model for creating a preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPresetRequest {
    pub name: String,
    pub kind: String,
    /// Defaults to `false` when omitted.
    pub is_factory_preset: Option<bool>,
}

/// Fields echoed back after a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedPreset {
    pub name: String,
    pub kind: String,
    pub is_factory_preset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedPreset {
    pub old_name: String,
    pub new_name: String,
}

/// Use-case service over preset and sound repositories.
pub struct PresetService<P: PresetRepository, S: SoundRepository> {
    presets: P,
    sounds: S,
}

impl<P: PresetRepository, S: SoundRepository> PresetService<P, S> {
    pub fn new(presets: P, sounds: S) -> Self {
        Self { presets, sounds }
    }

    /// Returns every preset joined with its sounds.
    pub fn list_all(&self) -> RepoResult<Vec<PresetView>> {
        let presets = self.presets.list_presets()?;
        let sounds = self.sounds.list_all()?;
        Ok(assemble_all(&presets, &sounds))
    }

    /// Returns one preset joined with its sounds.
    ///
    /// # Errors
    /// - `PresetNotFound` when no preset has exactly this name.
    pub fn find_by_name(&self, name: &str) -> RepoResult<PresetView> {
        let preset = self
            .presets
            .find_by_name(name)?
            .ok_or_else(|| RepoError::PresetNotFound(name.to_string()))?;
        let sounds = self.sounds.list_by_preset(preset.id)?;
        Ok(assemble(&preset, &sounds))
    }

    /// Creates a preset.
    ///
    /// # Errors
    /// - Validation error when `name` or `type` is empty.
    /// - `PresetNameTaken` when the name already exists.
    pub fn add(&self, request: AddPresetRequest) -> RepoResult<AddedPreset> {
        let is_factory_preset = request.is_factory_preset.unwrap_or(false);
        let preset = Preset::new(request.name, request.kind, is_factory_preset);
        let preset_id = self.presets.insert_preset(&preset)?;

        info!(
            "event=preset_add module=service status=ok preset_id={preset_id} factory={is_factory_preset}"
        );
        Ok(AddedPreset {
            name: preset.name,
            kind: preset.kind,
            is_factory_preset,
        })
    }

    /// Renames a preset, keeping its id.
    ///
    /// # Errors
    /// - Validation error when `new_name` is empty.
    /// - `PresetNotFound` when `current_name` does not exist.
    /// - `PresetNameTaken` when another preset already uses `new_name`.
    pub fn rename(&self, current_name: &str, new_name: &str) -> RepoResult<RenamedPreset> {
        let preset = self.presets.rename_preset(current_name, new_name)?;
        info!(
            "event=preset_rename module=service status=ok preset_id={}",
            preset.id
        );
        Ok(RenamedPreset {
            old_name: current_name.to_string(),
            new_name: preset.name,
        })
    }
}
