//! Sound use-case service.
//!
//! Sounds are only renamed through this service; creation happens through
//! catalog import and deletion is not offered.

use crate::repo::error::RepoResult;
use crate::repo::sound_repo::{RenamedSound, SoundRepository};
use log::info;

/// Request model for renaming a sound inside a named preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSoundRequest {
    pub preset_name: String,
    pub current_name: String,
    pub new_name: String,
}

pub struct SoundService<S: SoundRepository> {
    sounds: S,
}

impl<S: SoundRepository> SoundService<S> {
    pub fn new(sounds: S) -> Self {
        Self { sounds }
    }

    /// Renames one sound, scoped to its owning preset.
    ///
    /// # Errors
    /// - Validation error when `new_name` or `preset_name` is empty, checked
    ///   in that order.
    /// - `PresetNotFound` / `SoundNotFound` for unknown references.
    /// - `SoundNameTaken` when the preset already has a sound named `new_name`.
    pub fn rename(&self, request: &RenameSoundRequest) -> RepoResult<RenamedSound> {
        let renamed = self.sounds.rename_sound(
            &request.preset_name,
            &request.current_name,
            &request.new_name,
        )?;
        info!("event=sound_rename module=service status=ok");
        Ok(renamed)
    }
}
