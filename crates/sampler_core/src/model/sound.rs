//! Sound domain model.
//!
//! # Invariants
//! - `preset_id` is the only link to the owning preset.
//! - `name` is unique within one `preset_id`, not globally.
//! - `url` is an opaque asset reference and is never resolved by core.

use crate::model::preset::PresetId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type SoundId = Uuid;

/// Stored sound record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sound {
    pub id: SoundId,
    pub preset_id: PresetId,
    pub name: String,
    pub url: String,
}

/// Validation error for sound inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundValidationError {
    EmptyName,
    EmptyNewName,
    EmptyPresetName,
}

impl Display for SoundValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "sound name must not be empty"),
            Self::EmptyNewName => write!(f, "new sound name must not be empty"),
            Self::EmptyPresetName => write!(f, "preset name is required to identify a sound"),
        }
    }
}

impl Error for SoundValidationError {}

impl Sound {
    /// Creates a sound owned by `preset_id` with a generated stable ID.
    pub fn new(preset_id: PresetId, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            preset_id,
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SoundValidationError> {
        if self.name.is_empty() {
            return Err(SoundValidationError::EmptyName);
        }
        Ok(())
    }
}
