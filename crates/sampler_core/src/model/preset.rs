//! Preset domain model.
//!
//! # Responsibility
//! - Define the preset record and its creation-time validation.
//! - Resolve the two historical spellings of the factory flag.
//!
//! # Invariants
//! - `id` is stable and never reused for another preset.
//! - `name` is non-empty and globally unique (enforced by storage).
//! - New presets always write the canonical `is_factory_preset` flag.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a preset, referenced by `Sound::preset_id`.
pub type PresetId = Uuid;

/// Stored preset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    /// Free-form classification, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Canonical factory flag. `None` for legacy documents that never set it.
    pub is_factory_preset: Option<bool>,
    /// Legacy spelling of the factory flag, only present on imported data.
    pub is_factory_presets: Option<bool>,
}

/// Validation error for preset creation and rename inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetValidationError {
    EmptyName,
    EmptyType,
    EmptyNewName,
}

impl Display for PresetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "preset name must not be empty"),
            Self::EmptyType => write!(f, "preset type must not be empty"),
            Self::EmptyNewName => write!(f, "new preset name must not be empty"),
        }
    }
}

impl Error for PresetValidationError {}

impl Preset {
    /// Creates a new preset with a generated stable ID.
    ///
    /// The legacy flag is left unset; only the canonical flag is written.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, is_factory_preset: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: kind.into(),
            is_factory_preset: Some(is_factory_preset),
            is_factory_presets: None,
        }
    }

    /// Resolves the factory flag across both stored spellings.
    ///
    /// Canonical wins over legacy; absence of both means `false`.
    pub fn is_factory(&self) -> bool {
        self.is_factory_preset
            .or(self.is_factory_presets)
            .unwrap_or(false)
    }

    /// Validates fields required before the preset may be persisted.
    pub fn validate(&self) -> Result<(), PresetValidationError> {
        if self.name.is_empty() {
            return Err(PresetValidationError::EmptyName);
        }
        if self.kind.is_empty() {
            return Err(PresetValidationError::EmptyType);
        }
        Ok(())
    }
}
