//! Catalog assembler: joins presets with their sounds into the public shape.
//!
//! # Invariants
//! - A view contains exactly the sounds whose `preset_id` equals the preset
//!   id, in the order the store returned them.
//! - The factory flag is resolved once through `Preset::is_factory`.
//! - Listing and single lookup both go through `assemble`.

use crate::model::preset::Preset;
use crate::model::sound::Sound;
use serde::{Deserialize, Serialize};

/// Public representation of one sound inside a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleView {
    pub name: String,
    pub url: String,
}

/// Public representation of a preset joined with its sounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetView {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Historical public name of the factory flag.
    #[serde(rename = "isFactoryPresets")]
    pub is_factory_presets: bool,
    pub samples: Vec<SampleView>,
}

/// Builds the view of `preset` from the sounds that belong to it.
///
/// Sounds owned by other presets are ignored, so callers may pass a
/// pre-filtered list or the whole sound table.
pub fn assemble(preset: &Preset, sounds: &[Sound]) -> PresetView {
    PresetView {
        name: preset.name.clone(),
        kind: preset.kind.clone(),
        is_factory_presets: preset.is_factory(),
        samples: sounds
            .iter()
            .filter(|sound| sound.preset_id == preset.id)
            .map(|sound| SampleView {
                name: sound.name.clone(),
                url: sound.url.clone(),
            })
            .collect(),
    }
}

/// Builds views for every preset, preserving preset order.
pub fn assemble_all(presets: &[Preset], sounds: &[Sound]) -> Vec<PresetView> {
    presets
        .iter()
        .map(|preset| assemble(preset, sounds))
        .collect()
}
