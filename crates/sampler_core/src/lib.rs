//! Core domain logic for the sampler preset catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::preset::{Preset, PresetId, PresetValidationError};
pub use model::sound::{Sound, SoundId, SoundValidationError};
pub use repo::error::{ErrorKind, RepoError, RepoResult};
pub use repo::preset_repo::{PresetRepository, SqlitePresetRepository};
pub use repo::sound_repo::{RenamedSound, SoundRepository, SqliteSoundRepository};
pub use service::catalog::{assemble, assemble_all, PresetView, SampleView};
pub use service::import_service::{CatalogDocument, ImportService, ImportSummary, ImportedPreset};
pub use service::preset_service::{AddPresetRequest, AddedPreset, PresetService, RenamedPreset};
pub use service::sound_service::{RenameSoundRequest, SoundService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
