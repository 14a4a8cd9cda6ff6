//! Catalog domain model for presets and their sounds.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep presets and sounds as independent records linked by `preset_id`.
//!
//! # Invariants
//! - Every record is identified by a stable store-assigned UUID.
//! - Sounds never nest inside presets; the join happens on read.

pub mod preset;
pub mod sound;
