//! Catalog use-case services.
//!
//! # Responsibility
//! - Validate inbound operations and dispatch them to repositories.
//! - Pass every read through the catalog assembler so both read paths
//!   return the same public shape.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

pub mod catalog;
pub mod import_service;
pub mod preset_service;
pub mod sound_service;
