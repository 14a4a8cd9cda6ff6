//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Own the `presets` and `sounds` tables behind use-case oriented traits.
//! - Translate storage constraint violations into semantic conflicts.
//!
//! # Invariants
//! - Uniqueness is never pre-checked; a write either lands or reports the
//!   constraint it hit.
//! - Repository APIs return semantic errors (`NotFound`, `Conflict`) in
//!   addition to store transport errors.

pub mod error;
pub mod preset_repo;
pub mod sound_repo;

use crate::repo::error::RepoResult;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Runs a catalog write under SQLite's write lock.
///
/// Outside a transaction this opens `BEGIN IMMEDIATE`, so concurrent writers
/// queue on the busy timeout instead of failing a lock upgrade. Inside a
/// caller's transaction the write joins it.
pub(crate) fn with_write_lock<T>(
    conn: &Connection,
    write: impl FnOnce(&Connection) -> RepoResult<T>,
) -> RepoResult<T> {
    if !conn.is_autocommit() {
        return write(conn);
    }

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let value = write(&*tx)?;
    tx.commit()?;
    Ok(value)
}
