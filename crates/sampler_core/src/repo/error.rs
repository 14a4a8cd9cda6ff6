//! Repository error taxonomy shared by preset and sound persistence.

use crate::db::DbError;
use crate::model::preset::PresetValidationError;
use crate::model::sound::SoundValidationError;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Coarse error class surfaced at the catalog boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input missing or empty; caller can resubmit.
    Validation,
    /// Referenced preset or sound does not exist.
    NotFound,
    /// A uniqueness invariant would be violated.
    Conflict,
    /// Any underlying data-access failure.
    Store,
}

/// Error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    PresetValidation(PresetValidationError),
    SoundValidation(SoundValidationError),
    Db(DbError),
    PresetNotFound(String),
    SoundNotFound { preset: String, sound: String },
    PresetNameTaken(String),
    SoundNameTaken { preset: String, sound: String },
    InvalidData(String),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PresetValidation(_) | Self::SoundValidation(_) => ErrorKind::Validation,
            Self::PresetNotFound(_) | Self::SoundNotFound { .. } => ErrorKind::NotFound,
            Self::PresetNameTaken(_) | Self::SoundNameTaken { .. } => ErrorKind::Conflict,
            Self::Db(_) | Self::InvalidData(_) => ErrorKind::Store,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PresetValidation(err) => write!(f, "{err}"),
            Self::SoundValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::PresetNotFound(name) => write!(f, "preset not found: `{name}`"),
            Self::SoundNotFound { preset, sound } => {
                write!(f, "sound `{sound}` not found in preset `{preset}`")
            }
            Self::PresetNameTaken(name) => write!(f, "preset name already taken: `{name}`"),
            Self::SoundNameTaken { preset, sound } => {
                write!(f, "sound name `{sound}` already taken in preset `{preset}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PresetValidation(err) => Some(err),
            Self::SoundValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PresetValidationError> for RepoError {
    fn from(value: PresetValidationError) -> Self {
        Self::PresetValidation(value)
    }
}

impl From<SoundValidationError> for RepoError {
    fn from(value: SoundValidationError) -> Self {
        Self::SoundValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Returns whether `err` is a `UNIQUE` constraint failure.
///
/// Primary-key collisions are reported separately by SQLite and do not match.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
