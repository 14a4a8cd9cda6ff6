//! Public error contract: `{ "error": message }` with a status code.
//!
//! User-facing messages keep the historical French wording of the API.
//! Store failures never leak details; those go to the server log only.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use sampler_core::{PresetValidationError, RepoError, SoundValidationError};
use serde_json::json;
use std::fmt::Display;

pub const ROUTE_NOT_FOUND: &str = "Route non trouvée";
pub const INTERNAL_ERROR: &str = "Erreur interne du serveur";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Logs `detail` and returns the generic 500 body.
    pub fn internal(detail: impl Display) -> Self {
        error!("event=http_internal_error module=http status=error error={detail}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }

    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::PresetValidation(
                PresetValidationError::EmptyName | PresetValidationError::EmptyType,
            ) => Self::new(
                StatusCode::BAD_REQUEST,
                r#"Les champs "name" et "type" sont requis"#,
            ),
            RepoError::PresetValidation(PresetValidationError::EmptyNewName)
            | RepoError::SoundValidation(SoundValidationError::EmptyNewName) => Self::new(
                StatusCode::BAD_REQUEST,
                r#"Le champ "newName" est requis dans le body"#,
            ),
            RepoError::SoundValidation(SoundValidationError::EmptyPresetName) => Self::new(
                StatusCode::BAD_REQUEST,
                r#"Le champ "presetName" est requis dans le body pour identifier le son"#,
            ),
            RepoError::SoundValidation(SoundValidationError::EmptyName) => Self::new(
                StatusCode::BAD_REQUEST,
                r#"Le champ "name" du son est requis"#,
            ),
            RepoError::PresetNotFound(name) => Self::new(
                StatusCode::NOT_FOUND,
                format!(r#"Preset "{name}" non trouvé"#),
            ),
            RepoError::SoundNotFound { preset, sound } => Self::new(
                StatusCode::NOT_FOUND,
                format!(r#"Son "{sound}" non trouvé dans le preset "{preset}""#),
            ),
            RepoError::PresetNameTaken(name) => Self::new(
                StatusCode::CONFLICT,
                format!(r#"Un preset avec le nom "{name}" existe déjà"#),
            ),
            RepoError::SoundNameTaken { preset, sound } => Self::new(
                StatusCode::CONFLICT,
                format!(r#"Un son avec le nom "{sound}" existe déjà dans le preset "{preset}""#),
            ),
            err @ (RepoError::Db(_) | RepoError::InvalidData(_)) => Self::internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Corps JSON invalide: {}", value.body_text()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, INTERNAL_ERROR};
    use axum::http::StatusCode;
    use sampler_core::{ErrorKind, RepoError};

    #[test]
    fn every_error_kind_maps_to_its_status() {
        let cases = [
            (
                RepoError::PresetValidation(sampler_core::PresetValidationError::EmptyType),
                StatusCode::BAD_REQUEST,
            ),
            (
                RepoError::PresetNotFound("Ghost".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                RepoError::SoundNameTaken {
                    preset: "Drums".to_string(),
                    sound: "Kick".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                RepoError::InvalidData("bad uuid".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let kind = err.kind();
            let api = ApiError::from(err);
            assert_eq!(api.status, status, "kind {kind:?}");
        }
    }

    #[test]
    fn store_errors_hide_details() {
        let api = ApiError::from(RepoError::InvalidData("secret path".to_string()));
        assert_eq!(api.message, INTERNAL_ERROR);
        assert_eq!(
            RepoError::InvalidData(String::new()).kind(),
            ErrorKind::Store
        );
    }
}
