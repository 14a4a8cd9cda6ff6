//! Route handlers for the public catalog API.
//!
//! Handlers only decode requests, call one core service on the blocking
//! pool and encode the result; catalog rules live in `sampler_core`.

use crate::http::response::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sampler_core::{
    AddPresetRequest, PresetService, PresetView, RenameSoundRequest, SoundService,
    SqlitePresetRepository, SqliteSoundRepository,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Default, Deserialize)]
pub struct AddPresetBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "isFactoryPreset", default)]
    pub is_factory_preset: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPresetResponse {
    pub message: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_factory_preset: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePresetBody {
    #[serde(default)]
    pub new_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePresetResponse {
    pub message: String,
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSoundBody {
    #[serde(default)]
    pub new_name: Option<String>,
    #[serde(default)]
    pub preset_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSoundResponse {
    pub message: String,
    pub old_name: String,
    pub new_name: String,
    pub preset_name: String,
}

pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Audio Sampler Web - Serveur REST",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "presets": "/api/presets",
        }
    }))
}

pub async fn list_presets_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PresetView>>, ApiError> {
    let presets = state
        .run(|conn| {
            PresetService::new(
                SqlitePresetRepository::new(conn),
                SqliteSoundRepository::new(conn),
            )
            .list_all()
        })
        .await?;
    Ok(Json(presets))
}

pub async fn get_preset_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PresetView>, ApiError> {
    let preset = state
        .run(move |conn| {
            PresetService::new(
                SqlitePresetRepository::new(conn),
                SqliteSoundRepository::new(conn),
            )
            .find_by_name(&name)
        })
        .await?;
    Ok(Json(preset))
}

pub async fn add_preset_handler(
    State(state): State<AppState>,
    body: Result<Json<AddPresetBody>, JsonRejection>,
) -> Result<(StatusCode, Json<AddPresetResponse>), ApiError> {
    let Json(body) = body?;
    let request = AddPresetRequest {
        name: body.name.unwrap_or_default(),
        kind: body.kind.unwrap_or_default(),
        is_factory_preset: body.is_factory_preset,
    };

    let added = state
        .run(move |conn| {
            PresetService::new(
                SqlitePresetRepository::new(conn),
                SqliteSoundRepository::new(conn),
            )
            .add(request)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddPresetResponse {
            message: format!(r#"Preset "{}" créé avec succès"#, added.name),
            name: added.name,
            kind: added.kind,
            is_factory_preset: added.is_factory_preset,
        }),
    ))
}

pub async fn rename_preset_handler(
    State(state): State<AppState>,
    Path(preset_name): Path<String>,
    body: Result<Json<RenamePresetBody>, JsonRejection>,
) -> Result<Json<RenamePresetResponse>, ApiError> {
    let Json(body) = body?;
    let new_name = body.new_name.unwrap_or_default();

    let renamed = state
        .run(move |conn| {
            PresetService::new(
                SqlitePresetRepository::new(conn),
                SqliteSoundRepository::new(conn),
            )
            .rename(&preset_name, &new_name)
        })
        .await?;

    Ok(Json(RenamePresetResponse {
        message: format!(
            r#"Preset renommé de "{}" à "{}""#,
            renamed.old_name, renamed.new_name
        ),
        old_name: renamed.old_name,
        new_name: renamed.new_name,
    }))
}

pub async fn rename_sound_handler(
    State(state): State<AppState>,
    Path(sound_name): Path<String>,
    body: Result<Json<RenameSoundBody>, JsonRejection>,
) -> Result<Json<RenameSoundResponse>, ApiError> {
    let Json(body) = body?;
    let request = RenameSoundRequest {
        preset_name: body.preset_name.unwrap_or_default(),
        current_name: sound_name,
        new_name: body.new_name.unwrap_or_default(),
    };

    let renamed = state
        .run(move |conn| SoundService::new(SqliteSoundRepository::new(conn)).rename(&request))
        .await?;

    Ok(Json(RenameSoundResponse {
        message: format!(
            r#"Son renommé de "{}" à "{}""#,
            renamed.old_name, renamed.new_name
        ),
        old_name: renamed.old_name,
        new_name: renamed.new_name,
        preset_name: renamed.preset_name,
    }))
}

pub async fn fallback_handler() -> ApiError {
    ApiError::route_not_found()
}
