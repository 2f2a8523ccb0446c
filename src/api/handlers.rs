use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;

use crate::dataset::DataTable;
use crate::error::{AppError, AppResult};
use crate::model::ModelArtifacts;
use crate::services::{Recommender, DEFAULT_RESULT_COUNT};

use super::{pages, AppState};

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Landing page
pub async fn homepage() -> Html<&'static str> {
    Html(pages::HOME_HTML)
}

/// Recommendation form page
pub async fn recommendation_form() -> Html<&'static str> {
    Html(pages::RECOMMEND_HTML)
}

/// Runs the recommendation pipeline for a submitted (track, artist) pair.
///
/// Checks run in a fixed order: blank input is rejected before any disk
/// access, the dataset file is checked before any model load, and only
/// then are the artifacts and table loaded fresh for this request.
pub async fn results(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> AppResult<Html<String>> {
    let track_name = form.track_name.trim();
    let artist_name = form.artist_name.trim();
    if track_name.is_empty() || artist_name.is_empty() {
        return Err(AppError::MissingInput);
    }

    if !state.dataset_path.is_file() {
        return Err(AppError::DatasetMissing);
    }

    let artifacts = ModelArtifacts::load(&state.model_dir)?;
    let table = DataTable::load(&state.dataset_path)?;

    for column in table.clean_report().partial_columns() {
        tracing::warn!(column, "column mixes numeric and non-numeric cells, kept textual");
    }

    let recommender = Recommender::new(&table, &artifacts);
    let recommendations = recommender.recommend(track_name, artist_name, DEFAULT_RESULT_COUNT)?;

    if recommendations.is_empty() {
        return Err(AppError::TrackNotFound);
    }

    tracing::info!(
        track = track_name,
        artist = artist_name,
        count = recommendations.len(),
        "served recommendations"
    );
    Ok(Html(pages::results_page(&recommendations)))
}
