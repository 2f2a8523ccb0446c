use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api::pages;
use crate::dataset::DatasetError;
use crate::model::ModelError;
use crate::services::RecommendError;

/// Application-level errors
///
/// The first three variants are the user-visible conditions; their display
/// strings are the messages rendered on the results page. Everything else
/// is an internal fault surfaced as a 500-class page.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Error: track name and artist name are required.")]
    MissingInput,

    #[error("Error: dataset file not found.")]
    DatasetMissing,

    #[error("Sorry, we could not find the specified track.")]
    TrackNotFound,

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Recommendation error: {0}")]
    Recommend(#[from] RecommendError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingInput => StatusCode::BAD_REQUEST,
            AppError::TrackNotFound => StatusCode::NOT_FOUND,
            AppError::DatasetMissing => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Dataset(_) | AppError::Model(_) | AppError::Recommend(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Html(pages::message_page(&self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
