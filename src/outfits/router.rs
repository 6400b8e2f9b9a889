use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::service::{ContextSelection, RecommendationError, RecommendationService};
use super::ScoredOutfit;
use crate::closet::{
    OwnerId, WardrobeRepository, COLOR_OPTIONS, FABRIC_OPTIONS, PATTERN_OPTIONS, STRUCTURE_OPTIONS,
    TEXTURE_OPTIONS,
};

/// Router builder exposing the recommendation and picker-option endpoints.
pub fn outfits_router<R>(service: Arc<RecommendationService<R>>) -> Router
where
    R: WardrobeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/wardrobe/:owner/outfits",
            post(recommend_handler::<R>),
        )
        .route("/api/v1/catalog/options", get(options_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) outfits: Vec<ScoredOutfit>,
}

pub(crate) async fn recommend_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Path(owner): Path<String>,
    axum::Json(selection): axum::Json<ContextSelection>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.recommend(&OwnerId(owner), selection) {
        Ok(outfits) => {
            let body = RecommendationResponse {
                generated_at: Utc::now(),
                outfits,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(RecommendationError::Selection(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RecommendationError::InsufficientWardrobe(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StyleGuideEntry {
    pub(crate) style: String,
    pub(crate) compatible_styles: Vec<String>,
    pub(crate) key_pieces: Vec<String>,
}

pub(crate) async fn options_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    let catalog = service.engine().catalog();

    let styles: Vec<StyleGuideEntry> = catalog
        .style_options()
        .into_iter()
        .map(|style| StyleGuideEntry {
            style: style.to_string(),
            compatible_styles: catalog
                .style_compatibility(style)
                .map(|row| row.compatible_styles.clone())
                .unwrap_or_default(),
            key_pieces: catalog
                .style_breakdown(style)
                .map(|row| row.key_pieces.clone())
                .unwrap_or_default(),
        })
        .collect();

    let payload = json!({
        "attributes": {
            "color": COLOR_OPTIONS,
            "pattern": PATTERN_OPTIONS,
            "fabric": FABRIC_OPTIONS,
            "texture": TEXTURE_OPTIONS,
            "structure": STRUCTURE_OPTIONS,
        },
        "context": {
            "skin_tone": catalog.skin_tone_options(),
            "occasion": catalog.occasion_options(),
            "weather": catalog.weather_options(),
            "body_type": catalog.body_shape_options(),
        },
        "styles": styles,
    });

    (StatusCode::OK, axum::Json(payload)).into_response()
}
