use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, post},
    Router,
};
use serde_json::json;

use super::domain::{GarmentId, OwnerId};
use super::intake::GarmentDraft;
use super::repository::{GarmentView, WardrobeRepository};
use super::service::{ClosetError, ClosetService};

/// Router builder exposing the wardrobe CRUD endpoints.
pub fn closet_router<R>(service: Arc<ClosetService<R>>) -> Router
where
    R: WardrobeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/wardrobe/:owner/items",
            post(add_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/wardrobe/:owner/items/:garment_id",
            delete(remove_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn add_handler<R>(
    State(service): State<Arc<ClosetService<R>>>,
    Path(owner): Path<String>,
    axum::Json(draft): axum::Json<GarmentDraft>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.add_garment(&OwnerId(owner), draft) {
        Ok(garment) => {
            let view = GarmentView::from(&garment);
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ClosetError::Intake(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ClosetService<R>>>,
    Path(owner): Path<String>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.wardrobe(&OwnerId(owner)) {
        Ok(wardrobe) => {
            let items: Vec<GarmentView> = wardrobe.iter().map(GarmentView::from).collect();
            (StatusCode::OK, axum::Json(items)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn remove_handler<R>(
    State(service): State<Arc<ClosetService<R>>>,
    Path((owner, garment_id)): Path<(String, String)>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    let id = GarmentId(garment_id);
    match service.remove_garment(&OwnerId(owner), &id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ClosetError::GarmentNotFound { id }) => {
            let payload = json!({ "error": format!("garment '{}' not found", id.0) });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
