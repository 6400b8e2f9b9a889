use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use axum::response::Response;
use serde_json::Value;

use crate::catalog::RuleCatalog;
use crate::closet::domain::{Garment, GarmentCategory, GarmentId, OwnerId, UserContext};
use crate::closet::repository::{RepositoryError, WardrobeRepository};
use crate::outfits::service::RecommendationService;
use crate::outfits::OutfitEngine;

pub(super) fn catalog() -> Arc<RuleCatalog> {
    static CATALOG: OnceLock<Arc<RuleCatalog>> = OnceLock::new();
    CATALOG
        .get_or_init(|| Arc::new(RuleCatalog::builtin().expect("builtin tables parse")))
        .clone()
}

pub(super) fn engine() -> OutfitEngine {
    OutfitEngine::new(catalog())
}

pub(super) fn owner() -> OwnerId {
    OwnerId("ava@example.com".to_string())
}

/// Garment with sensible defaults: Solid / Smooth / Cotton / Fitted.
/// Tests vary individual attributes with struct update syntax.
pub(super) fn garment(id: &str, category: GarmentCategory, color: &str) -> Garment {
    Garment {
        id: GarmentId(format!("garment-{id}")),
        name: format!("{color} {}", category.label()),
        category,
        color: color.to_string(),
        pattern: "Solid".to_string(),
        fabric: "Smooth".to_string(),
        texture: "Cotton".to_string(),
        structure: "Fitted".to_string(),
        image_ref: format!("file:///images/{id}.jpg"),
    }
}

/// The two-garment wardrobe from the reference scenario: a red fitted
/// cotton top and a blue fitted cotton bottom, both solid.
pub(super) fn scenario_wardrobe() -> Vec<Garment> {
    vec![
        garment("top", GarmentCategory::Top, "Red"),
        garment("bottom", GarmentCategory::Bottom, "Blue"),
    ]
}

pub(super) fn empty_context() -> UserContext {
    UserContext::default()
}

#[derive(Default, Clone)]
pub(super) struct MemoryWardrobe {
    documents: Arc<Mutex<HashMap<String, Vec<Garment>>>>,
}

impl MemoryWardrobe {
    pub(super) fn seed(&self, owner: &OwnerId, wardrobe: Vec<Garment>) {
        let mut guard = self.documents.lock().expect("wardrobe mutex poisoned");
        guard.insert(owner.0.clone(), wardrobe);
    }
}

impl WardrobeRepository for MemoryWardrobe {
    fn load(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
        let guard = self.documents.lock().expect("wardrobe mutex poisoned");
        Ok(guard.get(&owner.0).cloned().unwrap_or_default())
    }

    fn store(&self, owner: &OwnerId, wardrobe: &[Garment]) -> Result<(), RepositoryError> {
        let mut guard = self.documents.lock().expect("wardrobe mutex poisoned");
        guard.insert(owner.0.clone(), wardrobe.to_vec());
        Ok(())
    }
}

pub(super) struct UnavailableWardrobe;

impl WardrobeRepository for UnavailableWardrobe {
    fn load(&self, _owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn store(&self, _owner: &OwnerId, _wardrobe: &[Garment]) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<RecommendationService<MemoryWardrobe>>,
    Arc<MemoryWardrobe>,
) {
    let repository = Arc::new(MemoryWardrobe::default());
    let service = Arc::new(RecommendationService::new(repository.clone(), catalog()));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
