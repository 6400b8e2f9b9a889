use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::closet::domain::{Garment, GarmentCategory, GarmentId, OwnerId};
use crate::closet::intake::GarmentDraft;
use crate::closet::repository::{RepositoryError, WardrobeRepository};
use crate::closet::service::ClosetService;

pub(super) fn owner() -> OwnerId {
    OwnerId("ava@example.com".to_string())
}

pub(super) fn draft(name: &str, color: &str) -> GarmentDraft {
    GarmentDraft {
        name: name.to_string(),
        color: color.to_string(),
        pattern: "Solid".to_string(),
        fabric: "Smooth".to_string(),
        texture: "Cotton".to_string(),
        structure: "Fitted".to_string(),
        image_ref: "file:///images/item.jpg".to_string(),
    }
}

pub(super) fn garment(id: &str, name: &str, category: GarmentCategory, color: &str) -> Garment {
    Garment {
        id: GarmentId(id.to_string()),
        name: name.to_string(),
        category,
        color: color.to_string(),
        pattern: "Solid".to_string(),
        fabric: "Smooth".to_string(),
        texture: "Cotton".to_string(),
        structure: "Fitted".to_string(),
        image_ref: format!("file:///images/{id}.jpg"),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryWardrobe {
    documents: Arc<Mutex<HashMap<String, Vec<Garment>>>>,
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

pub(super) fn build_service() -> (ClosetService<MemoryWardrobe>, Arc<MemoryWardrobe>) {
    let repository = Arc::new(MemoryWardrobe::default());
    let service = ClosetService::new(repository.clone());
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
