use serde::Serialize;

use super::domain::{Garment, GarmentId, OwnerId};

/// Storage abstraction over the per-owner wardrobe document. The
/// document is always read and rewritten whole; there are no partial
/// updates.
pub trait WardrobeRepository: Send + Sync {
    /// The owner's full garment list, empty when no document exists yet.
    fn load(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError>;
    fn store(&self, owner: &OwnerId, wardrobe: &[Garment]) -> Result<(), RepositoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("wardrobe storage unavailable: {0}")]
    Unavailable(String),
    #[error("wardrobe document malformed: {0}")]
    Malformed(String),
}

/// Per-item view exposed by the wardrobe API.
#[derive(Debug, Clone, Serialize)]
pub struct GarmentView {
    pub id: GarmentId,
    pub name: String,
    pub category: &'static str,
    pub color: String,
    pub pattern: String,
    pub fabric: String,
    pub texture: String,
    pub structure: String,
    pub image_ref: String,
}

impl From<&Garment> for GarmentView {
    fn from(garment: &Garment) -> Self {
        Self {
            id: garment.id.clone(),
            name: garment.name.clone(),
            category: garment.category.label(),
            color: garment.color.clone(),
            pattern: garment.pattern.clone(),
            fabric: garment.fabric.clone(),
            texture: garment.texture.clone(),
            structure: garment.structure.clone(),
            image_ref: garment.image_ref.clone(),
        }
    }
}
