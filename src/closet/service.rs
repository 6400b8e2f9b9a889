use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use super::domain::{Garment, GarmentId, OwnerId};
use super::intake::{garment_from_draft, GarmentDraft, IntakeError};
use super::repository::{RepositoryError, WardrobeRepository};

static GARMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_garment_id() -> GarmentId {
    let id = GARMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    GarmentId(format!("garment-{id:06}"))
}

/// Service facade over intake validation and wardrobe storage.
pub struct ClosetService<R> {
    repository: Arc<R>,
}

impl<R> ClosetService<R>
where
    R: WardrobeRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new garment, returning the stored record.
    pub fn add_garment(
        &self,
        owner: &OwnerId,
        draft: GarmentDraft,
    ) -> Result<Garment, ClosetError> {
        let mut wardrobe = self.repository.load(owner)?;

        // The sequence restarts with the process; skip ids already in the document.
        let mut id = next_garment_id();
        while wardrobe.iter().any(|garment| garment.id == id) {
            id = next_garment_id();
        }

        let garment = garment_from_draft(id, draft)?;
        wardrobe.push(garment.clone());
        self.repository.store(owner, &wardrobe)?;

        info!(
            owner = %owner.0,
            garment = %garment.id.0,
            category = garment.category.label(),
            "garment catalogued"
        );

        Ok(garment)
    }

    /// The owner's full wardrobe, in catalogue order.
    pub fn wardrobe(&self, owner: &OwnerId) -> Result<Vec<Garment>, ClosetError> {
        Ok(self.repository.load(owner)?)
    }

    /// Whole-record deletion; unknown ids are reported, not ignored.
    pub fn remove_garment(&self, owner: &OwnerId, id: &GarmentId) -> Result<(), ClosetError> {
        let mut wardrobe = self.repository.load(owner)?;
        let before = wardrobe.len();
        wardrobe.retain(|garment| &garment.id != id);

        if wardrobe.len() == before {
            return Err(ClosetError::GarmentNotFound { id: id.clone() });
        }

        self.repository.store(owner, &wardrobe)?;
        info!(owner = %owner.0, garment = %id.0, "garment removed");
        Ok(())
    }
}

/// Error raised by the closet service.
#[derive(Debug, thiserror::Error)]
pub enum ClosetError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("garment '{}' not found", id.0)]
    GarmentNotFound { id: GarmentId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
