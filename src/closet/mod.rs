//! Garment cataloguing: the wardrobe data model, intake validation, and
//! the per-owner document storage the recommendation engine reads from.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Garment, GarmentCategory, GarmentId, OwnerId, UserContext, COLOR_OPTIONS, FABRIC_OPTIONS,
    PATTERN_OPTIONS, STRUCTURE_OPTIONS, TEXTURE_OPTIONS,
};
pub use intake::{GarmentDraft, IntakeError};
pub use repository::{GarmentView, RepositoryError, WardrobeRepository};
pub use router::closet_router;
pub use service::{ClosetError, ClosetService};
pub use store::JsonFileWardrobeStore;
