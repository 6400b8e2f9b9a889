use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use super::{InsufficientWardrobe, OutfitEngine, ScoredOutfit};
use crate::catalog::RuleCatalog;
use crate::closet::{OwnerId, RepositoryError, UserContext, WardrobeRepository};

/// Context selection as submitted by the caller. Missing or empty
/// fields stay unset; set fields must name a catalog row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContextSelection {
    #[serde(default)]
    pub skin_tone: String,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub body_type: String,
}

/// A set context field that no catalog row matches.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown skin tone '{0}'")]
    UnknownSkinTone(String),
    #[error("unknown occasion '{0}'")]
    UnknownOccasion(String),
    #[error("unknown weather '{0}'")]
    UnknownWeather(String),
    #[error("unknown body type '{0}'")]
    UnknownBodyType(String),
}

impl ContextSelection {
    /// Validate every set field against the catalog's enumerations.
    pub fn validated(self, catalog: &RuleCatalog) -> Result<UserContext, SelectionError> {
        let Self {
            skin_tone,
            occasion,
            weather,
            body_type,
        } = self;

        if !skin_tone.is_empty() && catalog.skin_tone(&skin_tone).is_none() {
            return Err(SelectionError::UnknownSkinTone(skin_tone));
        }
        if !occasion.is_empty() && catalog.occasion(&occasion).is_none() {
            return Err(SelectionError::UnknownOccasion(occasion));
        }
        if !weather.is_empty() && catalog.weather(&weather).is_none() {
            return Err(SelectionError::UnknownWeather(weather));
        }
        if !body_type.is_empty() && catalog.body_shape(&body_type).is_none() {
            return Err(SelectionError::UnknownBodyType(body_type));
        }

        Ok(UserContext {
            skin_tone,
            occasion,
            weather,
            body_type,
        })
    }
}

/// Service composing wardrobe storage, the rule catalog, and the engine.
pub struct RecommendationService<R> {
    repository: Arc<R>,
    engine: OutfitEngine,
}

impl<R> RecommendationService<R>
where
    R: WardrobeRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<RuleCatalog>) -> Self {
        Self {
            repository,
            engine: OutfitEngine::new(catalog),
        }
    }

    pub fn engine(&self) -> &OutfitEngine {
        &self.engine
    }

    /// Load the owner's wardrobe snapshot and rank its combinations
    /// against the submitted selection.
    pub fn recommend(
        &self,
        owner: &OwnerId,
        selection: ContextSelection,
    ) -> Result<Vec<ScoredOutfit>, RecommendationError> {
        let context = selection.validated(self.engine.catalog())?;
        let wardrobe = self.repository.load(owner)?;
        let ranked = self.engine.recommend(&wardrobe, &context)?;

        info!(
            owner = %owner.0,
            combinations = ranked.len(),
            complete_context = context.is_complete(),
            "outfits ranked"
        );

        Ok(ranked)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    InsufficientWardrobe(#[from] InsufficientWardrobe),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
