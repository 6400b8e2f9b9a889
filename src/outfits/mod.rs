//! Outfit recommendation: combination enumeration, rule scoring, and
//! stable descending ranking over a wardrobe snapshot.

pub mod combinations;
pub mod router;
mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use combinations::{InsufficientWardrobe, OutfitCombination};
pub use router::outfits_router;
pub use service::{ContextSelection, RecommendationError, RecommendationService, SelectionError};

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::RuleCatalog;
use crate::closet::{Garment, UserContext};

/// A combination paired with its computed score and matched-rule trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredOutfit {
    pub combination: OutfitCombination,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Stateless scorer over the shared read-only rule catalog. Every call
/// takes an immutable wardrobe snapshot plus context and produces a
/// fresh ranked list; recomputation is entirely caller-driven.
pub struct OutfitEngine {
    catalog: Arc<RuleCatalog>,
}

impl OutfitEngine {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Enumerate every candidate combination, score each, and rank.
    ///
    /// The sort is stable and descending, so equal scores keep
    /// enumeration order: top-bottom pairs in wardrobe order, then
    /// one-pieces in wardrobe order.
    pub fn recommend(
        &self,
        wardrobe: &[Garment],
        context: &UserContext,
    ) -> Result<Vec<ScoredOutfit>, InsufficientWardrobe> {
        let combinations = combinations::enumerate_combinations(wardrobe)?;

        let mut scored: Vec<ScoredOutfit> = combinations
            .into_iter()
            .map(|combination| {
                let (score, reasons) =
                    rules::score_combination(&combination.garments, context, &self.catalog);
                ScoredOutfit {
                    combination,
                    score,
                    reasons,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored)
    }
}
