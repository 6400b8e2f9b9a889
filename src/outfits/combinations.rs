use serde::Serialize;

use crate::closet::{Garment, GarmentCategory};

/// A candidate outfit: one anchor (top + bottom, or a one-piece) plus at
/// most one each of outerwear, accessory, and footwear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitCombination {
    pub garments: Vec<Garment>,
}

/// No combination could be formed from the wardrobe. The message is
/// shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not enough clothing items: add at least a top and a bottom, or a one-piece")]
pub struct InsufficientWardrobe;

/// Every top x bottom pair, then every one-piece, in wardrobe order.
///
/// Only the first item of each optional category is appended; additional
/// outerwear, accessories, or footwear never fan out into further
/// combinations.
pub(crate) fn enumerate_combinations(
    wardrobe: &[Garment],
) -> Result<Vec<OutfitCombination>, InsufficientWardrobe> {
    let tops = by_category(wardrobe, GarmentCategory::Top);
    let bottoms = by_category(wardrobe, GarmentCategory::Bottom);
    let one_pieces = by_category(wardrobe, GarmentCategory::OnePiece);

    let extras: Vec<&Garment> = [
        GarmentCategory::Outerwear,
        GarmentCategory::Accessory,
        GarmentCategory::Footwear,
    ]
    .iter()
    .filter_map(|category| wardrobe.iter().find(|garment| garment.category == *category))
    .collect();

    let mut combinations = Vec::with_capacity(tops.len() * bottoms.len() + one_pieces.len());

    for top in &tops {
        for bottom in &bottoms {
            let mut garments = vec![(*top).clone(), (*bottom).clone()];
            garments.extend(extras.iter().map(|extra| (*extra).clone()));
            combinations.push(OutfitCombination { garments });
        }
    }

    for piece in &one_pieces {
        let mut garments = vec![(*piece).clone()];
        garments.extend(extras.iter().map(|extra| (*extra).clone()));
        combinations.push(OutfitCombination { garments });
    }

    if combinations.is_empty() {
        return Err(InsufficientWardrobe);
    }

    Ok(combinations)
}

fn by_category(wardrobe: &[Garment], category: GarmentCategory) -> Vec<&Garment> {
    wardrobe
        .iter()
        .filter(|garment| garment.category == category)
        .collect()
}
