use crate::catalog::RuleCatalog;
use crate::closet::{Garment, GarmentCategory, UserContext};

fn selected(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Score one combination against the rule catalog and context.
///
/// Eight independently gated bonuses, all additive, evaluated in a fixed
/// order that also fixes the order of the reason strings. Context-gated
/// rules are skipped while their context field is unset; a missing
/// catalog row or a garment without the attribute contributes nothing.
pub(crate) fn score_combination(
    garments: &[Garment],
    context: &UserContext,
    catalog: &RuleCatalog,
) -> (u32, Vec<String>) {
    let points = catalog.point_schedule();
    let mut score = 0u32;
    let mut reasons = Vec::new();

    // Skin tone is judged against the primary garment: the first top or
    // one-piece, falling back to whatever comes first.
    let primary = garments
        .iter()
        .find(|garment| {
            matches!(
                garment.category,
                GarmentCategory::Top | GarmentCategory::OnePiece
            )
        })
        .or_else(|| garments.first());

    if let (Some(tone), Some(primary)) = (selected(&context.skin_tone), primary) {
        if !primary.color.is_empty() {
            if let Some(row) = catalog.skin_tone(tone) {
                if row.colors().any(|color| color == primary.color) {
                    score += points.skin_tone;
                    reasons.push("Skin tone matched".to_string());
                }
            }
        }
    }

    // Color harmony: count, for every garment, how many other garments
    // wear a color its row lists; any positive count awards the flat
    // bonus exactly once.
    let mut harmony_pairs = 0usize;
    for (index, garment) in garments.iter().enumerate() {
        let Some(row) = catalog.color_harmony(&garment.color) else {
            continue;
        };
        harmony_pairs += garments
            .iter()
            .enumerate()
            .filter(|(other_index, other)| *other_index != index && row.pairs_with(&other.color))
            .count();
    }
    if harmony_pairs > 0 {
        score += points.color_harmony;
        reasons.push("Color harmony detected".to_string());
    }

    // Pattern compatibility: some other garment's pattern appears in
    // this garment's compatibility list.
    let mut pattern_matched = false;
    for (index, garment) in garments.iter().enumerate() {
        if garment.pattern.is_empty() {
            continue;
        }
        let Some(row) = catalog.pattern_compatibility(&garment.pattern) else {
            continue;
        };
        pattern_matched = garments.iter().enumerate().any(|(other_index, other)| {
            other_index != index
                && !other.pattern.is_empty()
                && row.compatible_with.iter().any(|entry| entry == &other.pattern)
        });
        if pattern_matched {
            break;
        }
    }
    if pattern_matched {
        score += points.pattern;
        reasons.push("Pattern compatibility matched".to_string());
    }

    // Texture compatibility: same shape as the pattern rule.
    let mut texture_matched = false;
    for (index, garment) in garments.iter().enumerate() {
        if garment.texture.is_empty() {
            continue;
        }
        let Some(row) = catalog.texture_compatibility(&garment.texture) else {
            continue;
        };
        texture_matched = garments.iter().enumerate().any(|(other_index, other)| {
            other_index != index
                && !other.texture.is_empty()
                && row.compatible_with.iter().any(|entry| entry == &other.texture)
        });
        if texture_matched {
            break;
        }
    }
    if texture_matched {
        score += points.texture;
        reasons.push("Texture compatibility matched".to_string());
    }

    // Structure: a distinct-structure count, positive whenever at least
    // one garment carries a structure value at all.
    let mut distinct_structures: Vec<&str> = Vec::new();
    for garment in garments {
        if garment.structure.is_empty() {
            continue;
        }
        if !distinct_structures.contains(&garment.structure.as_str()) {
            distinct_structures.push(garment.structure.as_str());
        }
    }
    if !distinct_structures.is_empty() {
        score += points.structure;
        reasons.push("Structure harmony".to_string());
    }

    // Weather-appropriate fabric.
    if let Some(weather) = selected(&context.weather) {
        if let Some(row) = catalog.weather(weather) {
            let fabric_match = garments.iter().any(|garment| {
                !garment.fabric.is_empty()
                    && row
                        .recommended_fabrics
                        .iter()
                        .any(|fabric| fabric == &garment.fabric)
            });
            if fabric_match {
                score += points.weather;
                reasons.push("Weather-appropriate fabrics".to_string());
            }
        }
    }

    // Body fit, judged on garment structure.
    if let Some(body_type) = selected(&context.body_type) {
        if let Some(row) = catalog.body_shape(body_type) {
            let fit_match = garments.iter().any(|garment| {
                !garment.structure.is_empty()
                    && row
                        .recommended_fits
                        .iter()
                        .any(|fit| fit == &garment.structure)
            });
            if fit_match {
                score += points.body_fit;
                reasons.push("Body fit matched".to_string());
            }
        }
    }

    // Occasion, judged on garment color.
    if let Some(occasion) = selected(&context.occasion) {
        if let Some(row) = catalog.occasion(occasion) {
            let color_match = garments.iter().any(|garment| {
                !garment.color.is_empty()
                    && row.color_range.iter().any(|color| color == &garment.color)
            });
            if color_match {
                score += points.occasion;
                reasons.push("Color matches occasion".to_string());
            }
        }
    }

    (score, reasons)
}
