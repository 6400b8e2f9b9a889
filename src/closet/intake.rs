use serde::Deserialize;

use super::domain::{
    Garment, GarmentCategory, GarmentId, COLOR_OPTIONS, FABRIC_OPTIONS, PATTERN_OPTIONS,
    STRUCTURE_OPTIONS, TEXTURE_OPTIONS,
};

/// Raw upload payload before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GarmentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub fabric: String,
    #[serde(default)]
    pub texture: String,
    #[serde(default)]
    pub structure: String,
    #[serde(default)]
    pub image_ref: String,
}

/// Validation errors raised when a draft cannot become a garment.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("unknown {field} option '{value}'")]
    UnknownOption { field: &'static str, value: String },
}

/// Validate a draft into a garment, deriving the category from the name.
pub fn garment_from_draft(id: GarmentId, draft: GarmentDraft) -> Result<Garment, IntakeError> {
    let GarmentDraft {
        name,
        color,
        pattern,
        fabric,
        texture,
        structure,
        image_ref,
    } = draft;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(IntakeError::MissingField("name"));
    }
    if image_ref.trim().is_empty() {
        return Err(IntakeError::MissingField("image_ref"));
    }

    let color = required_option("color", color, COLOR_OPTIONS)?;
    let pattern = required_option("pattern", pattern, PATTERN_OPTIONS)?;
    let fabric = required_option("fabric", fabric, FABRIC_OPTIONS)?;
    let texture = required_option("texture", texture, TEXTURE_OPTIONS)?;
    let structure = required_option("structure", structure, STRUCTURE_OPTIONS)?;

    let category = GarmentCategory::from_item_name(&name);

    Ok(Garment {
        id,
        name,
        category,
        color,
        pattern,
        fabric,
        texture,
        structure,
        image_ref,
    })
}

fn required_option(
    field: &'static str,
    value: String,
    options: &[&str],
) -> Result<String, IntakeError> {
    if value.is_empty() {
        return Err(IntakeError::MissingField(field));
    }
    if !options.contains(&value.as_str()) {
        return Err(IntakeError::UnknownOption { field, value });
    }
    Ok(value)
}
