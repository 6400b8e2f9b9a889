use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalogued garments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GarmentId(pub String);

/// Identifies whose wardrobe a document belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl OwnerId {
    /// Alphanumeric projection used for storage document names.
    pub fn sanitized(&self) -> String {
        self.0
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }
}

/// Garment category, derived once from the item name at intake and
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarmentCategory {
    Top,
    Bottom,
    OnePiece,
    Outerwear,
    Accessory,
    Footwear,
    Other,
}

const CATEGORY_KEYWORDS: &[(GarmentCategory, &[&str])] = &[
    (GarmentCategory::Top, &["shirt", "t-shirt", "blouse", "hoodie"]),
    (GarmentCategory::Bottom, &["jeans", "skirt", "pants", "leggings"]),
    (GarmentCategory::Outerwear, &["jacket", "coat", "blazer"]),
    (GarmentCategory::OnePiece, &["dress", "jumpsuit"]),
    (GarmentCategory::Footwear, &["shoes", "boots"]),
    (GarmentCategory::Accessory, &["hat", "scarf", "belt"]),
];

impl GarmentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            GarmentCategory::Top => "top",
            GarmentCategory::Bottom => "bottom",
            GarmentCategory::OnePiece => "one_piece",
            GarmentCategory::Outerwear => "outerwear",
            GarmentCategory::Accessory => "accessory",
            GarmentCategory::Footwear => "footwear",
            GarmentCategory::Other => "other",
        }
    }

    /// Keyword detection over the lowercased item name; first listed
    /// category with a matching keyword wins, otherwise `Other`.
    pub fn from_item_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return *category;
            }
        }
        Self::Other
    }
}

/// Fixed option sets for the five garment attributes. Intake rejects
/// anything outside these lists.
pub const COLOR_OPTIONS: &[&str] = &["Red", "Blue", "Green", "Black", "White", "Yellow"];
pub const PATTERN_OPTIONS: &[&str] = &["Solid", "Floral", "Striped", "Polka Dot", "Checked"];
pub const FABRIC_OPTIONS: &[&str] = &["Smooth", "Rough", "Soft", "Glossy", "Matte"];
pub const TEXTURE_OPTIONS: &[&str] = &[
    "Cotton",
    "Silk",
    "Denim",
    "Linen",
    "Wool",
    "Polyester",
    "Nylon",
    "Rayon",
    "Satin",
    "Chiffon",
    "Georgette",
];
pub const STRUCTURE_OPTIONS: &[&str] = &["Fitted", "Loose", "Structured"];

/// One catalogued clothing item. Immutable once saved; the only write
/// after creation is whole-record deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garment {
    pub id: GarmentId,
    pub name: String,
    pub category: GarmentCategory,
    pub color: String,
    pub pattern: String,
    pub fabric: String,
    pub texture: String,
    pub structure: String,
    /// Opaque reference owned by the image storage collaborator.
    pub image_ref: String,
}

/// Session-scoped context selection. An empty field is unset: the
/// corresponding rule dimension does not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub skin_tone: String,
    pub occasion: String,
    pub weather: String,
    pub body_type: String,
}

impl UserContext {
    pub fn is_complete(&self) -> bool {
        !self.skin_tone.is_empty()
            && !self.occasion.is_empty()
            && !self.weather.is_empty()
            && !self.body_type.is_empty()
    }
}
