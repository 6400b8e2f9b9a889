//! The rule catalog: eleven static compatibility tables loaded once at
//! startup and read-only for the process lifetime.
//!
//! Single-value keys (base color, pattern, texture, structure, style,
//! point rule) match exactly; composite descriptors (skin tone, occasion,
//! season/weather, body shape) match when the trigger appears inside the
//! row key. A miss is never an error: the corresponding rule simply does
//! not apply.

mod tables;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

pub use tables::{
    ColorHarmonyRow, OccasionRow, PatternRow, PointRow, PointSchedule, ProportionRow, SkinToneRow,
    StructureRow, StyleBreakdownRow, StyleRow, TextureRow, WeatherRow,
};

use tables::{
    ColorRecord, OccasionRecord, PatternRecord, PointRecord, ProportionRecord, SkinToneRecord,
    StructureRecord, StyleBreakdownRecord, StyleRecord, TextureRecord, WeatherRecord,
};

const COLOR_TABLE: &str = "ColorCompatibility.csv";
const PATTERN_TABLE: &str = "PatternCompatibility.csv";
const TEXTURE_TABLE: &str = "TextureCompatibility.csv";
const STRUCTURE_TABLE: &str = "StructureCompatibility.csv";
const SKIN_TONE_TABLE: &str = "SkinToneCompatibility.csv";
const OCCASION_TABLE: &str = "OccasionStyleCompatibility.csv";
const PROPORTION_TABLE: &str = "ProportionCompatibility.csv";
const WEATHER_TABLE: &str = "WeatherCompatibility.csv";
const STYLE_TABLE: &str = "StyleCompatibility.csv";
const STYLE_BREAKDOWN_TABLE: &str = "Stylebreakdown.csv";
const POINT_TABLE: &str = "Pointsystem.csv";

/// Startup-time failure loading a rule table. Never raised during scoring.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read rule table {name}: {source}")]
    Read {
        name: &'static str,
        source: std::io::Error,
    },
    #[error("failed to parse rule table {name}: {source}")]
    Parse {
        name: &'static str,
        source: csv::Error,
    },
}

/// The eleven compatibility tables, fully parsed, with comma-delimited
/// list columns split once at load.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    color: Vec<ColorHarmonyRow>,
    pattern: Vec<PatternRow>,
    texture: Vec<TextureRow>,
    structure: Vec<StructureRow>,
    skin_tone: Vec<SkinToneRow>,
    occasion: Vec<OccasionRow>,
    proportion: Vec<ProportionRow>,
    weather: Vec<WeatherRow>,
    style: Vec<StyleRow>,
    style_breakdown: Vec<StyleBreakdownRow>,
    points: Vec<PointRow>,
    schedule: PointSchedule,
}

fn parse_table<Record, Row>(name: &'static str, data: &str) -> Result<Vec<Row>, CatalogError>
where
    Record: DeserializeOwned + Into<Row>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize::<Record>() {
        let record = record.map_err(|source| CatalogError::Parse { name, source })?;
        rows.push(record.into());
    }

    Ok(rows)
}

fn read_table<Record, Row>(dir: &Path, name: &'static str) -> Result<Vec<Row>, CatalogError>
where
    Record: DeserializeOwned + Into<Row>,
{
    let data =
        fs::read_to_string(dir.join(name)).map_err(|source| CatalogError::Read { name, source })?;
    parse_table::<Record, Row>(name, &data)
}

impl RuleCatalog {
    /// Parse the documents embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::assemble(
            parse_table::<ColorRecord, _>(COLOR_TABLE, include_str!("../../data/ColorCompatibility.csv"))?,
            parse_table::<PatternRecord, _>(PATTERN_TABLE, include_str!("../../data/PatternCompatibility.csv"))?,
            parse_table::<TextureRecord, _>(TEXTURE_TABLE, include_str!("../../data/TextureCompatibility.csv"))?,
            parse_table::<StructureRecord, _>(STRUCTURE_TABLE, include_str!("../../data/StructureCompatibility.csv"))?,
            parse_table::<SkinToneRecord, _>(SKIN_TONE_TABLE, include_str!("../../data/SkinToneCompatibility.csv"))?,
            parse_table::<OccasionRecord, _>(OCCASION_TABLE, include_str!("../../data/OccasionStyleCompatibility.csv"))?,
            parse_table::<ProportionRecord, _>(PROPORTION_TABLE, include_str!("../../data/ProportionCompatibility.csv"))?,
            parse_table::<WeatherRecord, _>(WEATHER_TABLE, include_str!("../../data/WeatherCompatibility.csv"))?,
            parse_table::<StyleRecord, _>(STYLE_TABLE, include_str!("../../data/StyleCompatibility.csv"))?,
            parse_table::<StyleBreakdownRecord, _>(STYLE_BREAKDOWN_TABLE, include_str!("../../data/Stylebreakdown.csv"))?,
            parse_table::<PointRecord, _>(POINT_TABLE, include_str!("../../data/Pointsystem.csv"))?,
        ))
    }

    /// Load the same eleven documents from an operator-supplied directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        Ok(Self::assemble(
            read_table::<ColorRecord, _>(dir, COLOR_TABLE)?,
            read_table::<PatternRecord, _>(dir, PATTERN_TABLE)?,
            read_table::<TextureRecord, _>(dir, TEXTURE_TABLE)?,
            read_table::<StructureRecord, _>(dir, STRUCTURE_TABLE)?,
            read_table::<SkinToneRecord, _>(dir, SKIN_TONE_TABLE)?,
            read_table::<OccasionRecord, _>(dir, OCCASION_TABLE)?,
            read_table::<ProportionRecord, _>(dir, PROPORTION_TABLE)?,
            read_table::<WeatherRecord, _>(dir, WEATHER_TABLE)?,
            read_table::<StyleRecord, _>(dir, STYLE_TABLE)?,
            read_table::<StyleBreakdownRecord, _>(dir, STYLE_BREAKDOWN_TABLE)?,
            read_table::<PointRecord, _>(dir, POINT_TABLE)?,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        color: Vec<ColorHarmonyRow>,
        pattern: Vec<PatternRow>,
        texture: Vec<TextureRow>,
        structure: Vec<StructureRow>,
        skin_tone: Vec<SkinToneRow>,
        occasion: Vec<OccasionRow>,
        proportion: Vec<ProportionRow>,
        weather: Vec<WeatherRow>,
        style: Vec<StyleRow>,
        style_breakdown: Vec<StyleBreakdownRow>,
        points: Vec<PointRow>,
    ) -> Self {
        let schedule = PointSchedule::from_rows(&points);
        Self {
            color,
            pattern,
            texture,
            structure,
            skin_tone,
            occasion,
            proportion,
            weather,
            style,
            style_breakdown,
            points,
            schedule,
        }
    }

    pub fn color_harmony(&self, base_color: &str) -> Option<&ColorHarmonyRow> {
        self.color.iter().find(|row| row.base_color == base_color)
    }

    pub fn pattern_compatibility(&self, pattern: &str) -> Option<&PatternRow> {
        self.pattern.iter().find(|row| row.pattern == pattern)
    }

    pub fn texture_compatibility(&self, texture: &str) -> Option<&TextureRow> {
        self.texture.iter().find(|row| row.texture == texture)
    }

    pub fn structure_profile(&self, structure: &str) -> Option<&StructureRow> {
        self.structure.iter().find(|row| row.structure == structure)
    }

    /// Composite-descriptor match: the trigger must appear inside the row key.
    pub fn skin_tone(&self, tone: &str) -> Option<&SkinToneRow> {
        if tone.is_empty() {
            return None;
        }
        self.skin_tone
            .iter()
            .find(|row| row.descriptor.contains(tone))
    }

    pub fn occasion(&self, occasion: &str) -> Option<&OccasionRow> {
        if occasion.is_empty() {
            return None;
        }
        self.occasion.iter().find(|row| row.occasion.contains(occasion))
    }

    pub fn body_shape(&self, shape: &str) -> Option<&ProportionRow> {
        if shape.is_empty() {
            return None;
        }
        self.proportion
            .iter()
            .find(|row| row.body_shape.contains(shape))
    }

    pub fn weather(&self, weather: &str) -> Option<&WeatherRow> {
        if weather.is_empty() {
            return None;
        }
        self.weather.iter().find(|row| row.season.contains(weather))
    }

    pub fn style_compatibility(&self, style: &str) -> Option<&StyleRow> {
        self.style.iter().find(|row| row.style == style)
    }

    pub fn style_breakdown(&self, style: &str) -> Option<&StyleBreakdownRow> {
        self.style_breakdown.iter().find(|row| row.style == style)
    }

    pub fn points(&self, rule: &str) -> Option<u32> {
        self.points
            .iter()
            .find(|row| row.rule == rule)
            .map(|row| row.points)
    }

    pub fn point_schedule(&self) -> &PointSchedule {
        &self.schedule
    }

    /// Row keys for the context pickers, in document order.
    pub fn skin_tone_options(&self) -> Vec<&str> {
        self.skin_tone.iter().map(|row| row.descriptor.as_str()).collect()
    }

    pub fn occasion_options(&self) -> Vec<&str> {
        self.occasion.iter().map(|row| row.occasion.as_str()).collect()
    }

    pub fn weather_options(&self) -> Vec<&str> {
        self.weather.iter().map(|row| row.season.as_str()).collect()
    }

    pub fn body_shape_options(&self) -> Vec<&str> {
        self.proportion.iter().map(|row| row.body_shape.as_str()).collect()
    }

    pub fn style_options(&self) -> Vec<&str> {
        self.style.iter().map(|row| row.style.as_str()).collect()
    }
}
