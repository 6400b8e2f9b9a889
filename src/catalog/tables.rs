use serde::Deserialize;

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Color harmony row: a base color and the colors it pairs with, one per scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHarmonyRow {
    pub base_color: String,
    pub complementary: String,
    pub analogous: String,
    pub triadic: String,
    pub neutral_pairing: String,
}

impl ColorHarmonyRow {
    /// True when `color` appears in any of the non-key columns.
    pub fn pairs_with(&self, color: &str) -> bool {
        [
            &self.complementary,
            &self.analogous,
            &self.triadic,
            &self.neutral_pairing,
        ]
        .iter()
        .any(|candidate| candidate.as_str() == color)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ColorRecord {
    #[serde(rename = "Base Color")]
    base_color: String,
    #[serde(rename = "Complementary")]
    complementary: String,
    #[serde(rename = "Analogous")]
    analogous: String,
    #[serde(rename = "Triadic")]
    triadic: String,
    #[serde(rename = "Neutral Pairing")]
    neutral_pairing: String,
}

impl From<ColorRecord> for ColorHarmonyRow {
    fn from(record: ColorRecord) -> Self {
        Self {
            base_color: record.base_color,
            complementary: record.complementary,
            analogous: record.analogous,
            triadic: record.triadic,
            neutral_pairing: record.neutral_pairing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRow {
    pub pattern: String,
    pub compatible_with: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PatternRecord {
    #[serde(rename = "Pattern")]
    pattern: String,
    #[serde(rename = "Compatible With")]
    compatible_with: String,
}

impl From<PatternRecord> for PatternRow {
    fn from(record: PatternRecord) -> Self {
        Self {
            pattern: record.pattern,
            compatible_with: split_list(&record.compatible_with),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRow {
    pub texture: String,
    pub compatible_with: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TextureRecord {
    #[serde(rename = "Texture")]
    texture: String,
    #[serde(rename = "Compatible With")]
    compatible_with: String,
}

impl From<TextureRecord> for TextureRow {
    fn from(record: TextureRecord) -> Self {
        Self {
            texture: record.texture,
            compatible_with: split_list(&record.compatible_with),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureRow {
    pub structure: String,
    pub pairs_with: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StructureRecord {
    #[serde(rename = "Structure")]
    structure: String,
    #[serde(rename = "Pairs With")]
    pairs_with: String,
}

impl From<StructureRecord> for StructureRow {
    fn from(record: StructureRecord) -> Self {
        Self {
            structure: record.structure,
            pairs_with: split_list(&record.pairs_with),
        }
    }
}

/// Skin tone row keyed by a composite descriptor, e.g. "Fair / Cool Undertone".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinToneRow {
    pub descriptor: String,
    pub best_colors: Vec<String>,
    pub accent_colors: Vec<String>,
}

impl SkinToneRow {
    /// All colors the row recommends, best and accent alike.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.best_colors
            .iter()
            .chain(self.accent_colors.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SkinToneRecord {
    #[serde(rename = "Skin Tone / Undertone")]
    descriptor: String,
    #[serde(rename = "Best Colors")]
    best_colors: String,
    #[serde(rename = "Accent Colors")]
    accent_colors: String,
}

impl From<SkinToneRecord> for SkinToneRow {
    fn from(record: SkinToneRecord) -> Self {
        Self {
            descriptor: record.descriptor,
            best_colors: split_list(&record.best_colors),
            accent_colors: split_list(&record.accent_colors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccasionRow {
    pub occasion: String,
    pub recommended_styles: Vec<String>,
    pub color_range: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OccasionRecord {
    #[serde(rename = "Occasion")]
    occasion: String,
    #[serde(rename = "Recommended Styles")]
    recommended_styles: String,
    #[serde(rename = "Color Range")]
    color_range: String,
}

impl From<OccasionRecord> for OccasionRow {
    fn from(record: OccasionRecord) -> Self {
        Self {
            occasion: record.occasion,
            recommended_styles: split_list(&record.recommended_styles),
            color_range: split_list(&record.color_range),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProportionRow {
    pub body_shape: String,
    pub recommended_fits: Vec<String>,
    pub avoid: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProportionRecord {
    #[serde(rename = "Body Shape / Proportion")]
    body_shape: String,
    #[serde(rename = "Recommended Fits")]
    recommended_fits: String,
    #[serde(rename = "Avoid")]
    avoid: String,
}

impl From<ProportionRecord> for ProportionRow {
    fn from(record: ProportionRecord) -> Self {
        Self {
            body_shape: record.body_shape,
            recommended_fits: split_list(&record.recommended_fits),
            avoid: split_list(&record.avoid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRow {
    pub season: String,
    pub recommended_fabrics: Vec<String>,
    pub layering: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct WeatherRecord {
    #[serde(rename = "Season/Weather")]
    season: String,
    #[serde(rename = "Recommended Fabrics")]
    recommended_fabrics: String,
    #[serde(rename = "Layering")]
    layering: String,
}

impl From<WeatherRecord> for WeatherRow {
    fn from(record: WeatherRecord) -> Self {
        Self {
            season: record.season,
            recommended_fabrics: split_list(&record.recommended_fabrics),
            layering: record.layering,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRow {
    pub style: String,
    pub compatible_styles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StyleRecord {
    #[serde(rename = "Style")]
    style: String,
    #[serde(rename = "Compatible Styles")]
    compatible_styles: String,
}

impl From<StyleRecord> for StyleRow {
    fn from(record: StyleRecord) -> Self {
        Self {
            style: record.style,
            compatible_styles: split_list(&record.compatible_styles),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBreakdownRow {
    pub style: String,
    pub key_pieces: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StyleBreakdownRecord {
    #[serde(rename = "Style")]
    style: String,
    #[serde(rename = "Key Pieces")]
    key_pieces: String,
}

impl From<StyleBreakdownRecord> for StyleBreakdownRow {
    fn from(record: StyleBreakdownRecord) -> Self {
        Self {
            style: record.style,
            key_pieces: split_list(&record.key_pieces),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointRow {
    pub rule: String,
    pub points: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct PointRecord {
    #[serde(rename = "Rule")]
    rule: String,
    #[serde(rename = "Points")]
    points: u32,
}

impl From<PointRecord> for PointRow {
    fn from(record: PointRecord) -> Self {
        Self {
            rule: record.rule,
            points: record.points,
        }
    }
}

/// Per-rule bonuses cooked from the point system table at load time.
///
/// A rule missing from the document keeps its default bonus, the same
/// degrade-silently policy the scoring rules apply to their own lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSchedule {
    pub skin_tone: u32,
    pub color_harmony: u32,
    pub pattern: u32,
    pub texture: u32,
    pub structure: u32,
    pub weather: u32,
    pub body_fit: u32,
    pub occasion: u32,
}

impl Default for PointSchedule {
    fn default() -> Self {
        Self {
            skin_tone: 8,
            color_harmony: 10,
            pattern: 5,
            texture: 5,
            structure: 8,
            weather: 5,
            body_fit: 10,
            occasion: 15,
        }
    }
}

impl PointSchedule {
    pub(super) fn from_rows(rows: &[PointRow]) -> Self {
        let mut schedule = Self::default();
        for row in rows {
            let slot = match row.rule.as_str() {
                "Skin tone match" => &mut schedule.skin_tone,
                "Color harmony" => &mut schedule.color_harmony,
                "Pattern compatibility" => &mut schedule.pattern,
                "Texture compatibility" => &mut schedule.texture,
                "Structure harmony" => &mut schedule.structure,
                "Weather-appropriate fabric" => &mut schedule.weather,
                "Body fit match" => &mut schedule.body_fit,
                "Occasion color match" => &mut schedule.occasion,
                _ => continue,
            };
            *slot = row.points;
        }
        schedule
    }

    /// Sum of every bonus: the highest score any combination can reach.
    pub fn maximum_score(&self) -> u32 {
        self.skin_tone
            + self.color_harmony
            + self.pattern
            + self.texture
            + self.structure
            + self.weather
            + self.body_fit
            + self.occasion
    }
}
