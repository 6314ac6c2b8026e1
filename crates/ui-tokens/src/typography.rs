//! Typography system for the UI kit
//!
//! Eighteen named text styles grouped into the display/headline/title/body/
//! label tiers plus three custom styles (button text, caption, overline).
//! Styles are pure values; [`TypeScale`] materializes all of them with an
//! accessibility font-scale multiplier applied.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Font Weights
// =============================================================================

/// Font weight values
pub mod weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

// =============================================================================
// Font Families
// =============================================================================

/// Font family references known to the kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Roboto (body and label tiers)
    #[default]
    Roboto,
    /// Inter (display, headline and title tiers)
    Inter,
    /// Poppins (reserved for custom styles)
    Poppins,
}

impl FontFamily {
    /// Font family name as the host platform resolves it
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Roboto => "Roboto",
            FontFamily::Inter => "Inter",
            FontFamily::Poppins => "Poppins",
        }
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// A named immutable text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStyle {
    /// Font family reference
    pub family: FontFamily,
    /// Font weight (400, 500, 700)
    pub weight: u16,
    /// Font size in sp
    pub size: f32,
    /// Line height in sp (absolute, not a multiplier)
    pub line_height: f32,
    /// Letter spacing in sp
    pub letter_spacing: f32,
}

impl TypeStyle {
    /// Create a new text style
    pub fn new(family: FontFamily, weight: u16, size: f32, line_height: f32) -> Self {
        Self {
            family,
            weight,
            size,
            line_height,
            letter_spacing: 0.0,
        }
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Override the font weight (e.g. a bold copy of a base style)
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Override the font size, keeping the rest of the style
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Scale the font size and line height by a multiplier
    pub fn scaled(&self, multiplier: f32) -> Self {
        Self {
            family: self.family,
            weight: self.weight,
            size: self.size * multiplier,
            line_height: self.line_height * multiplier,
            letter_spacing: self.letter_spacing,
        }
    }
}

// =============================================================================
// Type Variants
// =============================================================================

/// The named styles of the type scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypeVariant {
    /// Display large (57sp)
    DisplayLarge,
    /// Display medium (45sp)
    DisplayMedium,
    /// Display small (36sp)
    DisplaySmall,
    /// Headline large (32sp)
    HeadlineLarge,
    /// Headline medium (28sp)
    HeadlineMedium,
    /// Headline small (24sp)
    HeadlineSmall,
    /// Title large (22sp)
    TitleLarge,
    /// Title medium (16sp)
    TitleMedium,
    /// Title small (14sp)
    TitleSmall,
    /// Body large (16sp)
    BodyLarge,
    /// Body medium (14sp) - base body style
    #[default]
    BodyMedium,
    /// Body small (12sp)
    BodySmall,
    /// Label large (14sp)
    LabelLarge,
    /// Label medium (12sp)
    LabelMedium,
    /// Label small (11sp)
    LabelSmall,
    /// Button text (14sp)
    ButtonText,
    /// Caption (12sp)
    Caption,
    /// Overline (10sp, wide tracking)
    Overline,
}

/// Every variant of the scale, in tier order
pub const ALL_VARIANTS: [TypeVariant; 18] = [
    TypeVariant::DisplayLarge,
    TypeVariant::DisplayMedium,
    TypeVariant::DisplaySmall,
    TypeVariant::HeadlineLarge,
    TypeVariant::HeadlineMedium,
    TypeVariant::HeadlineSmall,
    TypeVariant::TitleLarge,
    TypeVariant::TitleMedium,
    TypeVariant::TitleSmall,
    TypeVariant::BodyLarge,
    TypeVariant::BodyMedium,
    TypeVariant::BodySmall,
    TypeVariant::LabelLarge,
    TypeVariant::LabelMedium,
    TypeVariant::LabelSmall,
    TypeVariant::ButtonText,
    TypeVariant::Caption,
    TypeVariant::Overline,
];

impl TypeVariant {
    /// Get the text style for this variant
    pub fn style(&self) -> TypeStyle {
        use FontFamily::{Inter, Roboto};
        match self {
            Self::DisplayLarge => {
                TypeStyle::new(Inter, weight::NORMAL, 57.0, 64.0).with_letter_spacing(-0.25)
            }
            Self::DisplayMedium => TypeStyle::new(Inter, weight::NORMAL, 45.0, 52.0),
            Self::DisplaySmall => TypeStyle::new(Inter, weight::NORMAL, 36.0, 44.0),

            Self::HeadlineLarge => TypeStyle::new(Inter, weight::NORMAL, 32.0, 40.0),
            Self::HeadlineMedium => TypeStyle::new(Inter, weight::NORMAL, 28.0, 36.0),
            Self::HeadlineSmall => TypeStyle::new(Inter, weight::NORMAL, 24.0, 32.0),

            Self::TitleLarge => TypeStyle::new(Inter, weight::MEDIUM, 22.0, 28.0),
            Self::TitleMedium => {
                TypeStyle::new(Inter, weight::MEDIUM, 16.0, 24.0).with_letter_spacing(0.15)
            }
            Self::TitleSmall => {
                TypeStyle::new(Inter, weight::MEDIUM, 14.0, 20.0).with_letter_spacing(0.1)
            }

            Self::BodyLarge => {
                TypeStyle::new(Roboto, weight::NORMAL, 16.0, 24.0).with_letter_spacing(0.5)
            }
            Self::BodyMedium => {
                TypeStyle::new(Roboto, weight::NORMAL, 14.0, 20.0).with_letter_spacing(0.25)
            }
            Self::BodySmall => {
                TypeStyle::new(Roboto, weight::NORMAL, 12.0, 16.0).with_letter_spacing(0.4)
            }

            Self::LabelLarge => {
                TypeStyle::new(Roboto, weight::MEDIUM, 14.0, 20.0).with_letter_spacing(0.1)
            }
            Self::LabelMedium => {
                TypeStyle::new(Roboto, weight::MEDIUM, 12.0, 16.0).with_letter_spacing(0.5)
            }
            Self::LabelSmall => {
                TypeStyle::new(Roboto, weight::MEDIUM, 11.0, 16.0).with_letter_spacing(0.5)
            }

            Self::ButtonText => {
                TypeStyle::new(Inter, weight::MEDIUM, 14.0, 20.0).with_letter_spacing(0.1)
            }
            Self::Caption => {
                TypeStyle::new(Roboto, weight::NORMAL, 12.0, 16.0).with_letter_spacing(0.4)
            }
            Self::Overline => {
                TypeStyle::new(Roboto, weight::MEDIUM, 10.0, 16.0).with_letter_spacing(1.5)
            }
        }
    }
}

// =============================================================================
// Type Scale
// =============================================================================

/// The complete type scale, resolved with a font-scale multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    /// Font scale multiplier (clamped to 0.8 - 1.4)
    scale: f32,
    /// Resolved styles by variant
    styles: HashMap<TypeVariant, TypeStyle>,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TypeScale {
    /// Build the scale with the given multiplier (clamped to 0.8 - 1.4)
    pub fn new(scale: f32) -> Self {
        let clamped = scale.clamp(0.8, 1.4);
        if clamped != scale {
            tracing::trace!(requested = scale, applied = clamped, "font scale clamped");
        }
        let styles = ALL_VARIANTS
            .iter()
            .map(|v| (*v, v.style().scaled(clamped)))
            .collect();
        Self {
            scale: clamped,
            styles,
        }
    }

    /// Get a resolved style by variant
    pub fn get(&self, variant: TypeVariant) -> Option<&TypeStyle> {
        self.styles.get(&variant)
    }

    /// Replace the font scale, re-resolving every style
    pub fn set_scale(&mut self, scale: f32) {
        let clamped = scale.clamp(0.8, 1.4);
        if (clamped - self.scale).abs() > f32::EPSILON {
            *self = Self::new(clamped);
        }
    }

    /// The current multiplier
    pub fn current_scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Variant Style Tests
    // ==========================================================================

    #[test]
    fn test_display_tier() {
        let large = TypeVariant::DisplayLarge.style();
        assert_eq!(large.size, 57.0);
        assert_eq!(large.line_height, 64.0);
        assert_eq!(large.letter_spacing, -0.25);
        assert_eq!(large.family, FontFamily::Inter);

        let medium = TypeVariant::DisplayMedium.style();
        let small = TypeVariant::DisplaySmall.style();
        assert!(small.size < medium.size);
        assert!(medium.size < large.size);
    }

    #[test]
    fn test_title_tier_is_medium_weight() {
        for variant in [
            TypeVariant::TitleLarge,
            TypeVariant::TitleMedium,
            TypeVariant::TitleSmall,
        ] {
            assert_eq!(variant.style().weight, weight::MEDIUM);
            assert_eq!(variant.style().family, FontFamily::Inter);
        }
    }

    #[test]
    fn test_body_tier_uses_roboto() {
        for variant in [
            TypeVariant::BodyLarge,
            TypeVariant::BodyMedium,
            TypeVariant::BodySmall,
        ] {
            let style = variant.style();
            assert_eq!(style.family, FontFamily::Roboto);
            assert_eq!(style.weight, weight::NORMAL);
        }
    }

    #[test]
    fn test_custom_styles() {
        let button = TypeVariant::ButtonText.style();
        assert_eq!(button.size, 14.0);
        assert_eq!(button.weight, weight::MEDIUM);
        assert_eq!(button.family, FontFamily::Inter);

        let caption = TypeVariant::Caption.style();
        assert_eq!(caption.size, 12.0);

        let overline = TypeVariant::Overline.style();
        assert_eq!(overline.size, 10.0);
        assert_eq!(overline.letter_spacing, 1.5);
    }

    #[test]
    fn test_style_builders() {
        let bold_title = TypeVariant::TitleMedium.style().with_weight(weight::BOLD);
        assert_eq!(bold_title.weight, weight::BOLD);
        assert_eq!(bold_title.size, 16.0);

        let resized = TypeVariant::TitleMedium.style().with_size(20.0);
        assert_eq!(resized.size, 20.0);
        assert_eq!(resized.weight, weight::MEDIUM);
    }

    #[test]
    fn test_scaled_keeps_weight_and_spacing() {
        let base = TypeVariant::BodyLarge.style();
        let scaled = base.scaled(1.25);
        assert_eq!(scaled.size, 20.0);
        assert_eq!(scaled.line_height, 30.0);
        assert_eq!(scaled.weight, base.weight);
        assert_eq!(scaled.letter_spacing, base.letter_spacing);
    }

    // ==========================================================================
    // Type Scale Tests
    // ==========================================================================

    #[test]
    fn test_scale_contains_all_variants() {
        let scale = TypeScale::default();
        for variant in ALL_VARIANTS {
            assert!(scale.get(variant).is_some(), "missing {variant:?}");
        }
    }

    #[test]
    fn test_scale_lookup_is_idempotent() {
        let scale = TypeScale::default();
        let first = scale.get(TypeVariant::LabelLarge).cloned();
        let second = scale.get(TypeVariant::LabelLarge).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scale_multiplier() {
        let scale = TypeScale::new(1.2);
        let body = scale.get(TypeVariant::BodyMedium).unwrap();
        assert!((body.size - 14.0 * 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scale_clamping() {
        assert_eq!(TypeScale::new(0.5).current_scale(), 0.8);
        assert_eq!(TypeScale::new(2.0).current_scale(), 1.4);

        let mut scale = TypeScale::default();
        scale.set_scale(3.0);
        assert_eq!(scale.current_scale(), 1.4);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_variant_serialization() {
        let json = serde_json::to_string(&TypeVariant::BodyMedium).unwrap();
        assert_eq!(json, "\"body-medium\"");

        let parsed: TypeVariant = serde_json::from_str("\"label-large\"").unwrap();
        assert_eq!(parsed, TypeVariant::LabelLarge);
    }

    #[test]
    fn test_style_round_trip() {
        let style = TypeVariant::TitleLarge.style();
        let json = serde_json::to_string(&style).unwrap();
        let back: TypeStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
