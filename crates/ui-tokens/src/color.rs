//! Color palette for the UI kit
//!
//! Every color is a named, immutable constant. Components never invent
//! colors at runtime; they pick constants from this module (directly for
//! theme-invariant roles such as the neutral scale and status colors, or
//! through the resolved [`crate::theme::ColorScheme`] for slots that flip
//! between light and dark).

/// A color represented as an RGB or RGBA hex string
/// (e.g., "#2196F3" or "#0000001A")
pub type Color = String;

// =============================================================================
// Brand Colors
// =============================================================================

/// Primary and secondary brand colors plus the accent family
pub mod brand {
    /// Primary brand color (blue)
    pub const PRIMARY: &str = "#2196F3";
    /// Primary variant
    pub const PRIMARY_VARIANT: &str = "#1976D2";
    /// Light primary (containers on light surfaces)
    pub const PRIMARY_LIGHT: &str = "#64B5F6";
    /// Dark primary (containers on dark surfaces)
    pub const PRIMARY_DARK: &str = "#0D47A1";

    /// Secondary brand color (teal)
    pub const SECONDARY: &str = "#03DAC6";
    /// Secondary variant
    pub const SECONDARY_VARIANT: &str = "#018786";
    /// Light secondary
    pub const SECONDARY_LIGHT: &str = "#4DD0E1";
    /// Dark secondary
    pub const SECONDARY_DARK: &str = "#00695C";

    /// Accent color (deep orange)
    pub const ACCENT: &str = "#FF5722";
    /// Light accent
    pub const ACCENT_LIGHT: &str = "#FF8A65";
    /// Dark accent
    pub const ACCENT_DARK: &str = "#D84315";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Surface & Text Colors
// =============================================================================

/// Background and surface fills for both schemes
pub mod surface {
    /// App background (light)
    pub const BACKGROUND: &str = "#FAFAFA";
    /// App background (dark)
    pub const BACKGROUND_DARK: &str = "#121212";
    /// Surface fill (light)
    pub const SURFACE: &str = "#FFFFFF";
    /// Surface fill (dark)
    pub const SURFACE_DARK: &str = "#1E1E1E";
    /// Alternate surface fill (light)
    pub const SURFACE_VARIANT: &str = "#F5F5F5";
    /// Alternate surface fill (dark)
    pub const SURFACE_VARIANT_DARK: &str = "#2C2C2C";
}

/// Foreground colors painted over the matching fills
pub mod text {
    /// Content on primary fills
    pub const ON_PRIMARY: &str = "#FFFFFF";
    /// Content on secondary fills
    pub const ON_SECONDARY: &str = "#FFFFFF";
    /// Content on the light background
    pub const ON_BACKGROUND: &str = "#212121";
    /// Content on the dark background
    pub const ON_BACKGROUND_DARK: &str = "#FFFFFF";
    /// Content on light surfaces
    pub const ON_SURFACE: &str = "#212121";
    /// Content on dark surfaces
    pub const ON_SURFACE_DARK: &str = "#FFFFFF";
}

// =============================================================================
// Status Colors
// =============================================================================

/// Status colors, identical in both schemes
pub mod status {
    /// Success (green)
    pub const SUCCESS: &str = "#4CAF50";
    /// Light success
    pub const SUCCESS_LIGHT: &str = "#81C784";
    /// Dark success
    pub const SUCCESS_DARK: &str = "#388E3C";

    /// Warning (orange)
    pub const WARNING: &str = "#FF9800";
    /// Light warning
    pub const WARNING_LIGHT: &str = "#FFB74D";
    /// Dark warning
    pub const WARNING_DARK: &str = "#F57C00";

    /// Error (red)
    pub const ERROR: &str = "#F44336";
    /// Light error
    pub const ERROR_LIGHT: &str = "#E57373";
    /// Dark error
    pub const ERROR_DARK: &str = "#D32F2F";

    /// Info (blue)
    pub const INFO: &str = "#2196F3";
    /// Light info
    pub const INFO_LIGHT: &str = "#64B5F6";
    /// Dark info
    pub const INFO_DARK: &str = "#1976D2";
}

// =============================================================================
// Neutral Scale
// =============================================================================

/// Gray scale from near-white (50) to near-black (900)
pub mod neutral {
    /// Lightest neutral
    pub const NEUTRAL_50: &str = "#FAFAFA";
    /// Very light neutral
    pub const NEUTRAL_100: &str = "#F5F5F5";
    /// Light neutral
    pub const NEUTRAL_200: &str = "#EEEEEE";
    /// Light-medium neutral
    pub const NEUTRAL_300: &str = "#E0E0E0";
    /// Medium-light neutral
    pub const NEUTRAL_400: &str = "#BDBDBD";
    /// Base neutral
    pub const NEUTRAL_500: &str = "#9E9E9E";
    /// Medium-dark neutral
    pub const NEUTRAL_600: &str = "#757575";
    /// Dark neutral
    pub const NEUTRAL_700: &str = "#616161";
    /// Very dark neutral
    pub const NEUTRAL_800: &str = "#424242";
    /// Darkest neutral
    pub const NEUTRAL_900: &str = "#212121";
}

// =============================================================================
// Borders & Shadows
// =============================================================================

/// Stroke colors
pub mod border {
    /// Default border (light scheme)
    pub const BORDER: &str = "#E0E0E0";
    /// Default border (dark scheme)
    pub const BORDER_DARK: &str = "#424242";
    /// Subtle border
    pub const BORDER_LIGHT: &str = "#F0F0F0";
}

/// Translucent shadow fills
pub mod shadow {
    /// Shadow at ~10% black
    pub const SHADOW: &str = "#0000001A";
    /// Shadow at ~20% black
    pub const SHADOW_DARK: &str = "#00000033";
}

// =============================================================================
// Color Utilities
// =============================================================================

/// Parse a hex color string into RGBA components.
///
/// Accepts `#RRGGBB` and `#RRGGBBAA` (the alpha defaults to 255).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    let a = if hex.len() == 8 {
        u8::from_str_radix(&hex[6..8], 16).ok()?
    } else {
        255
    };
    Some((r, g, b, a))
}

/// Convert RGB components to a hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> Color {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Overlay an alpha fraction onto a color, producing `#RRGGBBAA`.
///
/// The fraction is clamped to [0.0, 1.0]. A string that does not parse as
/// a hex color is returned unchanged.
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    match parse_hex(hex) {
        Some((r, g, b, _)) => {
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
        None => hex.to_string(),
    }
}
