//! Theme resolution for the UI kit
//!
//! A theme is a resolved [`ColorScheme`] plus the resolved [`TypeScale`].
//! Resolution takes two host-supplied flags and the optional
//! platform-provided dynamic palette, and picks exactly one scheme with the
//! precedence:
//!
//! 1. dynamic palette, when dynamic color is allowed AND the platform
//!    supplied one (dark/light variant chosen by the dark flag)
//! 2. static dark, when the dark flag is set
//! 3. static light
//!
//! Resolution never fails. The resolved theme is immutable; when a flag or
//! the dynamic capability changes, [`ThemeState`] replaces it with a fresh
//! resolution instead of mutating it in place.

use crate::color::{border, brand, shadow, surface, text, Color};
use crate::typography::TypeScale;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Scheme
// =============================================================================

/// A resolved set of color slots for one scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Primary brand color
    pub primary: Color,
    /// Content on primary
    pub on_primary: Color,
    /// Primary container fill
    pub primary_container: Color,
    /// Content on the primary container
    pub on_primary_container: Color,
    /// Secondary brand color
    pub secondary: Color,
    /// Content on secondary
    pub on_secondary: Color,
    /// Secondary container fill
    pub secondary_container: Color,
    /// Content on the secondary container
    pub on_secondary_container: Color,
    /// Tertiary/accent color
    pub tertiary: Color,
    /// Content on tertiary
    pub on_tertiary: Color,
    /// Tertiary container fill
    pub tertiary_container: Color,
    /// Content on the tertiary container
    pub on_tertiary_container: Color,
    /// App background
    pub background: Color,
    /// Content on the background
    pub on_background: Color,
    /// Surface fill
    pub surface: Color,
    /// Content on surfaces
    pub on_surface: Color,
    /// Alternate surface fill
    pub surface_variant: Color,
    /// Content on the alternate surface
    pub on_surface_variant: Color,
    /// Error color
    pub error: Color,
    /// Content on error fills
    pub on_error: Color,
    /// Error container fill
    pub error_container: Color,
    /// Content on the error container
    pub on_error_container: Color,
    /// Default stroke color
    pub outline: Color,
    /// Subtle stroke color
    pub outline_variant: Color,
    /// Scrim/shadow overlay
    pub scrim: Color,
}

/// The static light scheme
pub fn light_scheme() -> ColorScheme {
    ColorScheme {
        primary: brand::PRIMARY.to_string(),
        on_primary: text::ON_PRIMARY.to_string(),
        primary_container: brand::PRIMARY_LIGHT.to_string(),
        on_primary_container: text::ON_BACKGROUND.to_string(),
        secondary: brand::SECONDARY.to_string(),
        on_secondary: text::ON_SECONDARY.to_string(),
        secondary_container: brand::SECONDARY_LIGHT.to_string(),
        on_secondary_container: text::ON_BACKGROUND.to_string(),
        tertiary: brand::ACCENT.to_string(),
        on_tertiary: text::ON_PRIMARY.to_string(),
        tertiary_container: brand::ACCENT_LIGHT.to_string(),
        on_tertiary_container: text::ON_BACKGROUND.to_string(),
        background: surface::BACKGROUND.to_string(),
        on_background: text::ON_BACKGROUND.to_string(),
        surface: surface::SURFACE.to_string(),
        on_surface: text::ON_SURFACE.to_string(),
        surface_variant: surface::SURFACE_VARIANT.to_string(),
        on_surface_variant: text::ON_SURFACE.to_string(),
        error: crate::color::status::ERROR.to_string(),
        on_error: text::ON_PRIMARY.to_string(),
        error_container: crate::color::status::ERROR_LIGHT.to_string(),
        on_error_container: text::ON_BACKGROUND.to_string(),
        outline: border::BORDER.to_string(),
        outline_variant: border::BORDER_LIGHT.to_string(),
        scrim: shadow::SHADOW.to_string(),
    }
}

/// The static dark scheme
pub fn dark_scheme() -> ColorScheme {
    ColorScheme {
        primary: brand::PRIMARY.to_string(),
        on_primary: text::ON_PRIMARY.to_string(),
        primary_container: brand::PRIMARY_DARK.to_string(),
        on_primary_container: text::ON_PRIMARY.to_string(),
        secondary: brand::SECONDARY.to_string(),
        on_secondary: text::ON_SECONDARY.to_string(),
        secondary_container: brand::SECONDARY_DARK.to_string(),
        on_secondary_container: text::ON_SECONDARY.to_string(),
        tertiary: brand::ACCENT.to_string(),
        on_tertiary: text::ON_PRIMARY.to_string(),
        tertiary_container: brand::ACCENT_DARK.to_string(),
        on_tertiary_container: text::ON_PRIMARY.to_string(),
        background: surface::BACKGROUND_DARK.to_string(),
        on_background: text::ON_BACKGROUND_DARK.to_string(),
        surface: surface::SURFACE_DARK.to_string(),
        on_surface: text::ON_SURFACE_DARK.to_string(),
        surface_variant: surface::SURFACE_VARIANT_DARK.to_string(),
        on_surface_variant: text::ON_SURFACE_DARK.to_string(),
        error: crate::color::status::ERROR.to_string(),
        on_error: text::ON_PRIMARY.to_string(),
        error_container: crate::color::status::ERROR_DARK.to_string(),
        on_error_container: text::ON_PRIMARY.to_string(),
        outline: border::BORDER_DARK.to_string(),
        outline_variant: border::BORDER_DARK.to_string(),
        scrim: shadow::SHADOW_DARK.to_string(),
    }
}

// =============================================================================
// Theme Name
// =============================================================================

/// Errors from parsing theme configuration supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The string is not a known theme name
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Static theme name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "light"),
            ThemeName::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

// =============================================================================
// Theme Resolution
// =============================================================================

/// Host-supplied theme selection flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOptions {
    /// Pick the dark token set
    pub dark_theme: bool,
    /// Allow the platform dynamic palette to substitute the static one
    pub dynamic_color: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            dark_theme: false,
            dynamic_color: true,
        }
    }
}

/// A platform-supplied dynamic palette pair.
///
/// Availability of the capability is expressed by the host passing
/// `Some(..)`; the kit treats the palette itself as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicSchemes {
    /// Dynamic light scheme
    pub light: ColorScheme,
    /// Dynamic dark scheme
    pub dark: ColorScheme,
}

/// Which scheme won the resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeSource {
    /// Platform dynamic palette, light variant
    DynamicLight,
    /// Platform dynamic palette, dark variant
    DynamicDark,
    /// Static light scheme
    StaticLight,
    /// Static dark scheme
    StaticDark,
}

impl SchemeSource {
    /// Whether this source is a dark variant
    pub fn is_dark(&self) -> bool {
        matches!(self, SchemeSource::DynamicDark | SchemeSource::StaticDark)
    }

    /// Whether this source came from the platform palette
    pub fn is_dynamic(&self) -> bool {
        matches!(self, SchemeSource::DynamicLight | SchemeSource::DynamicDark)
    }
}

/// A resolved theme: one color scheme plus the resolved type scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Which scheme won
    pub source: SchemeSource,
    /// The resolved color slots
    pub scheme: ColorScheme,
    /// The resolved type scale
    pub typography: TypeScale,
}

impl Theme {
    /// Whether the resolved scheme is dark
    pub fn is_dark(&self) -> bool {
        self.source.is_dark()
    }
}

/// Resolve a theme from the host flags and the optional dynamic palette.
///
/// Always succeeds; with no dynamic palette and no dark flag the static
/// light scheme is the fallback.
pub fn resolve_theme(options: &ThemeOptions, dynamic: Option<&DynamicSchemes>) -> Theme {
    let (source, scheme) = match (options.dynamic_color, dynamic) {
        (true, Some(schemes)) => {
            if options.dark_theme {
                (SchemeSource::DynamicDark, schemes.dark.clone())
            } else {
                (SchemeSource::DynamicLight, schemes.light.clone())
            }
        }
        _ if options.dark_theme => (SchemeSource::StaticDark, dark_scheme()),
        _ => (SchemeSource::StaticLight, light_scheme()),
    };
    tracing::debug!(?source, dark = options.dark_theme, "theme resolved");

    Theme {
        source,
        scheme,
        typography: TypeScale::default(),
    }
}

// =============================================================================
// Theme State
// =============================================================================

fn default_theme() -> Theme {
    resolve_theme(&ThemeOptions::default(), None)
}

/// Owner of the current theme configuration and its resolution.
///
/// Setters re-resolve the theme: the old resolution is replaced wholesale,
/// never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current selection flags
    options: ThemeOptions,
    /// Platform palette, when the capability is present
    dynamic: Option<DynamicSchemes>,
    /// Current font scale multiplier
    font_scale: f32,
    /// Current resolution (rebuilt on deserialization)
    #[serde(skip, default = "default_theme")]
    theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeOptions::default(), None)
    }
}

impl ThemeState {
    /// Resolve an initial theme from the given flags and palette
    pub fn new(options: ThemeOptions, dynamic: Option<DynamicSchemes>) -> Self {
        let theme = resolve_theme(&options, dynamic.as_ref());
        Self {
            options,
            dynamic,
            font_scale: 1.0,
            theme,
        }
    }

    /// The current resolution
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }

    /// The current selection flags
    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    /// Flip the dark flag and re-resolve
    pub fn set_dark_theme(&mut self, dark: bool) {
        self.options.dark_theme = dark;
        self.resolve();
    }

    /// Allow or forbid the dynamic palette and re-resolve
    pub fn set_dynamic_color(&mut self, allowed: bool) {
        self.options.dynamic_color = allowed;
        self.resolve();
    }

    /// Update the platform palette (e.g. after a wallpaper change) and
    /// re-resolve
    pub fn set_dynamic_schemes(&mut self, dynamic: Option<DynamicSchemes>) {
        self.dynamic = dynamic;
        self.resolve();
    }

    /// Set the font scale (clamped to 0.8 - 1.4) and re-resolve the scale
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = scale.clamp(0.8, 1.4);
        self.theme.typography = TypeScale::new(self.font_scale);
    }

    fn resolve(&mut self) {
        let mut theme = resolve_theme(&self.options, self.dynamic.as_ref());
        theme.typography = TypeScale::new(self.font_scale);
        self.theme = theme;
    }
}
