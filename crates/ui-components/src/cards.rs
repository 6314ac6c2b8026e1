//! Container cards
//!
//! Pure layout wrappers: they impose a fill, corner radius, elevation and
//! internal padding around caller-supplied child content, and expose no
//! interaction contract of their own. Clicks belong to children or to the
//! composite cards built on top (see [`crate::orders`], [`crate::jobs`]).

use serde::{Deserialize, Serialize};
use ui_tokens::color::Color;
use ui_tokens::theme::Theme;

/// Resolved visual attributes for a card surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Container fill
    pub container: Color,
    /// Corner radius
    pub corner_radius: f32,
    /// Drop-shadow elevation (0 = flat)
    pub elevation: f32,
    /// Internal padding on all sides
    pub padding: f32,
}

/// Elevated container card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PrimaryCard;

impl PrimaryCard {
    /// Create a primary card
    pub fn new() -> Self {
        Self
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        CardStyles {
            container: theme.scheme.surface.clone(),
            corner_radius: 16.0,
            elevation: 4.0,
            padding: 16.0,
        }
    }
}

/// Flat container card: a surface fill stands in for a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutlinedCard;

impl OutlinedCard {
    /// Create an outlined card
    pub fn new() -> Self {
        Self
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> CardStyles {
        CardStyles {
            container: theme.scheme.surface.clone(),
            corner_radius: 12.0,
            elevation: 0.0,
            padding: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_tokens::theme::{resolve_theme, ThemeOptions};

    #[test]
    fn test_primary_card_is_elevated() {
        let theme = resolve_theme(&ThemeOptions::default(), None);
        let styles = PrimaryCard::new().computed_styles(&theme);
        assert_eq!(styles.elevation, 4.0);
        assert_eq!(styles.corner_radius, 16.0);
        assert_eq!(styles.padding, 16.0);
        assert_eq!(styles.container, theme.scheme.surface);
    }

    #[test]
    fn test_outlined_card_is_flat() {
        let theme = resolve_theme(&ThemeOptions::default(), None);
        let styles = OutlinedCard::new().computed_styles(&theme);
        assert_eq!(styles.elevation, 0.0);
        assert_eq!(styles.corner_radius, 12.0);
        // Same padding contract as the primary card
        assert_eq!(styles.padding, 16.0);
    }

    #[test]
    fn test_cards_follow_the_scheme_surface() {
        let dark = resolve_theme(
            &ThemeOptions {
                dark_theme: true,
                dynamic_color: false,
            },
            None,
        );
        let styles = PrimaryCard::new().computed_styles(&dark);
        assert_eq!(styles.container, "#1E1E1E");
    }
}
