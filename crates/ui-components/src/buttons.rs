//! The button family
//!
//! Primary/secondary/text-only buttons, the three size tiers with their
//! sub-variants, the filter-chip toggle, the cart action button, and the
//! social-login button. A button's only observable effect is the single
//! [`UiEvent`] its `press()` returns per activation; disabled and loading
//! buttons return nothing.

use crate::{EventHandler, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{brand, neutral, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::{weight, TypeStyle, TypeVariant};

// =============================================================================
// Computed Styles
// =============================================================================

/// Resolved visual attributes for a button surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Container fill ("transparent" for text/outlined surfaces)
    pub container: Color,
    /// Label/icon color
    pub content: Color,
    /// Stroke color, for outlined surfaces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
    /// Fixed height, when the variant imposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Corner radius
    pub corner_radius: f32,
    /// Horizontal content padding
    pub padding_horizontal: f32,
    /// Vertical content padding
    pub padding_vertical: f32,
    /// Label text style
    pub text: TypeStyle,
    /// Whether the button stretches to the available width
    pub fill_width: bool,
}

/// Resolved attributes of the indeterminate spinner shown while loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinnerStyles {
    /// Spinner diameter
    pub size: f32,
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub stroke_width: f32,
}

const TRANSPARENT: &str = "transparent";

fn filled_colors(container: &str, enabled: bool) -> (Color, Color) {
    if enabled {
        (container.to_string(), brand::WHITE.to_string())
    } else {
        (
            neutral::NEUTRAL_300.to_string(),
            neutral::NEUTRAL_600.to_string(),
        )
    }
}

fn outlined_content(content: &str, enabled: bool) -> Color {
    if enabled {
        content.to_string()
    } else {
        neutral::NEUTRAL_600.to_string()
    }
}

// =============================================================================
// Primary Button
// =============================================================================

/// Filled brand-colored button with an optional loading spinner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryButton {
    /// Label text
    pub label: String,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Whether the button accepts activation
    pub enabled: bool,
    /// Whether the label is replaced by a spinner
    pub loading: bool,
}

impl PrimaryButton {
    /// Create a primary button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            enabled: true,
            loading: false,
        }
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the loading flag
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether an activation would produce an event.
    ///
    /// Loading always wins over `enabled`.
    pub fn is_interactive(&self) -> bool {
        self.enabled && !self.loading
    }

    /// Whether the label is currently replaced by the spinner
    pub fn shows_spinner(&self) -> bool {
        self.loading
    }

    /// One user activation. Emits at most one event; a no-op while
    /// disabled or loading.
    pub fn press(&self) -> Option<UiEvent> {
        if !self.is_interactive() {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let (container, content) = if self.is_interactive() {
            (theme.scheme.primary.clone(), brand::WHITE.to_string())
        } else {
            (
                neutral::NEUTRAL_300.to_string(),
                neutral::NEUTRAL_600.to_string(),
            )
        };
        ButtonStyles {
            container,
            content,
            border: None,
            height: Some(48.0),
            corner_radius: 12.0,
            padding_horizontal: 24.0,
            padding_vertical: 12.0,
            text: TypeVariant::LabelLarge.style(),
            fill_width: true,
        }
    }

    /// Spinner attributes while loading
    pub fn spinner(&self) -> Option<SpinnerStyles> {
        self.loading.then(|| SpinnerStyles {
            size: 20.0,
            color: brand::WHITE.to_string(),
            stroke_width: 2.0,
        })
    }
}

// =============================================================================
// Secondary Button
// =============================================================================

/// Outlined button with brand-colored text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryButton {
    /// Label text
    pub label: String,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Whether the button accepts activation
    pub enabled: bool,
}

impl SecondaryButton {
    /// Create a secondary button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            enabled: true,
        }
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        ButtonStyles {
            container: TRANSPARENT.to_string(),
            content: outlined_content(&theme.scheme.primary, self.enabled),
            border: Some(theme.scheme.outline.clone()),
            height: Some(48.0),
            corner_radius: 12.0,
            padding_horizontal: 24.0,
            padding_vertical: 12.0,
            text: TypeVariant::LabelLarge.style(),
            fill_width: true,
        }
    }
}

// =============================================================================
// Text-Only Button
// =============================================================================

/// Transparent button with customizable text color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOnlyButton {
    /// Label text
    pub label: String,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Whether the button accepts activation
    pub enabled: bool,
    /// Text color override (defaults to the primary color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
}

impl TextOnlyButton {
    /// Create a text button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            enabled: true,
            text_color: None,
        }
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Override the text color
    pub fn text_color(mut self, color: impl Into<Color>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let content = if self.enabled {
            self.text_color
                .clone()
                .unwrap_or_else(|| theme.scheme.primary.clone())
        } else {
            ui_tokens::with_alpha(&theme.scheme.on_surface, 0.38)
        };
        ButtonStyles {
            container: TRANSPARENT.to_string(),
            content,
            border: None,
            height: None,
            corner_radius: 12.0,
            padding_horizontal: 16.0,
            padding_vertical: 8.0,
            text: TypeVariant::LabelLarge.style(),
            fill_width: false,
        }
    }
}

// =============================================================================
// Sized Buttons
// =============================================================================

/// Size tier of a [`SizedButton`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// 56dp tall, bold title text, full width
    Big,
    /// 48dp tall
    #[default]
    Medium,
    /// 40dp tall
    Small,
}

/// Visual sub-variant of a [`SizedButton`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    /// Filled with the primary color
    #[default]
    Primary,
    /// Secondary emphasis (filled for big, outlined otherwise)
    Secondary,
    /// Outlined neutral
    Outlined,
}

/// Button with an explicit size tier and sub-variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizedButton {
    /// Label text
    pub label: String,
    /// Size tier
    pub size: ButtonSize,
    /// Visual sub-variant
    pub variant: SizeVariant,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
    /// Whether the button accepts activation
    pub enabled: bool,
}

impl SizedButton {
    /// Create a big button
    pub fn big(label: impl Into<String>) -> Self {
        Self::sized(label, ButtonSize::Big)
    }

    /// Create a medium button
    pub fn medium(label: impl Into<String>) -> Self {
        Self::sized(label, ButtonSize::Medium)
    }

    /// Create a small button
    pub fn small(label: impl Into<String>) -> Self {
        Self::sized(label, ButtonSize::Small)
    }

    fn sized(label: impl Into<String>, size: ButtonSize) -> Self {
        Self {
            label: label.into(),
            size,
            variant: SizeVariant::Primary,
            on_click: None,
            enabled: true,
        }
    }

    /// Set the sub-variant
    pub fn variant(mut self, variant: SizeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        // The big tier keeps a filled secondary; the smaller tiers render
        // secondary as an outlined primary-text surface.
        let (container, content, border) = match (self.size, self.variant) {
            (_, SizeVariant::Primary) => {
                let (c, t) = filled_colors(&theme.scheme.primary, self.enabled);
                (c, t, None)
            }
            (ButtonSize::Big, SizeVariant::Secondary) => {
                let (c, t) = filled_colors(&theme.scheme.secondary, self.enabled);
                (c, t, None)
            }
            (ButtonSize::Big, SizeVariant::Outlined) => (
                TRANSPARENT.to_string(),
                outlined_content(&theme.scheme.primary, self.enabled),
                Some(theme.scheme.outline.clone()),
            ),
            (_, SizeVariant::Secondary) => (
                TRANSPARENT.to_string(),
                outlined_content(&theme.scheme.primary, self.enabled),
                Some(theme.scheme.outline.clone()),
            ),
            (_, SizeVariant::Outlined) => (
                TRANSPARENT.to_string(),
                outlined_content(neutral::NEUTRAL_700, self.enabled),
                Some(theme.scheme.outline.clone()),
            ),
        };

        let (height, radius, pad_h, pad_v, text, fill_width) = match self.size {
            ButtonSize::Big => (
                56.0,
                12.0,
                24.0,
                16.0,
                TypeVariant::TitleMedium.style().with_weight(weight::BOLD),
                true,
            ),
            ButtonSize::Medium => (
                48.0,
                12.0,
                20.0,
                12.0,
                TypeVariant::BodyMedium.style().with_weight(weight::MEDIUM),
                false,
            ),
            ButtonSize::Small => (
                40.0,
                10.0,
                16.0,
                10.0,
                TypeVariant::BodySmall.style().with_weight(weight::MEDIUM),
                false,
            ),
        };

        ButtonStyles {
            container,
            content,
            border,
            height: Some(height),
            corner_radius: radius,
            padding_horizontal: pad_h,
            padding_vertical: pad_v,
            text,
            fill_width,
        }
    }
}

// =============================================================================
// Chip Button
// =============================================================================

/// Filter-chip toggle with selected/unselected visual states.
///
/// The chip does not flip itself: a press emits the event and the caller
/// updates `selected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipButton {
    /// Label text
    pub label: String,
    /// Selected visual state (caller-owned)
    pub selected: bool,
    /// Whether the chip accepts activation
    pub enabled: bool,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}

impl ChipButton {
    /// Create a chip button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
            enabled: true,
            on_click: None,
        }
    }

    /// Set the selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let (container, content, border) = if !self.enabled {
            (
                neutral::NEUTRAL_200.to_string(),
                neutral::NEUTRAL_500.to_string(),
                None,
            )
        } else if self.selected {
            (theme.scheme.primary.clone(), brand::WHITE.to_string(), None)
        } else {
            (
                theme.scheme.surface.clone(),
                neutral::NEUTRAL_700.to_string(),
                Some(theme.scheme.outline.clone()),
            )
        };
        ButtonStyles {
            container,
            content,
            border,
            height: None,
            corner_radius: 20.0,
            padding_horizontal: 16.0,
            padding_vertical: 8.0,
            text: TypeVariant::LabelMedium.style(),
            fill_width: false,
        }
    }
}

// =============================================================================
// Cart Button
// =============================================================================

/// Cart action button: leading icon, label, and a trailing price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartButton {
    /// Label text
    pub label: String,
    /// Trailing price text
    pub price: String,
    /// Leading icon glyph
    pub icon: String,
    /// Whether the button accepts activation
    pub enabled: bool,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}

impl CartButton {
    /// Create a cart button
    pub fn new(label: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            price: price.into(),
            icon: "shopping-cart".to_string(),
            enabled: true,
            on_click: None,
        }
    }

    /// Override the leading icon glyph
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        let (container, content) = filled_colors(&theme.scheme.primary, self.enabled);
        ButtonStyles {
            container,
            content,
            border: None,
            height: Some(56.0),
            corner_radius: 12.0,
            padding_horizontal: 20.0,
            padding_vertical: 0.0,
            text: TypeVariant::BodyLarge.style().with_weight(weight::MEDIUM),
            fill_width: true,
        }
    }

    /// Text style of the trailing price
    pub fn price_text_style(&self) -> TypeStyle {
        TypeVariant::BodyLarge.style().with_weight(weight::BOLD)
    }

    /// Leading icon size
    pub fn icon_size(&self) -> f32 {
        24.0
    }
}

// =============================================================================
// Social Login Button
// =============================================================================

/// Outlined social-login button with an optional leading icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLoginButton {
    /// Label text
    pub label: String,
    /// Optional leading icon glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the button accepts activation
    pub enabled: bool,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}

impl SocialLoginButton {
    /// Create a social-login button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            enabled: true,
            on_click: None,
        }
    }

    /// Set the leading icon glyph
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        ButtonStyles {
            container: TRANSPARENT.to_string(),
            content: outlined_content(&theme.scheme.on_surface, self.enabled),
            border: Some(theme.scheme.outline.clone()),
            height: Some(48.0),
            corner_radius: 12.0,
            padding_horizontal: 16.0,
            padding_vertical: 0.0,
            text: TypeVariant::BodyMedium.style(),
            fill_width: true,
        }
    }
}
