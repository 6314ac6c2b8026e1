//! Text capture fields
//!
//! Every input here is fully controlled: the displayed text is exactly the
//! `value` the caller passed, and each keystroke is forwarded through
//! `edit()` as a value-change event. The component never stores its own
//! copy; the caller decides the next value and rebuilds the component.

use crate::{EventHandler, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{border, neutral, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::{TypeStyle, TypeVariant};

// =============================================================================
// Computed Styles
// =============================================================================

/// Resolved visual attributes for a text field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFieldStyles {
    /// Container fill
    pub container: Color,
    /// Unfocused border color
    pub border: Color,
    /// Focused border color
    pub focused_border: Color,
    /// Label color
    pub label: Color,
    /// Entered text color
    pub text: Color,
    /// Placeholder color
    pub placeholder: Color,
    /// Corner radius
    pub corner_radius: f32,
    /// Text style of the entered text
    pub text_style: TypeStyle,
}

fn value_change(handler: Option<&str>, next: String) -> Option<UiEvent> {
    handler.map(|h| UiEvent::with_payload(h, serde_json::Value::String(next)))
}

// =============================================================================
// Primary Text Field
// =============================================================================

/// Outlined single-line text field with label and error support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryTextField {
    /// The displayed text (caller-owned)
    pub value: String,
    /// Value-change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_value_change: Option<EventHandler>,
    /// Floating label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown while the value is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Error flag driving the error colors
    pub is_error: bool,
    /// Error message rendered below the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Whether the field accepts edits
    pub enabled: bool,
}

impl PrimaryTextField {
    /// Create a text field displaying `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_value_change: None,
            label: None,
            placeholder: None,
            is_error: false,
            error_message: None,
            enabled: true,
        }
    }

    /// Wire the value-change handler
    pub fn on_value_change(mut self, handler: impl Into<String>) -> Self {
        self.on_value_change = Some(handler.into());
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Flag the field as erroneous, with a message
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.is_error = true;
        self.error_message = Some(message.into());
        self
    }

    /// Set the error flag without a message (colors only)
    pub fn is_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Forward one proposed edit. The field performs no validation of its
    /// own; whatever the user typed goes to the caller.
    pub fn edit(&self, next: impl Into<String>) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        value_change(self.on_value_change.as_deref(), next.into())
    }

    /// The error message to render, present only when both the flag and
    /// the message are set
    pub fn error_text(&self) -> Option<&str> {
        if self.is_error {
            self.error_message.as_deref()
        } else {
            None
        }
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> TextFieldStyles {
        let (border_color, focused, label) = if self.is_error {
            (
                theme.scheme.error.clone(),
                theme.scheme.error.clone(),
                theme.scheme.error.clone(),
            )
        } else {
            (
                border::BORDER.to_string(),
                theme.scheme.primary.clone(),
                neutral::NEUTRAL_600.to_string(),
            )
        };
        TextFieldStyles {
            container: theme.scheme.surface.clone(),
            border: border_color,
            focused_border: focused,
            label,
            text: theme.scheme.on_surface.clone(),
            placeholder: neutral::NEUTRAL_500.to_string(),
            corner_radius: 12.0,
            text_style: TypeVariant::BodyLarge.style(),
        }
    }
}

// =============================================================================
// Advanced Input
// =============================================================================

/// Text field with icon slots, a clear affordance and overridable colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedInput {
    /// The displayed text (caller-owned)
    pub value: String,
    /// Value-change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_value_change: Option<EventHandler>,
    /// Label rendered above the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    /// Leading icon glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<String>,
    /// Trailing icon glyph (hidden while the clear affordance shows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_icon: Option<String>,
    /// Whether the clear affordance may appear
    pub show_clear_button: bool,
    /// Dedicated clear handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear_click: Option<EventHandler>,
    /// Error flag driving the error colors
    pub is_error: bool,
    /// Error message rendered below the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Whether the field accepts edits
    pub enabled: bool,
    /// Single-line capture
    pub single_line: bool,
    /// Container fill override
    pub background_color: Color,
    /// Border color override
    pub border_color: Color,
    /// Focused border color override
    pub focused_border_color: Color,
}

impl AdvancedInput {
    /// Create an advanced input displaying `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_value_change: None,
            label: None,
            placeholder: String::new(),
            leading_icon: None,
            trailing_icon: None,
            show_clear_button: false,
            on_clear_click: None,
            is_error: false,
            error_message: None,
            enabled: true,
            single_line: true,
            background_color: neutral::NEUTRAL_100.to_string(),
            border_color: border::BORDER.to_string(),
            focused_border_color: ui_tokens::color::brand::PRIMARY.to_string(),
        }
    }

    /// Wire the value-change handler
    pub fn on_value_change(mut self, handler: impl Into<String>) -> Self {
        self.on_value_change = Some(handler.into());
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the leading icon glyph
    pub fn leading_icon(mut self, icon: impl Into<String>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    /// Set the trailing icon glyph
    pub fn trailing_icon(mut self, icon: impl Into<String>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    /// Enable the clear affordance
    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    /// Wire a dedicated clear handler
    pub fn on_clear_click(mut self, handler: impl Into<String>) -> Self {
        self.on_clear_click = Some(handler.into());
        self
    }

    /// Flag the field as erroneous, with a message
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.is_error = true;
        self.error_message = Some(message.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Allow multi-line capture
    pub fn multi_line(mut self) -> Self {
        self.single_line = false;
        self
    }

    /// Forward one proposed edit
    pub fn edit(&self, next: impl Into<String>) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        value_change(self.on_value_change.as_deref(), next.into())
    }

    /// Whether the clear affordance is visible right now
    pub fn clear_visible(&self) -> bool {
        self.show_clear_button && !self.value.is_empty()
    }

    /// Press the clear affordance. Falls back to an empty-value edit when
    /// no dedicated clear handler is wired.
    pub fn clear_press(&self) -> Option<UiEvent> {
        if !self.clear_visible() {
            return None;
        }
        match self.on_clear_click.as_deref() {
            Some(handler) => Some(UiEvent::plain(handler)),
            None => self.edit(""),
        }
    }

    /// The trailing glyph to render: the clear affordance wins over a
    /// configured trailing icon
    pub fn trailing_glyph(&self) -> Option<&str> {
        if self.clear_visible() {
            Some("clear")
        } else {
            self.trailing_icon.as_deref()
        }
    }

    /// The error message to render
    pub fn error_text(&self) -> Option<&str> {
        if self.is_error {
            self.error_message.as_deref()
        } else {
            None
        }
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> TextFieldStyles {
        let (border_color, focused, label) = if self.is_error {
            (
                theme.scheme.error.clone(),
                theme.scheme.error.clone(),
                theme.scheme.error.clone(),
            )
        } else {
            (
                self.border_color.clone(),
                self.focused_border_color.clone(),
                neutral::NEUTRAL_700.to_string(),
            )
        };
        TextFieldStyles {
            container: self.background_color.clone(),
            border: border_color,
            focused_border: focused,
            label,
            text: theme.scheme.on_surface.clone(),
            placeholder: neutral::NEUTRAL_500.to_string(),
            corner_radius: 12.0,
            text_style: TypeVariant::BodyMedium.style(),
        }
    }
}

// =============================================================================
// Small Number Input
// =============================================================================

/// Constrained numeric field: non-digit edits are silently dropped.
///
/// This is a client-side input filter, not a validation error: the field
/// simply never calls back for a rejected edit, so the displayed value
/// stays unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallNumberInput {
    /// The displayed text (caller-owned)
    pub value: String,
    /// Value-change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_value_change: Option<EventHandler>,
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    /// Whether the field accepts edits
    pub enabled: bool,
}

impl SmallNumberInput {
    /// Create a number input displaying `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_value_change: None,
            placeholder: "0".to_string(),
            enabled: true,
        }
    }

    /// Wire the value-change handler
    pub fn on_value_change(mut self, handler: impl Into<String>) -> Self {
        self.on_value_change = Some(handler.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Forward one proposed edit, but only when every character is an
    /// ASCII digit. The empty string passes: deleting all text is allowed.
    pub fn edit(&self, next: impl Into<String>) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        let next = next.into();
        if !next.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        value_change(self.on_value_change.as_deref(), next)
    }

    /// Fixed field width
    pub fn width(&self) -> f32 {
        60.0
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> TextFieldStyles {
        TextFieldStyles {
            container: neutral::NEUTRAL_100.to_string(),
            border: border::BORDER.to_string(),
            focused_border: theme.scheme.primary.clone(),
            label: neutral::NEUTRAL_700.to_string(),
            text: theme.scheme.on_surface.clone(),
            placeholder: neutral::NEUTRAL_500.to_string(),
            corner_radius: 8.0,
            text_style: TypeVariant::BodyMedium.style(),
        }
    }
}
