//! Tabular result rows
//!
//! A result row displays a parameter name, its measured value, and the
//! reference range. The value's color is caller-specified: callers encode
//! out-of-range results by passing a warning color.

use crate::{EventHandler, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{neutral, text, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::{weight, TypeStyle, TypeVariant};

/// Resolved visual attributes for a result row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTableCellStyles {
    /// Row fill
    pub background: Color,
    /// Parameter name color
    pub name_color: Color,
    /// Value color (exactly as supplied)
    pub value_color: Color,
    /// Reference range color
    pub range_color: Color,
    /// Trailing chevron tint
    pub chevron_tint: Color,
    /// Trailing chevron size
    pub chevron_size: f32,
    /// Corner radius
    pub corner_radius: f32,
}

/// Single-row display of {parameter name, value, reference range}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTableCell {
    /// Parameter name
    pub parameter_name: String,
    /// Measured value text
    pub value: String,
    /// Reference range text
    pub range: String,
    /// Foreground color of the value (caller-specified)
    pub value_color: Color,
    /// Optional whole-row click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}

impl ResultTableCell {
    /// Create a result row
    pub fn new(
        parameter_name: impl Into<String>,
        value: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            value: value.into(),
            range: range.into(),
            value_color: text::ON_SURFACE.to_string(),
            on_click: None,
        }
    }

    /// Set the value color
    pub fn value_color(mut self, color: impl Into<Color>) -> Self {
        self.value_color = color.into();
        self
    }

    /// Wire the whole-row click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Click on the row: inert when no handler is wired
    pub fn press(&self) -> Option<UiEvent> {
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> ResultTableCellStyles {
        ResultTableCellStyles {
            background: theme.scheme.surface.clone(),
            name_color: theme.scheme.on_surface.clone(),
            value_color: self.value_color.clone(),
            range_color: neutral::NEUTRAL_600.to_string(),
            chevron_tint: neutral::NEUTRAL_500.to_string(),
            chevron_size: 16.0,
            corner_radius: 5.0,
        }
    }

    /// Name and value text style
    pub fn emphasis_style(&self) -> TypeStyle {
        TypeVariant::BodyMedium.style().with_weight(weight::MEDIUM)
    }

    /// Reference range text style
    pub fn range_style(&self) -> TypeStyle {
        TypeVariant::BodySmall.style()
    }
}
