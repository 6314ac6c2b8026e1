//! Tab bar, search bar, and general-purpose surfaces
//!
//! The bottom tab bar never tracks its own selection: the caller owns
//! `selected_index` and a tab press only emits the clicked index.

use crate::{EventHandler, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{border, neutral, with_alpha, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::{TypeStyle, TypeVariant};

// =============================================================================
// Bottom Tab Bar
// =============================================================================

/// One tab descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    /// Tab title
    pub title: String,
    /// Default icon glyph
    pub icon: String,
    /// Alternate glyph shown while the tab is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_icon: Option<String>,
}

impl TabItem {
    /// Create a tab descriptor
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            selected_icon: None,
        }
    }

    /// Set the selected-state glyph
    pub fn selected_icon(mut self, icon: impl Into<String>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }
}

/// The preset tabs used across the kit previews
pub fn default_tab_items() -> Vec<TabItem> {
    vec![
        TabItem::new("Главная", "home").selected_icon("home"),
        TabItem::new("Каталог", "grid-view").selected_icon("grid-view"),
        TabItem::new("Проекты", "folder").selected_icon("folder"),
        TabItem::new("Профиль", "person").selected_icon("person"),
    ]
}

/// Resolved visual attributes for one tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItemStyles {
    /// Icon tint
    pub icon_color: Color,
    /// Title color
    pub label_color: Color,
    /// Selection indicator fill (primary at 10% alpha)
    pub indicator: Color,
    /// Title text style
    pub text: TypeStyle,
}

/// Bottom navigation bar over a fixed ordered tab sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomTabBar {
    /// Tab descriptors, in display order
    pub items: Vec<TabItem>,
    /// Index of the selected tab (caller-owned)
    pub selected_index: usize,
    /// Selection handler, invoked with the clicked index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_item_selected: Option<EventHandler>,
}

impl BottomTabBar {
    /// Create a tab bar over `items` with the first tab selected
    pub fn new(items: Vec<TabItem>) -> Self {
        Self {
            items,
            selected_index: 0,
            on_item_selected: None,
        }
    }

    /// Set the selected index
    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// Wire the selection handler
    pub fn on_item_selected(mut self, handler: impl Into<String>) -> Self {
        self.on_item_selected = Some(handler.into());
        self
    }

    /// The glyph to render for the tab at `index`: the alternate glyph for
    /// the selected tab when one was supplied, the default glyph otherwise
    pub fn icon_for(&self, index: usize) -> Option<&str> {
        let item = self.items.get(index)?;
        if index == self.selected_index {
            if let Some(selected) = item.selected_icon.as_deref() {
                return Some(selected);
            }
        }
        Some(&item.icon)
    }

    /// Click on the tab at `index`: emits the index. The bar does not move
    /// its own selection.
    pub fn tab_press(&self, index: usize) -> Option<UiEvent> {
        if index >= self.items.len() {
            return None;
        }
        self.on_item_selected
            .as_deref()
            .map(|handler| UiEvent::with_payload(handler, serde_json::json!(index)))
    }

    /// Bar container fill and content color
    pub fn bar_colors(&self, theme: &Theme) -> (Color, Color) {
        (theme.scheme.surface.clone(), theme.scheme.on_surface.clone())
    }

    /// Resolve the visual attributes of the tab at `index`
    pub fn item_styles(&self, index: usize, theme: &Theme) -> TabItemStyles {
        let selected = index == self.selected_index;
        let color = if selected {
            theme.scheme.primary.clone()
        } else {
            neutral::NEUTRAL_600.to_string()
        };
        TabItemStyles {
            icon_color: color.clone(),
            label_color: color,
            indicator: with_alpha(&theme.scheme.primary, 0.1),
            text: TypeVariant::LabelSmall.style(),
        }
    }
}

// =============================================================================
// Search Bar
// =============================================================================

/// Controlled pill-shaped search input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBar {
    /// The displayed text (caller-owned)
    pub value: String,
    /// Value-change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_value_change: Option<EventHandler>,
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    /// Whether the trailing cancel button renders
    pub show_cancel_button: bool,
    /// Cancel handler; falls back to clearing the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_cancel_click: Option<EventHandler>,
    /// Committed-search handler (input-method search action)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_search_click: Option<EventHandler>,
    /// Whether the field accepts edits
    pub enabled: bool,
}

impl SearchBar {
    /// Create a search bar displaying `value`
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_value_change: None,
            placeholder: "Искать описание".to_string(),
            show_cancel_button: false,
            on_cancel_click: None,
            on_search_click: None,
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

    /// Show the trailing cancel button
    pub fn show_cancel_button(mut self, show: bool) -> Self {
        self.show_cancel_button = show;
        self
    }

    /// Wire the cancel handler
    pub fn on_cancel_click(mut self, handler: impl Into<String>) -> Self {
        self.on_cancel_click = Some(handler.into());
        self
    }

    /// Wire the committed-search handler
    pub fn on_search_click(mut self, handler: impl Into<String>) -> Self {
        self.on_search_click = Some(handler.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Forward one proposed edit
    pub fn edit(&self, next: impl Into<String>) -> Option<UiEvent> {
        if !self.enabled {
            return None;
        }
        self.on_value_change
            .as_deref()
            .map(|handler| UiEvent::with_payload(handler, serde_json::Value::String(next.into())))
    }

    /// Whether the inline clear affordance is visible (only with text)
    pub fn clear_visible(&self) -> bool {
        !self.value.is_empty()
    }

    /// Press the inline clear affordance: emits an empty-value edit
    pub fn clear_press(&self) -> Option<UiEvent> {
        if !self.clear_visible() {
            return None;
        }
        self.edit("")
    }

    /// Press the cancel button. A dedicated handler wins; otherwise the
    /// field clears.
    pub fn cancel_press(&self) -> Option<UiEvent> {
        if !self.show_cancel_button {
            return None;
        }
        match self.on_cancel_click.as_deref() {
            Some(handler) => Some(UiEvent::plain(handler)),
            None => self.edit(""),
        }
    }

    /// Commit the search from the input-method action
    pub fn search_commit(&self) -> Option<UiEvent> {
        self.on_search_click.as_deref().map(UiEvent::plain)
    }

    /// Leading search glyph and its tint
    pub fn leading_glyph(&self) -> (&'static str, Color) {
        ("search", neutral::NEUTRAL_500.to_string())
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> crate::inputs::TextFieldStyles {
        crate::inputs::TextFieldStyles {
            container: neutral::NEUTRAL_100.to_string(),
            border: border::BORDER.to_string(),
            focused_border: theme.scheme.primary.clone(),
            label: neutral::NEUTRAL_600.to_string(),
            text: theme.scheme.on_surface.clone(),
            placeholder: neutral::NEUTRAL_500.to_string(),
            corner_radius: 12.0,
            text_style: TypeVariant::BodyMedium.style(),
        }
    }
}

// =============================================================================
// App Bar
// =============================================================================

/// Top app bar with a centered title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppBar {
    /// Title text
    pub title: String,
    /// Leading navigation glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_icon: Option<String>,
}

impl AppBar {
    /// Create an app bar
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            navigation_icon: None,
        }
    }

    /// Set the leading navigation glyph
    pub fn navigation_icon(mut self, icon: impl Into<String>) -> Self {
        self.navigation_icon = Some(icon.into());
        self
    }

    /// Container fill and title color
    pub fn colors(&self, theme: &Theme) -> (Color, Color) {
        (theme.scheme.surface.clone(), theme.scheme.on_surface.clone())
    }

    /// Title text style
    pub fn title_style(&self) -> TypeStyle {
        TypeVariant::TitleLarge.style()
    }
}

// =============================================================================
// Loading & Empty Surfaces
// =============================================================================

/// Full-size centered loading surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingScreen {
    /// Message under the spinner
    pub message: String,
}

impl LoadingScreen {
    /// Create a loading screen with the default message
    pub fn new() -> Self {
        Self {
            message: "Loading...".to_string(),
        }
    }

    /// Override the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Spinner tint and stroke width
    pub fn spinner(&self, theme: &Theme) -> (Color, f32) {
        (theme.scheme.primary.clone(), 4.0)
    }
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Centered empty-state surface with an optional action slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyState {
    /// Headline
    pub title: String,
    /// Explanatory message
    pub message: String,
    /// Whether an action slot renders under the message
    pub has_action: bool,
}

impl EmptyState {
    /// Create an empty state
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            has_action: false,
        }
    }

    /// Enable the action slot
    pub fn has_action(mut self, has_action: bool) -> Self {
        self.has_action = has_action;
        self
    }

    /// Message color: on-surface at 70% alpha
    pub fn message_color(&self, theme: &Theme) -> Color {
        with_alpha(&theme.scheme.on_surface, 0.7)
    }
}
