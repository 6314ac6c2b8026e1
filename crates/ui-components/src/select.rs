//! Closed-list selection and the date field
//!
//! [`SelectField`] is a controlled single-select dropdown: the field shows
//! the selected item (or a placeholder), clicking it opens an overlay list,
//! and clicking an item emits `on_item_selected` and closes the overlay.
//! The open flag lives with the caller as an [`OverlayState`]; the methods
//! here are pure transitions.

use crate::{EventHandler, OverlayState, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{border, neutral, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::TypeVariant;

use crate::inputs::TextFieldStyles;

// =============================================================================
// Select Item
// =============================================================================

/// One entry of a closed selection list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    /// Stable identifier
    pub id: String,
    /// Display text
    pub text: String,
    /// Optional icon glyph rendered before the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Opaque caller payload, carried through selection events untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl SelectItem {
    /// Create an item
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            emoji: None,
            data: None,
        }
    }

    /// Attach an icon glyph
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Attach an opaque payload
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The rendered text, glyph-prefixed when one is present
    pub fn display_text(&self) -> String {
        match &self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.text),
            None => self.text.clone(),
        }
    }
}

// =============================================================================
// Select Field
// =============================================================================

/// Controlled, single-select, closed-list dropdown.
///
/// The field itself is always read-only; text cannot be typed into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectField {
    /// Currently selected item (caller-owned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<SelectItem>,
    /// All selectable items, in display order
    pub items: Vec<SelectItem>,
    /// Label rendered above the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown while nothing is selected
    pub placeholder: String,
    /// Whether the clear affordance may appear
    pub show_clear_button: bool,
    /// Selection handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_item_selected: Option<EventHandler>,
    /// Clear handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear_click: Option<EventHandler>,
    /// Whether the field reacts to clicks
    pub enabled: bool,
    /// Overlay state (caller-owned)
    pub state: OverlayState,
}

impl SelectField {
    /// Create a select field over `items`
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            selected: None,
            items,
            label: None,
            placeholder: "Выберите...".to_string(),
            show_clear_button: false,
            on_item_selected: None,
            on_clear_click: None,
            enabled: true,
            state: OverlayState::Closed,
        }
    }

    /// Set the selected item
    pub fn selected(mut self, item: SelectItem) -> Self {
        self.selected = Some(item);
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

    /// Enable the clear affordance
    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    /// Wire the selection handler
    pub fn on_item_selected(mut self, handler: impl Into<String>) -> Self {
        self.on_item_selected = Some(handler.into());
        self
    }

    /// Wire the clear handler
    pub fn on_clear_click(mut self, handler: impl Into<String>) -> Self {
        self.on_clear_click = Some(handler.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the overlay state
    pub fn state(mut self, state: OverlayState) -> Self {
        self.state = state;
        self
    }

    /// The text shown in the field, `None` meaning the placeholder shows
    pub fn display_text(&self) -> Option<String> {
        self.selected.as_ref().map(SelectItem::display_text)
    }

    /// Click on the field: opens the overlay when enabled
    pub fn field_press(&self) -> OverlayState {
        if self.enabled {
            OverlayState::Open
        } else {
            self.state
        }
    }

    /// Click on the item at `index`: emits the selection (carrying the
    /// full item) and closes the overlay. An out-of-range index is a
    /// no-op.
    pub fn item_press(&self, index: usize) -> (OverlayState, Option<UiEvent>) {
        match self.items.get(index) {
            Some(item) => {
                let event = self.on_item_selected.as_deref().map(|handler| UiEvent {
                    handler: handler.to_string(),
                    payload: serde_json::to_value(item).ok(),
                });
                (OverlayState::Closed, event)
            }
            None => (self.state, None),
        }
    }

    /// Outside dismissal: closes the overlay without a selection
    pub fn dismiss(&self) -> OverlayState {
        OverlayState::Closed
    }

    /// Whether the clear affordance is visible right now
    pub fn clear_visible(&self) -> bool {
        self.show_clear_button && self.selected.is_some()
    }

    /// Press the clear affordance. Only the dedicated handler fires; the
    /// field does not clear itself.
    pub fn clear_press(&self) -> Option<UiEvent> {
        if !self.clear_visible() {
            return None;
        }
        self.on_clear_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> TextFieldStyles {
        TextFieldStyles {
            container: neutral::NEUTRAL_100.to_string(),
            border: border::BORDER.to_string(),
            focused_border: border::BORDER.to_string(),
            label: neutral::NEUTRAL_700.to_string(),
            text: theme.scheme.on_surface.clone(),
            placeholder: neutral::NEUTRAL_500.to_string(),
            corner_radius: 12.0,
            text_style: TypeVariant::BodyMedium.style(),
        }
    }

    /// Trailing dropdown arrow tint
    pub fn arrow_tint(&self) -> Color {
        neutral::NEUTRAL_500.to_string()
    }
}

// =============================================================================
// Date Picker Field
// =============================================================================

/// Controlled date display field.
///
/// Follows the same read-only display pattern as [`SelectField`], and the
/// open flag is tracked the same way, but no date-selection surface is
/// wired up yet: the open overlay renders nothing and `on_date_selected`
/// is never emitted by this component.
// TODO: wire a calendar overlay so on_date_selected can actually fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePickerField {
    /// Currently selected date text (caller-owned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<String>,
    /// Selection handler (reserved for the future picker surface)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_date_selected: Option<EventHandler>,
    /// Label rendered above the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown while no date is selected
    pub placeholder: String,
    /// Whether the field reacts to clicks
    pub enabled: bool,
    /// Overlay state (caller-owned)
    pub state: OverlayState,
}

impl DatePickerField {
    /// Create a date field
    pub fn new() -> Self {
        Self {
            selected_date: None,
            on_date_selected: None,
            label: None,
            placeholder: "Выберите дату".to_string(),
            enabled: true,
            state: OverlayState::Closed,
        }
    }

    /// Set the selected date text
    pub fn selected_date(mut self, date: impl Into<String>) -> Self {
        self.selected_date = Some(date.into());
        self
    }

    /// Wire the selection handler
    pub fn on_date_selected(mut self, handler: impl Into<String>) -> Self {
        self.on_date_selected = Some(handler.into());
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The text shown in the field, `None` meaning the placeholder shows
    pub fn display_text(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    /// Click on the field: tracks the open flag even though no picker
    /// surface exists yet
    pub fn field_press(&self) -> OverlayState {
        if self.enabled {
            OverlayState::Open
        } else {
            self.state
        }
    }

    /// Outside dismissal
    pub fn dismiss(&self) -> OverlayState {
        OverlayState::Closed
    }

    /// Whether a selection surface exists for the open state. Always
    /// `false` until the calendar overlay lands.
    pub fn has_picker_surface(&self) -> bool {
        false
    }
}

impl Default for DatePickerField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<SelectItem> {
        vec![
            SelectItem::new("ru", "Россия").emoji("🇷🇺"),
            SelectItem::new("kz", "Казахстан"),
            SelectItem::new("by", "Беларусь").data(serde_json::json!({"code": 375})),
        ]
    }

    // ==========================================================================
    // Select Item Tests
    // ==========================================================================

    #[test]
    fn test_display_text_prefixes_emoji() {
        let with_emoji = SelectItem::new("ru", "Россия").emoji("🇷🇺");
        assert_eq!(with_emoji.display_text(), "🇷🇺 Россия");

        let plain = SelectItem::new("kz", "Казахстан");
        assert_eq!(plain.display_text(), "Казахстан");
    }

    // ==========================================================================
    // Select Field State Machine Tests
    // ==========================================================================

    #[test]
    fn test_field_press_opens() {
        let field = SelectField::new(items());
        assert_eq!(field.field_press(), OverlayState::Open);
    }

    #[test]
    fn test_disabled_field_stays_closed() {
        let field = SelectField::new(items()).enabled(false);
        assert_eq!(field.field_press(), OverlayState::Closed);
    }

    #[test]
    fn test_item_press_selects_and_closes() {
        let field = SelectField::new(items())
            .state(OverlayState::Open)
            .on_item_selected("picked");

        let (state, event) = field.item_press(1);
        assert_eq!(state, OverlayState::Closed);
        let event = event.unwrap();
        assert_eq!(event.handler, "picked");
        let payload = event.payload.unwrap();
        assert_eq!(payload["id"], "kz");
        assert_eq!(payload["text"], "Казахстан");
    }

    #[test]
    fn test_item_payload_carries_opaque_data() {
        let field = SelectField::new(items())
            .state(OverlayState::Open)
            .on_item_selected("picked");
        let (_, event) = field.item_press(2);
        let payload = event.unwrap().payload.unwrap();
        assert_eq!(payload["data"]["code"], 375);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let field = SelectField::new(items())
            .state(OverlayState::Open)
            .on_item_selected("picked");
        let (state, event) = field.item_press(99);
        assert_eq!(state, OverlayState::Open);
        assert!(event.is_none());
    }

    #[test]
    fn test_dismiss_closes_without_selection() {
        let field = SelectField::new(items())
            .state(OverlayState::Open)
            .on_item_selected("picked");
        assert_eq!(field.dismiss(), OverlayState::Closed);
    }

    #[test]
    fn test_item_press_without_handler_still_closes() {
        let field = SelectField::new(items()).state(OverlayState::Open);
        let (state, event) = field.item_press(0);
        assert_eq!(state, OverlayState::Closed);
        assert!(event.is_none());
    }

    // ==========================================================================
    // Select Field Display Tests
    // ==========================================================================

    #[test]
    fn test_placeholder_shows_until_selection() {
        let empty = SelectField::new(items());
        assert!(empty.display_text().is_none());
        assert_eq!(empty.placeholder, "Выберите...");

        let selected = SelectField::new(items()).selected(SelectItem::new("kz", "Казахстан"));
        assert_eq!(selected.display_text().as_deref(), Some("Казахстан"));
    }

    #[test]
    fn test_clear_affordance() {
        let no_selection = SelectField::new(items())
            .show_clear_button(true)
            .on_clear_click("cleared");
        assert!(!no_selection.clear_visible());
        assert!(no_selection.clear_press().is_none());

        let with_selection = no_selection.selected(SelectItem::new("ru", "Россия"));
        assert!(with_selection.clear_visible());
        assert_eq!(with_selection.clear_press().unwrap().handler, "cleared");
    }

    // ==========================================================================
    // Date Picker Field Tests
    // ==========================================================================

    #[test]
    fn test_date_field_tracks_open_flag_only() {
        let field = DatePickerField::new().on_date_selected("date");
        assert_eq!(field.field_press(), OverlayState::Open);
        assert_eq!(field.dismiss(), OverlayState::Closed);
        // Explicitly incomplete: there is nothing to select a date with
        assert!(!field.has_picker_surface());
    }

    #[test]
    fn test_date_field_display() {
        let empty = DatePickerField::new();
        assert!(empty.display_text().is_none());
        assert_eq!(empty.placeholder, "Выберите дату");

        let set = DatePickerField::new().selected_date("26 апреля");
        assert_eq!(set.display_text(), Some("26 апреля"));
    }

    #[test]
    fn test_disabled_date_field_does_not_open() {
        let field = DatePickerField::new().enabled(false);
        assert_eq!(field.field_press(), OverlayState::Closed);
    }
}
