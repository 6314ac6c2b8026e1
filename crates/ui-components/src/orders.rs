//! Order line items and the opened order card

use crate::{EventHandler, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{brand, neutral, status, with_alpha, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::{weight, TypeStyle, TypeVariant};

// =============================================================================
// Order Cell
// =============================================================================

/// Resolved visual attributes for an order row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCellStyles {
    /// Row fill (primary tint while selected)
    pub background: Color,
    /// Item name color
    pub text_color: Color,
    /// Price color
    pub price_color: Color,
    /// Checkbox checked fill
    pub checkbox_checked: Color,
    /// Checkbox unchecked stroke
    pub checkbox_unchecked: Color,
    /// Checkmark color
    pub checkmark: Color,
    /// Corner radius
    pub corner_radius: f32,
}

/// Selectable order line item.
///
/// The checkbox is visual only: it never toggles on its own. Clicking the
/// row emits `on_item_click` and the caller updates `is_selected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCell {
    /// Item name
    pub item_name: String,
    /// Formatted price text
    pub price: String,
    /// Selected visual state (caller-owned)
    pub is_selected: bool,
    /// Whether the row reacts to clicks; also drives the disabled palette
    pub is_enabled: bool,
    /// Row click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_item_click: Option<EventHandler>,
}

impl OrderCell {
    /// Create an order row
    pub fn new(item_name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            price: price.into(),
            is_selected: false,
            is_enabled: true,
            on_item_click: None,
        }
    }

    /// Set the selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    /// Set the enabled flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.is_enabled = enabled;
        self
    }

    /// Wire the row click handler
    pub fn on_item_click(mut self, handler: impl Into<String>) -> Self {
        self.on_item_click = Some(handler.into());
        self
    }

    /// Click on the row: emits only when enabled and wired
    pub fn press(&self) -> Option<UiEvent> {
        if !self.is_enabled {
            return None;
        }
        self.on_item_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme. The disabled
    /// treatment applies regardless of selection.
    pub fn computed_styles(&self, theme: &Theme) -> OrderCellStyles {
        let background = if self.is_selected {
            with_alpha(&theme.scheme.primary, 0.1)
        } else {
            theme.scheme.surface.clone()
        };
        let content = if self.is_enabled {
            theme.scheme.on_surface.clone()
        } else {
            neutral::NEUTRAL_400.to_string()
        };
        OrderCellStyles {
            background,
            text_color: content.clone(),
            price_color: content,
            checkbox_checked: theme.scheme.primary.clone(),
            checkbox_unchecked: neutral::NEUTRAL_400.to_string(),
            checkmark: brand::WHITE.to_string(),
            corner_radius: 5.0,
        }
    }

    /// Name and price text style
    pub fn text_style(&self) -> TypeStyle {
        TypeVariant::BodyMedium.style().with_weight(weight::MEDIUM)
    }
}

// =============================================================================
// Order Item Detail
// =============================================================================

/// One itemized line of an order summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDetail {
    /// Item name
    pub name: String,
    /// Quantity ordered
    pub quantity: u32,
    /// Formatted unit price
    pub unit_price: String,
}

impl OrderItemDetail {
    /// Create an itemized line
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: unit_price.into(),
        }
    }

    /// The rendered "quantity x unit price" text
    pub fn line_label(&self) -> String {
        format!("{} x {}", self.quantity, self.unit_price)
    }
}

// =============================================================================
// Opened Order Card
// =============================================================================

/// Resolved visual attributes for the opened order card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCardStyles {
    /// Card fill
    pub container: Color,
    /// Corner radius
    pub corner_radius: f32,
    /// Status dot diameter
    pub status_dot_size: f32,
    /// Cancel affordance stroke
    pub cancel_border: Color,
    /// Cancel affordance text color
    pub cancel_text: Color,
    /// View-receipt affordance color
    pub receipt_link: Color,
}

/// Composite summary of one order: header, status line, receipt link,
/// itemized list, and three independently optional actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCardOpened {
    /// Order number shown in the header
    pub order_number: String,
    /// Formatted order total
    pub total_price: String,
    /// Formatted order date
    pub date: String,
    /// Status line text
    pub status: String,
    /// Status dot and text color (caller-supplied)
    pub status_color: Color,
    /// Itemized lines
    pub items: Vec<OrderItemDetail>,
    /// View-receipt handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_view_receipt: Option<EventHandler>,
    /// Help handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_help: Option<EventHandler>,
    /// Cancel-order handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_cancel_order: Option<EventHandler>,
}

impl OrderCardOpened {
    /// Header prefix for the order number
    pub const HEADER_PREFIX: &'static str = "Заказ №";
    /// View-receipt affordance label
    pub const VIEW_RECEIPT_LABEL: &'static str = "Посмотреть";
    /// Items section header
    pub const ITEMS_SECTION_LABEL: &'static str = "Описания";
    /// Receipt action label
    pub const RECEIPT_ACTION_LABEL: &'static str = "Чек покупки";
    /// Help action label
    pub const HELP_ACTION_LABEL: &'static str = "Помощь";
    /// Cancel action label
    pub const CANCEL_ACTION_LABEL: &'static str = "Отменить заказ";

    /// Create an opened order card
    pub fn new(
        order_number: impl Into<String>,
        total_price: impl Into<String>,
        date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            total_price: total_price.into(),
            date: date.into(),
            status: status.into(),
            status_color: status::SUCCESS.to_string(),
            items: Vec::new(),
            on_view_receipt: None,
            on_help: None,
            on_cancel_order: None,
        }
    }

    /// Override the status color
    pub fn status_color(mut self, color: impl Into<Color>) -> Self {
        self.status_color = color.into();
        self
    }

    /// Set the itemized lines
    pub fn items(mut self, items: Vec<OrderItemDetail>) -> Self {
        self.items = items;
        self
    }

    /// Wire the view-receipt handler
    pub fn on_view_receipt(mut self, handler: impl Into<String>) -> Self {
        self.on_view_receipt = Some(handler.into());
        self
    }

    /// Wire the help handler
    pub fn on_help(mut self, handler: impl Into<String>) -> Self {
        self.on_help = Some(handler.into());
        self
    }

    /// Wire the cancel-order handler
    pub fn on_cancel_order(mut self, handler: impl Into<String>) -> Self {
        self.on_cancel_order = Some(handler.into());
        self
    }

    /// The rendered header title
    pub fn header_title(&self) -> String {
        format!("{} {}", Self::HEADER_PREFIX, self.order_number)
    }

    /// Press the view-receipt affordance
    pub fn view_receipt_press(&self) -> Option<UiEvent> {
        self.on_view_receipt.as_deref().map(UiEvent::plain)
    }

    /// Press the help action
    pub fn help_press(&self) -> Option<UiEvent> {
        self.on_help.as_deref().map(UiEvent::plain)
    }

    /// Press the cancel-order action
    pub fn cancel_press(&self) -> Option<UiEvent> {
        self.on_cancel_order.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> OrderCardStyles {
        OrderCardStyles {
            container: theme.scheme.surface.clone(),
            corner_radius: 12.0,
            status_dot_size: 8.0,
            cancel_border: theme.scheme.error.clone(),
            cancel_text: theme.scheme.error.clone(),
            receipt_link: theme.scheme.primary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_tokens::theme::{resolve_theme, ThemeOptions};

    fn theme() -> Theme {
        resolve_theme(&ThemeOptions::default(), None)
    }

    fn card() -> OrderCardOpened {
        OrderCardOpened::new("123456", "2580 Р", "26 апреля, 14:00", "Оплачен").items(vec![
            OrderItemDetail::new("Рубашка Воскресенье", 1, "300 Р"),
            OrderItemDetail::new("Шорты Вторник", 2, "690 Р"),
        ])
    }

    // ==========================================================================
    // Order Cell Tests
    // ==========================================================================

    #[test]
    fn test_row_click_requires_enabled_and_wired() {
        let wired = OrderCell::new("Рубашка", "300 ₽").on_item_click("row");
        assert_eq!(wired.press().unwrap().handler, "row");

        let disabled = OrderCell::new("Рубашка", "300 ₽")
            .on_item_click("row")
            .enabled(false);
        assert!(disabled.press().is_none());

        let unwired = OrderCell::new("Рубашка", "300 ₽");
        assert!(unwired.press().is_none());
    }

    #[test]
    fn test_checkbox_does_not_toggle_itself() {
        let cell = OrderCell::new("Рубашка", "300 ₽").on_item_click("row");
        assert!(!cell.is_selected);
        let _ = cell.press().unwrap();
        assert!(!cell.is_selected);
    }

    #[test]
    fn test_selected_row_is_tinted() {
        let theme = theme();
        let selected = OrderCell::new("Рубашка", "300 ₽").selected(true);
        let styles = selected.computed_styles(&theme);
        assert_eq!(styles.background, with_alpha(&theme.scheme.primary, 0.1));

        let unselected = OrderCell::new("Рубашка", "300 ₽");
        assert_eq!(
            unselected.computed_styles(&theme).background,
            theme.scheme.surface
        );
    }

    #[test]
    fn test_disabled_palette_regardless_of_selection() {
        let theme = theme();
        for selected in [false, true] {
            let cell = OrderCell::new("Рубашка", "300 ₽")
                .selected(selected)
                .enabled(false);
            let styles = cell.computed_styles(&theme);
            assert_eq!(styles.text_color, neutral::NEUTRAL_400);
            assert_eq!(styles.price_color, neutral::NEUTRAL_400);
        }
    }

    // ==========================================================================
    // Order Item Detail Tests
    // ==========================================================================

    #[test]
    fn test_line_label_format() {
        let line = OrderItemDetail::new("Рубашка", 2, "300 Р");
        assert_eq!(line.line_label(), "2 x 300 Р");
    }

    // ==========================================================================
    // Opened Order Card Tests
    // ==========================================================================

    #[test]
    fn test_header_title() {
        assert_eq!(card().header_title(), "Заказ № 123456");
    }

    #[test]
    fn test_actions_are_independently_optional() {
        let bare = card();
        assert!(bare.view_receipt_press().is_none());
        assert!(bare.help_press().is_none());
        assert!(bare.cancel_press().is_none());

        let with_help = card().on_help("help");
        assert!(with_help.view_receipt_press().is_none());
        assert_eq!(with_help.help_press().unwrap().handler, "help");
        assert!(with_help.cancel_press().is_none());
    }

    #[test]
    fn test_each_action_emits_its_own_event() {
        let full = card()
            .on_view_receipt("receipt")
            .on_help("help")
            .on_cancel_order("cancel");
        assert_eq!(full.view_receipt_press().unwrap().handler, "receipt");
        assert_eq!(full.help_press().unwrap().handler, "help");
        assert_eq!(full.cancel_press().unwrap().handler, "cancel");
    }

    #[test]
    fn test_status_color_is_caller_supplied() {
        let defaulted = card();
        assert_eq!(defaulted.status_color, status::SUCCESS);

        let custom = card().status_color("#F44336");
        assert_eq!(custom.status_color, "#F44336");
    }

    #[test]
    fn test_card_styles() {
        let theme = theme();
        let styles = card().computed_styles(&theme);
        assert_eq!(styles.corner_radius, 12.0);
        assert_eq!(styles.status_dot_size, 8.0);
        assert_eq!(styles.cancel_border, theme.scheme.error);
        assert_eq!(styles.receipt_link, theme.scheme.primary);
    }
}
