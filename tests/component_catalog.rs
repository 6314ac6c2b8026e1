//! Component Catalog Integration Tests
//!
//! End-to-end passes over the kit: resolve a theme at the root, drive the
//! components the way a host screen would, and check the emitted events
//! and resolved styles against the token layer.

use ui_components::{
    BottomTabBar, CartButton, MatuleFilterChip, MatuleJobCard, MatuleSearchBar, OrderCardOpened,
    OrderCell, OrderItemDetail, OverlayState, PrimaryButton, PrimaryTextField, ProgressIndicator,
    SelectField, SelectItem, SmallNumberInput, StatusChip, StatusType, TabItem,
};
use ui_tokens::color::{neutral, status};
use ui_tokens::theme::{
    dark_scheme, light_scheme, resolve_theme, DynamicSchemes, SchemeSource, Theme, ThemeOptions,
    ThemeState,
};
use ui_tokens::typography::TypeVariant;

/// Helper: the static light theme every screen below renders with
fn light_theme() -> Theme {
    resolve_theme(
        &ThemeOptions {
            dark_theme: false,
            dynamic_color: false,
        },
        None,
    )
}

/// Helper: a platform palette distinguishable from the static one
fn platform_palette() -> DynamicSchemes {
    let mut light = light_scheme();
    light.primary = "#6750A4".to_string();
    let mut dark = dark_scheme();
    dark.primary = "#D0BCFF".to_string();
    DynamicSchemes { light, dark }
}

/// Theme precedence across the full flag matrix
#[test]
fn test_theme_resolution_precedence() {
    let palette = platform_palette();

    // dynamic allowed + available + dark flag => dynamic dark
    let theme = resolve_theme(
        &ThemeOptions {
            dark_theme: true,
            dynamic_color: true,
        },
        Some(&palette),
    );
    assert_eq!(theme.source, SchemeSource::DynamicDark);
    assert_eq!(theme.scheme.primary, "#D0BCFF");

    // dynamic allowed + unavailable + light flag => static light
    let theme = resolve_theme(
        &ThemeOptions {
            dark_theme: false,
            dynamic_color: true,
        },
        None,
    );
    assert_eq!(theme.source, SchemeSource::StaticLight);

    // dynamic forbidden + dark flag => static dark, palette ignored
    let theme = resolve_theme(
        &ThemeOptions {
            dark_theme: true,
            dynamic_color: false,
        },
        Some(&palette),
    );
    assert_eq!(theme.source, SchemeSource::StaticDark);
    assert_eq!(theme.scheme, dark_scheme());
}

/// A theme state survives flag flips by re-resolving, and components pick
/// up the replacement scheme
#[test]
fn test_theme_state_drives_component_styles() {
    let mut state = ThemeState::new(
        ThemeOptions {
            dark_theme: false,
            dynamic_color: false,
        },
        None,
    );

    let button = PrimaryButton::new("Оплатить").on_click("pay");
    let light_styles = button.computed_styles(state.current_theme());
    assert_eq!(light_styles.container, light_scheme().primary);

    state.set_dark_theme(true);
    let dark_styles = button.computed_styles(state.current_theme());
    // Same primary slot in both static schemes, but the surface flips
    assert_eq!(
        OrderCell::new("Рубашка", "300 ₽")
            .computed_styles(state.current_theme())
            .background,
        "#1E1E1E"
    );
    assert_eq!(dark_styles.container, dark_scheme().primary);
}

/// A checkout-like screen: controlled fields, quantity filter, selectable
/// rows, and the final cart action
#[test]
fn test_checkout_screen_flow() {
    let theme = light_theme();

    // Controlled address field forwards any edit
    let address = PrimaryTextField::new("Ленина 1")
        .label("Адрес")
        .on_value_change("address-changed");
    let event = address.edit("Ленина 12").unwrap();
    assert_eq!(event.payload, Some(serde_json::json!("Ленина 12")));

    // Quantity field drops the paste of a decimal
    let quantity = SmallNumberInput::new("1").on_value_change("qty-changed");
    assert!(quantity.edit("1.5").is_none());
    assert_eq!(
        quantity.edit("15").unwrap().payload,
        Some(serde_json::json!("15"))
    );

    // A disabled out-of-stock row ignores the click and renders muted
    let sold_out = OrderCell::new("Шорты Вторник", "690 ₽")
        .selected(true)
        .enabled(false)
        .on_item_click("toggle-item");
    assert!(sold_out.press().is_none());
    assert_eq!(
        sold_out.computed_styles(&theme).text_color,
        neutral::NEUTRAL_400
    );

    // The enabled row emits exactly one event per click
    let in_stock = OrderCell::new("Рубашка Воскресенье", "300 ₽").on_item_click("toggle-item");
    assert_eq!(in_stock.press().unwrap().handler, "toggle-item");

    // Cart button carries the total
    let cart = CartButton::new("В корзину", "990 ₽").on_click("checkout");
    assert_eq!(cart.press().unwrap().handler, "checkout");
    assert_eq!(cart.computed_styles(&theme).container, theme.scheme.primary);
}

/// An order summary: header text, itemized lines, independent actions
#[test]
fn test_order_summary_card() {
    let theme = light_theme();
    let card = OrderCardOpened::new("123456", "2580 Р", "26 апреля, 14:00", "Оплачен")
        .items(vec![
            OrderItemDetail::new("Рубашка Воскресенье", 1, "300 Р"),
            OrderItemDetail::new("Шорты Вторник", 2, "690 Р"),
        ])
        .on_view_receipt("receipt")
        .on_cancel_order("cancel");

    assert_eq!(card.header_title(), "Заказ № 123456");
    assert_eq!(card.items[1].line_label(), "2 x 690 Р");

    // Help was never wired; the other two actions stay independent
    assert!(card.help_press().is_none());
    assert_eq!(card.view_receipt_press().unwrap().handler, "receipt");
    assert_eq!(card.cancel_press().unwrap().handler, "cancel");

    let styles = card.computed_styles(&theme);
    assert_eq!(styles.cancel_border, theme.scheme.error);
}

/// The select dropdown walks its whole state machine
#[test]
fn test_select_field_state_machine() {
    let field = SelectField::new(vec![
        SelectItem::new("msk", "Москва"),
        SelectItem::new("spb", "Санкт-Петербург"),
    ])
    .label("Город")
    .on_item_selected("city-picked");

    // closed -> open on field click
    let open = field.field_press();
    assert_eq!(open, OverlayState::Open);

    // open -> closed on item click, selection fires once with items[i]
    let field = field.state(open);
    let (state, event) = field.item_press(1);
    assert_eq!(state, OverlayState::Closed);
    let payload = event.unwrap().payload.unwrap();
    assert_eq!(payload["id"], "spb");

    // open -> closed on outside dismissal, no selection
    let reopened = field.state(OverlayState::Open);
    assert_eq!(reopened.dismiss(), OverlayState::Closed);
}

/// A job feed screen: search bar, filter chips, listing card, tab bar
#[test]
fn test_job_feed_screen() {
    let theme = light_theme();

    let search = MatuleSearchBar::new("", "Поиск вакансий")
        .on_value_change("query-changed")
        .on_clear_click("query-cleared")
        .on_search("query-committed");
    assert!(search.placeholder_visible());
    assert!(!search.clear_visible());
    let _ = search.edit("designer").unwrap();
    assert_eq!(search.search_commit().unwrap().handler, "query-committed");

    let all = MatuleFilterChip::new("Все вакансии")
        .selected(true)
        .on_click("filter-all");
    assert!(all.computed_styles(&theme).border.is_none());

    let card = MatuleJobCard::new("Senior Product Designer", "Matule Studio")
        .location("Москва · гибрид")
        .salary("от 180 000 ₽")
        .tags(vec!["Полная занятость".to_string(), "Figma".to_string()])
        .experience("Middle")
        .published_at("3 дня назад")
        .on_bookmark_click("bookmark")
        .on_apply_click("apply");
    assert_eq!(
        card.visible_tags(),
        vec!["Middle", "Полная занятость", "Figma"]
    );
    assert_eq!(card.bookmark_press().unwrap().handler, "bookmark");

    let tabs = BottomTabBar::new(vec![
        TabItem::new("Главная", "home").selected_icon("home-filled"),
        TabItem::new("Профиль", "person"),
    ])
    .selected_index(0)
    .on_item_selected("tab-picked");
    assert_eq!(tabs.icon_for(0), Some("home-filled"));
    assert_eq!(
        tabs.tab_press(1).unwrap().payload,
        Some(serde_json::json!(1))
    );
}

/// Status displays stay deterministic and progress is passed through
#[test]
fn test_status_displays() {
    let paid = StatusChip::new("Оплачен", StatusType::Success).computed_styles();
    assert_eq!(paid.foreground, status::SUCCESS);
    assert_eq!(
        paid.background,
        ui_tokens::with_alpha(status::SUCCESS, 0.1)
    );

    // Same input, same output, across repeated resolutions
    let again = StatusChip::new("Оплачен", StatusType::Success).computed_styles();
    assert_eq!(paid, again);

    let bar = ProgressIndicator::new(0.75).color(status::INFO);
    assert_eq!(bar.fill_fraction(), 0.75);
    // No clamping on the way through
    assert_eq!(ProgressIndicator::new(1.4).fill_fraction(), 1.4);
}

/// Token lookups are stable within one resolution
#[test]
fn test_token_lookup_round_trip() {
    let theme = light_theme();
    let first = theme.typography.get(TypeVariant::TitleMedium).cloned();
    let second = theme.typography.get(TypeVariant::TitleMedium).cloned();
    assert_eq!(first, second);

    let primary_a = theme.scheme.primary.clone();
    let primary_b = theme.scheme.primary.clone();
    assert_eq!(primary_a, primary_b);
}

/// Component descriptions serialize for the host boundary
#[test]
fn test_component_serialization_round_trip() {
    let button = PrimaryButton::new("Сохранить")
        .on_click("save")
        .loading(true);
    let json = serde_json::to_string(&button).unwrap();
    let back: PrimaryButton = serde_json::from_str(&json).unwrap();
    assert_eq!(back, button);
    assert!(back.press().is_none());

    let field = SelectField::new(vec![SelectItem::new("a", "A")]).on_item_selected("picked");
    let json = serde_json::to_string(&field).unwrap();
    let back: SelectField = serde_json::from_str(&json).unwrap();
    assert_eq!(back, field);
}
