//! The job-listing component family
//!
//! A more elaborately styled trio for a job-search feature: the listing
//! card with its bookmark toggle and tag row, the two-state filter chip,
//! and the floating-placeholder search bar.

use crate::{EventHandler, UiEvent};
use serde::{Deserialize, Serialize};
use ui_tokens::color::{brand, neutral, with_alpha, Color};
use ui_tokens::theme::Theme;
use ui_tokens::typography::{weight, TypeStyle, TypeVariant};

// =============================================================================
// Filter Chip
// =============================================================================

/// Resolved visual attributes for the filter chip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatuleChipStyles {
    /// Chip fill
    pub background: Color,
    /// Label and icon color
    pub content: Color,
    /// Stroke, absent while selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
    /// Corner radius
    pub corner_radius: f32,
    /// Leading icon size
    pub icon_size: f32,
    /// Label text style
    pub text: TypeStyle,
}

/// Two-state filter chip for the job feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatuleFilterChip {
    /// Label text
    pub label: String,
    /// Selected visual state (caller-owned)
    pub selected: bool,
    /// Optional leading icon glyph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<String>,
    /// Click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}

impl MatuleFilterChip {
    /// Create a filter chip
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            selected: false,
            leading_icon: None,
            on_click: None,
        }
    }

    /// Set the selected state
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the leading icon glyph
    pub fn leading_icon(mut self, icon: impl Into<String>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    /// Wire the click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// One user activation
    pub fn press(&self) -> Option<UiEvent> {
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> MatuleChipStyles {
        let (background, content, border) = if self.selected {
            (
                with_alpha(&theme.scheme.primary, 0.12),
                theme.scheme.primary.clone(),
                None,
            )
        } else {
            (
                neutral::NEUTRAL_100.to_string(),
                neutral::NEUTRAL_900.to_string(),
                Some(neutral::NEUTRAL_200.to_string()),
            )
        };
        MatuleChipStyles {
            background,
            content,
            border,
            corner_radius: 18.0,
            icon_size: 16.0,
            text: TypeVariant::LabelLarge.style(),
        }
    }
}

// =============================================================================
// Job Card
// =============================================================================

/// Resolved visual attributes for the job card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatuleJobCardStyles {
    /// Gradient start fill
    pub gradient_start: Color,
    /// Gradient end fill
    pub gradient_end: Color,
    /// Corner radius
    pub corner_radius: f32,
    /// Drop-shadow elevation
    pub elevation: f32,
    /// Internal padding on all sides
    pub padding: f32,
    /// Salary text color
    pub salary_color: Color,
    /// Location icon tint
    pub location_tint: Color,
    /// Recency icon and text color
    pub recency_color: Color,
    /// Tag fill
    pub tag_background: Color,
    /// Tag text color
    pub tag_content: Color,
    /// Tag corner radius
    pub tag_corner_radius: f32,
}

/// Job listing card with a caller-controlled bookmark toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatuleJobCard {
    /// Job title
    pub title: String,
    /// Company name
    pub company: String,
    /// Location line (hidden when blank)
    pub location: String,
    /// Salary line (hidden when absent or blank)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    /// Tag texts, blank entries skipped
    pub tags: Vec<String>,
    /// Experience tag, rendered first when non-blank
    pub experience: String,
    /// Recency line ("3 дня назад")
    pub published_at: String,
    /// Bookmarked visual state (caller-owned, toggled via the callback)
    pub bookmarked: bool,
    /// Bookmark handler; its absence hides the bookmark button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_bookmark_click: Option<EventHandler>,
    /// Apply handler; its absence hides the apply action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_apply_click: Option<EventHandler>,
    /// Whole-card click handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<EventHandler>,
}

impl MatuleJobCard {
    /// Apply action label
    pub const APPLY_LABEL: &'static str = "Откликнуться";

    /// Create a job card
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: String::new(),
            salary: None,
            tags: Vec::new(),
            experience: String::new(),
            published_at: String::new(),
            bookmarked: false,
            on_bookmark_click: None,
            on_apply_click: None,
            on_click: None,
        }
    }

    /// Set the location line
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the salary line
    pub fn salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    /// Set the tag texts
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the experience tag
    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    /// Set the recency line
    pub fn published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = published_at.into();
        self
    }

    /// Set the bookmarked state
    pub fn bookmarked(mut self, bookmarked: bool) -> Self {
        self.bookmarked = bookmarked;
        self
    }

    /// Wire the bookmark handler
    pub fn on_bookmark_click(mut self, handler: impl Into<String>) -> Self {
        self.on_bookmark_click = Some(handler.into());
        self
    }

    /// Wire the apply handler
    pub fn on_apply_click(mut self, handler: impl Into<String>) -> Self {
        self.on_apply_click = Some(handler.into());
        self
    }

    /// Wire the whole-card click handler
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Press the bookmark button. The card does not flip `bookmarked`
    /// itself; the caller does, in response to the event.
    pub fn bookmark_press(&self) -> Option<UiEvent> {
        self.on_bookmark_click.as_deref().map(UiEvent::plain)
    }

    /// Press the apply action
    pub fn apply_press(&self) -> Option<UiEvent> {
        self.on_apply_click.as_deref().map(UiEvent::plain)
    }

    /// Click on the card body
    pub fn press(&self) -> Option<UiEvent> {
        self.on_click.as_deref().map(UiEvent::plain)
    }

    /// Whether the bookmark button renders
    pub fn shows_bookmark(&self) -> bool {
        self.on_bookmark_click.is_some()
    }

    /// Whether the apply action renders
    pub fn shows_apply(&self) -> bool {
        self.on_apply_click.is_some()
    }

    /// Whether the salary line renders
    pub fn shows_salary(&self) -> bool {
        self.salary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Whether the location row renders
    pub fn shows_location(&self) -> bool {
        !self.location.trim().is_empty()
    }

    /// The tags to render: the experience tag first, then the non-blank
    /// tag texts in order
    pub fn visible_tags(&self) -> Vec<&str> {
        let mut visible = Vec::new();
        if !self.experience.trim().is_empty() {
            visible.push(self.experience.as_str());
        }
        visible.extend(
            self.tags
                .iter()
                .map(String::as_str)
                .filter(|tag| !tag.trim().is_empty()),
        );
        visible
    }

    /// Bookmark glyph for the current state
    pub fn bookmark_icon(&self) -> &'static str {
        if self.bookmarked {
            "bookmark"
        } else {
            "bookmark-border"
        }
    }

    /// Bookmark tint for the current state
    pub fn bookmark_tint(&self, theme: &Theme) -> Color {
        if self.bookmarked {
            theme.scheme.primary.clone()
        } else {
            neutral::NEUTRAL_500.to_string()
        }
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> MatuleJobCardStyles {
        MatuleJobCardStyles {
            gradient_start: brand::WHITE.to_string(),
            gradient_end: neutral::NEUTRAL_100.to_string(),
            corner_radius: 28.0,
            elevation: 8.0,
            padding: 24.0,
            salary_color: theme.scheme.primary.clone(),
            location_tint: theme.scheme.primary.clone(),
            recency_color: neutral::NEUTRAL_500.to_string(),
            tag_background: neutral::NEUTRAL_100.to_string(),
            tag_content: neutral::NEUTRAL_900.to_string(),
            tag_corner_radius: 14.0,
        }
    }

    /// Title text style (title medium enlarged to 20sp)
    pub fn title_style(&self) -> TypeStyle {
        TypeVariant::TitleMedium.style().with_size(20.0)
    }

    /// Tag text style
    pub fn tag_style(&self) -> TypeStyle {
        TypeVariant::BodySmall.style().with_weight(weight::MEDIUM)
    }
}

// =============================================================================
// Search Bar
// =============================================================================

/// Resolved visual attributes for the job search bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatuleSearchBarStyles {
    /// Corner radius
    pub corner_radius: f32,
    /// Border stroke
    pub border: Color,
    /// Search glyph tint
    pub search_tint: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Entered text color
    pub text_color: Color,
    /// Clear button circle fill
    pub clear_background: Color,
    /// Clear glyph tint
    pub clear_tint: Color,
    /// Filter button fill (primary at 12% alpha)
    pub filter_background: Color,
    /// Filter glyph tint
    pub filter_tint: Color,
}

/// Floating-placeholder search bar for the job feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatuleSearchBar {
    /// The displayed text (caller-owned)
    pub value: String,
    /// Value-change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_value_change: Option<EventHandler>,
    /// Floating placeholder text
    pub placeholder: String,
    /// Filter handler; its absence hides the filter button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_filter_click: Option<EventHandler>,
    /// Clear handler; the clear button needs both text and this handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_clear_click: Option<EventHandler>,
    /// Committed-search handler (input-method search action)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_search: Option<EventHandler>,
}

impl MatuleSearchBar {
    /// Create a search bar displaying `value`
    pub fn new(value: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            on_value_change: None,
            placeholder: placeholder.into(),
            on_filter_click: None,
            on_clear_click: None,
            on_search: None,
        }
    }

    /// Wire the value-change handler
    pub fn on_value_change(mut self, handler: impl Into<String>) -> Self {
        self.on_value_change = Some(handler.into());
        self
    }

    /// Wire the filter handler
    pub fn on_filter_click(mut self, handler: impl Into<String>) -> Self {
        self.on_filter_click = Some(handler.into());
        self
    }

    /// Wire the clear handler
    pub fn on_clear_click(mut self, handler: impl Into<String>) -> Self {
        self.on_clear_click = Some(handler.into());
        self
    }

    /// Wire the committed-search handler
    pub fn on_search(mut self, handler: impl Into<String>) -> Self {
        self.on_search = Some(handler.into());
        self
    }

    /// Forward one proposed edit
    pub fn edit(&self, next: impl Into<String>) -> Option<UiEvent> {
        self.on_value_change
            .as_deref()
            .map(|handler| UiEvent::with_payload(handler, serde_json::Value::String(next.into())))
    }

    /// The floating placeholder disappears once any non-blank text is
    /// present
    pub fn placeholder_visible(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// The clear button needs text to clear AND a wired handler
    pub fn clear_visible(&self) -> bool {
        !self.value.is_empty() && self.on_clear_click.is_some()
    }

    /// Press the clear button
    pub fn clear_press(&self) -> Option<UiEvent> {
        if !self.clear_visible() {
            return None;
        }
        self.on_clear_click.as_deref().map(UiEvent::plain)
    }

    /// Whether the trailing filter button renders
    pub fn filter_visible(&self) -> bool {
        self.on_filter_click.is_some()
    }

    /// Press the filter button
    pub fn filter_press(&self) -> Option<UiEvent> {
        self.on_filter_click.as_deref().map(UiEvent::plain)
    }

    /// Commit the search from the input-method action
    pub fn search_commit(&self) -> Option<UiEvent> {
        self.on_search.as_deref().map(UiEvent::plain)
    }

    /// Resolve the visual attributes against a theme
    pub fn computed_styles(&self, theme: &Theme) -> MatuleSearchBarStyles {
        MatuleSearchBarStyles {
            corner_radius: 24.0,
            border: neutral::NEUTRAL_200.to_string(),
            search_tint: theme.scheme.primary.clone(),
            placeholder_color: neutral::NEUTRAL_500.to_string(),
            text_color: theme.scheme.on_surface.clone(),
            clear_background: neutral::NEUTRAL_100.to_string(),
            clear_tint: neutral::NEUTRAL_500.to_string(),
            filter_background: with_alpha(&theme.scheme.primary, 0.12),
            filter_tint: theme.scheme.primary.clone(),
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

    fn card() -> MatuleJobCard {
        MatuleJobCard::new("Senior Product Designer", "Matule Studio")
            .location("Москва · гибрид")
            .salary("от 180 000 ₽")
            .tags(vec![
                "Полная занятость".to_string(),
                "Удаленно".to_string(),
                "Figma".to_string(),
            ])
            .experience("Middle")
            .published_at("3 дня назад")
    }

    // ==========================================================================
    // Filter Chip Tests
    // ==========================================================================

    #[test]
    fn test_chip_selected_loses_border() {
        let theme = theme();
        let selected = MatuleFilterChip::new("Все вакансии")
            .selected(true)
            .computed_styles(&theme);
        assert_eq!(selected.background, with_alpha(&theme.scheme.primary, 0.12));
        assert_eq!(selected.content, theme.scheme.primary);
        assert!(selected.border.is_none());

        let unselected = MatuleFilterChip::new("Дизайн").computed_styles(&theme);
        assert_eq!(unselected.background, neutral::NEUTRAL_100);
        assert_eq!(unselected.content, neutral::NEUTRAL_900);
        assert_eq!(unselected.border.as_deref(), Some(neutral::NEUTRAL_200));
    }

    #[test]
    fn test_chip_press() {
        let chip = MatuleFilterChip::new("Дизайн").on_click("filter");
        assert_eq!(chip.press().unwrap().handler, "filter");
        assert!(MatuleFilterChip::new("Дизайн").press().is_none());
    }

    // ==========================================================================
    // Job Card Tests
    // ==========================================================================

    #[test]
    fn test_bookmark_is_caller_controlled() {
        let card = card().on_bookmark_click("bookmark");
        assert!(!card.bookmarked);
        assert_eq!(card.bookmark_press().unwrap().handler, "bookmark");
        // The card never flips the flag itself
        assert!(!card.bookmarked);

        assert_eq!(card.bookmark_icon(), "bookmark-border");
        assert_eq!(card.bookmarked(true).bookmark_icon(), "bookmark");
    }

    #[test]
    fn test_bookmark_tint_follows_state() {
        let theme = theme();
        assert_eq!(
            card().bookmarked(true).bookmark_tint(&theme),
            theme.scheme.primary
        );
        assert_eq!(card().bookmark_tint(&theme), neutral::NEUTRAL_500);
    }

    #[test]
    fn test_optional_affordances_hide_without_handlers() {
        let bare = MatuleJobCard::new("Designer", "Studio");
        assert!(!bare.shows_bookmark());
        assert!(!bare.shows_apply());
        assert!(bare.bookmark_press().is_none());
        assert!(bare.apply_press().is_none());
        assert!(bare.press().is_none());

        let wired = card()
            .on_bookmark_click("bookmark")
            .on_apply_click("apply")
            .on_click("open");
        assert!(wired.shows_bookmark());
        assert!(wired.shows_apply());
        assert_eq!(wired.apply_press().unwrap().handler, "apply");
        assert_eq!(wired.press().unwrap().handler, "open");
    }

    #[test]
    fn test_visible_tags_puts_experience_first_and_skips_blanks() {
        let card = card().tags(vec![
            "Полная занятость".to_string(),
            "  ".to_string(),
            "Figma".to_string(),
        ]);
        assert_eq!(
            card.visible_tags(),
            vec!["Middle", "Полная занятость", "Figma"]
        );

        let no_experience = card.experience("");
        assert_eq!(
            no_experience.visible_tags(),
            vec!["Полная занятость", "Figma"]
        );
    }

    #[test]
    fn test_salary_and_location_hide_when_blank() {
        assert!(card().shows_salary());
        assert!(card().shows_location());

        let blank = MatuleJobCard::new("Designer", "Studio").salary("  ");
        assert!(!blank.shows_salary());
        assert!(!blank.shows_location());
        assert!(!MatuleJobCard::new("Designer", "Studio").shows_salary());
    }

    #[test]
    fn test_job_card_styles() {
        let theme = theme();
        let styles = card().computed_styles(&theme);
        assert_eq!(styles.corner_radius, 28.0);
        assert_eq!(styles.elevation, 8.0);
        assert_eq!(styles.salary_color, theme.scheme.primary);
        assert_eq!(styles.tag_corner_radius, 14.0);

        assert_eq!(card().title_style().size, 20.0);
        assert_eq!(card().tag_style().weight, weight::MEDIUM);
        assert_eq!(MatuleJobCard::APPLY_LABEL, "Откликнуться");
    }

    // ==========================================================================
    // Search Bar Tests
    // ==========================================================================

    #[test]
    fn test_floating_placeholder_visibility() {
        let empty = MatuleSearchBar::new("", "Поиск вакансий");
        assert!(empty.placeholder_visible());

        let blank = MatuleSearchBar::new("   ", "Поиск вакансий");
        assert!(blank.placeholder_visible());

        let filled = MatuleSearchBar::new("Product Designer", "Поиск вакансий");
        assert!(!filled.placeholder_visible());
    }

    #[test]
    fn test_clear_needs_text_and_handler() {
        let no_handler = MatuleSearchBar::new("query", "Поиск вакансий");
        assert!(!no_handler.clear_visible());
        assert!(no_handler.clear_press().is_none());

        let no_text = MatuleSearchBar::new("", "Поиск вакансий").on_clear_click("clear");
        assert!(!no_text.clear_visible());

        let both = MatuleSearchBar::new("query", "Поиск вакансий").on_clear_click("clear");
        assert!(both.clear_visible());
        assert_eq!(both.clear_press().unwrap().handler, "clear");
    }

    #[test]
    fn test_filter_button_is_optional() {
        let without = MatuleSearchBar::new("", "Поиск вакансий");
        assert!(!without.filter_visible());
        assert!(without.filter_press().is_none());

        let with = MatuleSearchBar::new("", "Поиск вакансий").on_filter_click("filters");
        assert!(with.filter_visible());
        assert_eq!(with.filter_press().unwrap().handler, "filters");
    }

    #[test]
    fn test_edit_and_search_commit() {
        let bar = MatuleSearchBar::new("", "Поиск вакансий")
            .on_value_change("changed")
            .on_search("commit");
        let event = bar.edit("designer").unwrap();
        assert_eq!(event.payload, Some(serde_json::json!("designer")));
        assert_eq!(bar.search_commit().unwrap().handler, "commit");
    }

    #[test]
    fn test_search_bar_styles() {
        let theme = theme();
        let styles = MatuleSearchBar::new("", "Поиск вакансий").computed_styles(&theme);
        assert_eq!(styles.corner_radius, 24.0);
        assert_eq!(styles.search_tint, theme.scheme.primary);
        assert_eq!(
            styles.filter_background,
            with_alpha(&theme.scheme.primary, 0.12)
        );
    }
}
