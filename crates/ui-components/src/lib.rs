//! UI component catalog
//!
//! Stateless, parameterized component descriptions: each component is a
//! plain configuration record the host reconstructs on every render pass
//! from caller-owned state. Components expose
//!
//! - builder-style constructors carrying each component's defaults,
//! - activation methods that turn a user gesture into at most one
//!   [`UiEvent`] (and into none at all when the component is disabled,
//!   loading, or the callback is simply not wired), and
//! - `computed_styles(&Theme)` accessors that bind the design tokens to a
//!   serializable style record for the host renderer.
//!
//! No component owns durable state. The only transient UI state (a
//! dropdown's open flag) is modeled as the caller-owned [`OverlayState`]
//! with pure transition methods.
//!
//! # Modules
//!
//! - [`buttons`] - The button family
//! - [`cards`] - Container cards
//! - [`inputs`] - Text capture fields
//! - [`select`] - Closed-list selection and the date field
//! - [`status`] - Status chips and the progress bar
//! - [`common`] - Tab bar, search bar, app bar, loading and empty states
//! - [`orders`] - Order line items and the opened order card
//! - [`results`] - Tabular result rows
//! - [`jobs`] - The job-listing component family

#![warn(clippy::all)]

use serde::{Deserialize, Serialize};

pub mod buttons;
pub mod cards;
pub mod common;
pub mod inputs;
pub mod jobs;
pub mod orders;
pub mod results;
pub mod select;
pub mod status;

// =============================================================================
// Common Types
// =============================================================================

/// Host-side callback identifier
pub type EventHandler = String;

/// An event handed back to the host after a user activation.
///
/// Activation methods return `None` instead of an event whenever the
/// interaction is inert: the component is disabled or loading, or no
/// handler was wired. That is the whole error-handling story of this
/// layer: invalid interaction degrades silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiEvent {
    /// The handler to invoke
    pub handler: EventHandler,
    /// Optional payload (new text value, selected item, tab index, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl UiEvent {
    /// An event with no payload
    pub fn plain(handler: &str) -> Self {
        Self {
            handler: handler.to_string(),
            payload: None,
        }
    }

    /// An event carrying a payload
    pub fn with_payload(handler: &str, payload: serde_json::Value) -> Self {
        Self {
            handler: handler.to_string(),
            payload: Some(payload),
        }
    }
}

/// Caller-owned open/closed state for overlay-bearing components.
///
/// Components never track this internally; transition methods return the
/// next state and the caller feeds it back on the next render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlayState {
    /// Overlay hidden
    #[default]
    Closed,
    /// Overlay visible
    Open,
}

impl OverlayState {
    /// Whether the overlay is visible
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open)
    }
}

// Re-export the catalog at the crate root
pub use buttons::{
    ButtonSize, ButtonStyles, CartButton, ChipButton, PrimaryButton, SecondaryButton, SizeVariant,
    SizedButton, SocialLoginButton, SpinnerStyles, TextOnlyButton,
};
pub use cards::{CardStyles, OutlinedCard, PrimaryCard};
pub use common::{
    default_tab_items, AppBar, BottomTabBar, EmptyState, LoadingScreen, SearchBar, TabItem,
    TabItemStyles,
};
pub use inputs::{AdvancedInput, PrimaryTextField, SmallNumberInput, TextFieldStyles};
pub use jobs::{MatuleFilterChip, MatuleJobCard, MatuleSearchBar};
pub use orders::{OrderCardOpened, OrderCell, OrderItemDetail};
pub use results::ResultTableCell;
pub use select::{DatePickerField, SelectField, SelectItem};
pub use status::{ProgressIndicator, StatusChip, StatusType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_event_serialization() {
        let event = UiEvent::plain("on_click");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"handler":"on_click"}"#);

        let event = UiEvent::with_payload("on_change", serde_json::json!("42"));
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"handler":"on_change","payload":"42"}"#);
    }

    #[test]
    fn test_overlay_state_default_is_closed() {
        assert_eq!(OverlayState::default(), OverlayState::Closed);
        assert!(!OverlayState::Closed.is_open());
        assert!(OverlayState::Open.is_open());
    }
}
