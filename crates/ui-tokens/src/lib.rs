//! Design tokens for the UI kit
//!
//! This crate is the leaf layer of the kit: a closed set of named color
//! constants, the eighteen-style type scale, and the light/dark theme
//! resolution that binds them together.
//!
//! # Modules
//!
//! - [`color`] - Named color constants and hex utilities
//! - [`typography`] - Text styles and the resolved type scale
//! - [`theme`] - Color schemes, resolution rules, and theme state
//!
//! # Example
//!
//! ```rust
//! use ui_tokens::theme::{resolve_theme, ThemeOptions};
//! use ui_tokens::typography::TypeVariant;
//!
//! let options = ThemeOptions { dark_theme: true, dynamic_color: false };
//! let theme = resolve_theme(&options, None);
//! assert!(theme.is_dark());
//!
//! let title = theme.typography.get(TypeVariant::TitleLarge);
//! assert!(title.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod theme;
pub mod typography;

// Re-export commonly used types
pub use color::{parse_hex, rgb_to_hex, with_alpha, Color};
pub use theme::{
    dark_scheme, light_scheme, resolve_theme, ColorScheme, DynamicSchemes, SchemeSource, Theme,
    ThemeError, ThemeName, ThemeOptions, ThemeState,
};
pub use typography::{FontFamily, TypeScale, TypeStyle, TypeVariant, ALL_VARIANTS};
