//! Status chips and the progress bar

use serde::{Deserialize, Serialize};
use ui_tokens::color::{brand, neutral, status, with_alpha, Color};
use ui_tokens::typography::{TypeStyle, TypeVariant};

// =============================================================================
// Status Type
// =============================================================================

/// The closed status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    /// Positive outcome (green family)
    Success,
    /// Caution (orange family)
    Warning,
    /// Failure (red family)
    Error,
    /// Informational (blue family)
    Info,
    /// No connotation (gray family)
    #[default]
    Neutral,
}

impl StatusType {
    /// Foreground color for this status
    pub fn foreground(&self) -> Color {
        match self {
            StatusType::Success => status::SUCCESS.to_string(),
            StatusType::Warning => status::WARNING.to_string(),
            StatusType::Error => status::ERROR.to_string(),
            StatusType::Info => status::INFO.to_string(),
            StatusType::Neutral => neutral::NEUTRAL_700.to_string(),
        }
    }

    /// Background color for this status: the status color at 10% alpha,
    /// except neutral which uses a solid light gray
    pub fn background(&self) -> Color {
        match self {
            StatusType::Neutral => neutral::NEUTRAL_200.to_string(),
            other => with_alpha(&other.foreground(), 0.1),
        }
    }
}

// =============================================================================
// Status Chip
// =============================================================================

/// Resolved visual attributes for a status chip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChipStyles {
    /// Pill fill
    pub background: Color,
    /// Label color
    pub foreground: Color,
    /// Corner radius
    pub corner_radius: f32,
    /// Horizontal padding
    pub padding_horizontal: f32,
    /// Vertical padding
    pub padding_vertical: f32,
    /// Label text style
    pub text: TypeStyle,
}

/// Pill-shaped status display. A pure function of its status input, with
/// no interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChip {
    /// Label text
    pub label: String,
    /// Status driving the color pair
    pub status: StatusType,
}

impl StatusChip {
    /// Create a status chip
    pub fn new(label: impl Into<String>, status: StatusType) -> Self {
        Self {
            label: label.into(),
            status,
        }
    }

    /// Resolve the visual attributes. Identical status inputs always yield
    /// identical color outputs.
    pub fn computed_styles(&self) -> StatusChipStyles {
        StatusChipStyles {
            background: self.status.background(),
            foreground: self.status.foreground(),
            corner_radius: 16.0,
            padding_horizontal: 12.0,
            padding_vertical: 6.0,
            text: TypeVariant::LabelMedium.style(),
        }
    }
}

// =============================================================================
// Progress Indicator
// =============================================================================

/// Resolved visual attributes for the progress bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStyles {
    /// Fill color
    pub color: Color,
    /// Track color
    pub track_color: Color,
    /// Rounded stroke caps
    pub round_caps: bool,
}

/// Horizontal progress bar.
///
/// The fill fraction is expected in [0.0, 1.0] but is passed through
/// unclamped: the caller owns the domain, and out-of-range values reach
/// the underlying bar primitive as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    /// Fill fraction, caller-supplied
    pub progress: f32,
    /// Fill color
    pub color: Color,
    /// Track color
    pub track_color: Color,
}

impl ProgressIndicator {
    /// Create a progress bar at `progress`
    pub fn new(progress: f32) -> Self {
        Self {
            progress,
            color: brand::PRIMARY.to_string(),
            track_color: neutral::NEUTRAL_200.to_string(),
        }
    }

    /// Override the fill color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// Override the track color
    pub fn track_color(mut self, color: impl Into<Color>) -> Self {
        self.track_color = color.into();
        self
    }

    /// The fraction handed to the bar primitive, exactly as supplied
    pub fn fill_fraction(&self) -> f32 {
        self.progress
    }

    /// Resolve the visual attributes
    pub fn computed_styles(&self) -> ProgressStyles {
        ProgressStyles {
            color: self.color.clone(),
            track_color: self.track_color.clone(),
            round_caps: true,
        }
    }
}
