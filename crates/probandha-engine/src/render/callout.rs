use serde::{Deserialize, Serialize};

/// Visual treatment of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalloutType {
    Info,
    Warning,
    Error,
    Success,
    #[default]
    Default,
}

/// CSS class and icon for one callout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutStyle {
    pub class: &'static str,
    pub icon: &'static str,
}

const STYLES: [(CalloutType, CalloutStyle); 5] = [
    (
        CalloutType::Info,
        CalloutStyle {
            class: "callout callout-info",
            icon: "ℹ️",
        },
    ),
    (
        CalloutType::Warning,
        CalloutStyle {
            class: "callout callout-warning",
            icon: "⚠️",
        },
    ),
    (
        CalloutType::Error,
        CalloutStyle {
            class: "callout callout-error",
            icon: "❌",
        },
    ),
    (
        CalloutType::Success,
        CalloutStyle {
            class: "callout callout-success",
            icon: "✅",
        },
    ),
    (
        CalloutType::Default,
        CalloutStyle {
            class: "callout callout-default",
            icon: "💡",
        },
    ),
];

impl CalloutType {
    /// Parses an authored type label. Unrecognized labels are not an error;
    /// they get the default treatment.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "info" => CalloutType::Info,
            "warning" => CalloutType::Warning,
            "error" => CalloutType::Error,
            "success" => CalloutType::Success,
            _ => CalloutType::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CalloutType::Info => "info",
            CalloutType::Warning => "warning",
            CalloutType::Error => "error",
            CalloutType::Success => "success",
            CalloutType::Default => "default",
        }
    }

    pub fn style(self) -> CalloutStyle {
        STYLES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, style)| *style)
            .unwrap_or(STYLES[4].1)
    }
}
