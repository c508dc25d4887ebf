//! Suggested event types and colors offered when creating an event.
//!
//! The `type` field of an event is free-form; these palettes are only the
//! values the form proposes.

/// A suggested event type with its display label and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTypeOption {
    /// Value stored in [`Event::event_type`](crate::models::event::Event::event_type)
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl EventTypeOption {
    /// Icon followed by the label, e.g. `"👥 Meeting"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

/// A named swatch from the color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub value: &'static str,
}

pub const DEFAULT_EVENT_TYPE: &str = "meeting";
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

pub const EVENT_TYPES: [EventTypeOption; 8] = [
    EventTypeOption {
        value: "meeting",
        label: "Meeting",
        icon: "👥",
    },
    EventTypeOption {
        value: "presentation",
        label: "Presentation",
        icon: "📊",
    },
    EventTypeOption {
        value: "review",
        label: "Review",
        icon: "📋",
    },
    EventTypeOption {
        value: "planning",
        label: "Planning",
        icon: "📅",
    },
    EventTypeOption {
        value: "workshop",
        label: "Workshop",
        icon: "🛠️",
    },
    EventTypeOption {
        value: "social",
        label: "Social",
        icon: "🎉",
    },
    EventTypeOption {
        value: "personal",
        label: "Personal",
        icon: "👤",
    },
    EventTypeOption {
        value: "other",
        label: "Other",
        icon: "📌",
    },
];

pub const EVENT_COLORS: [ColorOption; 10] = [
    ColorOption {
        name: "Blue",
        value: "#3b82f6",
    },
    ColorOption {
        name: "Red",
        value: "#ef4444",
    },
    ColorOption {
        name: "Green",
        value: "#10b981",
    },
    ColorOption {
        name: "Yellow",
        value: "#f59e0b",
    },
    ColorOption {
        name: "Purple",
        value: "#8b5cf6",
    },
    ColorOption {
        name: "Cyan",
        value: "#06b6d4",
    },
    ColorOption {
        name: "Orange",
        value: "#f97316",
    },
    ColorOption {
        name: "Lime",
        value: "#84cc16",
    },
    ColorOption {
        name: "Pink",
        value: "#ec4899",
    },
    ColorOption {
        name: "Gray",
        value: "#6b7280",
    },
];

/// Look up a suggested type by its stored value.
pub fn find_event_type(value: &str) -> Option<&'static EventTypeOption> {
    EVENT_TYPES.iter().find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::color::is_valid_hex_color;

    #[test]
    fn test_defaults_are_in_palettes() {
        assert!(find_event_type(DEFAULT_EVENT_TYPE).is_some());
        assert!(EVENT_COLORS.iter().any(|c| c.value == DEFAULT_EVENT_COLOR));
    }

    #[test]
    fn test_palette_colors_are_valid_hex() {
        assert!(EVENT_COLORS.iter().all(|c| is_valid_hex_color(c.value)));
    }

    #[test]
    fn test_find_event_type() {
        assert_eq!(find_event_type("review").map(|t| t.label), Some("Review"));
        assert!(find_event_type("Review").is_none());
        assert!(find_event_type("offsite").is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(EVENT_TYPES[0].display_name(), "👥 Meeting");
    }
}
