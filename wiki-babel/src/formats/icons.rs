//! Callout kinds with their style class and icon
//!
//! Centralizes the fixed callout enumeration so the card renderer and the
//! stylesheet agree on class names.

/// Recognized callout types. Anything else maps to [`CalloutKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Note,
    Tip,
    Warning,
    Danger,
    Info,
    Example,
    Quote,
    Unknown,
}

impl CalloutKind {
    /// Resolve the uppercase tag from a `> [!TAG]` marker.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "NOTE" => CalloutKind::Note,
            "TIP" => CalloutKind::Tip,
            "WARNING" => CalloutKind::Warning,
            "DANGER" => CalloutKind::Danger,
            "INFO" => CalloutKind::Info,
            "EXAMPLE" => CalloutKind::Example,
            "QUOTE" => CalloutKind::Quote,
            _ => CalloutKind::Unknown,
        }
    }

    /// Suffix of the `note-*` CSS class.
    pub fn css_class(self) -> &'static str {
        match self {
            CalloutKind::Note | CalloutKind::Info | CalloutKind::Unknown => "info",
            CalloutKind::Tip => "tip",
            CalloutKind::Warning => "warning",
            CalloutKind::Danger => "danger",
            CalloutKind::Example => "example",
            CalloutKind::Quote => "quote",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CalloutKind::Note | CalloutKind::Unknown => "📝",
            CalloutKind::Tip => "💡",
            CalloutKind::Warning => "⚠️",
            CalloutKind::Danger => "🚨",
            CalloutKind::Info => "ℹ️",
            CalloutKind::Example => "📋",
            CalloutKind::Quote => "💬",
        }
    }
}
