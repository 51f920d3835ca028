//! UI symbols (markers, labels)

/// Row markers in Posts View
pub mod markers {
    /// Post carries media (▣)
    pub const MEDIA: char = '▣';
    /// Post was created manually (✎)
    pub const MANUAL: char = '✎';
    /// Video item in the gallery (▶)
    pub const VIDEO: char = '▶';
    /// Photo or document item in the gallery (■)
    pub const FILE: char = '■';
}

/// Empty state indicators
pub mod empty {
    /// Post without any text
    pub const NO_TEXT: &str = "(no text)";
    /// Missing metadata value
    pub const NONE: &str = "—";
}
