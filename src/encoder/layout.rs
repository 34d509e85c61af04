//! Slide size presets.

/// The fixed set of slide size presets a document can use.
///
/// `Layout16x9` is the default for new documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutPreset {
    /// 10" x 5.625"
    #[default]
    Layout16x9,
    /// 10" x 6.25"
    Layout16x10,
    /// 10" x 7.5"
    Layout4x3,
    /// 13.333" x 7.5"
    LayoutWide,
}

impl LayoutPreset {
    /// Preset name as understood by presentation tooling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Layout16x9 => "LAYOUT_16x9",
            Self::Layout16x10 => "LAYOUT_16x10",
            Self::Layout4x3 => "LAYOUT_4x3",
            Self::LayoutWide => "LAYOUT_WIDE",
        }
    }

    /// Slide width in EMUs.
    pub fn width_emu(&self) -> i64 {
        match self {
            Self::Layout16x9 | Self::Layout16x10 | Self::Layout4x3 => 9_144_000,
            Self::LayoutWide => 12_192_000,
        }
    }

    /// Slide height in EMUs.
    pub fn height_emu(&self) -> i64 {
        match self {
            Self::Layout16x9 => 5_143_500,
            Self::Layout16x10 => 5_715_000,
            Self::Layout4x3 | Self::LayoutWide => 6_858_000,
        }
    }

    /// Value of the `type` attribute on `<p:sldSz>`, if the preset has one.
    pub(crate) fn size_type(&self) -> Option<&'static str> {
        match self {
            Self::Layout16x9 => Some("screen16x9"),
            Self::Layout16x10 => Some("screen16x10"),
            Self::Layout4x3 => Some("screen4x3"),
            Self::LayoutWide => None,
        }
    }
}
