//! Positioning and formatting options for slide primitives.

/// Position and size of a primitive on the slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    /// Value of the DrawingML `algn` attribute.
    pub(crate) fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// Value of the DrawingML `anchor` attribute.
    pub(crate) fn as_attr(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Options for a text primitive.
///
/// Fields left as `None` are not written, so the slide master defaults apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextOptions {
    pub frame: Frame,
    /// Text color: six hex digits (`"FF0000"`) or a theme color name (`"accent1"`)
    pub color: Option<String>,
    /// Font family
    pub font_face: Option<String>,
    /// Font size in points
    pub font_size: Option<f64>,
    pub align: Option<TextAlign>,
    pub valign: Option<VerticalAlign>,
    /// Draw the text inside this geometry instead of a plain text box
    pub shape: Option<super::ShapeKind>,
    /// Background fill, same color syntax as `color`
    pub fill: Option<String>,
}

/// Options for an image primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageOptions {
    pub frame: Frame,
    /// Image payload as a base64 data URI
    pub data: String,
}

/// Options for a bare geometry primitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeOptions {
    pub frame: Frame,
    pub fill: Option<String>,
}
