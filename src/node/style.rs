//! Style records attached to visual nodes.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Position and size of a visual node.
///
/// The values are handed to the encoder untouched, which reads them as inches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Style of a text node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(flatten)]
    pub geometry: Geometry,
    /// `#RRGGBB` or a theme color name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    /// Size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
}

impl TextStyle {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_font_face(mut self, font_face: impl Into<String>) -> Self {
        self.font_face = Some(font_face.into());
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.vertical_align = Some(vertical_align);
        self
    }
}

/// Style of a shape node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl ShapeStyle {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            background_color: None,
        }
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// Every style key a visual node may carry, read in one pass.
///
/// Geometry stays optional here so that nodes of unknown kinds can omit it;
/// the typed styles reject a missing coordinate.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StyleRepr {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    w: Option<f64>,
    #[serde(default)]
    h: Option<f64>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    font_face: Option<String>,
    #[serde(default)]
    font_size: Option<f64>,
    #[serde(default)]
    align: Option<Align>,
    #[serde(default)]
    vertical_align: Option<VerticalAlign>,
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleRepr {
    pub(super) fn geometry(&self) -> Result<Geometry, &'static str> {
        Ok(Geometry {
            x: self.x.ok_or("x")?,
            y: self.y.ok_or("y")?,
            w: self.w.ok_or("w")?,
            h: self.h.ok_or("h")?,
        })
    }

    pub(super) fn into_text_style(self) -> Result<TextStyle, &'static str> {
        Ok(TextStyle {
            geometry: self.geometry()?,
            color: self.color,
            font_face: self.font_face,
            font_size: self.font_size,
            align: self.align,
            vertical_align: self.vertical_align,
        })
    }

    pub(super) fn into_shape_style(self) -> Result<ShapeStyle, &'static str> {
        Ok(ShapeStyle {
            geometry: self.geometry()?,
            background_color: self.background_color,
        })
    }
}

impl<'de> Deserialize<'de> for TextStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StyleRepr::deserialize(deserializer)?
            .into_text_style()
            .map_err(D::Error::missing_field)
    }
}

impl<'de> Deserialize<'de> for ShapeStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StyleRepr::deserialize(deserializer)?
            .into_shape_style()
            .map_err(D::Error::missing_field)
    }
}
