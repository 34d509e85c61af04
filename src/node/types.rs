//! Presentation, slide and visual node types.
use super::style::{Geometry, ShapeStyle, StyleRepr, TextStyle};
use serde::de::{self, Error as _, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Aspect-ratio preset requested by a presentation.
///
/// Parsing never fails: any string other than `"16x10"`, `"4x3"` or `"wide"`
/// selects [`Layout::Layout16x9`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    #[default]
    Layout16x9,
    Layout16x10,
    Layout4x3,
    Wide,
}

impl Layout {
    /// Identifier used in presentation trees.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layout16x9 => "16x9",
            Self::Layout16x10 => "16x10",
            Self::Layout4x3 => "4x3",
            Self::Wide => "wide",
        }
    }
}

impl From<&str> for Layout {
    fn from(value: &str) -> Self {
        match value {
            "16x10" => Self::Layout16x10,
            "4x3" => Self::Layout4x3,
            "wide" => Self::Wide,
            _ => Self::Layout16x9,
        }
    }
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.as_str().to_string()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either a single child or an ordered list of children.
///
/// A mapping reads as [`Children::One`] and a sequence as [`Children::Many`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Children<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Children<T> {
    /// Children as an ordered slice; a lone child becomes a one-element slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Many(items) => items,
            Self::One(item) => std::slice::from_ref(item),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<T> for Children<T> {
    fn from(item: T) -> Self {
        Self::One(item)
    }
}

impl<T> From<Vec<T>> for Children<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items)
    }
}

impl<'de, T> Deserialize<'de> for Children<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChildrenVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ChildrenVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = Children<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a node or a list of nodes")
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Vec::deserialize(de::value::SeqAccessDeserializer::new(seq)).map(Children::Many)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize(de::value::MapAccessDeserializer::new(map)).map(Children::One)
            }
        }

        deserializer.deserialize_any(ChildrenVisitor(PhantomData))
    }
}

impl<'a, T> IntoIterator for &'a Children<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Root of a presentation tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresentationNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children<SlideNode>>,
}

impl PresentationNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_children(mut self, children: impl Into<Children<SlideNode>>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Slides in document order.
    pub fn slides(&self) -> &[SlideNode] {
        self.children.as_ref().map_or(&[], Children::as_slice)
    }

    /// Parse a presentation tree from YAML.
    ///
    /// ```rust
    /// use deckrender::node::{Layout, PresentationNode};
    ///
    /// let tree = PresentationNode::from_yaml_str(
    ///     "layout: wide\nchildren:\n  hidden: true\n",
    /// )?;
    /// assert_eq!(tree.layout, Some(Layout::Wide));
    /// assert_eq!(tree.slides().len(), 1);
    /// # Ok::<(), deckrender::RenderError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> crate::Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| crate::RenderError::InvalidTree(e.to_string()))
    }
}

/// One slide of a presentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlideNode {
    /// Unset leaves the encoder's default visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children<VisualNode>>,
}

impl SlideNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn with_children(mut self, children: impl Into<Children<VisualNode>>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Visual nodes in input order.
    pub fn nodes(&self) -> &[VisualNode] {
        self.children.as_ref().map_or(&[], Children::as_slice)
    }
}

/// A leaf content element positioned on a slide.
///
/// The `kind` key selects the variant. Any other `kind` reads as
/// [`VisualNode::Unrecognized`]; its remaining keys must still have the
/// expected types but are otherwise dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VisualNode {
    Text(TextNode),
    Image(ImageNode),
    Shape(ShapeNode),
    /// Any other `kind`
    Unrecognized,
}

impl<'de> Deserialize<'de> for VisualNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // All keys of all kinds, so the node is read without buffering.
        #[derive(Deserialize)]
        struct Repr {
            kind: String,
            #[serde(default)]
            url: Option<String>,
            #[serde(default, rename = "type")]
            shape_type: Option<String>,
            #[serde(default)]
            children: Option<String>,
            #[serde(default)]
            style: Option<StyleRepr>,
        }

        fn required<T, E: de::Error>(value: Option<T>, field: &'static str) -> Result<T, E> {
            value.ok_or_else(|| E::missing_field(field))
        }

        let Repr {
            kind,
            url,
            shape_type,
            children,
            style,
        } = Repr::deserialize(deserializer)?;
        let node = match kind.as_str() {
            "text" => Self::Text(TextNode {
                children,
                style: required::<_, D::Error>(style, "style")?
                    .into_text_style()
                    .map_err(D::Error::missing_field)?,
            }),
            "image" => Self::Image(ImageNode {
                url: required::<_, D::Error>(url, "url")?,
                style: required::<_, D::Error>(style, "style")?
                    .geometry()
                    .map_err(D::Error::missing_field)?,
            }),
            "shape" => Self::Shape(ShapeNode {
                shape_type: required::<_, D::Error>(shape_type, "type")?,
                children,
                style: required::<_, D::Error>(style, "style")?
                    .into_shape_style()
                    .map_err(D::Error::missing_field)?,
            }),
            _ => Self::Unrecognized,
        };
        Ok(node)
    }
}

impl VisualNode {
    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Shape(_) => "shape",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<TextNode> for VisualNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<ImageNode> for VisualNode {
    fn from(node: ImageNode) -> Self {
        Self::Image(node)
    }
}

impl From<ShapeNode> for VisualNode {
    fn from(node: ShapeNode) -> Self {
        Self::Shape(node)
    }
}

impl From<TextNode> for Children<VisualNode> {
    fn from(node: TextNode) -> Self {
        Self::One(node.into())
    }
}

impl From<ImageNode> for Children<VisualNode> {
    fn from(node: ImageNode) -> Self {
        Self::One(node.into())
    }
}

impl From<ShapeNode> for Children<VisualNode> {
    fn from(node: ShapeNode) -> Self {
        Self::One(node.into())
    }
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    pub style: TextStyle,
}

impl TextNode {
    pub fn new(style: TextStyle) -> Self {
        Self {
            children: None,
            style,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = Some(text.into());
        self
    }
}

/// An image loaded from `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    pub url: String,
    pub style: Geometry,
}

impl ImageNode {
    pub fn new(url: impl Into<String>, style: Geometry) -> Self {
        Self {
            url: url.into(),
            style,
        }
    }
}

/// A preset geometry, optionally carrying text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    /// Shape-kind identifier, e.g. `"rect"` or `"ellipse"`
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    pub style: ShapeStyle,
}

impl ShapeNode {
    pub fn new(shape_type: impl Into<String>, style: ShapeStyle) -> Self {
        Self {
            shape_type: shape_type.into(),
            children: None,
            style,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = Some(text.into());
        self
    }
}
