//! Translation of a single visual node into an encoder primitive.
use super::color::normalize_color;
use super::options::UnrecognizedNodePolicy;
use crate::common::{RenderError, Result};
use crate::encoder::{
    self, Frame, ImageOptions, ShapeKind, ShapeOptions, Slide, TextAlign, TextOptions,
    VerticalAlign as EncoderVerticalAlign,
};
use crate::image::ImageResolver;
use crate::node::{Align, Geometry, ImageNode, ShapeNode, TextNode, VerticalAlign, VisualNode};
use tracing::{debug, warn};

/// A translated primitive waiting to be appended to a slide.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Primitive {
    Text { text: String, options: TextOptions },
    Image(ImageOptions),
    Shape { kind: ShapeKind, options: ShapeOptions },
}

impl Primitive {
    pub(crate) fn apply(self, slide: &mut Slide) -> encoder::Result<()> {
        match self {
            Self::Text { text, options } => slide.add_text(&text, options),
            Self::Image(options) => slide.add_image(options)?,
            Self::Shape { kind, options } => slide.add_shape(kind, options),
        }
        Ok(())
    }
}

/// Shared state for every node of one render.
pub(crate) struct RenderContext<'a> {
    pub(crate) resolver: &'a ImageResolver,
    pub(crate) unrecognized: UnrecognizedNodePolicy,
}

impl From<Geometry> for Frame {
    fn from(g: Geometry) -> Self {
        Frame::new(g.x, g.y, g.w, g.h)
    }
}

impl From<Align> for TextAlign {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Self::Left,
            Align::Center => Self::Center,
            Align::Right => Self::Right,
            Align::Justify => Self::Justify,
        }
    }
}

impl From<VerticalAlign> for EncoderVerticalAlign {
    fn from(valign: VerticalAlign) -> Self {
        match valign {
            VerticalAlign::Top => Self::Top,
            VerticalAlign::Middle => Self::Middle,
            VerticalAlign::Bottom => Self::Bottom,
        }
    }
}

fn normalized(color: Option<&String>) -> Option<String> {
    color.map(|c| normalize_color(c).into_owned())
}

/// Render one visual node.
///
/// Returns `None` only for a skipped unrecognized node. Image nodes suspend
/// until their locator resolves.
pub(crate) async fn render_visual(
    ctx: &RenderContext<'_>,
    slide: usize,
    index: usize,
    node: &VisualNode,
) -> Result<Option<Primitive>> {
    let primitive = match node {
        VisualNode::Text(text) => text_primitive(text),
        VisualNode::Image(image) => image_primitive(ctx, image).await?,
        VisualNode::Shape(shape) => shape_primitive(shape)?,
        VisualNode::Unrecognized => {
            return match ctx.unrecognized {
                UnrecognizedNodePolicy::Skip => {
                    warn!(slide, index, "skipping unrecognized visual node");
                    Ok(None)
                }
                UnrecognizedNodePolicy::Fail => Err(RenderError::UnrecognizedNode { slide, index }),
            };
        }
    };
    debug!(slide, index, kind = node.kind(), "rendered visual node");
    Ok(Some(primitive))
}

fn text_primitive(node: &TextNode) -> Primitive {
    let style = &node.style;
    Primitive::Text {
        text: node.children.clone().unwrap_or_default(),
        options: TextOptions {
            frame: style.geometry.into(),
            color: normalized(style.color.as_ref()),
            font_face: style.font_face.clone(),
            font_size: style.font_size,
            align: style.align.map(Into::into),
            valign: style.vertical_align.map(Into::into),
            ..Default::default()
        },
    }
}

async fn image_primitive(ctx: &RenderContext<'_>, node: &ImageNode) -> Result<Primitive> {
    let data = ctx
        .resolver
        .resolve(&node.url)
        .await
        .map_err(|e| RenderError::resource_fetch(&node.url, e))?;
    Ok(Primitive::Image(ImageOptions {
        frame: node.style.into(),
        data: data.to_string(),
    }))
}

fn shape_primitive(node: &ShapeNode) -> Result<Primitive> {
    let kind = ShapeKind::from_identifier(&node.shape_type)?;
    let frame: Frame = node.style.geometry.into();
    let fill = normalized(node.style.background_color.as_ref());
    Ok(match &node.children {
        Some(text) => Primitive::Text {
            text: text.clone(),
            options: TextOptions {
                frame,
                shape: Some(kind),
                fill,
                ..Default::default()
            },
        },
        None => Primitive::Shape {
            kind,
            options: ShapeOptions { frame, fill },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ShapeStyle, TextStyle};

    #[test]
    fn test_text_translation() {
        let node = TextNode::new(
            TextStyle::new(Geometry::new(1.0, 2.0, 3.0, 4.0))
                .with_color("#abcdef")
                .with_font_face("Arial")
                .with_font_size(18.0)
                .with_align(Align::Center)
                .with_vertical_align(VerticalAlign::Bottom),
        )
        .with_text("Hi");
        let Primitive::Text { text, options } = text_primitive(&node) else {
            panic!("expected text primitive");
        };
        assert_eq!(text, "Hi");
        assert_eq!(options.frame, Frame::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(options.color.as_deref(), Some("ABCDEF"));
        assert_eq!(options.font_face.as_deref(), Some("Arial"));
        assert_eq!(options.font_size, Some(18.0));
        assert_eq!(options.align, Some(TextAlign::Center));
        assert_eq!(options.valign, Some(EncoderVerticalAlign::Bottom));
        assert_eq!(options.shape, None);
        assert_eq!(options.fill, None);
    }

    #[test]
    fn test_text_unset_fields_stay_unset() {
        let node = TextNode::new(TextStyle::new(Geometry::new(0.0, 0.0, 1.0, 1.0)));
        let Primitive::Text { text, options } = text_primitive(&node) else {
            panic!("expected text primitive");
        };
        assert_eq!(text, "");
        assert_eq!(options.color, None);
        assert_eq!(options.font_face, None);
        assert_eq!(options.font_size, None);
        assert_eq!(options.align, None);
        assert_eq!(options.valign, None);
    }

    #[test]
    fn test_shape_translation() {
        let style = ShapeStyle::new(Geometry::new(1.0, 1.0, 2.0, 2.0)).with_background_color("#00ff00");
        let bare = shape_primitive(&ShapeNode::new("ellipse", style.clone())).unwrap();
        assert_eq!(
            bare,
            Primitive::Shape {
                kind: ShapeKind::ELLIPSE,
                options: ShapeOptions {
                    frame: Frame::new(1.0, 1.0, 2.0, 2.0),
                    fill: Some("00FF00".to_string()),
                },
            }
        );

        let with_text = shape_primitive(&ShapeNode::new("ellipse", style).with_text("Go")).unwrap();
        let Primitive::Text { text, options } = with_text else {
            panic!("expected text-bearing shape");
        };
        assert_eq!(text, "Go");
        assert_eq!(options.shape, Some(ShapeKind::ELLIPSE));
        assert_eq!(options.frame, Frame::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(options.fill.as_deref(), Some("00FF00"));
    }

    #[test]
    fn test_unknown_shape_kind_is_encoder_error() {
        let node = ShapeNode::new("blob", ShapeStyle::new(Geometry::default()));
        let err = shape_primitive(&node).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Encoder(encoder::EncodeError::UnknownShapeKind(ref kind)) if kind == "blob"
        ));
    }
}
