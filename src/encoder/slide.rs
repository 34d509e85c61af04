/// Slide types and implementation for the document encoder.
use super::constants::namespace;
use super::error::{EncodeError, Result};
use super::format::{Frame, ImageOptions, ShapeOptions, TextOptions};
use super::relmap::RelationshipMapper;
use super::shape::{Shape, ShapeBody};
use super::shape_kind::ShapeKind;
use crate::common::{DataUri, ImageFormat};
use std::fmt::Write as FmtWrite;

/// A slide in a document being built.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in stacking order
    pub(crate) shapes: Vec<Shape>,
    /// Whether the slide is hidden during the slide show
    pub(crate) hidden: bool,
}

impl Slide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            hidden: false,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set whether the slide is skipped during the slide show.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Check whether the slide is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn next_shape_id(&self) -> u32 {
        // IDs: 1=group, 2+=user shapes
        (self.shapes.len() + 2) as u32
    }

    /// Add text to the slide.
    ///
    /// With `options.shape` unset this is a plain text box; otherwise the text
    /// is drawn inside that geometry.
    pub fn add_text(&mut self, text: &str, options: TextOptions) {
        let shape = Shape::new(
            self.next_shape_id(),
            ShapeBody::Text {
                text: text.to_string(),
                options,
            },
        );
        tracing::trace!(shape_id = shape.shape_id, "add text");
        self.shapes.push(shape);
    }

    /// Add a picture from a base64 data URI.
    ///
    /// The format is detected from the payload first and from the declared
    /// MIME type second. PNG, JPEG, GIF, BMP, TIFF and WebP are embedded.
    /// SVG payloads are not supported and fail with
    /// [`EncodeError::InvalidImage`].
    pub fn add_image(&mut self, options: ImageOptions) -> Result<()> {
        let uri: DataUri = options
            .data
            .parse()
            .map_err(|e| EncodeError::InvalidImage(format!("{}", e)))?;

        let format = ImageFormat::detect_from_bytes(uri.data())
            .or_else(|| ImageFormat::from_mime_type(uri.content_type()))
            .ok_or_else(|| {
                EncodeError::InvalidImage(format!(
                    "unsupported image type '{}'",
                    uri.content_type()
                ))
            })?;

        self.add_picture_from_bytes(uri.into_data(), format, options.frame);
        Ok(())
    }

    /// Add a picture from raw bytes of a known format.
    pub fn add_picture_from_bytes(&mut self, data: Vec<u8>, format: ImageFormat, frame: Frame) {
        let shape = Shape::new(
            self.next_shape_id(),
            ShapeBody::Picture {
                data,
                format,
                frame,
            },
        );
        tracing::trace!(shape_id = shape.shape_id, ?format, "add picture");
        self.shapes.push(shape);
    }

    /// Add a geometry without text.
    pub fn add_shape(&mut self, kind: ShapeKind, options: ShapeOptions) {
        let shape = Shape::new(
            self.next_shape_id(),
            ShapeBody::Geometry {
                kind,
                frame: options.frame,
                fill: options.fill,
            },
        );
        tracing::trace!(shape_id = shape.shape_id, ?kind, "add shape");
        self.shapes.push(shape);
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get the shapes in stacking order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Collect all images on this slide, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes.iter().filter_map(|s| s.image_data()).collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}""#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;
        if self.hidden {
            xml.push_str(r#" show="0""#);
        }
        xml.push('>');

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.image_data().is_some() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                if rid.is_none() {
                    return Err(EncodeError::Xml(format!(
                        "missing image relationship on slide {}",
                        slide_index + 1
                    )));
                }
                rid
            } else {
                None
            };
            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate the relationships part for this slide.
    ///
    /// `rId1` is always the slide layout; images follow from `rId2`.
    pub(crate) fn rels_xml(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
        media_targets: &[String],
    ) -> Result<String> {
        use super::constants::relationship_type as rt;

        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;
        write!(
            xml,
            r#"<Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>"#,
            rt::SLIDE_LAYOUT
        )?;
        for (image_index, target) in media_targets.iter().enumerate() {
            let rid = rel_mapper
                .get_image_id(slide_index, image_index)
                .ok_or_else(|| {
                    EncodeError::Xml(format!(
                        "missing image relationship on slide {}",
                        slide_index + 1
                    ))
                })?;
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="../media/{}"/>"#,
                rid,
                rt::IMAGE,
                target
            )?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}
