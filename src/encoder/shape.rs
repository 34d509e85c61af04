/// Shape types and XML generation for slide primitives.
use super::error::Result;
use super::format::{Frame, TextOptions};
use super::shape_kind::ShapeKind;
use crate::common::ImageFormat;
use crate::common::unit::{inch_to_emu, pt_to_centipoints};
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A primitive placed on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) body: ShapeBody,
}

/// What a shape draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeBody {
    /// Text box, or text drawn inside a geometry when `options.shape` is set
    Text { text: String, options: TextOptions },
    /// Embedded picture
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        frame: Frame,
    },
    /// Geometry without text
    Geometry {
        kind: ShapeKind,
        frame: Frame,
        fill: Option<String>,
    },
}

/// Check whether a color is a literal RGB value rather than a theme color name.
fn is_hex_rgb(color: &str) -> bool {
    color.len() == 6 && color.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Write a `<a:solidFill>` for a normalized color.
///
/// Six hex digits become `srgbClr`; anything else is handed to the theme as a
/// `schemeClr` name, so a malformed value produces a malformed scheme color.
fn write_solid_fill(xml: &mut String, color: &str) -> Result<()> {
    xml.push_str("<a:solidFill>");
    if is_hex_rgb(color) {
        write!(xml, r#"<a:srgbClr val="{}"/>"#, color.to_ascii_uppercase())?;
    } else {
        write!(xml, r#"<a:schemeClr val="{}"/>"#, escape_xml(color))?;
    }
    xml.push_str("</a:solidFill>");
    Ok(())
}

fn write_xfrm(xml: &mut String, frame: &Frame) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/>"#,
        inch_to_emu(frame.x),
        inch_to_emu(frame.y)
    )?;
    write!(
        xml,
        r#"<a:ext cx="{}" cy="{}"/>"#,
        inch_to_emu(frame.w),
        inch_to_emu(frame.h)
    )?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_geometry(xml: &mut String, kind: ShapeKind) -> Result<()> {
    write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        kind.preset()
    )?;
    Ok(())
}

impl Shape {
    pub(crate) fn new(shape_id: u32, body: ShapeBody) -> Self {
        Self { shape_id, body }
    }

    /// Get the shape ID.
    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get what this shape draws.
    #[inline]
    pub fn body(&self) -> &ShapeBody {
        &self.body
    }

    /// Get the text content, if this is a text-bearing shape.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ShapeBody::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.body {
            ShapeBody::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their media part; a placeholder is
    /// written when none is given.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.body {
            ShapeBody::Text { text, options } => self.write_text(xml, text, options),
            ShapeBody::Picture { frame, .. } => self.write_picture(xml, frame, rel_id),
            ShapeBody::Geometry { kind, frame, fill } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Shape {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                write_geometry(xml, *kind)?;
                if let Some(color) = fill {
                    write_solid_fill(xml, color)?;
                }
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
                Ok(())
            },
        }
    }

    fn write_text(&self, xml: &mut String, text: &str, options: &TextOptions) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Text {}"/>"#,
            self.shape_id,
            self.shape_id - 1
        )?;
        if options.shape.is_some() {
            xml.push_str("<p:cNvSpPr/>");
        } else {
            xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, &options.frame)?;
        write_geometry(xml, options.shape.unwrap_or(ShapeKind::RECTANGLE))?;
        match options.fill {
            Some(ref color) => write_solid_fill(xml, color)?,
            None => xml.push_str("<a:noFill/>"),
        }
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0""#);
        if let Some(valign) = options.valign {
            write!(xml, r#" anchor="{}""#, valign.as_attr())?;
        }
        xml.push_str("/>");
        xml.push_str("<a:lstStyle/>");

        // One paragraph per line; an empty string still yields one paragraph.
        for line in text.split('\n') {
            xml.push_str("<a:p>");
            if let Some(align) = options.align {
                write!(xml, r#"<a:pPr algn="{}"/>"#, align.as_attr())?;
            }
            if line.is_empty() {
                xml.push_str("<a:endParaRPr");
                write_run_properties(xml, options, "a:endParaRPr")?;
            } else {
                xml.push_str("<a:r>");
                xml.push_str("<a:rPr");
                write_run_properties(xml, options, "a:rPr")?;
                write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
                xml.push_str("</a:r>");
            }
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_picture(&self, xml: &mut String, frame: &Frame, rel_id: Option<&str>) -> Result<()> {
        xml.push_str("<p:pic>");
        xml.push_str("<p:nvPicPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Picture {}"/>"#,
            self.shape_id,
            self.shape_id - 1
        )?;
        xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        let rid = rel_id.unwrap_or("rIdImagePlaceholder");
        write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
        xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
        xml.push_str("</p:blipFill>");

        xml.push_str("<p:spPr>");
        write_xfrm(xml, frame)?;
        write_geometry(xml, ShapeKind::RECTANGLE)?;
        xml.push_str("</p:spPr>");
        xml.push_str("</p:pic>");
        Ok(())
    }
}

/// Write the attributes and children of a run properties element whose
/// opening tag (`<a:rPr` or `<a:endParaRPr`) has already been written.
fn write_run_properties(xml: &mut String, options: &TextOptions, tag: &str) -> Result<()> {
    xml.push_str(r#" lang="en-US""#);
    if let Some(size) = options.font_size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    xml.push_str(r#" dirty="0""#);

    if options.color.is_none() && options.font_face.is_none() {
        xml.push_str("/>");
        return Ok(());
    }

    xml.push('>');
    // Fill must precede the font elements in CT_TextCharacterProperties.
    if let Some(ref color) = options.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(ref font) = options.font_face {
        let font = escape_xml(font);
        write!(
            xml,
            r#"<a:latin typeface="{font}"/><a:ea typeface="{font}"/><a:cs typeface="{font}"/>"#
        )?;
    }
    write!(xml, "</{}>", tag)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::format::{TextAlign, VerticalAlign};

    fn render(shape: &Shape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml, Some("rId2")).unwrap();
        xml
    }

    #[test]
    fn test_text_box_xml() {
        let shape = Shape::new(
            2,
            ShapeBody::Text {
                text: "Hello & <bye>".to_string(),
                options: TextOptions {
                    frame: Frame::new(1.0, 1.0, 4.0, 1.0),
                    color: Some("112233".to_string()),
                    font_face: Some("Arial".to_string()),
                    font_size: Some(24.0),
                    align: Some(TextAlign::Center),
                    valign: Some(VerticalAlign::Middle),
                    ..Default::default()
                },
            },
        );
        let xml = render(&shape);
        assert!(xml.contains(r#"txBox="1""#));
        assert!(xml.contains(r#"<a:off x="914400" y="914400"/>"#));
        assert!(xml.contains(r#"<a:ext cx="3657600" cy="914400"/>"#));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="2400""#));
        assert!(xml.contains(r#"<a:srgbClr val="112233"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Arial"/>"#));
        assert!(xml.contains("<a:t>Hello &amp; &lt;bye&gt;</a:t>"));
        // Fill comes before the font in run properties.
        assert!(xml.find("<a:solidFill>").unwrap() < xml.find("<a:latin").unwrap());
    }

    #[test]
    fn test_empty_text_still_has_paragraph() {
        let shape = Shape::new(
            2,
            ShapeBody::Text {
                text: String::new(),
                options: TextOptions::default(),
            },
        );
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#));
        assert!(!xml.contains("<a:t>"));
    }

    #[test]
    fn test_multiline_text_paragraphs() {
        let shape = Shape::new(
            2,
            ShapeBody::Text {
                text: "one\ntwo".to_string(),
                options: TextOptions::default(),
            },
        );
        let xml = render(&shape);
        assert_eq!(xml.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_text_in_shape_xml() {
        let shape = Shape::new(
            3,
            ShapeBody::Text {
                text: "Go".to_string(),
                options: TextOptions {
                    shape: Some(ShapeKind::ROUND_RECTANGLE),
                    fill: Some("FF0000".to_string()),
                    ..Default::default()
                },
            },
        );
        let xml = render(&shape);
        assert!(!xml.contains("txBox"));
        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"<a:srgbClr val="FF0000"/>"#));
    }

    #[test]
    fn test_geometry_xml() {
        let shape = Shape::new(
            4,
            ShapeBody::Geometry {
                kind: ShapeKind::ELLIPSE,
                frame: Frame::new(0.0, 0.0, 1.0, 1.0),
                fill: Some("accent1".to_string()),
            },
        );
        let xml = render(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Shape 3"/>"#));
        assert!(xml.contains(r#"prst="ellipse""#));
        assert!(xml.contains(r#"<a:schemeClr val="accent1"/>"#));
        assert!(!xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_picture_xml() {
        let shape = Shape::new(
            5,
            ShapeBody::Picture {
                data: vec![0x89, 0x50, 0x4E, 0x47],
                format: ImageFormat::Png,
                frame: Frame::new(5.0, 1.0, 2.0, 2.0),
            },
        );
        let xml = render(&shape);
        assert!(xml.starts_with("<p:pic>"));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert_eq!(shape.image_data().map(|(_, f)| f), Some(ImageFormat::Png));
    }
}
