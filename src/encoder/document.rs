/// Document writer for PPTX.
use super::constants::namespace;
use super::error::{EncodeError, Result};
use super::layout::LayoutPreset;
use super::package::PackageWriter;
use super::slide::Slide;
use crate::common::ImageFormat;
use std::fmt::Write as FmtWrite;

/// Handle to a slide created by [`Document::add_slide`].
///
/// Handles are plain indices, so they can be held while other slides are
/// added and resolved later with [`Document::slide_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideHandle(usize);

impl SlideHandle {
    /// Position of the slide in the document (0-based).
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A PowerPoint document being built.
///
/// Slides appear in the written file in the order they were added.
#[derive(Debug, Default)]
pub struct Document {
    /// Slides in the document
    pub(crate) slides: Vec<Slide>,
    /// Slide size preset
    layout: LayoutPreset,
}

impl Document {
    /// Create a new empty document using the default 16:9 layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide size preset.
    pub fn set_layout(&mut self, layout: LayoutPreset) {
        self.layout = layout;
    }

    /// Get the slide size preset.
    pub fn layout(&self) -> LayoutPreset {
        self.layout
    }

    /// Add a new empty slide at the end of the document.
    pub fn add_slide(&mut self) -> SlideHandle {
        let index = self.slides.len();
        self.slides.push(Slide::new((index + 256) as u32));
        SlideHandle(index)
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by handle.
    pub fn slide(&self, handle: SlideHandle) -> Result<&Slide> {
        self.slides
            .get(handle.0)
            .ok_or(EncodeError::SlideNotFound(handle.0))
    }

    /// Get a mutable reference to a slide by handle.
    pub fn slide_mut(&mut self, handle: SlideHandle) -> Result<&mut Slide> {
        self.slides
            .get_mut(handle.0)
            .ok_or(EncodeError::SlideNotFound(handle.0))
    }

    /// Get all slides in document order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Serialize the document into a `.pptx` byte buffer.
    pub fn write(&self) -> Result<Vec<u8>> {
        let bytes = PackageWriter::new().write_document(self)?;
        tracing::debug!(
            slides = self.slides.len(),
            bytes = bytes.len(),
            layout = self.layout.name(),
            "document serialized"
        );
        Ok(bytes)
    }

    /// Collect all images from all slides in the document.
    pub(crate) fn collect_all_images(&self) -> Vec<(usize, &[u8], ImageFormat)> {
        let mut all_images = Vec::new();

        for (slide_index, slide) in self.slides.iter().enumerate() {
            for (image_data, image_format) in slide.collect_images() {
                all_images.push((slide_index, image_data, image_format));
            }
        }

        all_images
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `slide_rel_ids` - Relationship IDs for slides, in slide order (e.g., ["rId2", "rId3", ...])
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                let rel_id = slide_rel_ids.get(index).ok_or_else(|| {
                    EncodeError::Xml(format!("missing relationship for slide {}", index + 1))
                })?;
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}""#,
            self.layout.width_emu(),
            self.layout.height_emu()
        )?;
        if let Some(size_type) = self.layout.size_type() {
            write!(xml, r#" type="{}""#, size_type)?;
        }
        xml.push_str("/>");

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::format::TextOptions;

    #[test]
    fn test_create_document() {
        let doc = Document::new();
        assert_eq!(doc.slide_count(), 0);
        assert_eq!(doc.layout(), LayoutPreset::Layout16x9);
    }

    #[test]
    fn test_add_slide_handles() {
        let mut doc = Document::new();
        let first = doc.add_slide();
        let second = doc.add_slide();
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(doc.slide(second).unwrap().slide_id(), 257);

        doc.slide_mut(first)
            .unwrap()
            .add_text("Test", TextOptions::default());
        assert_eq!(doc.slides()[0].shape_count(), 1);
        assert_eq!(doc.slides()[1].shape_count(), 0);
    }

    #[test]
    fn test_foreign_handle_is_error() {
        let mut other = Document::new();
        other.add_slide();
        let handle = other.add_slide();

        let mut doc = Document::new();
        assert!(matches!(
            doc.slide_mut(handle),
            Err(EncodeError::SlideNotFound(1))
        ));
    }

    #[test]
    fn test_presentation_xml() {
        let mut doc = Document::new();
        doc.set_layout(LayoutPreset::LayoutWide);
        doc.add_slide();

        let xml = doc.generate_presentation_xml(&["rId2".to_string()]).unwrap();
        assert!(xml.contains("<p:presentation"));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));

        assert!(doc.generate_presentation_xml(&[]).is_err());
    }

    #[test]
    fn test_empty_presentation_xml() {
        let doc = Document::new();
        let xml = doc.generate_presentation_xml(&[]).unwrap();
        assert!(!xml.contains("<p:sldIdLst>"));
        assert!(xml.contains(r#"type="screen16x9""#));
    }
}
