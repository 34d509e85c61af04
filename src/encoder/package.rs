//! PPTX package writing.
//!
//! Assembles the document parts, their relationships and `[Content_Types].xml`
//! into a ZIP archive held in memory.

use super::constants::{content_type as ct, namespace, relationship_type as rt};
use super::document::Document;
use super::error::Result;
use super::relmap::RelationshipMapper;
use super::template;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// A part waiting to be written into the archive.
struct Part {
    name: String,
    data: Vec<u8>,
}

/// Builder for `.pptx` packages.
///
/// Parts are buffered until [`PackageWriter::finish`] so that
/// `[Content_Types].xml` can be written as the first archive member.
pub(crate) struct PackageWriter {
    parts: Vec<Part>,
    content_types: ContentTypesItem,
}

impl PackageWriter {
    /// Create a new package writer that writes to memory
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            content_types: ContentTypesItem::new(),
        }
    }

    /// Add a part whose content type is declared by an override.
    fn add_part(&mut self, name: &str, content_type: &str, data: impl Into<Vec<u8>>) {
        self.content_types.add_override(name, content_type);
        self.parts.push(Part {
            name: name.to_string(),
            data: data.into(),
        });
    }

    /// Add a part whose content type is declared by its extension.
    fn add_default_part(&mut self, name: &str, ext: &str, content_type: &str, data: Vec<u8>) {
        self.content_types.add_default(ext, content_type);
        self.parts.push(Part {
            name: name.to_string(),
            data,
        });
    }

    /// Lay out every part of `doc` and return the finished archive.
    pub fn write_document(mut self, doc: &Document) -> Result<Vec<u8>> {
        let slide_count = doc.slide_count();

        // Package relationships
        self.add_default_part(
            "_rels/.rels",
            "rels",
            ct::OPC_RELATIONSHIPS,
            relationships_xml([
                ("rId1", rt::OFFICE_DOCUMENT, "ppt/presentation.xml"),
                ("rId2", rt::CORE_PROPERTIES, "docProps/core.xml"),
                ("rId3", rt::EXTENDED_PROPERTIES, "docProps/app.xml"),
            ])?
            .into_bytes(),
        );
        self.add_part(
            "docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(),
        );
        self.add_part(
            "docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(slide_count)?,
        );

        // Presentation part: rId1 is the master, slides follow, then the
        // presentation-level property parts.
        let slide_rel_ids: Vec<String> = (0..slide_count).map(|i| format!("rId{}", i + 2)).collect();
        let mut pres_rels: Vec<(String, &str, String)> = vec![(
            "rId1".to_string(),
            rt::SLIDE_MASTER,
            "slideMasters/slideMaster1.xml".to_string(),
        )];
        for (index, rel_id) in slide_rel_ids.iter().enumerate() {
            pres_rels.push((
                rel_id.clone(),
                rt::SLIDE,
                format!("slides/slide{}.xml", index + 1),
            ));
        }
        let next = slide_count + 2;
        for (offset, (rel_type, target)) in [
            (rt::PRES_PROPS, "presProps.xml"),
            (rt::VIEW_PROPS, "viewProps.xml"),
            (rt::THEME, "theme/theme1.xml"),
            (rt::TABLE_STYLES, "tableStyles.xml"),
        ]
        .into_iter()
        .enumerate()
        {
            pres_rels.push((format!("rId{}", next + offset), rel_type, target.to_string()));
        }

        self.add_part(
            "ppt/presentation.xml",
            ct::PML_PRESENTATION_MAIN,
            doc.generate_presentation_xml(&slide_rel_ids)?,
        );
        self.add_default_part(
            "ppt/_rels/presentation.xml.rels",
            "rels",
            ct::OPC_RELATIONSHIPS,
            relationships_xml(
                pres_rels
                    .iter()
                    .map(|(id, rel_type, target)| (id.as_str(), *rel_type, target.as_str())),
            )?
            .into_bytes(),
        );
        self.add_part("ppt/presProps.xml", ct::PML_PRES_PROPS, template::pres_props_xml());
        self.add_part("ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::view_props_xml());
        self.add_part(
            "ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::table_styles_xml(),
        );
        self.add_part("ppt/theme/theme1.xml", ct::OFC_THEME, template::theme_xml());

        // Master and its single blank layout
        self.add_part(
            "ppt/slideMasters/slideMaster1.xml",
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml(),
        );
        self.add_default_part(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "rels",
            ct::OPC_RELATIONSHIPS,
            relationships_xml([
                ("rId1", rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                ("rId2", rt::THEME, "../theme/theme1.xml"),
            ])?
            .into_bytes(),
        );
        self.add_part(
            "ppt/slideLayouts/slideLayout1.xml",
            ct::PML_SLIDE_LAYOUT,
            template::slide_layout_xml(),
        );
        self.add_default_part(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "rels",
            ct::OPC_RELATIONSHIPS,
            relationships_xml([(
                "rId1",
                rt::SLIDE_MASTER,
                "../slideMasters/slideMaster1.xml",
            )])?
            .into_bytes(),
        );

        // Media first, so every slide relationship has a target.
        let mut rel_mapper = RelationshipMapper::new();
        let mut media_targets: Vec<Vec<String>> = vec![Vec::new(); slide_count];
        for (media_index, (slide_index, data, format)) in
            doc.collect_all_images().into_iter().enumerate()
        {
            let file_name = format!("image{}.{}", media_index + 1, format.extension());
            let targets = &mut media_targets[slide_index];
            rel_mapper.add_image(slide_index, targets.len(), format!("rId{}", targets.len() + 2));
            targets.push(file_name.clone());
            self.add_default_part(
                &format!("ppt/media/{}", file_name),
                format.extension(),
                format.mime_type(),
                data.to_vec(),
            );
        }

        for (slide_index, slide) in doc.slides().iter().enumerate() {
            let number = slide_index + 1;
            self.add_part(
                &format!("ppt/slides/slide{}.xml", number),
                ct::PML_SLIDE,
                slide.to_xml_with_rels(slide_index, &rel_mapper)?,
            );
            self.add_default_part(
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                "rels",
                ct::OPC_RELATIONSHIPS,
                slide
                    .rels_xml(slide_index, &rel_mapper, &media_targets[slide_index])?
                    .into_bytes(),
            );
        }

        self.finish()
    }

    /// Finish writing the package and return the archive bytes.
    fn finish(self) -> Result<Vec<u8>> {
        let mut zip_writer = ZipWriter::new(Cursor::new(Vec::new()));

        zip_writer.start_file("[Content_Types].xml", deflated())?;
        zip_writer.write_all(self.content_types.to_xml()?.as_bytes())?;

        for part in &self.parts {
            tracing::trace!(part = %part.name, size = part.data.len(), "write part");
            zip_writer.start_file(part.name.as_str(), deflated())?;
            zip_writer.write_all(&part.data)?;
        }

        let cursor = zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

fn deflated() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated)
}

/// Build a relationships part from `(id, type, target)` triples.
fn relationships_xml<'a>(
    rels: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;
    for (id, rel_type, target) in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            id, rel_type, target
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn add_default(&mut self, ext: &str, content_type: &str) {
        self.defaults
            .insert(ext.to_string(), content_type.to_string());
    }

    fn add_override(&mut self, partname: &str, content_type: &str) {
        self.overrides
            .insert(format!("/{}", partname), content_type.to_string());
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;
        for (ext, content_type) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            )?;
        }
        for (partname, content_type) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, content_type
            )?;
        }
        xml.push_str("</Types>");
        Ok(xml)
    }
}
