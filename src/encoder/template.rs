//! Static package parts shared by every generated presentation.
//!
//! The deck always carries a single slide master with one blank layout and
//! a default Office theme. Slides reference the layout and draw every shape
//! with explicit geometry, so no placeholders are needed.

use super::error::Result;
use std::fmt::Write;

/// Core document properties (`docProps/core.xml`).
pub fn core_props_xml() -> &'static str {
    include_str!("../../resources/pptx/core.xml")
}

/// Extended application properties (`docProps/app.xml`) for a deck with
/// `slide_count` slides.
pub fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    );
    write!(
        xml,
        "<Application>{}</Application>",
        env!("CARGO_PKG_NAME")
    )?;
    xml.push_str("<PresentationFormat>On-screen Show</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("<Notes>0</Notes><HiddenSlides>0</HiddenSlides><MMClips>0</MMClips>");
    xml.push_str("<ScaleCrop>false</ScaleCrop><LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc><HyperlinksChanged>false</HyperlinksChanged>");
    xml.push_str("<AppVersion>16.0000</AppVersion></Properties>");
    Ok(xml)
}

/// Presentation-level properties (`ppt/presProps.xml`).
pub fn pres_props_xml() -> &'static str {
    include_str!("../../resources/pptx/presProps.xml")
}

/// View properties (`ppt/viewProps.xml`).
pub fn view_props_xml() -> &'static str {
    include_str!("../../resources/pptx/viewProps.xml")
}

/// Table style list (`ppt/tableStyles.xml`), empty apart from the default id.
pub fn table_styles_xml() -> &'static str {
    include_str!("../../resources/pptx/tableStyles.xml")
}

/// Default Office theme with color, font and format schemes.
pub fn theme_xml() -> &'static str {
    include_str!("../../resources/pptx/theme1.xml")
}

/// Slide master referencing the blank layout as `rId1`.
pub fn slide_master_xml() -> &'static str {
    include_str!("../../resources/pptx/slideMaster1.xml")
}

/// Blank slide layout
pub fn slide_layout_xml() -> &'static str {
    include_str!("../../resources/pptx/slideLayout1.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_props_counts_slides() {
        let xml = app_props_xml(3).unwrap();
        assert!(xml.contains("<Slides>3</Slides>"));
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn test_master_links_layout() {
        let master = slide_master_xml();
        assert!(master.contains(r#"r:id="rId1""#));
        assert!(master.contains("<p:clrMap"));
        assert!(slide_layout_xml().contains(r#"type="blank""#));
    }

    #[test]
    fn test_theme_has_all_schemes() {
        let theme = theme_xml();
        for element in ["<a:clrScheme", "<a:fontScheme", "<a:fmtScheme"] {
            assert!(theme.contains(element), "missing {element}");
        }
    }
}
