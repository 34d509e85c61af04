//! Shape kinds and their DrawingML preset geometries.
use super::error::{EncodeError, Result};
use phf::{phf_map, phf_set};

/// A DrawingML preset geometry (`ST_ShapeType`) the encoder can draw.
///
/// Obtained from an identifier with [`ShapeKind::from_identifier`], or from
/// one of the associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeKind(&'static str);

// Every preset geometry name defined by DrawingML.
static PRESETS: phf::Set<&'static str> = phf_set! {
    "line", "lineInv", "triangle", "rtTriangle",
    "rect", "diamond", "parallelogram", "trapezoid",
    "nonIsoscelesTrapezoid", "pentagon", "hexagon", "heptagon",
    "octagon", "decagon", "dodecagon", "star4",
    "star5", "star6", "star7", "star8",
    "star10", "star12", "star16", "star24",
    "star32", "roundRect", "round1Rect", "round2SameRect",
    "round2DiagRect", "snipRoundRect", "snip1Rect", "snip2SameRect",
    "snip2DiagRect", "plaque", "ellipse", "teardrop",
    "homePlate", "chevron", "pieWedge", "pie",
    "blockArc", "donut", "noSmoking", "rightArrow",
    "leftArrow", "upArrow", "downArrow", "stripedRightArrow",
    "notchedRightArrow", "bentUpArrow", "leftRightArrow", "upDownArrow",
    "leftUpArrow", "leftRightUpArrow", "quadArrow", "leftArrowCallout",
    "rightArrowCallout", "upArrowCallout", "downArrowCallout", "leftRightArrowCallout",
    "upDownArrowCallout", "quadArrowCallout", "bentArrow", "uturnArrow",
    "circularArrow", "leftCircularArrow", "leftRightCircularArrow", "curvedRightArrow",
    "curvedLeftArrow", "curvedUpArrow", "curvedDownArrow", "swooshArrow",
    "cube", "can", "lightningBolt", "heart",
    "sun", "moon", "smileyFace", "irregularSeal1",
    "irregularSeal2", "foldedCorner", "bevel", "frame",
    "halfFrame", "corner", "diagStripe", "chord",
    "arc", "leftBracket", "rightBracket", "leftBrace",
    "rightBrace", "bracketPair", "bracePair", "straightConnector1",
    "bentConnector2", "bentConnector3", "bentConnector4", "bentConnector5",
    "curvedConnector2", "curvedConnector3", "curvedConnector4", "curvedConnector5",
    "callout1", "callout2", "callout3", "accentCallout1",
    "accentCallout2", "accentCallout3", "borderCallout1", "borderCallout2",
    "borderCallout3", "accentBorderCallout1", "accentBorderCallout2", "accentBorderCallout3",
    "wedgeRectCallout", "wedgeRoundRectCallout", "wedgeEllipseCallout", "cloudCallout",
    "cloud", "ribbon", "ribbon2", "ellipseRibbon",
    "ellipseRibbon2", "leftRightRibbon", "verticalScroll", "horizontalScroll",
    "wave", "doubleWave", "plus", "flowChartProcess",
    "flowChartDecision", "flowChartInputOutput", "flowChartPredefinedProcess", "flowChartInternalStorage",
    "flowChartDocument", "flowChartMultidocument", "flowChartTerminator", "flowChartPreparation",
    "flowChartManualInput", "flowChartManualOperation", "flowChartConnector", "flowChartPunchedCard",
    "flowChartPunchedTape", "flowChartSummingJunction", "flowChartOr", "flowChartCollate",
    "flowChartSort", "flowChartExtract", "flowChartMerge", "flowChartOfflineStorage",
    "flowChartOnlineStorage", "flowChartMagneticTape", "flowChartMagneticDisk", "flowChartMagneticDrum",
    "flowChartDisplay", "flowChartDelay", "flowChartAlternateProcess", "flowChartOffpageConnector",
    "actionButtonBlank", "actionButtonHome", "actionButtonHelp", "actionButtonInformation",
    "actionButtonForwardNext", "actionButtonBackPrevious", "actionButtonEnd", "actionButtonBeginning",
    "actionButtonReturn", "actionButtonDocument", "actionButtonSound", "actionButtonMovie",
    "gear6", "gear9", "funnel", "mathPlus",
    "mathMinus", "mathMultiply", "mathDivide", "mathEqual",
    "mathNotEqual", "cornerTabs", "squareTabs", "plaqueTabs",
    "chartX", "chartStar", "chartPlus",
};

// Legacy upper-case shape constants and the preset each one draws.
static ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "RECTANGLE" => "rect",
    "ROUNDED_RECTANGLE" => "roundRect",
    "OVAL" => "ellipse",
    "LINE" => "line",
    "TRIANGLE" => "triangle",
    "RIGHT_TRIANGLE" => "rtTriangle",
    "DIAMOND" => "diamond",
    "PARALLELOGRAM" => "parallelogram",
    "TRAPEZOID" => "trapezoid",
    "REGULAR_PENTAGON" => "pentagon",
    "HEXAGON" => "hexagon",
    "OCTAGON" => "octagon",
    "STAR_4_POINT" => "star4",
    "STAR_5_POINT" => "star5",
    "STAR_6_POINT" => "star6",
    "RIGHT_ARROW" => "rightArrow",
    "LEFT_ARROW" => "leftArrow",
    "UP_ARROW" => "upArrow",
    "DOWN_ARROW" => "downArrow",
    "LEFT_RIGHT_ARROW" => "leftRightArrow",
    "CHEVRON" => "chevron",
    "PENTAGON" => "homePlate",
    "CROSS" => "plus",
    "CLOUD" => "cloud",
    "HEART" => "heart",
    "DONUT" => "donut",
    "CAN" => "can",
    "CUBE" => "cube",
    "FRAME" => "frame",
    "PIE" => "pie",
    "ARC" => "arc",
    "RECTANGULAR_CALLOUT" => "wedgeRectCallout",
    "OVAL_CALLOUT" => "wedgeEllipseCallout",
    "FLOWCHART_PROCESS" => "flowChartProcess",
    "FLOWCHART_DECISION" => "flowChartDecision",
    "FLOWCHART_TERMINATOR" => "flowChartTerminator",
};

impl ShapeKind {
    pub const RECTANGLE: Self = Self("rect");
    pub const ROUND_RECTANGLE: Self = Self("roundRect");
    pub const ELLIPSE: Self = Self("ellipse");

    /// Resolve a shape identifier from the presentation tree.
    ///
    /// Preset names are matched exactly, then the upper-case aliases.
    /// Unknown identifiers are an encoder error rather than a silent fallback.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        PRESETS
            .get_key(identifier)
            .or_else(|| ALIASES.get(identifier))
            .map(|preset| Self(*preset))
            .ok_or_else(|| EncodeError::UnknownShapeKind(identifier.to_string()))
    }

    /// Get the preset geometry string for this shape kind.
    #[inline]
    pub fn preset(&self) -> &'static str {
        self.0
    }
}
