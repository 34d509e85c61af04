//! Unit conversion utilities.
//!
//! Geometry in the presentation tree is expressed in inches and font sizes in
//! points; DrawingML wants EMUs and hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;

#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Font sizes in DrawingML run properties are stored in 1/100 pt.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        assert_eq!(inch_to_emu(1.0), 914_400);
        assert_eq!(inch_to_emu(13.333), 12_191_695);
        assert_eq!(inch_to_emu(0.5), 457_200);
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(pt_to_centipoints(-3.0), 0);
    }
}
