//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Font sizes are stored in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Width of the default 4:3 canvas (10 inches).
pub const DEFAULT_SLIDE_WIDTH: i64 = 10 * EMUS_PER_INCH;
/// Height of the default 4:3 canvas (7.5 inches).
pub const DEFAULT_SLIDE_HEIGHT: i64 = 6_858_000;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

/// Convert points to EMU, rounding to the nearest unit.
#[inline]
pub fn pt(value: f64) -> i64 {
    (value * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font size in points to the `sz` attribute value (hundredths of a point).
#[inline]
pub fn font_size_to_centipoints(size: f64) -> u32 {
    (size * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(10.0), DEFAULT_SLIDE_WIDTH);
        assert_eq!(inches(7.5), DEFAULT_SLIDE_HEIGHT);
        assert_eq!(inches(0.5), 457_200);
    }

    #[test]
    fn test_fractional_offsets_round() {
        // 3.2 + 0.3 accumulates float error; the EMU value must still be exact
        assert_eq!(inches(3.2 + 0.3), inches(3.5));
    }

    #[test]
    fn test_points() {
        assert_eq!(pt(1.0), 12_700);
        assert_eq!(pt(4.0), 50_800);
        assert!((emu_to_pt(pt(12.0)) - 12.0).abs() < f64::EPSILON);
        assert!((emu_to_inches(inches(2.5)) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_size() {
        assert_eq!(font_size_to_centipoints(18.0), 1800);
        assert_eq!(font_size_to_centipoints(10.5), 1050);
    }
}
