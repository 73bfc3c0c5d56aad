//! Color math: direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0.

/// Clamp into 0.0–1.0. NaN collapses to 0.0.
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Linear interpolation between `a` and `b`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// HSB/HSV → RGB. Inputs are clamped; hue 1.0 wraps back onto red.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let (h, s, v) = (clamp_unit(h), clamp_unit(s), clamp_unit(v));
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. Hue lands in 0.0..1.0 and is 0.0 for any gray.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (clamp_unit(r), clamp_unit(g), clamp_unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    // rem_euclid can round a tiny negative ratio up to a full turn.
    let h = if h >= 1.0 { 0.0 } else { h };

    (h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn sectors_hit_primaries_and_secondaries() {
        assert!(close(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsb_to_rgb(1.0 / 6.0, 1.0, 1.0), (1.0, 1.0, 0.0)));
        assert!(close(hsb_to_rgb(2.0 / 6.0, 1.0, 1.0), (0.0, 1.0, 0.0)));
        assert!(close(hsb_to_rgb(0.5, 1.0, 1.0), (0.0, 1.0, 1.0)));
        assert!(close(hsb_to_rgb(4.0 / 6.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(hsb_to_rgb(5.0 / 6.0, 1.0, 1.0), (1.0, 0.0, 1.0)));
    }

    #[test]
    fn full_turn_wraps_to_red() {
        assert!(close(hsb_to_rgb(1.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0)));
    }

    #[test]
    fn gray_reports_zero_hue() {
        let (h, s, v) = rgb_to_hsb(0.4, 0.4, 0.4);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 0.4).abs() < 1e-12);
        assert_eq!(rgb_to_hsb(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hue_just_below_red_wraps_to_zero() {
        let (h, s, v) = rgb_to_hsb(1.0, 0.5, 0.5 + f64::EPSILON / 2.0);
        assert!((0.0..1.0).contains(&h), "hue {} out of range", h);
        assert!(h < 1e-9);
        assert!((s - 0.5).abs() < 1e-9);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn out_of_range_and_nan_are_clamped() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert!(close(hsb_to_rgb(-1.0, 2.0, 3.0), (1.0, 0.0, 0.0)));
    }
}
