//! Twilight-style colormap for field rendering.
//!
//! A small anchor table with linear interpolation, approximating the
//! cyclic "twilight" palette: light at both extremes of the value range,
//! dark purple at the center.

/// Anchor colors at evenly spaced positions in [0, 1].
const ANCHORS: [[u8; 3]; 9] = [
    [225, 216, 226],
    [160, 175, 215],
    [90, 115, 190],
    [50, 48, 130],
    [47, 20, 54],
    [105, 32, 90],
    [170, 62, 92],
    [208, 140, 130],
    [225, 216, 226],
];

/// Sample the palette at `t` in [0, 1]. Out-of-range values clamp.
pub fn sample(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let segments = (ANCHORS.len() - 1) as f64;
    let pos = t * segments;
    let idx = (pos as usize).min(ANCHORS.len() - 2);
    let frac = pos - idx as f64;

    let lo = ANCHORS[idx];
    let hi = ANCHORS[idx + 1];
    [
        lerp_channel(lo[0], hi[0], frac),
        lerp_channel(lo[1], hi[1], frac),
        lerp_channel(lo[2], hi[2], frac),
    ]
}

/// Map a field value onto the palette over a fixed display range.
pub fn map_value(value: f64, vmin: f64, vmax: f64) -> [u8; 3] {
    sample((value - vmin) / (vmax - vmin))
}

fn lerp_channel(lo: u8, hi: u8, frac: f64) -> u8 {
    (lo as f64 + (hi as f64 - lo as f64) * frac).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_match_anchors() {
        assert_eq!(sample(0.0), ANCHORS[0]);
        assert_eq!(sample(1.0), ANCHORS[ANCHORS.len() - 1]);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(sample(-3.0), sample(0.0));
        assert_eq!(sample(7.0), sample(1.0));
        assert_eq!(map_value(-100.0, -2.0, 2.0), sample(0.0));
        assert_eq!(map_value(100.0, -2.0, 2.0), sample(1.0));
    }

    #[test]
    fn test_center_is_dark() {
        let [r, g, b] = sample(0.5);
        assert!(r < 80 && g < 80 && b < 80, "center should be dark");
    }

    #[test]
    fn test_midpoint_anchor_exact() {
        // t = 0.5 lands exactly on the middle anchor.
        assert_eq!(sample(0.5), ANCHORS[4]);
    }
}
