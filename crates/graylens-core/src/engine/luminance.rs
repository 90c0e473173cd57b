//! RGB to luminance conversion.

const RED_WEIGHT: f64 = 0.2125;
const GREEN_WEIGHT: f64 = 0.7154;
const BLUE_WEIGHT: f64 = 0.0721;

/// Converts one RGB triple to 8-bit luminance.
///
/// Uses the Rec. 709 weights, clamps to `0..=255` and rounds half up.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    // No mul_add here: exact .5 results must not drift below the half
    let y = RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b);
    // Truncation after +0.5 on a clamped non-negative value is round-half-up
    (y.clamp(0.0, 255.0) + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn test_primaries() {
        // 0.2125 * 255 = 54.19
        assert_eq!(luminance(255, 0, 0), 54);
        // 0.7154 * 255 = 182.43
        assert_eq!(luminance(0, 255, 0), 182);
        // 0.0721 * 255 = 18.39
        assert_eq!(luminance(0, 0, 255), 18);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 0.2125 * 2 + 0.7154 * 1 = 1.1404 -> 1
        assert_eq!(luminance(2, 1, 0), 1);
        // 0.7154 * 2 = 1.4308 -> 1, 0.7154 * 3 = 2.1462 -> 2
        assert_eq!(luminance(0, 2, 0), 1);
        assert_eq!(luminance(0, 3, 0), 2);
        // 0.2125 * 4 + 0.0721 * 9 = 1.4989 -> 1; 0.2125 * 4 + 0.0721 * 10 = 1.571 -> 2
        assert_eq!(luminance(4, 0, 9), 1);
        assert_eq!(luminance(4, 0, 10), 2);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 3.6125 + 40.7778 + 4.1097 = 48.5
        assert_eq!(luminance(17, 57, 57), 49);
    }

    #[test]
    fn test_gray_is_preserved() {
        for v in 0..=255u8 {
            assert_eq!(luminance(v, v, v), v, "gray level {v}");
        }
    }

    #[test]
    fn test_output_stays_in_range_for_sampled_triples() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let y = luminance(r, g, b);
                    let lo = r.min(g).min(b);
                    let hi = r.max(g).max(b);
                    assert!(y >= lo.saturating_sub(1) && y <= hi.saturating_add(1));
                }
            }
        }
    }
}
