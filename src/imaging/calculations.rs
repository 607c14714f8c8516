//! Pure calculation functions for image dimensions.

/// Fit `source` inside `bounds`, preserving the aspect ratio.
///
/// The constraining edge is set exactly to its bound so rounding can never
/// land one pixel short; when both edges constrain equally the height wins.
/// Images that already fit are returned unchanged, never upscaled.
///
/// ```text
/// (1400, 1000) in (700, 500) → (700, 500)
/// (1000, 1000) in (700, 500) → (500, 500)
/// (2000, 1000) in (700, 500) → (700, 350)
/// (300, 200)   in (700, 500) → (300, 200)
/// ```
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w == 0 || src_h == 0 || (src_w <= max_w && src_h <= max_h) {
        return source;
    }

    // Compare src_h / max_h against src_w / max_w without leaving integers.
    let (src_w, src_h, max_w, max_h) = (src_w as u64, src_h as u64, max_w as u64, max_h as u64);
    if src_h * max_w >= src_w * max_h {
        let w = (src_w * max_h / src_h).max(1);
        (w as u32, max_h as u32)
    } else {
        let h = (src_h * max_w / src_w).max(1);
        (max_w as u32, h as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_same_aspect_hits_both_bounds() {
        assert_eq!(fit_within((1400, 1000), (700, 500)), (700, 500));
    }

    #[test]
    fn fit_square_into_landscape_bounds() {
        assert_eq!(fit_within((1000, 1000), (700, 500)), (500, 500));
    }

    #[test]
    fn fit_wide_panorama() {
        assert_eq!(fit_within((2000, 1000), (700, 500)), (700, 350));
    }

    #[test]
    fn fit_portrait() {
        assert_eq!(fit_within((3000, 4000), (200, 200)), (150, 200));
    }

    #[test]
    fn fit_never_upscales() {
        assert_eq!(fit_within((300, 200), (700, 500)), (300, 200));
        assert_eq!(fit_within((700, 500), (700, 500)), (700, 500));
    }

    #[test]
    fn fit_extreme_aspect_keeps_one_pixel() {
        assert_eq!(fit_within((10000, 1), (100, 100)), (100, 1));
    }

    #[test]
    fn fit_one_edge_over() {
        // Only the width exceeds its bound
        assert_eq!(fit_within((800, 400), (700, 500)), (700, 350));
    }
}
