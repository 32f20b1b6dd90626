// SPDX-License-Identifier: MPL-2.0
//! Parallax transform applied to a card from its distance to the focal page.
//!
//! Everything here is plain arithmetic so it can be tested without a renderer.

/// Scale of a card that is one page (or more) away from the focal page.
pub const MIN_SCALE: f32 = 0.85;

/// Opacity of a card that is one page (or more) away from the focal page.
pub const MIN_ALPHA: f32 = 0.5;

/// Visual transform of a single card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub scale: f32,
    pub alpha: f32,
}

impl CardTransform {
    /// Transform of the focal page.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        alpha: 1.0,
    };

    /// Computes the transform for a signed page offset.
    ///
    /// The sign is ignored so effects mirror in both scroll directions.
    #[must_use]
    pub fn from_offset(offset: f32) -> Self {
        let fraction = 1.0 - clamp_offset(offset.abs());
        Self {
            scale: lerp(MIN_SCALE, 1.0, fraction),
            alpha: lerp(MIN_ALPHA, 1.0, fraction),
        }
    }

    /// Scales a full-size length (width, height, font size) by this transform.
    #[must_use]
    pub fn apply(self, length: f32) -> f32 {
        length * self.scale
    }
}

/// Linear interpolation between `start` and `stop`.
#[must_use]
pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    (1.0 - fraction) * start + fraction * stop
}

/// Clamps an offset into `[0, 1]`. NaN counts as maximally offset.
#[must_use]
pub fn clamp_offset(offset: f32) -> f32 {
    if offset.is_nan() {
        1.0
    } else {
        offset.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn focal_page_is_full_size_and_opaque() {
        assert_eq!(CardTransform::from_offset(0.0), CardTransform::IDENTITY);
    }

    #[test]
    fn one_page_away_hits_minimums() {
        let t = CardTransform::from_offset(1.0);
        assert_abs_diff_eq!(t.scale, MIN_SCALE, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(t.alpha, MIN_ALPHA, epsilon = F32_EPSILON);
    }

    #[test]
    fn offsets_beyond_one_clamp_to_minimums() {
        for offset in [1.5, 3.0, 9.0, f32::INFINITY] {
            assert_eq!(
                CardTransform::from_offset(offset),
                CardTransform::from_offset(1.0)
            );
        }
    }

    #[test]
    fn sign_of_offset_is_ignored() {
        for offset in [0.1, 0.5, 0.75, 2.0] {
            assert_eq!(
                CardTransform::from_offset(offset),
                CardTransform::from_offset(-offset)
            );
        }
    }

    #[test]
    fn matches_closed_form_over_a_sweep() {
        let mut offset = -2.0_f32;
        while offset <= 2.0 {
            let clamped = clamp_offset(offset.abs());
            assert!((0.0..=1.0).contains(&clamped));

            let t = CardTransform::from_offset(offset);
            assert_abs_diff_eq!(t.scale, 0.85 + 0.15 * (1.0 - clamped), epsilon = F32_EPSILON);
            assert_abs_diff_eq!(t.alpha, 0.5 + 0.5 * (1.0 - clamped), epsilon = F32_EPSILON);
            offset += 0.05;
        }
    }

    #[test]
    fn half_page_is_halfway() {
        let t = CardTransform::from_offset(0.5);
        assert_abs_diff_eq!(t.scale, 0.925, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(t.alpha, 0.75, epsilon = F32_EPSILON);
    }

    #[test]
    fn nan_offset_is_treated_as_far_away() {
        assert_eq!(clamp_offset(f32::NAN), 1.0);
        assert_eq!(
            CardTransform::from_offset(f32::NAN),
            CardTransform::from_offset(1.0)
        );
    }

    #[test]
    fn apply_scales_lengths() {
        let t = CardTransform::from_offset(1.0);
        assert_abs_diff_eq!(t.apply(300.0), 255.0, epsilon = 1e-3);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
