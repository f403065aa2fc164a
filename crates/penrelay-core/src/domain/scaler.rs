//! Coordinate remapping between the tablet surface and the target screen.

use serde::{Deserialize, Serialize};

/// Maximum X coordinate reported by the stock digitizer.
///
/// Not documented by the vendor; discovered by streaming raw events and
/// drawing a line to the edge of the device screen.  The device screen is
/// natively landscape with the origin in the upper-left corner when the
/// power button is on the right.
pub const DEFAULT_TABLET_WIDTH: i32 = 20967;

/// Maximum Y coordinate reported by the stock digitizer.  See
/// [`DEFAULT_TABLET_WIDTH`] for how the value was measured.
pub const DEFAULT_TABLET_HEIGHT: i32 = 15725;

/// Physical rotation of the tablet relative to the target screen.
///
/// Determines which coordinate remapping policy [`PositionScaler::scale`]
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tablet landscape with its top edge on the right.  This is the
    /// device's natural screen orientation, so axes map directly.
    Right,
    /// Tablet landscape with its top edge on the left.  Both axes are
    /// inverted relative to `Right`.
    Left,
    /// Tablet portrait (power button up).  A 90-degree rotation: axes swap
    /// and one is inverted.
    Vertical,
}

/// Immutable scaling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalerConfig {
    pub orientation: Orientation,
    /// Maximum X coordinate of the tablet digitizer.
    pub tablet_width: i32,
    /// Maximum Y coordinate of the tablet digitizer.
    pub tablet_height: i32,
    /// Width in pixels of the area confining the pointer.
    pub target_width: i32,
    /// Height in pixels of the area confining the pointer.
    pub target_height: i32,
    /// X offset in pixels of the confining area on the target screen.
    pub offset_x: i32,
    /// Y offset in pixels of the confining area on the target screen.
    pub offset_y: i32,
}

/// Converts tablet coordinates to target-screen pixels.
///
/// A pure function of the point and the configuration: the scaler holds no
/// mutable state, so a shared reference can be used from any number of
/// callers.
#[derive(Debug, Clone, Copy)]
pub struct PositionScaler {
    config: ScalerConfig,
}

impl PositionScaler {
    pub fn new(config: ScalerConfig) -> Self {
        Self { config }
    }

    /// Remaps a tablet point to a target-screen point.
    ///
    /// Scale factors are real-valued ratios; the result is truncated toward
    /// zero after the offset is added.
    pub fn scale(&self, x: i32, y: i32) -> (i32, i32) {
        let c = &self.config;
        match c.orientation {
            Orientation::Right => Self::project(
                x,
                y,
                c.tablet_width,
                c.tablet_height,
                c.target_width,
                c.target_height,
                c.offset_x,
                c.offset_y,
            ),
            Orientation::Left => {
                // Opposite landscape: tablet (0,0) is the bottom-right of
                // the screen area, so both axes are flipped before scaling.
                Self::project(
                    c.tablet_width - x,
                    c.tablet_height - y,
                    c.tablet_width,
                    c.tablet_height,
                    c.target_width,
                    c.target_height,
                    c.offset_x,
                    c.offset_y,
                )
            }
            Orientation::Vertical => {
                // Portrait is a 90-degree rotation of the native landscape
                // screen: tablet X traversal becomes screen Y traversal and
                // vice versa, and the rotated axis is flipped so tablet
                // (max, 0) lands on screen (0, 0).  The scale factors cross
                // dimensions for the same reason.
                Self::project(
                    y,
                    c.tablet_width - x,
                    c.tablet_height,
                    c.tablet_width,
                    c.target_width,
                    c.target_height,
                    c.offset_x,
                    c.offset_y,
                )
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn project(
        x: i32,
        y: i32,
        source_w: i32,
        source_h: i32,
        target_w: i32,
        target_h: i32,
        offset_x: i32,
        offset_y: i32,
    ) -> (i32, i32) {
        let scale_x = f64::from(target_w) / f64::from(source_w);
        let scale_y = f64::from(target_h) / f64::from(source_h);
        (
            (f64::from(offset_x) + scale_x * f64::from(x)) as i32,
            (f64::from(offset_y) + scale_y * f64::from(y)) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(orientation: Orientation) -> ScalerConfig {
        ScalerConfig {
            orientation,
            tablet_width: 100,
            tablet_height: 100,
            target_width: 200,
            target_height: 200,
            offset_x: 0,
            offset_y: 0,
        }
    }

    #[test]
    fn right_scales_proportionally() {
        let scaler = PositionScaler::new(config(Orientation::Right));
        assert_eq!(scaler.scale(50, 50), (100, 100));
        assert_eq!(scaler.scale(0, 0), (0, 0));
        assert_eq!(scaler.scale(100, 100), (200, 200));
    }

    #[test]
    fn right_scales_each_axis_independently() {
        let scaler = PositionScaler::new(ScalerConfig {
            orientation: Orientation::Right,
            tablet_width: 100,
            tablet_height: 200,
            target_width: 400,
            target_height: 200,
            offset_x: 0,
            offset_y: 0,
        });
        assert_eq!(scaler.scale(50, 100), (200, 100));
    }

    #[test]
    fn right_applies_offsets_after_scaling() {
        let mut cfg = config(Orientation::Right);
        cfg.offset_x = 10;
        cfg.offset_y = 20;
        let scaler = PositionScaler::new(cfg);
        assert_eq!(scaler.scale(50, 50), (110, 120));
    }

    #[test]
    fn left_inverts_both_axes() {
        let scaler = PositionScaler::new(config(Orientation::Left));
        assert_eq!(scaler.scale(0, 0), (200, 200));
        assert_eq!(scaler.scale(100, 100), (0, 0));
        assert_eq!(scaler.scale(25, 75), (150, 50));
    }

    #[test]
    fn vertical_swaps_and_inverts() {
        let scaler = PositionScaler::new(ScalerConfig {
            orientation: Orientation::Vertical,
            tablet_width: 100,
            tablet_height: 50,
            target_width: 200,
            target_height: 400,
            offset_x: 0,
            offset_y: 0,
        });
        // Effective input is (y, tablet_width - x) scaled by
        // (target_w / tablet_h, target_h / tablet_w).
        assert_eq!(scaler.scale(0, 0), (0, 400));
        assert_eq!(scaler.scale(100, 50), (200, 0));
        assert_eq!(scaler.scale(50, 25), (100, 200));
    }

    #[test]
    fn truncates_toward_zero() {
        let scaler = PositionScaler::new(ScalerConfig {
            orientation: Orientation::Right,
            tablet_width: 3,
            tablet_height: 3,
            target_width: 2,
            target_height: 2,
            offset_x: 0,
            offset_y: 0,
        });
        // 1 * 2/3 = 0.66.. -> 0 after truncation.
        assert_eq!(scaler.scale(1, 1), (0, 0));
        assert_eq!(scaler.scale(2, 2), (1, 1));
    }
}
