use crate::config::{MotionConfig, STUTTER_THRESHOLD};
use crate::direction::Axis;
use crate::math::PixelPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Hidden,
    Visible,
}

// Hides a character for a frame when it jumped further than a normal step, which is what
// happens when it warps through the tunnel. Drawing the interpolated position in between
// would smear it across the whole maze.
pub fn check_for_stutter(
    position: Option<PixelPos>,
    old_position: Option<PixelPos>,
) -> Visibility {
    stutter_with_threshold(position, old_position, STUTTER_THRESHOLD)
}

fn stutter_with_threshold(
    position: Option<PixelPos>,
    old_position: Option<PixelPos>,
    threshold: f64,
) -> Visibility {
    let (Some(position), Some(old_position)) = (position, old_position) else {
        return Visibility::Visible;
    };

    let delta = position - old_position;
    if delta.y.abs() > threshold || delta.x.abs() > threshold {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

impl MotionConfig {
    pub fn check_for_stutter(
        &self,
        position: Option<PixelPos>,
        old_position: Option<PixelPos>,
    ) -> Visibility {
        stutter_with_threshold(position, old_position, self.stutter_threshold)
    }
}

// interp is the fraction of a fixed update that has elapsed since the last one. It isn't
// clamped, so values outside of 0..=1 extrapolate.
pub fn calculate_new_draw_value(
    interp: f64,
    axis: Axis,
    old_position: PixelPos,
    position: PixelPos,
) -> f64 {
    let old = old_position.get(axis);
    old + (position.get(axis) - old) * interp
}

pub fn calculate_draw_position(
    interp: f64,
    old_position: PixelPos,
    position: PixelPos,
) -> PixelPos {
    PixelPos::from_top_left(
        calculate_new_draw_value(interp, Axis::Top, old_position, position),
        calculate_new_draw_value(interp, Axis::Left, old_position, position),
    )
}
