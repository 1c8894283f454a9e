use crate::config::{MotionConfig, WarpBounds};
use crate::direction::{Axis, Direction};
use crate::math::{GridPos, PixelPos};

pub fn determine_grid_position(position: PixelPos, scaled_tile_size: f64) -> GridPos {
    position.to_grid_units(scaled_tile_size)
}

// Whether a character moved into a different cell between two frames
pub fn changing_grid_position(old_position: GridPos, position: GridPos) -> bool {
    // NaN never compares equal, so a NaN position always counts as a change
    match (old_position.to_cell_units(), position.to_cell_units()) {
        (Some(old_cell), Some(cell)) => old_cell != cell,
        _ => true,
    }
}

// Snaps the axis of motion onto a tile center and converts back to pixels. Used to line a
// character up exactly with an intersection when it turns.
pub fn snap_to_grid(position: GridPos, direction: Direction, scaled_tile_size: f64) -> PixelPos {
    let axis = direction.axis();
    let snapped = direction.rounding().apply(position.get(axis));
    position.with(axis, snapped).to_pixel_units(scaled_tile_size)
}

pub fn check_for_warp(
    position: PixelPos,
    grid_position: GridPos,
    scaled_tile_size: f64,
) -> PixelPos {
    WarpBounds::default().apply(position, grid_position, scaled_tile_size)
}

impl WarpBounds {
    pub fn apply(
        &self,
        position: PixelPos,
        grid_position: GridPos,
        scaled_tile_size: f64,
    ) -> PixelPos {
        let landing = if grid_position.x < self.left_trigger {
            self.left_landing
        } else if grid_position.x > self.right_trigger {
            self.right_landing
        } else {
            return position;
        };

        log::trace!("Warping from grid x {:.2} to tile {landing}", grid_position.x);
        position.with(Axis::Left, scaled_tile_size * landing)
    }
}

impl MotionConfig {
    pub fn check_for_warp(
        &self,
        position: PixelPos,
        grid_position: GridPos,
        scaled_tile_size: f64,
    ) -> PixelPos {
        self.warp.apply(position, grid_position, scaled_tile_size)
    }
}
