// Helpers that turn a maze-chase character's pixel position into grid terms: which way it's
// heading, which tile it's in, whether the tile ahead is a wall, where to snap it when it
// turns, when to wrap it through the tunnel, and where to draw it between updates.
//
// Everything here is a pure function of its arguments. Callers own all state.

pub mod config;
pub mod direction;
pub mod grid;
pub mod interp;
pub mod math;
pub mod maze;
pub mod misc;
pub mod sprite;

pub use config::{MotionConfig, WarpBounds};
pub use direction::{
    Axis, Direction, Rounding, determine_rounding_function, get_opposite_direction,
    get_property_to_change, get_velocity, turning_around,
};
pub use grid::{changing_grid_position, check_for_warp, determine_grid_position, snap_to_grid};
pub use interp::{Visibility, calculate_draw_position, calculate_new_draw_value, check_for_stutter};
pub use math::{CellPos, GridPos, PixelPos, Vec2};
pub use maze::{Maze, check_for_wall_collision};
pub use misc::{Logger, init_logger};
pub use sprite::SpriteAnimation;
