use crate::direction::{Axis, Rounding};
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

pub struct PixelUnits;
pub struct GridUnits;
pub struct CellUnits;

// Screen-space position. `x` is `left` and `y` is `top`, both growing away from the
// top-left corner of the maze.
pub type PixelPos = Vec2<f64, PixelUnits>;
// Tile-space position, offset by half a tile so integers land on tile centers.
pub type GridPos = Vec2<f64, GridUnits>;
// Integer tile index (column, row).
pub type CellPos = Vec2<i32, CellUnits>;

// Vec2

pub struct Vec2<T, U> {
    pub x: T,
    pub y: T,
    _unit: PhantomData<U>,
}

impl<T, U> Vec2<T, U> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y, _unit: PhantomData }
    }

    // Same components, reinterpreted in other units
    fn cast_unit<V>(self) -> Vec2<T, V> {
        Vec2::new(self.x, self.y)
    }
}

impl<T: Copy, U> Vec2<T, U> {
    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::Top => self.y,
            Axis::Left => self.x,
        }
    }

    pub fn with(self, axis: Axis, value: T) -> Self {
        match axis {
            Axis::Top => Self::new(self.x, value),
            Axis::Left => Self::new(value, self.y),
        }
    }
}

impl<T: Debug, U> Debug for Vec2<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vec2").field("x", &self.x).field("y", &self.y).finish()
    }
}

impl<T: Clone, U> Clone for Vec2<T, U> {
    fn clone(&self) -> Self {
        Self::new(self.x.clone(), self.y.clone())
    }
}

impl<T: Copy, U> Copy for Vec2<T, U> {}

// Derived PartialEq would require U: PartialEq
impl<T: PartialEq, U> PartialEq for Vec2<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Eq, U> Eq for Vec2<T, U> {}

impl<T: Add, U> Add for Vec2<T, U> {
    type Output = Vec2<T::Output, U>;

    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub, U> Sub for Vec2<T, U> {
    type Output = Vec2<T::Output, U>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul + Copy, U> Mul<T> for Vec2<T, U> {
    type Output = Vec2<T::Output, U>;

    fn mul(self, rhs: T) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Div + Copy, U> Div<T> for Vec2<T, U> {
    type Output = Vec2<T::Output, U>;

    fn div(self, rhs: T) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

// Pixel positions

impl Vec2<f64, PixelUnits> {
    pub const fn from_top_left(top: f64, left: f64) -> Self {
        Self::new(left, top)
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }
}

// Conversions

// Grid coordinates put the top left pixel of the maze at the center of the first tile
const HALF_TILE: GridPos = Vec2::new(0.5, 0.5);

impl Vec2<f64, PixelUnits> {
    pub fn to_grid_units(self, scaled_tile_size: f64) -> Vec2<f64, GridUnits> {
        (self / scaled_tile_size).cast_unit::<GridUnits>() + HALF_TILE
    }
}

impl Vec2<f64, GridUnits> {
    pub fn to_pixel_units(self, scaled_tile_size: f64) -> Vec2<f64, PixelUnits> {
        ((self - HALF_TILE) * scaled_tile_size).cast_unit::<PixelUnits>()
    }

    // The cell whose area contains this position
    pub fn to_cell_units(self) -> Option<Vec2<i32, CellUnits>> {
        self.round_to_cell(Rounding::Floor)
    }

    // Float to int casts saturate, so anything absurdly far off the maze still ends up out of
    // range rather than wrapping around into it. NaN has no cell at all.
    pub fn round_to_cell(self, rounding: Rounding) -> Option<Vec2<i32, CellUnits>> {
        if self.x.is_nan() || self.y.is_nan() {
            return None;
        }
        Some(Vec2::new(rounding.apply(self.x) as i32, rounding.apply(self.y) as i32))
    }
}
