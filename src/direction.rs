use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

// The pixel coordinate that changes when moving in a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Top,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    Floor,
    Ceil,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Top,
            Direction::Left | Direction::Right => Axis::Left,
        }
    }

    // Signed velocity along the direction's axis. Down and right are positive.
    pub fn velocity(self, velocity_per_ms: f64) -> f64 {
        match self {
            Direction::Up | Direction::Left => -velocity_per_ms,
            Direction::Down | Direction::Right => velocity_per_ms,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    // Rounding that picks the next cell boundary ahead of a character moving this way.
    // Moving towards lower coordinates the next cell is the lower integer, and the upper
    // integer otherwise.
    pub fn rounding(self) -> Rounding {
        match self {
            Direction::Up | Direction::Left => Rounding::Floor,
            Direction::Down | Direction::Right => Rounding::Ceil,
        }
    }

    pub fn is_reversal_of(self, other: Direction) -> bool {
        self == other.opposite()
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(anyhow!("Invalid direction: \"{s}\"")),
        }
    }
}

// Free function forms, named after what the game loop asks for

pub fn get_property_to_change(direction: Direction) -> Axis {
    direction.axis()
}

pub fn get_velocity(direction: Direction, velocity_per_ms: f64) -> f64 {
    direction.velocity(velocity_per_ms)
}

pub fn get_opposite_direction(direction: Direction) -> Direction {
    direction.opposite()
}

pub fn determine_rounding_function(direction: Direction) -> fn(f64) -> f64 {
    match direction.rounding() {
        Rounding::Floor => f64::floor,
        Rounding::Ceil => f64::ceil,
    }
}

pub fn turning_around(direction: Direction, desired_direction: Direction) -> bool {
    desired_direction.is_reversal_of(direction)
}
