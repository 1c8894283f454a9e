use crate::direction::Direction;
use crate::math::{CellPos, GridPos};
use anyhow::{Context, anyhow, bail};
use derived_deref::Deref;
use itertools::Itertools;
use serde::Deserialize;
use tap::TapFallible;

pub const WALL: char = 'X';

// Rows of cell markers, indexed `maze[row][column]`. Only WALL blocks movement. Rows may
// have different lengths, and anything outside of them counts as open.
#[derive(Deref, Debug, Clone, PartialEq, Eq)]
pub struct Maze(Vec<Vec<char>>);

// The two layouts a maze is stored as: one string per row, or one string per cell
#[derive(Deserialize)]
#[serde(untagged)]
enum MazeJson {
    Lines(Vec<String>),
    Cells(Vec<Vec<String>>),
}

impl Maze {
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let maze = Self(rows);
        maze.warn_if_ragged();
        maze
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        if rows.is_empty() {
            bail!("maze has no rows");
        }

        Ok(Self::from_rows(rows))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let parsed: MazeJson = serde_json::from_str(json)
            .tap_err(|e| log::error!("Invalid maze JSON: {e}"))
            .context("couldn't parse maze JSON")?;

        let rows: Vec<Vec<char>> = match parsed {
            MazeJson::Lines(lines) => lines.iter().map(|l| l.chars().collect()).collect(),
            MazeJson::Cells(cells) => cells
                .iter()
                .enumerate()
                .map(|(y, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(x, cell)| {
                            cell.chars().exactly_one().map_err(|_| {
                                anyhow!("cell ({x}, {y}) must be one character, got \"{cell}\"")
                            })
                        })
                        .collect::<anyhow::Result<Vec<char>>>()
                })
                .collect::<anyhow::Result<_>>()?,
        };

        if rows.is_empty() {
            bail!("maze has no rows");
        }

        Ok(Self::from_rows(rows))
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    // Width of the widest row
    pub fn columns(&self) -> usize {
        self.0.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    pub fn cell(&self, cellpos: CellPos) -> Option<char> {
        let x = usize::try_from(cellpos.x).ok()?;
        let y = usize::try_from(cellpos.y).ok()?;
        self.0.get(y)?.get(x).copied()
    }

    pub fn is_wall(&self, cellpos: CellPos) -> bool {
        self.cell(cellpos) == Some(WALL)
    }

    // Whether the cell a character moving in `direction` would enter at `desired` is a wall.
    // Looking ahead uses the direction's rounding, so the tested cell is the one in front of
    // the character rather than the one it's in.
    pub fn is_wall_at(&self, desired: GridPos, direction: Direction) -> bool {
        desired.round_to_cell(direction.rounding()).is_some_and(|cellpos| self.is_wall(cellpos))
    }

    fn warn_if_ragged(&self) {
        if !self.0.iter().map(|row| row.len()).all_equal() {
            let (shortest, longest) =
                self.0.iter().map(|row| row.len()).minmax().into_option().unwrap_or((0, 0));
            log::warn!(
                once = true;
                "Maze rows have different lengths ({shortest} to {longest}), missing cells are open"
            );
        }
    }
}

pub fn check_for_wall_collision(
    desired_new_grid_position: GridPos,
    maze: &Maze,
    direction: Direction,
) -> bool {
    maze.is_wall_at(desired_new_grid_position, direction)
}
