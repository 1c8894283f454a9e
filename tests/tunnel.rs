use mazechase::{
    Direction, GridPos, Maze, PixelPos, Visibility, changing_grid_position, check_for_stutter,
    check_for_wall_collision, check_for_warp, determine_grid_position, get_property_to_change,
    get_velocity, snap_to_grid, turning_around,
};

const TILE: f64 = 8.;

fn tunnel_maze() -> Maze {
    let wall = "X".repeat(28);
    let tunnel = format!("{}X{}", " ".repeat(13), " ".repeat(14));
    Maze::parse(&format!("{wall}\n{tunnel}\n{wall}")).unwrap()
}

// One fixed update of a character the way the game loop drives it. Returns None when blocked.
fn step(position: PixelPos, direction: Direction, maze: &Maze) -> Option<PixelPos> {
    let axis = get_property_to_change(direction);
    let desired = position.with(axis, position.get(axis) + get_velocity(direction, 0.08) * 16.);
    let grid = determine_grid_position(desired, TILE);
    if check_for_wall_collision(grid, maze, direction) {
        return None;
    }
    Some(check_for_warp(desired, grid, TILE))
}

#[test]
fn character_wraps_through_the_tunnel() {
    let maze = tunnel_maze();
    let mut position = PixelPos::from_top_left(0.5 * TILE, 3.5 * TILE);
    let mut hidden_frames = 0;
    let mut cell_changes = 0;

    for _ in 0..40 {
        let Some(new_position) = step(position, Direction::Left, &maze) else {
            panic!("tunnel row shouldn't block");
        };
        if check_for_stutter(Some(new_position), Some(position)) == Visibility::Hidden {
            hidden_frames += 1;
        }
        if changing_grid_position(
            determine_grid_position(position, TILE),
            determine_grid_position(new_position, TILE),
        ) {
            cell_changes += 1;
        }
        position = new_position;
    }

    assert_eq!(hidden_frames, 1);
    assert!(cell_changes > 5);
    // Came out on the right hand side heading towards the middle wall
    assert!(position.left() > 14. * TILE);
}

#[test]
fn character_stops_at_the_wall_ahead() {
    let maze = tunnel_maze();
    let mut position = PixelPos::from_top_left(0.5 * TILE, 3.5 * TILE);
    let mut frames = 0;

    while let Some(new_position) = step(position, Direction::Right, &maze) {
        position = new_position;
        frames += 1;
        assert!(frames < 100, "never hit the wall");
    }

    // The wall is column 13, so the character can't be centered past column 12
    assert!(determine_grid_position(position, TILE).x <= 12.5);
    assert!(determine_grid_position(position, TILE).x > 11.5);
}

#[test]
fn turning_snaps_onto_the_tile_center() {
    let grid = GridPos::new(6.2, 1.);
    assert!(turning_around(Direction::Right, Direction::Left));

    let snapped = snap_to_grid(grid, Direction::Right, TILE);
    assert_eq!(determine_grid_position(snapped, TILE), GridPos::new(7., 1.));
    let snapped = snap_to_grid(grid, Direction::Left, TILE);
    assert_eq!(determine_grid_position(snapped, TILE), GridPos::new(6., 1.));
}
