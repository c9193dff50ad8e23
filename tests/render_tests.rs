use battleship_solo::{render, CellState, GameSession, Grid};

#[test]
fn test_render_plain_water() {
    let grid = Grid::new(2);
    let out = render::render(&grid);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["~ ~", "~ ~"]);
}

#[test]
fn test_render_hides_ships() {
    use CellState::*;
    let grid = Grid::from_rows(&[[Water, Ship, Water], [Ship, Water, Water], [Water; 3]]).unwrap();
    let out = render::render(&grid);
    assert!(!out.contains('B'));
    assert!(!out.contains('S'));
    assert_eq!(out, render::render(&Grid::new(3)));
}

#[test]
fn test_render_shows_hits_and_misses() {
    use CellState::*;
    let grid = Grid::from_rows(&[[Hit, Miss], [Water, Ship]]).unwrap();
    let out = render::render(&grid);
    assert_eq!(out, "X O\n~ ~\n");
}

#[test]
fn test_render_empty_grid() {
    let grid = Grid::new(0);
    assert_eq!(render::render(&grid), "");
    assert_eq!(render::render_labeled(&grid), "");
}

#[test]
fn test_render_is_stable() {
    let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(3);
    let session =
        GameSession::new(battleship_solo::GameConfig::new(6, 4), &mut rng).unwrap();
    let first = render::render_labeled(session.grid());
    let second = render::render_labeled(session.grid());
    assert_eq!(first, second);
    assert_eq!(first, render::render_labeled(&Grid::new(6)));
}

#[test]
fn test_render_labeled_layout() {
    use CellState::*;
    let grid = Grid::from_rows(&[[Miss, Water], [Ship, Hit]]).unwrap();
    assert_eq!(render::render_labeled(&grid), "   0 1\n 0 O ~\n 1 ~ X\n");
}
