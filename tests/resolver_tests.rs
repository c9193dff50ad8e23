use battleship_solo::{resolver, CellState, GameError, Grid, TurnOutcome};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_hit_then_already_played() {
    let mut grid = Grid::new(3);
    grid.set(1, 1, CellState::Ship).unwrap();

    assert_eq!(resolver::resolve(&mut grid, 1, 1).unwrap(), TurnOutcome::Hit);
    assert_eq!(grid.get(1, 1).unwrap(), CellState::Hit);

    let before = grid.clone();
    assert_eq!(
        resolver::resolve(&mut grid, 1, 1).unwrap(),
        TurnOutcome::AlreadyPlayed
    );
    assert_eq!(grid, before);
}

#[test]
fn test_miss_then_already_played() {
    let mut grid = Grid::new(3);
    assert_eq!(resolver::resolve(&mut grid, 0, 2).unwrap(), TurnOutcome::Miss);
    assert_eq!(grid.get(0, 2).unwrap(), CellState::Miss);
    assert_eq!(
        resolver::resolve(&mut grid, 0, 2).unwrap(),
        TurnOutcome::AlreadyPlayed
    );
    assert_eq!(grid.get(0, 2).unwrap(), CellState::Miss);
}

#[test]
fn test_out_of_bounds_leaves_grid_unchanged() {
    let mut grid = Grid::new(3);
    grid.set(0, 0, CellState::Ship).unwrap();
    let before = grid.clone();
    assert!(matches!(
        resolver::resolve(&mut grid, 3, 0),
        Err(GameError::OutOfBounds { .. })
    ));
    assert!(resolver::resolve(&mut grid, 0, usize::MAX).is_err());
    assert_eq!(grid, before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolve_mutates_exactly_one_cell_once(
        seed in any::<u64>(),
        row in 0usize..6,
        col in 0usize..6,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(6);
        battleship_solo::placer::place_ships(&mut grid, 10, &mut rng).unwrap();
        let before = grid.clone();
        let was_ship = before.get(row, col).unwrap() == CellState::Ship;

        let outcome = resolver::resolve(&mut grid, row, col).unwrap();
        prop_assert_eq!(outcome, if was_ship { TurnOutcome::Hit } else { TurnOutcome::Miss });
        let changed = before
            .cells()
            .zip(grid.cells())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert_eq!(changed, 1);

        let after = grid.clone();
        prop_assert_eq!(resolver::resolve(&mut grid, row, col).unwrap(), TurnOutcome::AlreadyPlayed);
        prop_assert_eq!(grid, after);
    }
}
