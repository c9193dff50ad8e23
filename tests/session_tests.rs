use battleship_solo::{
    CellState, Coord, GameConfig, GameError, GameSession, Grid, SessionStatus, SizeBounds,
    TurnOutcome, MAX_SIDE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn one_ship_at_center() -> GameSession {
    let mut grid = Grid::new(3);
    grid.set(1, 1, CellState::Ship).unwrap();
    GameSession::from_grid(grid)
}

#[test]
fn test_single_ship_game_is_won_by_its_hit() {
    let mut session = one_ship_at_center();
    assert_eq!(session.ship_count(), 1);
    assert_eq!(session.status(), SessionStatus::InProgress);

    let miss = session.play_turn(0, 0).unwrap();
    assert_eq!(miss.outcome, TurnOutcome::Miss);
    assert_eq!(miss.status, SessionStatus::InProgress);
    assert_eq!(miss.hits, 0);

    let hit = session.play_turn(1, 1).unwrap();
    assert_eq!(hit.outcome, TurnOutcome::Hit);
    assert_eq!(hit.hits, 1);
    assert_eq!(hit.status, SessionStatus::Won);
    assert!(session.is_won());
}

#[test]
fn test_repeat_shot_gives_no_credit() {
    let mut grid = Grid::new(3);
    grid.set(0, 0, CellState::Ship).unwrap();
    grid.set(2, 2, CellState::Ship).unwrap();
    let mut session = GameSession::from_grid(grid);

    session.play_turn(0, 0).unwrap();
    let again = session.play_turn(0, 0).unwrap();
    assert_eq!(again.outcome, TurnOutcome::AlreadyPlayed);
    assert_eq!(again.hits, 1);
    assert_eq!(again.status, SessionStatus::InProgress);

    let progress = session.progress();
    assert_eq!(progress.shots, 1);
    assert_eq!(progress.remaining(), 1);
}

#[test]
fn test_out_of_bounds_turn_changes_nothing() {
    let mut session = one_ship_at_center();
    let before = session.grid().clone();

    assert!(matches!(
        session.play_turn(3, 0),
        Err(GameError::OutOfBounds { .. })
    ));
    assert_eq!(
        session.play_turn_signed(-1, 0).unwrap_err(),
        GameError::OutOfBounds {
            row: -1,
            col: 0,
            size: Some(3)
        }
    );
    assert!(session.play_turn_signed(1, 3).is_err());
    let negative = Coord::try_from((-1i64, 0i64));
    assert!(matches!(negative, Err(GameError::OutOfBounds { .. })));

    assert_eq!(session.grid(), &before);
    assert_eq!(session.progress().shots, 0);
    assert_eq!(session.status(), SessionStatus::InProgress);
}

#[test]
fn test_new_session_validates_config() {
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(matches!(
        GameSession::new(GameConfig::new(2, 1), &mut rng),
        Err(GameError::InvalidSize { size: 2, .. })
    ));
    assert!(matches!(
        GameSession::new(GameConfig::new(11, 1), &mut rng),
        Err(GameError::InvalidSize { size: 11, .. })
    ));
    assert!(matches!(
        GameSession::new(GameConfig::new(3, 10), &mut rng),
        Err(GameError::InsufficientSpace {
            requested: 10,
            available: 9
        })
    ));
    let custom = GameConfig::new(2, 1).with_bounds(SizeBounds::new(1, 4));
    assert!(GameSession::new(custom, &mut rng).is_ok());
}

#[test]
fn test_unbounded_config_allows_empty_grid() {
    let mut rng = SmallRng::seed_from_u64(5);
    let session = GameSession::new(GameConfig::unbounded(0, 0), &mut rng).unwrap();
    assert!(session.grid().is_empty());
    assert_eq!(session.status(), SessionStatus::Won);
}

#[test]
fn test_oversized_unbounded_grid_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(5);
    let huge = GameConfig::unbounded(usize::MAX, 0);
    assert_eq!(
        huge.validate().unwrap_err(),
        GameError::InvalidSize {
            size: usize::MAX,
            min: 0,
            max: MAX_SIDE
        }
    );
    assert!(GameSession::new(huge, &mut rng).is_err());
    assert!(GameConfig::unbounded(MAX_SIDE, 0).cell_count().is_some());
    assert!(GameConfig::unbounded(MAX_SIDE + 1, 0).cell_count().is_none());
}

#[test]
fn test_new_session_places_ships() {
    let mut rng = SmallRng::seed_from_u64(9);
    let session = GameSession::new(GameConfig::new(5, 3), &mut rng).unwrap();
    assert_eq!(session.grid().count(CellState::Ship), 3);
    assert_eq!(session.hits(), 0);
    assert_eq!(session.shots(), 0);
    assert_eq!(session.status(), SessionStatus::InProgress);
}

#[test]
fn test_reset_restarts_with_same_config() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut session = GameSession::new(GameConfig::new(4, 2), &mut rng).unwrap();
    for coord in session.grid().positions(CellState::Ship) {
        session.fire(coord).unwrap();
    }
    session.play_turn(0, 0).unwrap();
    assert!(session.is_won());

    session.reset(&mut rng).unwrap();
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert_eq!(session.hits(), 0);
    assert_eq!(session.shots(), 0);
    assert_eq!(session.size(), 4);
    assert_eq!(session.grid().count(CellState::Ship), 2);
    assert_eq!(session.grid().count(CellState::Hit), 0);
}

#[test]
fn test_won_is_terminal() {
    let mut session = one_ship_at_center();
    session.play_turn(1, 1).unwrap();
    let report = session.play_turn(0, 1).unwrap();
    assert_eq!(report.outcome, TurnOutcome::Miss);
    assert_eq!(report.status, SessionStatus::Won);
    assert_eq!(session.play_turn(1, 1).unwrap().outcome, TurnOutcome::AlreadyPlayed);
    assert!(session.is_won());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sweeping_the_grid_wins_exactly_on_last_ship(seed in any::<u64>(), ships in 1usize..=9) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = GameSession::new(GameConfig::new(3, ships), &mut rng).unwrap();
        let mut hits = 0;
        for row in 0..3 {
            for col in 0..3 {
                let report = session.play_turn(row, col).unwrap();
                if report.outcome == TurnOutcome::Hit {
                    hits += 1;
                }
                prop_assert_eq!(report.hits, hits);
                prop_assert_eq!(report.status == SessionStatus::Won, hits == ships);
            }
        }
        prop_assert_eq!(session.progress().shots, 9);
        prop_assert!(session.is_won());
    }
}
