//! Integration tests - the session driven purely through its public surface

use gridfall::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_SECS_PER_TICK};
use gridfall::GameState;

#[test]
fn test_new_session_is_ready_to_render() {
    let state = GameState::new(12345);

    assert_eq!(state.score(), 0);
    assert_eq!(state.score_text(), "score: 0");
    assert_eq!(state.episode_id(), 0);
    assert_eq!(state.current_piece().grid_loc(), state.board().spawn_loc());
    assert_eq!(state.current_piece().mapped_locs().len(), 4);

    // Every cell is readable and empty
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(state.cell_content(x, y), None);
        }
    }
}

#[test]
fn test_sessions_with_same_seed_replay_identically() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);

    for _ in 0..5 {
        assert_eq!(a.current_piece().kind(), b.current_piece().kind());
        a.hard_drop();
        b.hard_drop();
        a.advance(0.0);
        b.advance(0.0);
    }
    assert_eq!(a.score(), b.score());
}

#[test]
fn test_horizontal_movement_is_bounded() {
    let mut state = GameState::new(3);

    let mut moves = 0;
    while state.move_left() {
        moves += 1;
        assert!(moves <= BOARD_WIDTH, "piece walked through the wall");
    }
    // A further attempt is refused and the piece stays put
    let at_wall = state.current_piece().grid_loc();
    assert!(!state.move_left());
    assert_eq!(state.current_piece().grid_loc(), at_wall);
}

#[test]
fn test_gravity_moves_piece_down() {
    let mut state = GameState::new(12345);
    let y0 = state.current_piece().grid_loc().y;

    state.advance(MAX_SECS_PER_TICK + 0.01);
    assert_eq!(state.current_piece().grid_loc().y, y0 + 1);

    // Sub-interval slices accumulate instead of being dropped
    state.advance(MAX_SECS_PER_TICK * 0.6);
    state.advance(MAX_SECS_PER_TICK * 0.6);
    assert_eq!(state.current_piece().grid_loc().y, y0 + 2);
}

#[test]
fn test_hard_drop_replaces_piece_on_next_advance() {
    let mut state = GameState::new(12345);
    let promised = state.next_piece().kind();

    state.hard_drop();
    state.advance(0.0);

    assert_eq!(state.current_piece().kind(), promised);
    assert_eq!(state.current_piece().grid_loc(), state.board().spawn_loc());
}

#[test]
fn test_rotation_survives_a_full_drop_cycle() {
    let mut state = GameState::new(12345);

    state.rotate_cw();
    state.hard_drop();
    state.advance(0.0);

    // Whatever happened, there is a live legal piece and a readable board
    assert_eq!(state.current_piece().mapped_locs().len(), 4);
    let _ = state.cell_content(0, 0);
}

#[test]
fn test_stacking_to_the_top_resets_the_session() {
    let mut state = GameState::new(12345);

    // Pieces dropped straight down pile up the middle columns; a blocked
    // spawn then resets the whole session
    for _ in 0..100 {
        state.hard_drop();
        state.advance(0.0);
        if state.episode_id() > 0 {
            break;
        }
    }

    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.score_text(), "score: 0");
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(state.cell_content(x, y), None);
        }
    }
}

#[test]
fn test_speed_never_hits_zero() {
    let mut state = GameState::new(12345);

    for _ in 0..60 {
        state.hard_drop();
        state.advance(0.0);
        assert!(state.secs_per_tick() > 0.0);
    }
}
