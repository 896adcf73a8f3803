//! Tests for session orchestration: turns, game-over gating and opponents.

use strictly_noughts::{
    best_move, GameStatus, Opponent, PlaceError, Player, Position, Session, SessionConfig,
    SessionError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_default_session_human_o_moves_first() {
    let session = Session::default();
    assert_eq!(session.to_move(), Player::O);
    assert!(!session.is_computer_turn());
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.history().is_empty());
}

#[test]
fn test_turns_alternate_with_computer() {
    init_tracing();
    let mut session = Session::default();

    assert_eq!(session.play(Position::Center), Ok(GameStatus::InProgress));
    assert_eq!(session.to_move(), Player::X);
    assert!(session.is_computer_turn());

    let reply = session.computer_move().unwrap();
    assert_eq!(reply.player, Player::X);
    assert_ne!(reply.position, Position::Center);
    assert_eq!(session.to_move(), Player::O);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_human_cannot_move_on_computer_turn() {
    let mut session = Session::default();
    session.play(Position::TopLeft).unwrap();

    let board_before = session.board().clone();
    assert_eq!(
        session.play(Position::Center),
        Err(SessionError::ComputerToMove(Player::X))
    );
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_computer_cannot_move_on_human_turn() {
    let mut session = Session::default();
    assert_eq!(
        session.computer_move(),
        Err(SessionError::HumanToMove(Player::O))
    );
}

#[test]
fn test_two_human_session_has_no_computer() {
    let mut session = Session::new(SessionConfig::two_humans(Player::X));
    assert_eq!(session.to_move(), Player::X);
    session.play(Position::Center).unwrap();
    session.play(Position::TopLeft).unwrap();
    assert!(!session.is_computer_turn());
    assert_eq!(session.computer_move(), Err(SessionError::NoComputerOpponent));
}

#[test]
fn test_occupied_cell_leaves_session_unchanged() {
    let mut session = Session::new(SessionConfig::two_humans(Player::X));
    session.play(Position::Center).unwrap();

    let err = session.play(Position::Center).unwrap_err();
    assert_eq!(err, SessionError::Place(PlaceError::OccupiedCell(Position::Center)));
    assert_eq!(session.to_move(), Player::O);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_invalid_index_is_rejected() {
    let mut session = Session::default();
    assert_eq!(
        session.play_index(12),
        Err(SessionError::Place(PlaceError::InvalidPosition(12)))
    );
    assert_eq!(session.play_index(4), Ok(GameStatus::InProgress));
}

#[test]
fn test_no_moves_after_win() {
    let mut session = Session::new(SessionConfig::two_humans(Player::X));
    for index in [0, 3, 1, 4] {
        session.play_index(index).unwrap();
    }
    assert_eq!(session.play_index(2), Ok(GameStatus::Won(Player::X)));

    assert!(session.is_over());
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.play_index(5), Err(SessionError::GameOver));
    assert_eq!(
        session.winning_line().map(|l| l.positions),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_computer_first_session() {
    let config = SessionConfig::new(Opponent::Computer, Player::X, Player::X);
    let mut session = Session::new(config);
    assert!(session.is_computer_turn());

    let opening = session.computer_move().unwrap();
    assert_eq!(session.board().get(opening.position), Player::X.mark());
    assert!(!session.is_computer_turn());
}

#[test]
fn test_optimal_human_against_computer_draws() {
    let mut session = Session::default();

    while !session.is_over() {
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        } else {
            let pos = best_move(session.board(), session.to_move()).unwrap();
            session.play(pos).unwrap();
        }
    }

    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.history().len(), 9);
    assert_eq!(session.computer_move(), Err(SessionError::GameOver));
}

#[test]
fn test_computer_punishes_a_blunder() {
    let mut session = Session::default();
    // O keeps taking the highest free cell instead of defending.
    session.play(Position::TopCenter).unwrap();
    session.computer_move().unwrap();
    let mut guard = 0;
    while !session.is_over() && guard < 9 {
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        } else {
            let last_empty = session.board().empty_positions().last().unwrap();
            session.play(last_empty).unwrap();
        }
        guard += 1;
    }
    assert_eq!(session.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_reset_and_opponent_switch() {
    let mut session = Session::default();
    session.play(Position::Center).unwrap();
    session.computer_move().unwrap();

    session.reset();
    assert!(session.history().is_empty());
    assert_eq!(session.board().empty_positions().count(), 9);
    assert_eq!(session.to_move(), Player::O);

    session.play(Position::Center).unwrap();
    session.set_opponent(Opponent::Human);
    assert!(session.history().is_empty());
    assert_eq!(*session.config().opponent(), Opponent::Human);

    session.play(Position::Center).unwrap();
    session.play(Position::TopLeft).unwrap();
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::default();
    let second = Session::default();
    first.play(Position::Center).unwrap();
    assert!(second.board().is_empty(Position::Center));
}

#[test]
fn test_error_messages() {
    assert_eq!(SessionError::GameOver.to_string(), "Game is already over");
    let err = SessionError::from(PlaceError::OccupiedCell(Position::Center));
    assert_eq!(err.to_string(), "Invalid move: Square Center is already occupied");
    assert!(std::error::Error::source(&err).is_some());
}
