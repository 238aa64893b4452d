//! Tests for the game session host contract.

use strictly_hanoi::{
    BoardError, DEFAULT_SIZE, GameSession, HintError, Move, MoveError, Peg,
};

#[test]
fn test_default_session_holds_five_disks() {
    let session = GameSession::default();
    assert_eq!(session.board().piece_count(), DEFAULT_SIZE);
    assert_eq!(session.board().stack(Peg::A), &[4, 3, 2, 1, 0]);
}

#[test]
fn test_new_rejects_zero_disks() {
    assert!(matches!(
        GameSession::new(0),
        Err(BoardError::InvalidSize { size: 0 })
    ));
}

#[test]
fn test_reset_replaces_the_board() {
    let mut session = GameSession::new(3).unwrap();
    session.apply_move(Move::new(Peg::A, Peg::C).unwrap()).unwrap();

    let board = session.reset(2).unwrap();
    assert_eq!(board.stack(Peg::A), &[1, 0]);
    assert_eq!(board.stack(Peg::C), &[] as &[usize]);
}

#[test]
fn test_failed_reset_keeps_the_current_board() {
    let mut session = GameSession::new(3).unwrap();
    let before = session.board().clone();
    assert!(session.reset(0).is_err());
    assert_eq!(session.board(), &before);
}

#[test]
fn test_apply_move_returns_the_updated_board() {
    let mut session = GameSession::new(2).unwrap();
    let board = session
        .apply_move(Move::new(Peg::A, Peg::C).unwrap())
        .unwrap();
    assert_eq!(board.stack(Peg::C), &[0]);
}

#[test]
fn test_rejected_move_leaves_the_board_unchanged() {
    let mut session = GameSession::new(2).unwrap();
    let before = session.board().clone();
    assert_eq!(
        session.apply_move(Move::new(Peg::B, Peg::C).unwrap()),
        Err(MoveError::EmptySource { peg: Peg::B })
    );
    assert_eq!(session.board(), &before);
}

#[test]
fn test_hint_loop_solves_the_session() {
    let mut session = GameSession::new(4).unwrap();
    let mut moves = 0;

    while !session.board().is_solved() {
        let mov = session.hint().unwrap();
        session.apply_move(mov).unwrap();
        moves += 1;
    }

    assert_eq!(moves, 15);
    assert_eq!(session.hint(), Err(HintError::AlreadySolved));
}
