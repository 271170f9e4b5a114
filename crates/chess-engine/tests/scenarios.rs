//! Whole-game scenarios played through the public API.

use chess_core::{Color, MoveFlag, PieceKind};
use chess_engine::check::has_any_legal_move;
use chess_engine::{DrawReason, GameError, GameState, GameStatus};

fn play(game: &mut GameState, moves: &[&str]) -> GameStatus {
    let mut status = game.status();
    for notation in moves {
        status = game
            .submit_notation(notation)
            .unwrap_or_else(|e| panic!("{} rejected: {}", notation, e))
            .status;
    }
    status
}

#[test]
fn king_pawn_opening() {
    let mut game = GameState::new();
    let outcome = game.submit_coords((6, 4), (4, 4), None).unwrap();

    assert_eq!(outcome.status, GameStatus::InProgress);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.history()[0].to_notation(), "e2e4");
}

#[test]
fn scholars_mate() {
    let mut game = GameState::new();
    let status = play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert_eq!(status, GameStatus::Checkmate(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
    assert_eq!(
        has_any_legal_move(game.board(), Color::Black, game.en_passant_target()),
        Ok(false)
    );
    assert_eq!(game.history().last().map(|m| m.captured), Some(Some(PieceKind::Pawn)));
    assert_eq!(game.submit_notation("e8e7"), Err(GameError::GameOver));
}

#[test]
fn fools_mate() {
    let mut game = GameState::new();
    let status = play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(status, GameStatus::Checkmate(Color::Black));
}

#[test]
fn stalemate_with_a_blocked_pawn() {
    let mut game = GameState::from_fen("7k/7p/7P/8/8/8/8/4K1Q1 w - - 0 1").unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    let status = play(&mut game, &["g1g5"]);
    assert_eq!(status, GameStatus::Stalemate);
    assert!(game.legal_moves().unwrap().is_empty());
    assert_eq!(game.submit_notation("h8g8"), Err(GameError::GameOver));
}

#[test]
fn check_and_escape() {
    let mut game = GameState::new();
    let status = play(&mut game, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(status, GameStatus::Check(Color::Black));
    assert!(game.is_check());

    // Only g7-g6 blocks; the king cannot move to f7 or anywhere else.
    let replies: Vec<String> = game
        .legal_moves()
        .unwrap()
        .iter()
        .map(|m| m.to_notation())
        .collect();
    assert_eq!(replies, ["g7g6"]);

    assert!(matches!(
        game.submit_notation("a7a6"),
        Err(GameError::MoveExposesCheck(_))
    ));
    assert_eq!(play(&mut game, &["g7g6"]), GameStatus::InProgress);
}

#[test]
fn castling_both_sides() {
    let mut game = GameState::new();
    play(
        &mut game,
        &[
            "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "d7d6", "d2d3", "c8e6", "e1g1", "d8d7",
            "b1c3",
        ],
    );
    let outcome = game.submit_notation("e8c8").unwrap();
    assert_eq!(
        outcome.mv.flag,
        MoveFlag::Castle(chess_core::CastleSide::Queenside)
    );
    assert_eq!(game.occupant(0, 2), Ok(Some((PieceKind::King, Color::Black))));
    assert_eq!(game.occupant(0, 3), Ok(Some((PieceKind::Rook, Color::Black))));
    assert_eq!(game.occupant(0, 0), Ok(None));
}

#[test]
fn en_passant_capture_sequence() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "g8f6", "e4e5", "d7d5"]);
    let outcome = game.submit_notation("e5d6").unwrap();
    assert_eq!(outcome.mv.flag, MoveFlag::EnPassant);
    assert_eq!(outcome.mv.captured, Some(PieceKind::Pawn));
    assert_eq!(game.occupant(3, 3), Ok(None));
    assert_eq!(game.occupant(2, 3), Ok(Some((PieceKind::Pawn, Color::White))));
}

#[test]
fn promotion_game() {
    let mut game = GameState::new();
    play(
        &mut game,
        &["h2h4", "g7g5", "h4g5", "h7h6", "g5h6", "g8f6", "h6h7", "h8g8"],
    );
    let before = game.clone();
    assert!(matches!(
        game.submit_notation("h7h8"),
        Err(GameError::PromotionChoiceRequired(_))
    ));
    assert_eq!(game, before);

    let outcome = game.submit_notation("h7 g8 n").unwrap();
    assert_eq!(outcome.mv.flag, MoveFlag::Promotion(PieceKind::Knight));
    assert_eq!(outcome.mv.captured, Some(PieceKind::Rook));
    assert_eq!(game.occupant(0, 6), Ok(Some((PieceKind::Knight, Color::White))));
}

#[test]
fn draw_by_agreement_ends_the_game() {
    let mut game = GameState::new();
    play(&mut game, &["d2d4", "d7d5"]);
    assert_eq!(
        game.agree_draw(),
        Ok(GameStatus::Draw(DrawReason::Agreement))
    );
    assert!(game.status().is_terminal());
    assert!(game.legal_moves().unwrap().is_empty());
}
