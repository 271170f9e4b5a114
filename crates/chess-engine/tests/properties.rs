//! Property tests for move validation and the commit protocol.

use chess_core::{Color, Piece, PieceKind, Square};
use chess_engine::validator::validate;
use chess_engine::{Board, GameState};
use proptest::prelude::*;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

fn slider_for(direction: (i8, i8), queen: bool) -> PieceKind {
    if queen {
        PieceKind::Queen
    } else if direction.0 == 0 || direction.1 == 0 {
        PieceKind::Rook
    } else {
        PieceKind::Bishop
    }
}

fn square_index(index: u8) -> Square {
    Square::new(index / 8, index % 8).unwrap()
}

/// Number of steps a slider on `from` can take in `direction` before
/// leaving the board.
fn reach(from: Square, (dr, dc): (i8, i8)) -> i8 {
    (1..8i8)
        .take_while(|&k| from.offset(dr * k, dc * k).is_some())
        .last()
        .unwrap_or(0)
}

/// An origin, a direction with room for at least two steps, a distance
/// along it, and a strictly intermediate step for a blocker.
fn slide() -> impl Strategy<Value = (Square, (i8, i8), i8, i8)> {
    (0u8..64)
        .prop_flat_map(|origin| {
            let from = square_index(origin);
            let open: Vec<((i8, i8), i8)> = DIRECTIONS
                .iter()
                .map(|&direction| (direction, reach(from, direction)))
                .filter(|&(_, max)| max >= 2)
                .collect();
            (Just(from), prop::sample::select(open))
        })
        .prop_flat_map(|(from, (direction, max))| (Just(from), Just(direction), 2..=max))
        .prop_flat_map(|(from, direction, distance)| {
            (Just(from), Just(direction), Just(distance), 1..distance)
        })
}

proptest! {
    #[test]
    fn sliding_path_must_be_clear(
        (from, (dr, dc), distance, blocker_step) in slide(),
        queen in any::<bool>(),
        white in any::<bool>(),
        blocker_white in any::<bool>(),
    ) {
        let to = from.offset(dr * distance, dc * distance).unwrap();

        let color = if white { Color::White } else { Color::Black };
        let mut board = Board::empty();
        board.place_piece(from, Piece::new(slider_for((dr, dc), queen), color));
        prop_assert!(validate(&board, from, to, color).is_ok());

        let blocker_color = if blocker_white { Color::White } else { Color::Black };
        let between = from.offset(dr * blocker_step, dc * blocker_step).unwrap();
        board.place_piece(between, Piece::new(PieceKind::Knight, blocker_color));
        prop_assert!(validate(&board, from, to, color).is_err());
    }

    #[test]
    fn submissions_commit_fully_or_not_at_all(
        steps in prop::collection::vec((any::<bool>(), 0u8..64, 0u8..64, 0usize..256), 1..40),
    ) {
        let mut game = GameState::new();
        for (pick_legal, from, to, choice) in steps {
            if game.status().is_terminal() {
                break;
            }
            let before = game.clone();
            let result = if pick_legal {
                let moves = game.legal_moves().unwrap();
                let mv = moves[choice % moves.len()];
                game.submit_move(mv.from, mv.to, mv.flag.promotion_piece())
            } else {
                game.submit_move(square_index(from), square_index(to), None)
            };

            match result {
                Ok(outcome) => {
                    prop_assert_eq!(game.turn(), before.turn().opposite());
                    prop_assert_eq!(game.history().len(), before.history().len() + 1);
                    prop_assert_eq!(game.history().last(), Some(&outcome.mv));
                    prop_assert_eq!(outcome.mv.mover, before.turn());
                    prop_assert_eq!(outcome.status, game.status());
                }
                Err(e) => {
                    prop_assert!(!pick_legal, "legal move rejected: {}", e);
                    prop_assert!(!e.is_fatal());
                    prop_assert_eq!(&game, &before);
                }
            }
        }
    }

    #[test]
    fn legal_moves_never_leave_the_king_attacked(
        choices in prop::collection::vec(0usize..256, 0..24),
    ) {
        let mut game = GameState::new();
        for choice in choices {
            let moves = game.legal_moves().unwrap();
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice % moves.len()];
            game.submit_move(mv.from, mv.to, mv.flag.promotion_piece()).unwrap();
            prop_assert!(!chess_engine::check::is_in_check(game.board(), mv.mover).unwrap());
        }
    }
}
