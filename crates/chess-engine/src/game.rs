//! Game state and the move-commit protocol.
//!
//! [`GameState`] is the single owner of the board, the side to move, the
//! move history and the current [`GameStatus`]. Every submission either
//! commits completely or leaves all of it untouched.

use crate::check::{self, would_leave_king_in_check};
use crate::fen::{self, FenPosition};
use crate::resolve::resolve_move;
use crate::rules::{evaluate, DrawReason, GameStatus};
use crate::special::{en_passant_target, make_move};
use crate::{Board, GameError};
use chess_core::{parse_coordinate_move, Color, Move, PieceKind, Square};
use tracing::{debug, error, info};

/// The result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as committed, with its classification.
    pub mv: Move,
    /// Status of the game with the opponent about to move.
    pub status: GameStatus,
}

/// A game of chess between two players sharing one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    history: Vec<Move>,
    status: GameStatus,
    /// Square passed over by the last move if it was a pawn double step.
    en_passant: Option<Square>,
    /// Half-moves since the last pawn move or capture.
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            turn: Color::White,
            history: Vec::new(),
            status: GameStatus::InProgress,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates a game from a FEN string.
    ///
    /// The status is evaluated immediately, so a FEN describing a finished
    /// position yields a game that accepts no moves.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let FenPosition {
            board,
            turn,
            en_passant,
            halfmove_clock,
            fullmove_number,
        } = fen::parse(fen)?;
        let status = evaluate(&board, turn, en_passant, halfmove_clock)?;
        Ok(GameState {
            board,
            turn,
            history: Vec::new(),
            status,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        fen::to_fen(&FenPosition {
            board: self.board,
            turn: self.turn,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        })
    }

    /// Returns the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns every committed move, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the kind and color standing on `(row, col)`.
    pub fn occupant(&self, row: i32, col: i32) -> Result<Option<(PieceKind, Color)>, GameError> {
        Ok(self.board.get_square(row, col)?.map(|p| (p.kind, p.color)))
    }

    /// Returns the square a pawn may capture onto en passant, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        matches!(self.status, GameStatus::Check(_) | GameStatus::Checkmate(_))
    }

    /// Lists the legal moves of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Result<Vec<Move>, GameError> {
        if self.status.is_terminal() {
            return Ok(Vec::new());
        }
        check::legal_moves(&self.board, self.turn, self.en_passant)
    }

    /// Submits a move for the side to move.
    ///
    /// `promotion` must name the replacement piece when a pawn reaches its
    /// last row. On error the game is exactly as it was before the call.
    pub fn submit_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, GameError> {
        let result = self.try_submit(from, to, promotion);
        match &result {
            Ok(outcome) => debug!(mv = %outcome.mv, status = %outcome.status, "move accepted"),
            Err(e) if e.is_fatal() => error!(%from, %to, error = %e, "board invariant violated"),
            Err(e) => debug!(%from, %to, error = %e, "move rejected"),
        }
        result
    }

    /// Submits a move given as `(row, col)` pairs, row 0 being rank 8.
    pub fn submit_coords(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, GameError> {
        let from = Square::try_new(from.0, from.1)?;
        let to = Square::try_new(to.0, to.1)?;
        self.submit_move(from, to, promotion)
    }

    /// Submits a move in coordinate notation such as "e2e4" or "e7 e8 q".
    pub fn submit_notation(&mut self, notation: &str) -> Result<MoveOutcome, GameError> {
        let (from, to, promotion) = parse_coordinate_move(notation)?;
        self.submit_move(from, to, promotion)
    }

    /// Ends the game as a draw by agreement.
    pub fn agree_draw(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.status = GameStatus::Draw(DrawReason::Agreement);
        info!(status = %self.status, "game over");
        Ok(self.status)
    }

    fn try_submit(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::NoPieceAtSource(from))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourTurn(self.turn));
        }

        let mv = resolve_move(&self.board, self.en_passant, from, to, promotion)?;
        if would_leave_king_in_check(&self.board, &mv)? {
            return Err(GameError::MoveExposesCheck(mv.to_notation()));
        }

        let status = self.commit(mv)?;
        Ok(MoveOutcome { mv, status })
    }

    /// Plays an already legal move.
    ///
    /// Everything is computed before any field is written, so an error here
    /// leaves the game untouched as well.
    pub(crate) fn commit(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        let board = make_move(&self.board, &mv);
        let turn = self.turn.opposite();
        let en_passant = en_passant_target(&mv);
        let halfmove_clock = if mv.piece == PieceKind::Pawn || mv.is_capture() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        let fullmove_number = match mv.mover {
            Color::White => self.fullmove_number,
            Color::Black => self.fullmove_number.saturating_add(1),
        };
        let status = evaluate(&board, turn, en_passant, halfmove_clock)?;

        let previous = self.status;
        self.board = board;
        self.turn = turn;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.history.push(mv);
        self.status = status;

        if status != previous && status != GameStatus::InProgress {
            info!(%status, "game status changed");
        }
        Ok(status)
    }
}
