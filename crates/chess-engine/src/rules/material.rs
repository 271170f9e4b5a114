use crate::Board;
use chess_core::PieceKind;

/// Returns true if neither side can possibly deliver mate.
///
/// Covers bare kings, a single knight or bishop against a bare king, and
/// any number of bishops that all stand on squares of one color.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors = 0;
    let mut knights = 0;
    let mut light_bishops = 0;
    let mut dark_bishops = 0;

    for (sq, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => {
                knights += 1;
                minors += 1;
            }
            PieceKind::Bishop => {
                if sq.is_light() {
                    light_bishops += 1;
                } else {
                    dark_bishops += 1;
                }
                minors += 1;
            }
        }
    }

    minors <= 1 || (knights == 0 && (light_bishops == 0 || dark_bishops == 0))
}
