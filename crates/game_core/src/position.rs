//! Position facade over the cozy-chess rules engine.
//!
//! The search engine never touches board internals: it enumerates legal
//! moves, makes and unmakes them in strict LIFO order, and asks the queries
//! below (terminal state, hash, king/castling, piece groups, attack sets).
//! cozy-chess boards are copy-make, so the `Undo` token simply snapshots the
//! board before the move is played.

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, FenParseError, Move, Piece, Square,
};

/// A game position plus the hash history needed for repetition detection.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    /// Hash of every position reached in this game/search line, current last.
    history: Vec<u64>,
}

/// Token returned by [`Position::make_move`]; restoring it undoes the move.
///
/// Every make must be paired with exactly one unmake, in reverse order,
/// on every exit path of a search node.
#[derive(Debug)]
pub struct Undo {
    board: Board,
}

/// All pieces of one kind and color, with their squares.
#[derive(Debug, Clone)]
pub struct PieceGroup {
    pub kind: Piece,
    pub color: Color,
    pub count: u32,
    pub squares: Vec<Square>,
}

impl Position {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        Ok(Self::from_board(Board::from_fen(fen, false)?))
    }

    fn from_board(board: Board) -> Self {
        let hash = board.hash();
        Self {
            board,
            history: vec![hash],
        }
    }

    /// All legal moves; with `captures_only` set, just the capturing subset.
    ///
    /// Enumeration order is whatever cozy-chess yields, stable for a given
    /// position.
    pub fn legal_moves(&self, captures_only: bool) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|set| {
            moves.extend(set);
            false
        });
        if captures_only {
            moves.retain(|&mv| self.is_capture(mv));
        }
        moves
    }

    /// True if `mv` captures a piece (including en passant).
    pub fn is_capture(&self, mv: Move) -> bool {
        let them = self.board.colors(!self.board.side_to_move());
        if them.has(mv.to) {
            return true;
        }
        // A pawn changing file without landing on an enemy piece is en passant.
        self.board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file()
    }

    /// Plays `mv` on the board. `mv` must come from [`Position::legal_moves`].
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let undo = Undo {
            board: self.board.clone(),
        };
        self.board.play_unchecked(mv);
        self.history.push(self.board.hash());
        undo
    }

    pub fn unmake_move(&mut self, undo: Undo) {
        self.history.pop();
        self.board = undo.board;
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Half-moves played since the start of the game.
    pub fn ply_count(&self) -> u32 {
        let moved = (self.board.fullmove_number() as u32).saturating_sub(1) * 2;
        match self.board.side_to_move() {
            Color::White => moved,
            Color::Black => moved + 1,
        }
    }

    /// Zobrist-style structural hash, stable across transpositions.
    pub fn position_hash(&self) -> u64 {
        self.board.hash()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_moves()
    }

    /// Stalemate, fifty-move rule, threefold repetition, or insufficient
    /// material.
    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.board.halfmove_clock() >= 100
            || self.is_repetition()
            || self.is_insufficient_material()
    }

    fn is_repetition(&self) -> bool {
        let current = self.board.hash();
        self.history.iter().filter(|&&h| h == current).count() >= 3
    }

    fn is_insufficient_material(&self) -> bool {
        let occupied = self.board.occupied();
        match occupied.len() {
            2 => true, // bare kings
            3 => {
                let minors = self.board.pieces(Piece::Knight) | self.board.pieces(Piece::Bishop);
                minors.len() == 1
            }
            _ => false,
        }
    }

    fn has_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    pub fn king_square(&self, side: Color) -> Square {
        self.board.king(side)
    }

    pub fn has_kingside_castle_right(&self, side: Color) -> bool {
        self.board.castle_rights(side).short.is_some()
    }

    pub fn has_queenside_castle_right(&self, side: Color) -> bool {
        self.board.castle_rights(side).long.is_some()
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.board.color_on(sq)
    }

    /// Total number of pieces on the board, both sides, kings included.
    pub fn piece_count(&self) -> u32 {
        self.board.occupied().len()
    }

    /// Every (kind, color) group with its population and squares.
    pub fn piece_groups(&self) -> Vec<PieceGroup> {
        let mut groups = Vec::with_capacity(12);
        for &color in &Color::ALL {
            let ours = self.board.colors(color);
            for &kind in &Piece::ALL {
                let bb = ours & self.board.pieces(kind);
                groups.push(PieceGroup {
                    kind,
                    color,
                    count: bb.len(),
                    squares: bb.into_iter().collect(),
                });
            }
        }
        groups
    }

    /// Pseudo-legal attack coverage for a single piece standing on `sq`.
    pub fn attack_squares(&self, kind: Piece, sq: Square, side: Color) -> BitBoard {
        let blockers = self.board.occupied();
        match kind {
            Piece::Pawn => get_pawn_attacks(sq, side),
            Piece::Knight => get_knight_moves(sq),
            Piece::Bishop => get_bishop_moves(sq, blockers),
            Piece::Rook => get_rook_moves(sq, blockers),
            Piece::Queen => get_bishop_moves(sq, blockers) | get_rook_moves(sq, blockers),
            Piece::King => get_king_moves(sq),
        }
    }

    /// True if `mv` is a castling move (cozy-chess encodes these as the king
    /// capturing its own rook).
    pub fn is_castling(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::King)
            && self.color_on(mv.to) == Some(self.board.side_to_move())
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
