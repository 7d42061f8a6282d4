use cozy_chess::{File, Move, Piece, Square};

use crate::position::Position;

/// Formats a move in UCI coordinate notation.
///
/// cozy-chess encodes castling as the king capturing its own rook; UCI wants
/// the king's actual destination square, so castling moves are translated.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let mut mv = mv;
    if pos.is_castling(mv) {
        let file = if mv.to.file() > mv.from.file() {
            File::G
        } else {
            File::C
        };
        mv.to = Square::new(file, mv.from.rank());
    }

    let mut s = format!("{}{}", mv.from, mv.to);
    if let Some(p) = mv.promotion {
        s.push(match p {
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        });
    }
    s
}

/// Parses a UCI move and matches it against the legal move list, so castle
/// and en-passant encodings come out correct.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let from: Square = txt.get(0..2)?.parse().ok()?;
    let to: Square = txt.get(2..4)?.parse().ok()?;
    let promotion = match txt.as_bytes().get(4).copied() {
        Some(b'q') | Some(b'Q') => Some(Piece::Queen),
        Some(b'r') | Some(b'R') => Some(Piece::Rook),
        Some(b'b') | Some(b'B') => Some(Piece::Bishop),
        Some(b'n') | Some(b'N') => Some(Piece::Knight),
        _ => None,
    };

    let legals = pos.legal_moves(false);
    if let Some(mv) = legals
        .iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
    {
        return Some(*mv);
    }

    // Standard castling notation moves the king two files; remap to the
    // king-takes-rook form cozy-chess generates.
    if pos.piece_on(from) == Some(Piece::King) {
        let rook_file = match to.file() {
            File::G => File::H,
            File::C => File::A,
            _ => return None,
        };
        let rook_to = Square::new(rook_file, to.rank());
        return legals
            .iter()
            .copied()
            .find(|m| m.from == from && m.to == rook_to);
    }

    None
}

/// Applies a UCI `position` command body: `startpos [moves ...]` or
/// `fen <fen> [moves ...]`.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) {
    let mut i = 0;
    match args.first() {
        Some(&"startpos") => {
            *pos = Position::startpos();
            i = 1;
        }
        Some(&"fen") => {
            let end = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
            let fen = args[1..end].join(" ");
            *pos = Position::from_fen(&fen).unwrap_or_else(|_| Position::startpos());
            i = end;
        }
        _ => {
            *pos = Position::startpos();
        }
    }

    if args.get(i) == Some(&"moves") {
        for txt in &args[i + 1..] {
            if let Some(mv) = parse_uci_move(pos, txt) {
                pos.make_move(mv);
            }
        }
    }
}
