use std::fmt;

use super::*;
use crate::error::{FenError, MoveError};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND STATE MUTATION
 */

/// Back-rank layout shared by both sides, indexed by file
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Castle-right flags per side. Long is the file-0 rook, short the file-7 rook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights {
    long: [bool; 2],
    short: [bool; 2],
}

impl CastleRights {
    pub fn all() -> Self {
        Self {
            long: [true; 2],
            short: [true; 2],
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn long(&self, color: Color) -> bool {
        self.long[color.index()]
    }

    pub fn short(&self, color: Color) -> bool {
        self.short[color.index()]
    }

    pub fn set_long(&mut self, color: Color, value: bool) {
        self.long[color.index()] = value;
    }

    pub fn set_short(&mut self, color: Color, value: bool) {
        self.short[color.index()] = value;
    }

    /// Flags in hashing order: White long, White short, Black long, Black short
    pub fn flags(&self) -> [bool; 4] {
        [self.long[0], self.short[0], self.long[1], self.short[1]]
    }
}

/// Final result of a game, recorded on the position by the game-end judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Color),
    /// The side to move had no move at all
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// `board[rank][file]`, rank 0 at the top of the grid
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castle_rights: CastleRights,
    /// Pawn that just made a double push and can be taken en passant
    pub en_passant: Option<Square>,
    /// Side whose pieces start on the bottom two ranks
    pub starter: Color,
    pub terminal: bool,
    pub winner: Option<Outcome>,
}

/// Everything `unmake` needs to restore the position before `apply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    mover: Piece,
    captured: Option<Piece>,
    /// Where the captured piece stood; differs from `to` for en passant
    capture_square: Option<Square>,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    side_to_move: Color,
}

impl UndoRecord {
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn captured_kind(&self) -> Option<PieceKind> {
        self.captured.map(|p| p.kind)
    }

    /// Kind of the moving piece before the move (a Pawn for promotions)
    pub fn prior_kind(&self) -> PieceKind {
        self.mover.kind
    }

    pub fn mover(&self) -> Piece {
        self.mover
    }

    /// The move took the opposing King
    pub fn terminal(&self) -> bool {
        matches!(self.captured, Some(Piece { kind: PieceKind::King, .. }))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game(Color::White)
    }
}

impl Position {
    pub fn empty(starter: Color) -> Position {
        Position {
            board: [[None; 8]; 8],
            side_to_move: starter,
            castle_rights: CastleRights::none(),
            en_passant: None,
            starter,
            terminal: false,
            winner: None,
        }
    }

    /// Standard arrangement with `starter` on the bottom two ranks and to move
    pub fn new_game(starter: Color) -> Position {
        let other = starter.opposite();
        let mut pos = Position::empty(starter);
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            pos.board[7][file] = Some(Piece::new(kind, starter));
            pos.board[6][file] = Some(Piece::new(PieceKind::Pawn, starter));
            pos.board[1][file] = Some(Piece::new(PieceKind::Pawn, other));
            pos.board[0][file] = Some(Piece::new(kind, other));
        }
        pos.castle_rights = CastleRights::all();
        pos
    }

    /// Parses `placement [side [castling [en-passant]]]`.
    ///
    /// Placement rows are read from the top of the grid down, so with a White
    /// starter this is ordinary FEN. The en-passant field names the skipped
    /// square, as in FEN. Move counters are accepted and ignored.
    pub fn from_fen(fen: &str, starter: Color) -> Result<Position, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let mut pos = Position::empty(starter);

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::RowCount(rows.len()));
        }
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::BadPiece(c))?;
                    if file >= 8 {
                        return Err(FenError::RowLength(rank));
                    }
                    pos.board[rank][file] = Some(piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::RowLength(rank));
            }
        }

        pos.side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::BadSide(other.to_string())),
        };

        if let Some(castling) = parts.next() {
            if castling != "-" {
                for c in castling.chars() {
                    match c {
                        'K' => pos.castle_rights.set_short(Color::White, true),
                        'Q' => pos.castle_rights.set_long(Color::White, true),
                        'k' => pos.castle_rights.set_short(Color::Black, true),
                        'q' => pos.castle_rights.set_long(Color::Black, true),
                        _ => return Err(FenError::BadCastling(castling.to_string())),
                    }
                }
            }
        }

        if let Some(ep) = parts.next() {
            if ep != "-" {
                let skipped =
                    Square::from_algebraic(ep).ok_or_else(|| FenError::BadEnPassant(ep.to_string()))?;
                // The double-pushed pawn belongs to the side that just moved
                let pusher = pos.side_to_move.opposite();
                let pawn_sq = skipped
                    .offset(pos.forward(pusher), 0)
                    .ok_or_else(|| FenError::BadEnPassant(ep.to_string()))?;
                if pos.piece_at(pawn_sq) != Some(Piece::new(PieceKind::Pawn, pusher)) {
                    return Err(FenError::BadEnPassant(ep.to_string()));
                }
                pos.en_passant = Some(pawn_sq);
            }
        }

        for color in Color::BOTH {
            let count = pos
                .pieces()
                .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                .count();
            if count != 1 {
                return Err(FenError::KingCount { color, count });
            }
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (rank, row) in self.board.iter().enumerate() {
            let mut empty = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let rights = &self.castle_rights;
        let mut castling = String::new();
        for (flag, c) in [
            (rights.short(Color::White), 'K'),
            (rights.long(Color::White), 'Q'),
            (rights.short(Color::Black), 'k'),
            (rights.long(Color::Black), 'q'),
        ] {
            if flag {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push(' ');
        fen.push_str(&castling);

        let skipped = self.en_passant.and_then(|sq| {
            let pusher = self.piece_at(sq)?.color;
            sq.offset(-self.forward(pusher), 0)
        });
        match skipped {
            Some(sq) => fen.push_str(&format!(" {}", sq)),
            None => fen.push_str(" -"),
        }
        fen
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.rank as usize][sq.file as usize]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.rank as usize][sq.file as usize] = piece;
    }

    /// Occupied squares in grid order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Rank step a pawn of `color` advances by
    #[inline]
    pub fn forward(&self, color: Color) -> i8 {
        if color == self.starter {
            -1
        } else {
            1
        }
    }

    /// Rank the pawns of `color` start on
    #[inline]
    pub fn pawn_start_rank(&self, color: Color) -> u8 {
        if color == self.starter {
            6
        } else {
            1
        }
    }

    /// Rank where a pawn of `color` promotes
    #[inline]
    pub fn promotion_rank(&self, color: Color) -> u8 {
        if color == self.starter {
            0
        } else {
            7
        }
    }

    /// Plays `mv` and returns the record `unmake` needs.
    ///
    /// Moves from `generate_moves` are always accepted. Use
    /// [`crate::apply_move`] for moves from outside the engine.
    ///
    /// # Panics
    ///
    /// Panics if the origin square of `mv` is empty.
    pub fn apply(&mut self, mv: &Move) -> UndoRecord {
        let Some(mover) = self.piece_at(mv.from) else {
            panic!("apply: no piece on {}", mv.from);
        };

        let mut undo = UndoRecord {
            mover,
            captured: None,
            capture_square: mv.capture,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
            side_to_move: self.side_to_move,
        };

        match mover.kind {
            PieceKind::King => {
                self.castle_rights.set_long(mover.color, false);
                self.castle_rights.set_short(mover.color, false);
            }
            PieceKind::Rook if mv.from.file == 0 => self.castle_rights.set_long(mover.color, false),
            PieceKind::Rook if mv.from.file == 7 => self.castle_rights.set_short(mover.color, false),
            _ => {}
        }

        if let Some(cap) = mv.capture {
            undo.captured = self.piece_at(cap);
            self.set(cap, None);
        }

        self.en_passant = if mv.double_push { Some(mv.to) } else { None };

        let kind = mv.promotion_kind().unwrap_or(mover.kind);
        self.set(mv.from, None);
        self.set(mv.to, Some(Piece::new(kind, mover.color)));

        self.side_to_move = self.side_to_move.opposite();
        undo
    }

    /// Exactly reverses `apply(mv)`, including castle rights, the en-passant
    /// target and the side to move. Only the squares of `mv` are read; what
    /// was captured, and where, comes from the record.
    pub fn unmake(&mut self, mv: &Move, undo: UndoRecord) {
        self.set(mv.to, None);
        self.set(mv.from, Some(undo.mover));
        if let Some(cap) = undo.capture_square {
            self.set(cap, undo.captured);
        }
        self.castle_rights = undo.castle_rights;
        self.en_passant = undo.en_passant;
        self.side_to_move = undo.side_to_move;
    }

    /// Resolves a pending promotion on `sq` to `kind`
    pub fn promote(&mut self, sq: Square, kind: PieceKind) -> Result<(), MoveError> {
        match self.piece_at(sq) {
            Some(Piece { kind: PieceKind::Pawn, color }) if sq.rank == self.promotion_rank(color) => {
                if matches!(kind, PieceKind::King | PieceKind::Pawn) {
                    return Err(MoveError::BadPromotion(kind));
                }
                self.set(sq, Some(Piece::new(kind, color)));
                Ok(())
            }
            _ => Err(MoveError::NothingToPromote(sq)),
        }
    }

    /// Counts leaf nodes of the pseudo-legal move tree
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves(self.side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut pos = self.clone();
        let mut nodes = 0;
        for mv in &moves {
            let undo = pos.apply(mv);
            nodes += pos.perft(depth - 1);
            pos.unmake(mv, undo);
        }
        nodes
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.board.iter().enumerate() {
            write!(f, "{} ", 8 - rank)?;
            for square in row {
                match square {
                    Some(piece) => write!(f, " {}", piece.to_char())?,
                    None => f.write_str(" .")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
