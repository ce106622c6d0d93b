//! FEN piece-placement notation.
//!
//! Parses and encodes the first field of a FEN string, the only part this
//! variant needs: ranks listed 8 down to 1, separated by `/`, with `P` for
//! White pawns, `p` for Black pawns, and digits for runs of empty squares.

use super::square::Square;

/// Errors that can occur while parsing piece placement.
#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank '{0}' does not describe exactly 8 files")]
    BadRankWidth(String),

    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),
}

/// Parses a placement string into `(white, black)` occupancy masks.
pub fn parse_placement(fen: &str) -> Result<(u64, u64), FenError> {
    let ranks: Vec<&str> = fen.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount(ranks.len()));
    }

    let mut white = 0u64;
    let mut black = 0u64;

    for (i, rank_str) in ranks.iter().enumerate() {
        // First listed rank is rank 8.
        let rank = 7 - i as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            match c {
                '1'..='8' => {
                    file += c as u8 - b'0';
                }
                'P' | 'p' => {
                    if file >= 8 {
                        return Err(FenError::BadRankWidth(rank_str.to_string()));
                    }
                    let bit = Square::from_coords(file, rank).bit();
                    if c == 'P' {
                        white |= bit;
                    } else {
                        black |= bit;
                    }
                    file += 1;
                }
                _ => return Err(FenError::InvalidPiece(c)),
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth(rank_str.to_string()));
        }
    }

    Ok((white, black))
}

/// Encodes occupancy masks back into placement notation.
pub fn encode_placement(white: u64, black: u64) -> String {
    let mut out = String::with_capacity(32);
    for rank in (0..8).rev() {
        if rank < 7 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for file in 0..8 {
            let bit = Square::from_coords(file, rank).bit();
            let piece = if white & bit != 0 {
                Some('P')
            } else if black & bit != 0 {
                Some('p')
            } else {
                None
            };
            match piece {
                Some(c) => {
                    if empty_run > 0 {
                        out.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    out.push(c);
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push((b'0' + empty_run) as char);
        }
    }
    out
}
