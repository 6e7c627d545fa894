//! Counts legal move paths, for checking move generation against published
//! node counts.
//!
//! Pawns here only ever promote to a queen, so counts match the published
//! tables only up to depths without promotions.

use crate::{movement::Move, position::Position};

/// Number of legal move paths of length `depth` from `position`.
pub fn perft(position: &Position, depth: u32) -> u64 {
    match depth {
        0 => 1,
        1 => position.legal_moves().len() as u64,
        _ => position
            .legal_moves()
            .into_iter()
            .map(|movement| perft(&position.play_unchecked(movement), depth - 1))
            .sum(),
    }
}
/// Like [`perft`], split per root move.
pub fn divide(position: &Position, depth: u32) -> Vec<(Move, u64)> {
    position
        .legal_moves()
        .into_iter()
        .map(|movement| {
            let nodes = perft(&position.play_unchecked(movement), depth.saturating_sub(1));
            (movement, nodes)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::{
        perft::{divide, perft},
        position::Position,
    };

    fn check(fen: &str, expected: &[u64]) {
        let position: Position = fen.parse().unwrap();
        for (depth, nodes) in (1..).zip(expected) {
            assert_eq!(perft(&position, depth), *nodes, "depth {depth} of {fen}");
        }
    }

    #[test]
    fn starting_position() {
        assert_eq!(perft(&Position::starting(), 0), 1);
        check(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            &[20, 400, 8902],
        );
    }
    #[test]
    fn kiwipete() {
        check(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            &[48, 2039, 97_862],
        );
    }
    #[test]
    fn rook_endgame_with_en_passant_pins() {
        check(
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            &[14, 191, 2812, 43_238],
        );
    }
    #[test]
    fn divide_sums_to_perft() {
        let position = Position::starting();
        let split = divide(&position, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(split.iter().map(|(_, nodes)| nodes).sum::<u64>(), perft(&position, 2));
    }
}
