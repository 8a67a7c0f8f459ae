//! Partition invariant: every field sits in exactly one state bucket.

use super::super::{FieldState, GameState, Position};
use super::Invariant;
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: the empty, black and white buckets partition the board.
///
/// Each field is indexed under the state it actually holds, the bucket sizes
/// add up to N², and the four centre fields are never empty.
pub struct PartitionedBoardInvariant;

impl Invariant<GameState> for PartitionedBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let size = board.size();

        let total: usize = FieldState::iter().map(|s| board.count_being(s)).sum();
        if total != size * size {
            warn!(total, size, "Bucket sizes do not cover the board");
            return false;
        }

        let misplaced = board.positions().find(|position| {
            board
                .state_at(*position)
                .is_none_or(|actual| !board.positions_being(actual).contains(position))
        });
        if let Some(position) = misplaced {
            warn!(%position, "Field indexed under the wrong state");
            return false;
        }

        let half = (size / 2) as i32;
        let centre = [(half - 1, half - 1), (half - 1, half), (half, half - 1), (half, half)];
        centre.iter().all(|&(row, column)| {
            board
                .state_at(Position::new(row, column))
                .is_some_and(|s| !s.is_empty())
        })
    }

    fn description() -> &'static str {
        "Board fields are partitioned by state and the centre is occupied"
    }
}
