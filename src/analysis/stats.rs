//! Win-or-draw statistics over a player's score sequence

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{Game, PlayerSlot},
};

/// One game's entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// 1 win, 0.5 draw, 0 loss
    pub score: f64,
    /// Whether the game was not lost
    pub win_draw: bool,
}

/// Per-game rows plus the win-or-draw rate of consecutive windows of games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub rows: Vec<ScoreRow>,
    /// Games per window
    pub group_size: usize,
    /// Mean of `win_draw` per window, in order; the last window may be short
    pub aggregated: Vec<f64>,
}

impl PlayerStats {
    /// Split `scores` into windows of `len / n_groups` games (integer
    /// division) and average the win-or-draw indicator in each.
    ///
    /// With fewer scores than groups every game is its own window.
    ///
    /// # Errors
    ///
    /// Returns error if `n_groups` is 0.
    pub fn compute(scores: &[f64], n_groups: usize) -> Result<Self> {
        if n_groups == 0 {
            return Err(Error::InvalidConfiguration {
                message: "number of groups must be positive".to_string(),
            });
        }

        let rows: Vec<ScoreRow> = scores
            .iter()
            .map(|&score| ScoreRow {
                score,
                win_draw: score != 0.0,
            })
            .collect();

        let mut group_size = rows.len() / n_groups;
        if group_size == 0 {
            log::warn!(
                "{} scores is fewer than {n_groups} groups; scores will not be aggregated",
                rows.len()
            );
            group_size = 1;
        }

        let aggregated = rows
            .chunks(group_size)
            .map(|group| {
                let not_lost = group.iter().filter(|row| row.win_draw).count();
                not_lost as f64 / group.len() as f64
            })
            .collect();

        Ok(Self {
            rows,
            group_size,
            aggregated,
        })
    }

    /// Statistics for one seat of `game`
    pub fn for_player(game: &Game, slot: PlayerSlot, n_groups: usize) -> Result<Self> {
        Self::compute(game.scores(slot), n_groups)
    }

    pub fn games(&self) -> usize {
        self.rows.len()
    }

    /// Win-or-draw rate over every game
    pub fn overall_win_draw_rate(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().filter(|row| row.win_draw).count() as f64 / self.rows.len() as f64
    }
}
