//! Match, Side, and Round for ladder events.

use crate::models::team::{Team, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Number of rounds in one ladder event.
pub const ROUND_COUNT: usize = 2;

/// Which side of a match a team plays on. Has no competitive meaning.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[default]
    Alpha,
    Bravo,
}

/// A single team-vs-team match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// First team of the generated pair.
    pub alpha: Team,
    /// Second team of the generated pair.
    pub bravo: Team,
}

impl Match {
    pub fn new(alpha: Team, bravo: Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            alpha,
            bravo,
        }
    }

    /// Every rostered user with the side they play on, alpha roster first.
    pub fn players(&self) -> impl Iterator<Item = (&User, Side)> + '_ {
        self.alpha
            .roster
            .iter()
            .map(|u| (u, Side::Alpha))
            .chain(self.bravo.roster.iter().map(|u| (u, Side::Bravo)))
    }

    pub fn side_of(&self, team: &Team) -> Option<Side> {
        if self.alpha.id == team.id {
            Some(Side::Alpha)
        } else if self.bravo.id == team.id {
            Some(Side::Bravo)
        } else {
            None
        }
    }
}

/// One round of an event: matches in generation order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub order: u8,
    pub matches: Vec<Match>,
    /// Team sitting out this round (odd team count only).
    pub bye: Option<Team>,
}

impl Round {
    /// Ids of all teams playing this round, in match order.
    pub fn team_ids(&self) -> Vec<Uuid> {
        self.matches
            .iter()
            .flat_map(|m| [m.alpha.id, m.bravo.id])
            .collect()
    }
}
