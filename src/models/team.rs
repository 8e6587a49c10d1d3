//! User and Team data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user.
pub type UserId = Uuid;

/// Unique identifier for a registered team.
pub type TeamId = Uuid;

/// Number of players a team needs to be paired into matches.
pub const ROSTER_SIZE: usize = 4;

/// A registered player. Identity fields are only carried through, never interpreted.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub discord_id: String,
    pub username: String,
}

impl User {
    pub fn new(discord_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            discord_id: discord_id.into(),
            username: username.into(),
        }
    }
}

/// A team in the registration pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Ordered roster; exactly `ROSTER_SIZE` users once the team is eligible.
    pub roster: Vec<User>,
}

impl Team {
    pub fn new(roster: Vec<User>) -> Self {
        Self {
            id: Uuid::new_v4(),
            roster,
        }
    }

    /// True when the roster has exactly `ROSTER_SIZE` distinct users.
    pub fn is_full(&self) -> bool {
        if self.roster.len() != ROSTER_SIZE {
            return false;
        }
        self.roster
            .iter()
            .enumerate()
            .all(|(i, u)| self.roster[..i].iter().all(|other| other.id != u.id))
    }

    pub fn has_user(&self, discord_id: &str) -> bool {
        self.roster.iter().any(|u| u.discord_id == discord_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_team_needs_four_distinct_users() {
        let users: Vec<User> = (0..4).map(|i| User::new(format!("{i}"), format!("U{i}"))).collect();
        assert!(Team::new(users.clone()).is_full());
        assert!(!Team::new(users[..3].to_vec()).is_full());

        let mut repeated = users[..3].to_vec();
        repeated.push(users[0].clone());
        assert!(!Team::new(repeated).is_full());
    }
}
