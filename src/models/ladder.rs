//! Ladder store: registration pool, ladder days, and committed schedules.

use crate::models::game::{Match, Round};
use crate::models::maplist::MapEntry;
use crate::models::team::{Team, TeamId, User, ROSTER_SIZE};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during ladder operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LadderError {
    /// Fewer than 4 eligible teams; nothing can be scheduled yet.
    InsufficientTeams { found: usize },
    /// A team handed to the pairer (or registered) has the wrong roster.
    InvalidRoster { team: TeamId, size: usize },
    /// The same team was passed twice.
    DuplicateTeam(TeamId),
    /// Stage/mode catalog is unusable.
    InvalidCatalog(&'static str),
    /// No ladder day has been scheduled.
    NoLadderDay,
    /// The next ladder day has not started yet.
    NotDue,
    /// The next ladder day already has matches.
    AlreadyScheduled,
    /// A user (by Discord id) is already on a registered team.
    DuplicateUser(String),
}

impl std::fmt::Display for LadderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LadderError::InsufficientTeams { found } => {
                write!(f, "Need at least 4 full teams to generate matches (found {})", found)
            }
            LadderError::InvalidRoster { size, .. } => {
                write!(f, "Team roster must have {} distinct players (has {})", ROSTER_SIZE, size)
            }
            LadderError::DuplicateTeam(_) => write!(f, "Team listed more than once"),
            LadderError::InvalidCatalog(reason) => write!(f, "Invalid map catalog: {}", reason),
            LadderError::NoLadderDay => write!(f, "Next ladder date is not confirmed"),
            LadderError::NotDue => write!(f, "Ladder day has not started yet"),
            LadderError::AlreadyScheduled => write!(f, "Matches already generated for this ladder day"),
            LadderError::DuplicateUser(discord_id) => {
                write!(f, "User {} is already registered on a team", discord_id)
            }
        }
    }
}

impl std::error::Error for LadderError {}

/// Unique identifier for a ladder day.
pub type LadderDayId = Uuid;

/// A round together with the maps it is played on.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRound {
    pub order: u8,
    pub matches: Vec<Match>,
    pub bye: Option<Team>,
    pub maplist: Vec<MapEntry>,
}

impl ScheduledRound {
    pub fn new(round: Round, maplist: Vec<MapEntry>) -> Self {
        Self {
            order: round.order,
            matches: round.matches,
            bye: round.bye,
            maplist,
        }
    }
}

/// Everything generated for one ladder day, ready to commit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub rounds: Vec<ScheduledRound>,
}

/// One occurrence of the ladder event.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LadderDay {
    pub id: LadderDayId,
    pub date: DateTime<Utc>,
    /// Empty until matches are generated.
    pub rounds: Vec<ScheduledRound>,
}

impl LadderDay {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            rounds: Vec::new(),
        }
    }

    pub fn has_matches(&self) -> bool {
        self.rounds.iter().any(|r| !r.matches.is_empty())
    }

    /// True once the event time has passed and no matches exist yet.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.has_matches() && self.date < now
    }

    /// Same time one week later.
    pub fn following_date(&self) -> DateTime<Utc> {
        self.date + Duration::days(7)
    }
}

/// In-memory ladder state: registration pool plus scheduled days.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ladder {
    /// Teams registered for the next ladder day (full and partial rosters).
    pub registrations: Vec<Team>,
    /// The upcoming ladder day, if one is confirmed.
    pub next_day: Option<LadderDay>,
    /// Days that already have matches, oldest first.
    pub history: Vec<LadderDay>,
}

impl Ladder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or move) the next ladder day. Fails if that day already has matches.
    pub fn schedule_day(&mut self, date: DateTime<Utc>) -> Result<LadderDayId, LadderError> {
        match self.next_day.as_mut() {
            Some(day) if day.has_matches() => Err(LadderError::AlreadyScheduled),
            Some(day) => {
                day.date = date;
                Ok(day.id)
            }
            None => {
                let day = LadderDay::new(date);
                let id = day.id;
                self.next_day = Some(day);
                Ok(id)
            }
        }
    }

    /// Add a team to the registration pool. A user may only be on one registered team.
    pub fn register_team(&mut self, roster: Vec<User>) -> Result<TeamId, LadderError> {
        let team = Team::new(roster);
        if team.roster.is_empty() || team.roster.len() > ROSTER_SIZE {
            return Err(LadderError::InvalidRoster {
                team: team.id,
                size: team.roster.len(),
            });
        }
        for (i, user) in team.roster.iter().enumerate() {
            let in_roster = team.roster[..i].iter().any(|u| u.discord_id == user.discord_id);
            let in_pool = self.registrations.iter().any(|t| t.has_user(&user.discord_id));
            if in_roster || in_pool {
                return Err(LadderError::DuplicateUser(user.discord_id.clone()));
            }
        }
        let id = team.id;
        self.registrations.push(team);
        Ok(id)
    }

    /// Registration pool, largest rosters first.
    pub fn registered_teams_by_roster_size(&self) -> Vec<Team> {
        let mut teams = self.registrations.clone();
        teams.sort_by(|a, b| b.roster.len().cmp(&a.roster.len()));
        teams
    }

    /// Teams that can be paired: exactly `ROSTER_SIZE` distinct players.
    pub fn eligible_teams(&self) -> Vec<Team> {
        self.registrations
            .iter()
            .filter(|t| t.is_full())
            .cloned()
            .collect()
    }

    /// Most recent day that has matches.
    pub fn latest_event(&self) -> Option<&LadderDay> {
        self.history.last()
    }

    /// Store a generated schedule on the next ladder day, open the following week's day,
    /// and clear the registration pool. Nothing changes on error.
    pub fn commit_schedule(&mut self, schedule: Schedule) -> Result<LadderDayId, LadderError> {
        let day = self.next_day.as_ref().ok_or(LadderError::NoLadderDay)?;
        if day.has_matches() {
            return Err(LadderError::AlreadyScheduled);
        }

        let mut day = self.next_day.take().ok_or(LadderError::NoLadderDay)?;
        let following = LadderDay::new(day.following_date());
        day.rounds = schedule.rounds;
        let id = day.id;

        self.history.push(day);
        self.next_day = Some(following);
        self.registrations.clear();
        Ok(id)
    }
}
