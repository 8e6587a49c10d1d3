//! Data structures for the ladder: users, teams, matches, maplists, ladder days.

mod game;
mod ladder;
mod maplist;
mod team;

pub use game::{Match, MatchId, Round, Side, ROUND_COUNT};
pub use ladder::{Ladder, LadderDay, LadderDayId, LadderError, Schedule, ScheduledRound};
pub use maplist::{MapCatalog, MapEntry, Mode, DEFAULT_STAGES};
pub use team::{Team, TeamId, User, UserId, ROSTER_SIZE};
