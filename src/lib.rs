//! Ladder scheduler: library with models and business logic.

pub mod import;
pub mod logic;
pub mod models;

pub use import::{read_registrations, ImportError};
pub use logic::{
    assign_modes, build_schedule, generate_if_due, generate_if_due_with_rng, generate_maplist,
    generate_maplist_with_rng, generate_rounds, generate_rounds_with_rng, rematches,
    split_maplist, MIN_TEAMS,
};
pub use models::{
    Ladder, LadderDay, LadderDayId, LadderError, MapCatalog, MapEntry, Match, MatchId, Mode,
    Round, Schedule, ScheduledRound, Side, Team, TeamId, User, UserId, DEFAULT_STAGES,
    ROSTER_SIZE, ROUND_COUNT,
};
