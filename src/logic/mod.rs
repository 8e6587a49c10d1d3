//! Ladder business logic: round pairing, maplists, scheduling.

mod maplist;
mod pairing;
mod schedule;

pub use maplist::{assign_modes, generate_maplist, generate_maplist_with_rng, split_maplist};
pub use pairing::{generate_rounds, generate_rounds_with_rng, rematches, MIN_TEAMS};
pub use schedule::{build_schedule, generate_if_due, generate_if_due_with_rng};
