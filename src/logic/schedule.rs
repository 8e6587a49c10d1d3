//! Scheduling a ladder day: pair rounds, draw the maplist, commit both together.

use crate::logic::maplist::{generate_maplist_with_rng, split_maplist};
use crate::logic::pairing::generate_rounds_with_rng;
use crate::models::{
    Ladder, LadderDayId, LadderError, MapCatalog, Schedule, ScheduledRound, Team,
};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Pair the teams into rounds and give round `i` the `i`th slice of one maplist.
pub fn build_schedule<R: Rng + ?Sized>(
    teams: &[Team],
    catalog: &MapCatalog,
    rng: &mut R,
) -> Result<Schedule, LadderError> {
    let rounds = generate_rounds_with_rng(teams, rng)?;
    let maplist = generate_maplist_with_rng(catalog, rng);
    let slices = split_maplist(&maplist, rounds.len());

    let rounds = rounds
        .into_iter()
        .zip(slices.into_iter().chain(std::iter::repeat(Vec::new())))
        .map(|(round, maps)| ScheduledRound::new(round, maps))
        .collect();
    Ok(Schedule { rounds })
}

/// Generate and commit matches for the next ladder day if it is due.
///
/// Returns `Ok(None)` when there is no ladder day or it has not started / is already
/// scheduled. Registered teams without a full roster are skipped. `InsufficientTeams`
/// leaves the ladder untouched so the next trigger can try again.
pub fn generate_if_due(
    ladder: &mut Ladder,
    catalog: &MapCatalog,
    now: DateTime<Utc>,
) -> Result<Option<LadderDayId>, LadderError> {
    generate_if_due_with_rng(ladder, catalog, now, &mut rand::thread_rng())
}

pub fn generate_if_due_with_rng<R: Rng + ?Sized>(
    ladder: &mut Ladder,
    catalog: &MapCatalog,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Option<LadderDayId>, LadderError> {
    match ladder.next_day.as_ref() {
        Some(day) if day.is_due(now) => {}
        _ => return Ok(None),
    }

    let teams = ladder.eligible_teams();
    let skipped = ladder.registrations.len() - teams.len();
    if skipped > 0 {
        log::debug!("Skipping {} registered team(s) without a full roster", skipped);
    }

    let schedule = build_schedule(&teams, catalog, rng)?;
    let matches: usize = schedule.rounds.iter().map(|r| r.matches.len()).sum();
    let id = ladder.commit_schedule(schedule)?;
    log::info!(
        "Scheduled ladder day {}: {} teams, {} matches",
        id,
        teams.len(),
        matches
    );
    Ok(Some(id))
}
