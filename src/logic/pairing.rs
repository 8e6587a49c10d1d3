//! Round pairing: split registered teams into two rounds of head-to-head matches.

use crate::models::{LadderError, Match, Round, Team, ROUND_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Fewest teams that can be scheduled.
pub const MIN_TEAMS: usize = 4;

/// Generate both rounds for a ladder day using the thread-local RNG.
pub fn generate_rounds(teams: &[Team]) -> Result<Vec<Round>, LadderError> {
    generate_rounds_with_rng(teams, &mut rand::thread_rng())
}

/// Generate both rounds for a ladder day.
///
/// 1. Validate: at least `MIN_TEAMS`, full rosters, no team listed twice.
/// 2. Shuffle a copy of the teams once.
/// 3. Round 1 pairs consecutive teams: (t0, t1), (t2, t3), ...
/// 4. Round 2 rotates the order left by one and pairs again: (t1, t2), ..., (tN-1, t0).
///
/// Step 4 never repeats a round 1 pairing when there are at least 4 distinct teams.
/// The check afterwards only logs: a rematch is accepted rather than failing the schedule.
/// With an odd team count the last team of each order sits out, so the bye moves from
/// tN-1 in round 1 to t0 in round 2. The first team of every pair plays Alpha.
pub fn generate_rounds_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    rng: &mut R,
) -> Result<Vec<Round>, LadderError> {
    if teams.len() < MIN_TEAMS {
        return Err(LadderError::InsufficientTeams { found: teams.len() });
    }
    validate_teams(teams)?;

    let mut order = teams.to_vec();
    order.shuffle(rng);

    let mut rounds = Vec::with_capacity(ROUND_COUNT);
    for i in 0..ROUND_COUNT {
        if i > 0 {
            order.rotate_left(1);
        }
        rounds.push(pair_consecutive(i as u8 + 1, &order));
    }

    let repeats = rematches(&rounds);
    if repeats > 0 {
        log::warn!("Round pairing repeats {} opponent(s) from an earlier round", repeats);
    }
    log::debug!(
        "Paired {} teams into {} rounds of {} matches",
        teams.len(),
        rounds.len(),
        rounds[0].matches.len()
    );
    Ok(rounds)
}

fn validate_teams(teams: &[Team]) -> Result<(), LadderError> {
    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !team.is_full() {
            return Err(LadderError::InvalidRoster {
                team: team.id,
                size: team.roster.len(),
            });
        }
        if !seen.insert(team.id) {
            return Err(LadderError::DuplicateTeam(team.id));
        }
    }
    Ok(())
}

fn pair_consecutive(order: u8, teams: &[Team]) -> Round {
    let pairs = teams.chunks_exact(2);
    let bye = pairs.remainder().first().cloned();
    let matches = pairs
        .map(|pair| Match::new(pair[0].clone(), pair[1].clone()))
        .collect();
    Round {
        order,
        matches,
        bye,
    }
}

fn opponent_key(m: &Match) -> (Uuid, Uuid) {
    if m.alpha.id < m.bravo.id {
        (m.alpha.id, m.bravo.id)
    } else {
        (m.bravo.id, m.alpha.id)
    }
}

/// Number of matches that pair two teams who already met in an earlier round.
pub fn rematches(rounds: &[Round]) -> usize {
    let mut met = HashSet::new();
    let mut repeats = 0;
    for round in rounds {
        let keys: Vec<_> = round.matches.iter().map(opponent_key).collect();
        repeats += keys.iter().filter(|k| met.contains(*k)).count();
        met.extend(keys);
    }
    repeats
}
