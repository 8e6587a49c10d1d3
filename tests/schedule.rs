//! Integration tests for scheduling a ladder day end to end.

use chrono::{Duration, TimeZone, Utc};
use ladder_scheduler::{
    build_schedule, generate_if_due_with_rng, Ladder, LadderError, MapCatalog, Team, User,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(label: usize, size: usize) -> Vec<User> {
    (0..size)
        .map(|i| User::new(format!("{label}-{i}"), format!("T{label}P{i}")))
        .collect()
}

fn ladder_with_teams(full: usize, partial: usize) -> Ladder {
    let mut ladder = Ladder::new();
    ladder
        .schedule_day(Utc.with_ymd_and_hms(2026, 10, 9, 18, 0, 0).unwrap())
        .unwrap();
    for i in 0..full {
        ladder.register_team(roster(i, 4)).unwrap();
    }
    for i in full..full + partial {
        ladder.register_team(roster(i, 2)).unwrap();
    }
    ladder
}

#[test]
fn rounds_get_their_own_half_of_the_maplist() {
    let teams: Vec<Team> = (0..8).map(|i| Team::new(roster(i, 4))).collect();
    let schedule =
        build_schedule(&teams, &MapCatalog::default(), &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(schedule.rounds.len(), 2);
    let mut stages = HashSet::new();
    for (i, round) in schedule.rounds.iter().enumerate() {
        assert_eq!(round.order as usize, i + 1);
        assert_eq!(round.matches.len(), 4);
        assert_eq!(round.maplist.len(), 9);
        stages.extend(round.maplist.iter().map(|m| m.stage.clone()));
    }
    assert_eq!(stages.len(), 18);
}

#[test]
fn not_generated_before_ladder_day() {
    let mut ladder = ladder_with_teams(4, 0);
    let before = ladder.next_day.as_ref().unwrap().date - Duration::minutes(1);
    let result =
        generate_if_due_with_rng(&mut ladder, &MapCatalog::default(), before, &mut StdRng::seed_from_u64(1));
    assert_eq!(result, Ok(None));
    assert_eq!(ladder.registrations.len(), 4);
    assert!(ladder.history.is_empty());
}

#[test]
fn insufficient_teams_leaves_ladder_untouched() {
    // Partial rosters do not count towards the minimum.
    let mut ladder = ladder_with_teams(3, 2);
    let now = ladder.next_day.as_ref().unwrap().date + Duration::hours(1);
    let result =
        generate_if_due_with_rng(&mut ladder, &MapCatalog::default(), now, &mut StdRng::seed_from_u64(1));
    assert_eq!(result, Err(LadderError::InsufficientTeams { found: 3 }));
    assert_eq!(ladder.registrations.len(), 5);
    assert!(ladder.history.is_empty());
    assert!(!ladder.next_day.as_ref().unwrap().has_matches());
}

#[test]
fn due_day_is_scheduled_and_pool_cleared() {
    let mut ladder = ladder_with_teams(8, 1);
    let day = ladder.next_day.clone().unwrap();
    let now = day.date + Duration::hours(1);

    let id = generate_if_due_with_rng(&mut ladder, &MapCatalog::default(), now, &mut StdRng::seed_from_u64(9))
        .unwrap()
        .expect("day was due");
    assert_eq!(id, day.id);

    let event = ladder.latest_event().unwrap();
    assert_eq!(event.id, day.id);
    assert_eq!(event.rounds.len(), 2);
    assert!(event.rounds.iter().all(|r| r.matches.len() == 4));

    assert!(ladder.registrations.is_empty());
    let next = ladder.next_day.as_ref().unwrap();
    assert_eq!(next.date, day.date + Duration::days(7));
    assert!(next.rounds.is_empty());

    // Next day is a week away, so another trigger does nothing.
    let again =
        generate_if_due_with_rng(&mut ladder, &MapCatalog::default(), now, &mut StdRng::seed_from_u64(9));
    assert_eq!(again, Ok(None));
    assert_eq!(ladder.history.len(), 1);
}

#[test]
fn registration_rejects_users_already_on_a_team() {
    let mut ladder = Ladder::new();
    ladder.register_team(roster(0, 4)).unwrap();
    let mut clash = roster(1, 3);
    clash.push(User::new("0-2", "again"));
    assert_eq!(
        ladder.register_team(clash),
        Err(LadderError::DuplicateUser("0-2".to_string()))
    );
    assert!(matches!(
        ladder.register_team(roster(2, 5)),
        Err(LadderError::InvalidRoster { size: 5, .. })
    ));
    assert_eq!(ladder.registrations.len(), 1);
}

#[test]
fn teams_listed_largest_roster_first() {
    let mut ladder = Ladder::new();
    ladder.register_team(roster(0, 1)).unwrap();
    ladder.register_team(roster(1, 4)).unwrap();
    ladder.register_team(roster(2, 3)).unwrap();
    let sizes: Vec<usize> = ladder
        .registered_teams_by_roster_size()
        .iter()
        .map(|t| t.roster.len())
        .collect();
    assert_eq!(sizes, vec![4, 3, 1]);
    assert_eq!(ladder.eligible_teams().len(), 1);
}

#[test]
fn commit_without_ladder_day_fails() {
    let mut ladder = Ladder::new();
    assert_eq!(
        ladder.commit_schedule(Default::default()),
        Err(LadderError::NoLadderDay)
    );
}
