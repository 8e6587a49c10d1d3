//! Integration tests for CSV registration import.

use ladder_scheduler::{read_registrations, ImportError, Ladder};

#[test]
fn rows_are_grouped_by_team_in_first_seen_order() {
    let csv = "team,discord_id,username\n\
               Squids, 100, Ann\n\
               Octos,200,Bo\n\
               Squids,101,Cy\n\
               Squids,102,Di\n\
               Squids,103,Ed\n";
    let rosters = read_registrations(csv.as_bytes()).unwrap();
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].len(), 4);
    assert_eq!(rosters[0][0].discord_id, "100");
    assert_eq!(rosters[0][0].username, "Ann");
    assert_eq!(rosters[1].len(), 1);

    let mut ladder = Ladder::new();
    for roster in rosters {
        ladder.register_team(roster).unwrap();
    }
    assert_eq!(ladder.eligible_teams().len(), 1);
}

#[test]
fn blank_discord_id_is_rejected() {
    let csv = "team,discord_id,username\nSquids,,Ann\n";
    assert!(matches!(
        read_registrations(csv.as_bytes()),
        Err(ImportError::EmptyField { line: 2 })
    ));
}

#[test]
fn missing_column_is_a_csv_error() {
    let csv = "team,username\nSquids,Ann\n";
    assert!(matches!(
        read_registrations(csv.as_bytes()),
        Err(ImportError::Csv(_))
    ));
}
