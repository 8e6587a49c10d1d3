//! CSV import of team registrations.
//!
//! One row per player: `team,discord_id,username`. Rows sharing a `team` label form one
//! roster, in the order the rows appear.

use crate::models::User;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub enum ImportError {
    Csv(csv::Error),
    /// A required column is blank (1-based line number, header is line 1).
    EmptyField { line: usize },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "Invalid registrations CSV: {}", e),
            ImportError::EmptyField { line } => write!(f, "Empty team or discord_id on line {}", line),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Csv(e) => Some(e),
            ImportError::EmptyField { .. } => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

#[derive(Deserialize)]
struct RegistrationRow {
    team: String,
    discord_id: String,
    #[serde(default)]
    username: String,
}

/// Read rosters grouped by team label, first-seen order.
pub fn read_registrations<R: Read>(reader: R) -> Result<Vec<Vec<User>>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut teams: Vec<(String, Vec<User>)> = Vec::new();
    for (i, row) in rdr.deserialize::<RegistrationRow>().enumerate() {
        let row = row?;
        if row.team.is_empty() || row.discord_id.is_empty() {
            return Err(ImportError::EmptyField { line: i + 2 });
        }
        let user = User::new(row.discord_id, row.username);
        match teams.iter_mut().find(|(label, _)| *label == row.team) {
            Some((_, roster)) => roster.push(user),
            None => teams.push((row.team, vec![user])),
        }
    }
    Ok(teams.into_iter().map(|(_, roster)| roster).collect())
}
