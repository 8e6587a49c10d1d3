//! Modes, map entries, and the stage/mode catalog.

use crate::models::ladder::LadderError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Game mode tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Splat Zones
    Sz,
    /// Tower Control
    Tc,
    /// Rainmaker
    Rm,
    /// Clam Blitz
    Cb,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Sz, Mode::Tc, Mode::Rm, Mode::Cb];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sz => "SZ",
            Mode::Tc => "TC",
            Mode::Rm => "RM",
            Mode::Cb => "CB",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One map of a maplist: a stage played on a mode.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    pub stage: String,
    pub mode: Mode,
}

/// Stages in the default map pool.
pub const DEFAULT_STAGES: [&str; 18] = [
    "The Reef",
    "Musselforge Fitness",
    "Starfish Mainstage",
    "Humpback Pump Track",
    "Inkblot Art Academy",
    "Sturgeon Shipyard",
    "Manta Maria",
    "Snapper Canal",
    "Blackbelly Skatepark",
    "MakoMart",
    "Shellendorf Institute",
    "Goby Arena",
    "Piranha Pit",
    "Camp Triggerfish",
    "Wahoo World",
    "New Albacore Hotel",
    "Ancho-V Games",
    "Skipper Pavilion",
];

/// Stage and mode pools a maplist is drawn from.
///
/// Both lists are non-empty and free of duplicates; `new` enforces it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MapCatalog {
    stages: Vec<String>,
    modes: Vec<Mode>,
}

impl MapCatalog {
    pub fn new(stages: Vec<String>, modes: Vec<Mode>) -> Result<Self, LadderError> {
        if stages.is_empty() {
            return Err(LadderError::InvalidCatalog("stage list is empty"));
        }
        if modes.is_empty() {
            return Err(LadderError::InvalidCatalog("mode list is empty"));
        }
        let unique_stages: HashSet<&str> = stages.iter().map(String::as_str).collect();
        if unique_stages.len() != stages.len() {
            return Err(LadderError::InvalidCatalog("stage list has duplicates"));
        }
        let unique_modes: HashSet<Mode> = modes.iter().copied().collect();
        if unique_modes.len() != modes.len() {
            return Err(LadderError::InvalidCatalog("mode list has duplicates"));
        }
        Ok(Self { stages, modes })
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }
}

impl Default for MapCatalog {
    fn default() -> Self {
        Self {
            stages: DEFAULT_STAGES.iter().map(|s| s.to_string()).collect(),
            modes: Mode::ALL.to_vec(),
        }
    }
}
