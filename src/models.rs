//! Typed shapes of the statistics API payloads.
//!
//! Unknown fields are ignored and optional fields default, so the same types
//! read both fresh API responses and the copies kept in the season cache.

use crate::config::SEASONS;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A year from the enumerated set the selector offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    pub fn year(self) -> u16 {
        self.0
    }

    /// Every selectable season, oldest first.
    pub fn all() -> Vec<Season> {
        SEASONS.iter().map(|&y| Season(y)).collect()
    }
}

impl TryFrom<u16> for Season {
    type Error = AppError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        if SEASONS.contains(&year) {
            Ok(Season(year))
        } else {
            Err(AppError::InvalidSeason(year.to_string()))
        }
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidSeason(s.to_string()))?;
        Season::try_from(year)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub round: u32,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub circuit: Circuit,
}

/// The race a qualifying or result entry belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRef {
    pub round: u32,
    pub year: i32,
    #[serde(default)]
    pub name: String,
}

/// Driver as embedded in qualifying and result entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntrantDriver {
    #[serde(rename = "ref", default)]
    pub reference: String,
    #[serde(default)]
    pub forename: String,
    #[serde(default)]
    pub surname: String,
}

impl EntrantDriver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
            .trim()
            .to_string()
    }
}

/// Constructor as embedded in qualifying and result entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntrantConstructor {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualifyingEntry {
    pub race: RaceRef,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub driver: EntrantDriver,
    #[serde(default)]
    pub constructor: EntrantConstructor,
    #[serde(default)]
    pub q1: Option<String>,
    #[serde(default)]
    pub q2: Option<String>,
    #[serde(default)]
    pub q3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub race: RaceRef,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub driver: EntrantDriver,
    #[serde(default)]
    pub constructor: EntrantConstructor,
    #[serde(default)]
    pub laps: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
}

impl ResultEntry {
    pub fn points_or_zero(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}

/// Catalog entry from `drivers.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_ref: String,
    #[serde(default)]
    pub forename: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
            .trim()
            .to_string()
    }
}

/// Catalog entry from `constructors.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Everything fetched for one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonData {
    pub races: Vec<Race>,
    pub qualifying: Vec<QualifyingEntry>,
    pub results: Vec<ResultEntry>,
}

impl SeasonData {
    /// Races ordered by round; equal rounds keep source order.
    pub fn races_by_round(&self) -> Vec<Race> {
        let mut races = self.races.clone();
        races.sort_by_key(|r| r.round);
        races
    }

    /// Qualifying entries of one race, in source order.
    pub fn qualifying_for(&self, round: u32) -> Vec<QualifyingEntry> {
        self.qualifying
            .iter()
            .filter(|q| q.race.round == round)
            .cloned()
            .collect()
    }

    /// Result entries of one race, in source order.
    pub fn results_for(&self, round: u32) -> Vec<ResultEntry> {
        self.results
            .iter()
            .filter(|r| r.race.round == round)
            .cloned()
            .collect()
    }
}
