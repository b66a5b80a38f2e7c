//! Response shapes at the presentation boundary.
//!
//! Each query handler returns one of these JSON-serializable contracts.
//! Field names are camelCase on the wire. Unresolved joins surface either
//! as the explicit [`UNKNOWN`] marker (named scalar fields) or as `null`
//! (optional row fields), never as a missing key.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::types::{ConstructorId, DriverId, RaceId};

/// Marker for a name that could not be resolved against its entity table.
pub const UNKNOWN: &str = "Unknown";

/// Marker for a race whose venue reference dangles.
pub const UNKNOWN_CIRCUIT: &str = "Unknown Circuit";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_races: usize,
    pub total_drivers: usize,
    pub total_constructors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverInfo {
    pub driver_id: DriverId,
    pub name: String,
    pub nationality: String,
    pub dob: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverWins {
    pub driver_id: DriverId,
    pub name: String,
    pub nationality: String,
    pub wins: u32,
    pub podiums: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPodiums {
    pub driver_id: DriverId,
    pub name: String,
    pub podiums: u32,
}

/// Year-ordered parallel series of a driver's best standings points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSeries {
    pub years: Vec<i32>,
    pub points: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorInfo {
    pub constructor_id: ConstructorId,
    pub name: String,
    pub nationality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorWins {
    pub constructor_id: ConstructorId,
    pub name: String,
    pub nationality: String,
    pub wins: u32,
    pub championships: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeWins {
    pub decades: Vec<String>,
    pub teams: Vec<TeamDecadeWins>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDecadeWins {
    pub name: String,
    /// One count per fixed decade bucket, zero where the team has no wins.
    pub wins_by_decade: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub total_races: usize,
    pub top_drivers: Vec<SeasonDriverWins>,
    pub champion: String,
    pub constructor_champion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDriverWins {
    pub driver_id: DriverId,
    pub name: String,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRace {
    pub race_id: RaceId,
    pub round: u32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub circuit_name: String,
    pub winner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub driver_id: DriverId,
    pub driver_name: String,
    pub constructor_name: Option<String>,
    pub points: f64,
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFinish {
    pub grid: u32,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapTimeSeries {
    pub decades: Vec<String>,
    /// Average lap time in whole seconds per decade; `None` where the decade
    /// has no samples.
    pub avg_times: Vec<Option<f64>>,
}
