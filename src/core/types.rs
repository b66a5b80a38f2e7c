use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConstructorId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RaceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CircuitId(pub u32);

impl DriverId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ConstructorId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl RaceId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl CircuitId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// A classified finishing (or standings) position.
///
/// Historical result files mix numeric positions with sentinel markers
/// (`\N`, empty, `R`, `DQ`) for cars that were not classified. Every
/// position in the crate goes through this one parse-and-classify step, so
/// "win" and "podium" always mean a numeric comparison against 1..=3 and
/// never a string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Classified(u32),
    NotClassified,
}

impl Position {
    /// Classify a raw field. Anything that is not a positive integer is the
    /// not-classified sentinel.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Position::Classified(n),
            _ => Position::NotClassified,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            Position::Classified(n) => Some(*n),
            Position::NotClassified => None,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Position::Classified(1))
    }

    pub fn is_podium(&self) -> bool {
        matches!(self, Position::Classified(n) if *n <= 3)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub forename: String,
    pub surname: String,
    pub nationality: String,
    pub dob: Option<NaiveDate>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constructor {
    pub id: ConstructorId,
    pub name: String,
    pub nationality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    pub id: CircuitId,
    pub name: String,
    pub location: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub year: i32,
    pub round: u32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub circuit: CircuitId,
}

/// One car's outcome in one race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    pub race: RaceId,
    pub driver: DriverId,
    pub constructor: ConstructorId,
    /// Starting position; `None` when the grid slot is unknown.
    pub grid: Option<u32>,
    pub position: Position,
    /// Finishing order assigned by the timekeepers, total over all cars.
    pub position_order: u32,
    pub points: f64,
}

/// Cumulative championship standing of a driver as of one race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStanding {
    pub race: RaceId,
    pub driver: DriverId,
    pub points: f64,
    pub wins: u32,
    pub rank: Option<u32>,
}

/// Cumulative championship standing of a constructor as of one race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStanding {
    pub race: RaceId,
    pub constructor: ConstructorId,
    pub points: f64,
    pub wins: u32,
    pub rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LapTime {
    pub race: RaceId,
    pub driver: DriverId,
    pub milliseconds: Option<u64>,
}
