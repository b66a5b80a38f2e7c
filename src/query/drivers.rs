//! Driver-centric analytical queries.

use crate::core::types::{DriverId, DriverStanding};
use crate::ops::group::{Aggregate, Grouper};
use crate::ops::join::inner_join;
use crate::ops::sort::top_n_by;
use crate::query::response::{DriverInfo, DriverWins, PerformanceSeries, UNKNOWN};
use crate::store::dataset::Dataset;

/// All-time driver ranking is capped at 50 rows.
pub const DRIVER_RANKING_LIMIT: usize = 50;

#[derive(Debug, Default)]
struct WinTally {
    wins: u32,
    podiums: u32,
}

pub fn all_drivers(ds: &Dataset) -> Vec<DriverInfo> {
    ds.drivers()
        .iter()
        .map(|d| DriverInfo {
            driver_id: d.id,
            name: d.full_name(),
            nationality: d.nationality.clone(),
            dob: d.dob,
        })
        .collect()
}

/// Group all outcomes by driver, conditional-count wins and podiums, join to
/// the driver table for display fields, top-N by wins. Ties keep first-seen
/// order.
pub fn top_by_wins(ds: &Dataset) -> Vec<DriverWins> {
    let mut tallies: Grouper<DriverId, WinTally> = Grouper::new();
    for result in ds.results() {
        let (win, podium) = (result.position.is_win(), result.position.is_podium());
        tallies.update(result.driver, |t| {
            t.wins += win as u32;
            t.podiums += podium as u32;
        });
    }

    let rows: Vec<DriverWins> = tallies
        .into_pairs()
        .into_iter()
        .map(|(id, tally)| {
            let driver = ds.driver(id);
            DriverWins {
                driver_id: id,
                name: driver
                    .map(|d| d.full_name())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                nationality: driver
                    .map(|d| d.nationality.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                wins: tally.wins,
                podiums: tally.podiums,
            }
        })
        .collect();

    top_n_by(rows, DRIVER_RANKING_LIMIT, |r| r.wins)
}

/// A driver's best cumulative standings points per season, year-ascending.
pub fn performance(ds: &Dataset, driver: DriverId) -> PerformanceSeries {
    let standings = ds
        .driver_standings()
        .iter()
        .filter(|s| s.driver == driver);

    // Standings rows without a resolvable race have no season and drop out.
    let with_year = inner_join(standings, |s: &&DriverStanding| ds.race(s.race));

    let mut per_year: Grouper<i32, Aggregate> = Grouper::new();
    for (standing, race) in with_year {
        per_year.update(race.year, |agg| agg.add(standing.points));
    }

    let mut pairs: Vec<(i32, f64)> = per_year
        .into_pairs()
        .into_iter()
        .filter_map(|(year, agg)| agg.max.map(|points| (year, points)))
        .collect();
    pairs.sort_by_key(|&(year, _)| year);

    PerformanceSeries {
        years: pairs.iter().map(|&(year, _)| year).collect(),
        points: pairs.iter().map(|&(_, points)| points).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::*;
    use crate::store::dataset::Tables;

    fn driver(id: u32, forename: &str, surname: &str) -> Driver {
        Driver {
            id: DriverId(id),
            forename: forename.into(),
            surname: surname.into(),
            nationality: "British".into(),
            dob: None,
        }
    }

    fn race(id: u32, year: i32, round: u32) -> Race {
        Race {
            id: RaceId(id),
            year,
            round,
            name: format!("GP {id}"),
            date: None,
            circuit: CircuitId(1),
        }
    }

    fn result(race: u32, driver: u32, position: Position) -> RaceResult {
        RaceResult {
            race: RaceId(race),
            driver: DriverId(driver),
            constructor: ConstructorId(1),
            grid: Some(1),
            position,
            position_order: 1,
            points: 0.0,
        }
    }

    /// The two-driver scenario: A wins E1, B wins E2 with A second; equal
    /// win counts tie-break on first-seen order.
    #[test]
    fn ranking_counts_wins_and_podiums_with_stable_ties() {
        let tables = Tables {
            drivers: vec![driver(1, "Driver", "A"), driver(2, "Driver", "B")],
            races: vec![race(1, 2021, 1), race(2, 2021, 2)],
            results: vec![
                result(1, 1, Position::Classified(1)),
                result(2, 2, Position::Classified(1)),
                result(2, 1, Position::Classified(2)),
            ],
            ..Tables::default()
        };
        let ds = Dataset::new(tables);

        let top = top_by_wins(&ds);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Driver A");
        assert_eq!(top[0].wins, 1);
        assert_eq!(top[0].podiums, 2);
        assert_eq!(top[1].name, "Driver B");
        assert_eq!(top[1].wins, 1);
        assert_eq!(top[1].podiums, 1);
    }

    #[test]
    fn sentinel_positions_never_count() {
        let tables = Tables {
            drivers: vec![driver(1, "Driver", "A")],
            races: vec![race(1, 2021, 1)],
            results: vec![
                result(1, 1, Position::NotClassified),
                result(1, 1, Position::Classified(4)),
            ],
            ..Tables::default()
        };
        let ds = Dataset::new(tables);

        let top = top_by_wins(&ds);
        assert_eq!(top[0].wins, 0);
        assert_eq!(top[0].podiums, 0);
    }

    #[test]
    fn unknown_driver_reference_is_tolerated() {
        let tables = Tables {
            races: vec![race(1, 2021, 1)],
            results: vec![result(1, 99, Position::Classified(1))],
            ..Tables::default()
        };
        let ds = Dataset::new(tables);

        let top = top_by_wins(&ds);
        assert_eq!(top[0].name, UNKNOWN);
        assert_eq!(top[0].wins, 1);
    }

    #[test]
    fn performance_takes_max_points_per_year_ascending() {
        let standing = |race: u32, points: f64| DriverStanding {
            race: RaceId(race),
            driver: DriverId(1),
            points,
            wins: 0,
            rank: Some(1),
        };
        let tables = Tables {
            drivers: vec![driver(1, "Driver", "A")],
            races: vec![race(1, 2021, 1), race(2, 2021, 2), race(3, 2020, 1)],
            driver_standings: vec![
                standing(1, 10.0),
                standing(2, 35.0),
                standing(3, 18.0),
            ],
            ..Tables::default()
        };
        let ds = Dataset::new(tables);

        let series = performance(&ds, DriverId(1));
        assert_eq!(series.years, vec![2020, 2021]);
        assert_eq!(series.points, vec![18.0, 35.0]);
    }

    #[test]
    fn performance_of_unknown_driver_is_empty() {
        let ds = Dataset::new(Tables::default());
        let series = performance(&ds, DriverId(7));
        assert!(series.years.is_empty());
        assert!(series.points.is_empty());
    }
}
