use std::sync::Arc;

use crate::core::config::Config;
use crate::core::types::DriverId;
use crate::load;
use crate::query::response::{
    ConstructorInfo, ConstructorWins, DecadeWins, DriverInfo, DriverPodiums, DriverWins,
    GridFinish, LapTimeSeries, Overview, PerformanceSeries, SeasonRace, SeasonSummary,
    StandingRow,
};
use crate::query::{constructors, drivers, seasons, stats};
use crate::store::dataset::{Dataset, Tables};

/// Read-only analytical database over one loaded dataset.
///
/// The dataset is built exactly once, before any query is answered, and is
/// shared behind an `Arc`: every handler is a pure function over it, so
/// concurrent callers need no synchronization and any query may be
/// abandoned mid-flight without cleanup.
pub struct Database {
    config: Config,
    dataset: Arc<Dataset>,
}

impl Database {
    /// Load the CSV exports under `config.dataset_path` and index them.
    /// Missing or broken source files degrade to empty tables; opening
    /// never fails.
    pub fn open(config: Config) -> Self {
        let tables = load::load_tables(&config);
        Database {
            dataset: Arc::new(Dataset::new(tables)),
            config,
        }
    }

    /// Build a database directly from in-memory tables.
    pub fn with_tables(tables: Tables) -> Self {
        Database {
            dataset: Arc::new(Dataset::new(tables)),
            config: Config::default(),
        }
    }

    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    pub fn overview(&self) -> Overview {
        stats::overview(&self.dataset)
    }

    pub fn drivers(&self) -> Vec<DriverInfo> {
        drivers::all_drivers(&self.dataset)
    }

    pub fn top_drivers_by_wins(&self) -> Vec<DriverWins> {
        drivers::top_by_wins(&self.dataset)
    }

    pub fn driver_performance(&self, driver: DriverId) -> PerformanceSeries {
        drivers::performance(&self.dataset, driver)
    }

    pub fn constructors(&self) -> Vec<ConstructorInfo> {
        constructors::all_constructors(&self.dataset)
    }

    pub fn top_constructors_by_wins(&self) -> Vec<ConstructorWins> {
        constructors::top_by_wins(&self.dataset)
    }

    pub fn constructor_wins_by_decade(&self) -> DecadeWins {
        constructors::wins_by_decade(&self.dataset)
    }

    pub fn season(&self, year: i32) -> SeasonSummary {
        seasons::summary(&self.dataset, year)
    }

    pub fn season_races(&self, year: i32) -> Vec<SeasonRace> {
        seasons::races(&self.dataset, year)
    }

    pub fn season_standings(&self, year: i32) -> Vec<StandingRow> {
        seasons::standings(&self.dataset, year)
    }

    /// Year bounds default from the configuration when the caller omits
    /// them.
    pub fn grid_vs_finish(
        &self,
        start_year: Option<i32>,
        end_year: Option<i32>,
    ) -> Vec<GridFinish> {
        stats::grid_vs_finish(
            &self.dataset,
            start_year.unwrap_or(self.config.default_start_year),
            end_year.unwrap_or(self.config.default_end_year),
        )
    }

    pub fn lap_times_by_decade(&self) -> LapTimeSeries {
        stats::lap_times_by_decade(&self.dataset)
    }

    pub fn podium_frequency(&self) -> Vec<DriverPodiums> {
        stats::podium_frequency(&self.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::*;

    fn fixture() -> Tables {
        let driver = |id: u32, surname: &str| Driver {
            id: DriverId(id),
            forename: "Test".into(),
            surname: surname.into(),
            nationality: "German".into(),
            dob: None,
        };
        let race = |id: u32, year: i32, round: u32| Race {
            id: RaceId(id),
            year,
            round,
            name: format!("GP {id}"),
            date: None,
            circuit: CircuitId(1),
        };
        let result = |race: u32, driver: u32, position: &str| RaceResult {
            race: RaceId(race),
            driver: DriverId(driver),
            constructor: ConstructorId(1),
            grid: Some(1),
            position: Position::parse(position),
            position_order: 1,
            points: 10.0,
        };

        Tables {
            drivers: vec![driver(1, "Schumacher"), driver(2, "Hakkinen"), driver(3, "Coulthard")],
            races: vec![race(1, 2000, 1), race(2, 2000, 2), race(3, 2001, 1)],
            results: vec![
                result(1, 1, "1"),
                result(1, 2, "2"),
                result(1, 3, "\\N"),
                result(2, 2, "1"),
                result(2, 1, "3"),
                result(3, 1, "1"),
                result(3, 3, "2"),
            ],
            ..Tables::default()
        }
    }

    /// wins(c) ≤ podiums(c) ≤ total outcomes(c) for every driver.
    #[test]
    fn win_podium_outcome_ordering_holds() {
        let db = Database::with_tables(fixture());
        let dataset = db.dataset();

        for row in db.top_drivers_by_wins() {
            let outcomes = dataset
                .results()
                .iter()
                .filter(|r| r.driver == row.driver_id)
                .count() as u32;
            assert!(row.wins <= row.podiums);
            assert!(row.podiums <= outcomes);
        }
    }

    #[test]
    fn rankings_are_descending_and_bounded() {
        let db = Database::with_tables(fixture());

        let top = db.top_drivers_by_wins();
        assert!(top.len() <= drivers::DRIVER_RANKING_LIMIT);
        assert!(top.windows(2).all(|w| w[0].wins >= w[1].wins));

        let podiums = db.podium_frequency();
        assert!(podiums.len() <= stats::PODIUM_RANKING_LIMIT);
        assert!(podiums.windows(2).all(|w| w[0].podiums >= w[1].podiums));
    }

    /// Two invocations against an unmodified store are byte-identical.
    #[test]
    fn handlers_are_idempotent() {
        let db = Database::with_tables(fixture());

        let first = serde_json::to_string(&db.top_drivers_by_wins()).unwrap();
        let second = serde_json::to_string(&db.top_drivers_by_wins()).unwrap();
        assert_eq!(first, second);

        let first = serde_json::to_string(&db.season(2000)).unwrap();
        let second = serde_json::to_string(&db.season(2000)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_database_answers_every_query() {
        let db = Database::with_tables(Tables::default());

        assert_eq!(db.overview().total_races, 0);
        assert!(db.top_drivers_by_wins().is_empty());
        assert!(db.top_constructors_by_wins().is_empty());
        assert!(db.season_standings(2020).is_empty());
        assert!(db.grid_vs_finish(None, None).is_empty());

        let season = db.season(2020);
        assert_eq!(season.champion, "Unknown");
        assert_eq!(season.constructor_champion, "Unknown");
    }

    #[test]
    fn grid_vs_finish_defaults_come_from_config() {
        let mut tables = fixture();
        tables.races.push(Race {
            id: RaceId(9),
            year: 1950,
            round: 1,
            name: "Vintage GP".into(),
            date: None,
            circuit: CircuitId(1),
        });
        tables.results.push(RaceResult {
            race: RaceId(9),
            driver: DriverId(1),
            constructor: ConstructorId(1),
            grid: Some(4),
            position: Position::Classified(2),
            position_order: 2,
            points: 6.0,
        });
        let db = Database::with_tables(tables);

        // Default range (1990..=2024) excludes the 1950 race.
        assert_eq!(db.grid_vs_finish(None, None).len(), 6);
        assert_eq!(db.grid_vs_finish(Some(1950), Some(1950)).len(), 1);
    }

    #[test]
    fn open_on_missing_directory_yields_empty_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            dataset_path: dir.path().join("does-not-exist"),
            ..Config::default()
        };
        let db = Database::open(config);
        assert_eq!(db.overview().total_races, 0);
    }
}
