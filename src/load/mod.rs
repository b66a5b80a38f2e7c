//! Load boundary: reads the normalized CSV exports into [`Tables`].
//!
//! Loading is tolerant by contract: a missing or unreadable file becomes an
//! empty table, a row without a usable key is skipped, and malformed numeric
//! fields degrade per the rules in [`parse`]. Nothing here can fail the
//! process; the worst outcome is an empty, still-queryable dataset.

pub mod parse;
pub mod reader;

use std::path::Path;

use rayon::join;
use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::types::{
    Circuit, CircuitId, Constructor, ConstructorId, ConstructorStanding, Driver, DriverId,
    DriverStanding, LapTime, Position, Race, RaceId, RaceResult,
};
use crate::load::reader::CsvTable;
use crate::store::dataset::Tables;

/// Load every entity table from `config.dataset_path`. The per-file reads
/// are independent, so they run on the rayon pool.
pub fn load_tables(config: &Config) -> Tables {
    let dir = config.dataset_path.as_path();

    let ((drivers, constructors), (circuits, races)) = join(
        || {
            join(
                || load_table(dir, "drivers.csv", build_drivers),
                || load_table(dir, "constructors.csv", build_constructors),
            )
        },
        || {
            join(
                || load_table(dir, "circuits.csv", build_circuits),
                || load_table(dir, "races.csv", build_races),
            )
        },
    );

    let ((results, driver_standings), (constructor_standings, lap_times)) = join(
        || {
            join(
                || load_table(dir, "results.csv", build_results),
                || load_table(dir, "driver_standings.csv", build_driver_standings),
            )
        },
        || {
            join(
                || {
                    load_table(
                        dir,
                        "constructor_standings.csv",
                        build_constructor_standings,
                    )
                },
                || load_table(dir, "lap_times.csv", build_lap_times),
            )
        },
    );

    Tables {
        drivers,
        constructors,
        circuits,
        races,
        results,
        driver_standings,
        constructor_standings,
        lap_times,
    }
}

fn load_table<T>(dir: &Path, file: &str, build: fn(&CsvTable) -> Vec<T>) -> Vec<T> {
    match CsvTable::read(&dir.join(file)) {
        Ok(table) => {
            let rows = build(&table);
            debug!(file, rows = rows.len(), "table loaded");
            rows
        }
        Err(err) => {
            warn!(file, %err, "table unavailable, substituting empty");
            Vec::new()
        }
    }
}

fn build_drivers(t: &CsvTable) -> Vec<Driver> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(Driver {
                id: DriverId(parse::opt_u32(t.field(row, "driverId"))?),
                forename: t.field(row, "forename").to_string(),
                surname: t.field(row, "surname").to_string(),
                nationality: t.field(row, "nationality").to_string(),
                dob: parse::opt_date(t.field(row, "dob")),
            })
        })
        .collect()
}

fn build_constructors(t: &CsvTable) -> Vec<Constructor> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(Constructor {
                id: ConstructorId(parse::opt_u32(t.field(row, "constructorId"))?),
                name: t.field(row, "name").to_string(),
                nationality: t.field(row, "nationality").to_string(),
            })
        })
        .collect()
}

fn build_circuits(t: &CsvTable) -> Vec<Circuit> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(Circuit {
                id: CircuitId(parse::opt_u32(t.field(row, "circuitId"))?),
                name: t.field(row, "name").to_string(),
                location: t.field(row, "location").to_string(),
                country: t.field(row, "country").to_string(),
            })
        })
        .collect()
}

fn build_races(t: &CsvTable) -> Vec<Race> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(Race {
                id: RaceId(parse::opt_u32(t.field(row, "raceId"))?),
                year: parse::opt_i32(t.field(row, "year"))?,
                round: parse::opt_u32(t.field(row, "round")).unwrap_or(0),
                name: t.field(row, "name").to_string(),
                date: parse::opt_date(t.field(row, "date")),
                circuit: CircuitId(parse::opt_u32(t.field(row, "circuitId")).unwrap_or(0)),
            })
        })
        .collect()
}

fn build_results(t: &CsvTable) -> Vec<RaceResult> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(RaceResult {
                race: RaceId(parse::opt_u32(t.field(row, "raceId"))?),
                driver: DriverId(parse::opt_u32(t.field(row, "driverId"))?),
                constructor: ConstructorId(parse::opt_u32(t.field(row, "constructorId"))?),
                grid: parse::opt_u32(t.field(row, "grid")),
                position: Position::parse(t.field(row, "position")),
                position_order: parse::opt_u32(t.field(row, "positionOrder")).unwrap_or(0),
                points: parse::num_f64(t.field(row, "points")),
            })
        })
        .collect()
}

fn build_driver_standings(t: &CsvTable) -> Vec<DriverStanding> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(DriverStanding {
                race: RaceId(parse::opt_u32(t.field(row, "raceId"))?),
                driver: DriverId(parse::opt_u32(t.field(row, "driverId"))?),
                points: parse::num_f64(t.field(row, "points")),
                wins: parse::opt_u32(t.field(row, "wins")).unwrap_or(0),
                rank: parse::opt_u32(t.field(row, "position")),
            })
        })
        .collect()
}

fn build_constructor_standings(t: &CsvTable) -> Vec<ConstructorStanding> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(ConstructorStanding {
                race: RaceId(parse::opt_u32(t.field(row, "raceId"))?),
                constructor: ConstructorId(parse::opt_u32(t.field(row, "constructorId"))?),
                points: parse::num_f64(t.field(row, "points")),
                wins: parse::opt_u32(t.field(row, "wins")).unwrap_or(0),
                rank: parse::opt_u32(t.field(row, "position")),
            })
        })
        .collect()
}

fn build_lap_times(t: &CsvTable) -> Vec<LapTime> {
    t.rows()
        .iter()
        .filter_map(|row| {
            Some(LapTime {
                race: RaceId(parse::opt_u32(t.field(row, "raceId"))?),
                driver: DriverId(parse::opt_u32(t.field(row, "driverId"))?),
                milliseconds: parse::opt_u64(t.field(row, "milliseconds")),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn config_for(dir: &tempfile::TempDir) -> Config {
        Config {
            dataset_path: PathBuf::from(dir.path()),
            ..Config::default()
        }
    }

    #[test]
    fn missing_files_become_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        let tables = load_tables(&config_for(&dir));
        assert!(tables.drivers.is_empty());
        assert!(tables.results.is_empty());
        assert!(tables.lap_times.is_empty());
    }

    #[test]
    fn results_tolerate_sentinels_and_malformed_numerics() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("results.csv"),
            "resultId,raceId,driverId,constructorId,grid,position,positionOrder,points\n\
             1,10,44,6,1,1,1,25\n\
             2,10,33,9,\\N,\\N,20,bogus\n\
             3,\\N,4,3,5,2,2,18\n",
        )
        .unwrap();

        let tables = load_tables(&config_for(&dir));
        // Third row has no usable race key and is skipped.
        assert_eq!(tables.results.len(), 2);

        let first = &tables.results[0];
        assert!(first.position.is_win());
        assert_eq!(first.points, 25.0);

        let second = &tables.results[1];
        assert_eq!(second.grid, None);
        assert_eq!(second.position, Position::NotClassified);
        assert_eq!(second.points, 0.0);
    }

    #[test]
    fn drivers_load_with_dates_and_quoting() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("drivers.csv"),
            "driverId,forename,surname,dob,nationality\n\
             1,Lewis,Hamilton,1985-01-07,British\n\
             2,\"Juan,Manuel\",Fangio,\\N,Argentine\n",
        )
        .unwrap();

        let tables = load_tables(&config_for(&dir));
        assert_eq!(tables.drivers.len(), 2);
        assert_eq!(
            tables.drivers[0].dob,
            chrono::NaiveDate::from_ymd_opt(1985, 1, 7)
        );
        assert_eq!(tables.drivers[1].forename, "Juan,Manuel");
        assert_eq!(tables.drivers[1].dob, None);
    }
}
