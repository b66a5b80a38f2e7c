use std::collections::HashMap;

use crate::core::types::{
    Circuit, CircuitId, Constructor, ConstructorId, ConstructorStanding, Driver, DriverId,
    DriverStanding, LapTime, Race, RaceId, RaceResult,
};
use crate::store::index::{foreign_index, primary_index};

/// The raw per-entity tables in insertion order, as handed over by the load
/// boundary. A missing source file shows up here as an empty `Vec`.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
    pub circuits: Vec<Circuit>,
    pub races: Vec<Race>,
    pub results: Vec<RaceResult>,
    pub driver_standings: Vec<DriverStanding>,
    pub constructor_standings: Vec<ConstructorStanding>,
    pub lap_times: Vec<LapTime>,
}

/// The immutable, indexed dataset held for the lifetime of the process.
///
/// Built exactly once from [`Tables`], before any query runs. Every lookup
/// the query handlers perform inside a loop is backed by one of the
/// precomputed maps below; handlers never mutate the store, so concurrent
/// readers share it through an `Arc` without locking.
#[derive(Debug)]
pub struct Dataset {
    tables: Tables,

    drivers_by_id: HashMap<DriverId, usize>,
    constructors_by_id: HashMap<ConstructorId, usize>,
    circuits_by_id: HashMap<CircuitId, usize>,
    races_by_id: HashMap<RaceId, usize>,

    /// year → race offsets, ordered by round within the year.
    races_by_year: HashMap<i32, Vec<usize>>,
    results_by_race: HashMap<RaceId, Vec<usize>>,
    driver_standings_by_race: HashMap<RaceId, Vec<usize>>,
    constructor_standings_by_race: HashMap<RaceId, Vec<usize>>,
}

impl Dataset {
    pub fn new(tables: Tables) -> Self {
        let drivers_by_id = primary_index(&tables.drivers, |d| d.id);
        let constructors_by_id = primary_index(&tables.constructors, |c| c.id);
        let circuits_by_id = primary_index(&tables.circuits, |c| c.id);
        let races_by_id = primary_index(&tables.races, |r| r.id);

        let mut races_by_year = foreign_index(&tables.races, |r| r.year);
        for offsets in races_by_year.values_mut() {
            offsets.sort_by_key(|&i| tables.races[i].round);
        }

        let results_by_race = foreign_index(&tables.results, |r| r.race);
        let driver_standings_by_race = foreign_index(&tables.driver_standings, |s| s.race);
        let constructor_standings_by_race =
            foreign_index(&tables.constructor_standings, |s| s.race);

        Dataset {
            tables,
            drivers_by_id,
            constructors_by_id,
            circuits_by_id,
            races_by_id,
            races_by_year,
            results_by_race,
            driver_standings_by_race,
            constructor_standings_by_race,
        }
    }

    // Full enumerations, insertion order.

    pub fn drivers(&self) -> &[Driver] {
        &self.tables.drivers
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.tables.constructors
    }

    pub fn circuits(&self) -> &[Circuit] {
        &self.tables.circuits
    }

    pub fn races(&self) -> &[Race] {
        &self.tables.races
    }

    pub fn results(&self) -> &[RaceResult] {
        &self.tables.results
    }

    pub fn driver_standings(&self) -> &[DriverStanding] {
        &self.tables.driver_standings
    }

    pub fn constructor_standings(&self) -> &[ConstructorStanding] {
        &self.tables.constructor_standings
    }

    pub fn lap_times(&self) -> &[LapTime] {
        &self.tables.lap_times
    }

    // Primary-key lookups.

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers_by_id.get(&id).map(|&i| &self.tables.drivers[i])
    }

    pub fn constructor(&self, id: ConstructorId) -> Option<&Constructor> {
        self.constructors_by_id
            .get(&id)
            .map(|&i| &self.tables.constructors[i])
    }

    pub fn circuit(&self, id: CircuitId) -> Option<&Circuit> {
        self.circuits_by_id
            .get(&id)
            .map(|&i| &self.tables.circuits[i])
    }

    pub fn race(&self, id: RaceId) -> Option<&Race> {
        self.races_by_id.get(&id).map(|&i| &self.tables.races[i])
    }

    // Foreign-key lookups. Each returns an empty iterator when the key has
    // no rows, so handlers degrade to empty results for free.

    /// Races of one season, ordered by round.
    pub fn races_in_year(&self, year: i32) -> impl Iterator<Item = &Race> {
        self.races_by_year
            .get(&year)
            .into_iter()
            .flatten()
            .map(|&i| &self.tables.races[i])
    }

    /// The season's final race: maximum round for the year.
    pub fn last_race_of_year(&self, year: i32) -> Option<&Race> {
        self.races_by_year
            .get(&year)
            .and_then(|offsets| offsets.last())
            .map(|&i| &self.tables.races[i])
    }

    pub fn results_for_race(&self, id: RaceId) -> impl Iterator<Item = &RaceResult> {
        self.results_by_race
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&i| &self.tables.results[i])
    }

    pub fn driver_standings_for_race(&self, id: RaceId) -> impl Iterator<Item = &DriverStanding> {
        self.driver_standings_by_race
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&i| &self.tables.driver_standings[i])
    }

    pub fn constructor_standings_for_race(
        &self,
        id: RaceId,
    ) -> impl Iterator<Item = &ConstructorStanding> {
        self.constructor_standings_by_race
            .get(&id)
            .into_iter()
            .flatten()
            .map(|&i| &self.tables.constructor_standings[i])
    }
}
