//! Season-scoped analytical queries: snapshot, calendar, standings table.

use crate::core::types::{DriverId, Race};
use crate::ops::group::Grouper;
use crate::ops::join::left_join;
use crate::ops::sort::top_n_by;
use crate::query::response::{
    SeasonDriverWins, SeasonRace, SeasonSummary, StandingRow, UNKNOWN, UNKNOWN_CIRCUIT,
};
use crate::store::dataset::Dataset;

/// Per-season leaderboard is capped at 10 rows.
pub const SEASON_LEADER_LIMIT: usize = 10;

/// Season snapshot: race count, top winners, and both champions resolved by
/// the last-race/rank-1 rule. A year with no data degrades to zeros, an
/// empty leaderboard, and the explicit "Unknown" markers.
pub fn summary(ds: &Dataset, year: i32) -> SeasonSummary {
    let races: Vec<&Race> = ds.races_in_year(year).collect();

    let mut wins: Grouper<DriverId, u32> = Grouper::new();
    for race in &races {
        for result in ds.results_for_race(race.id) {
            if result.position.is_win() {
                wins.update(result.driver, |w| *w += 1);
            }
        }
    }

    let top_drivers = top_n_by(wins.into_pairs(), SEASON_LEADER_LIMIT, |&(_, w)| w)
        .into_iter()
        .map(|(id, wins)| SeasonDriverWins {
            driver_id: id,
            name: ds
                .driver(id)
                .map(|d| d.full_name())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            wins,
        })
        .collect();

    let last_race = ds.last_race_of_year(year);

    let champion = last_race
        .and_then(|race| {
            ds.driver_standings_for_race(race.id)
                .find(|s| s.rank == Some(1))
        })
        .map(|standing| {
            ds.driver(standing.driver)
                .map(|d| d.full_name())
                .unwrap_or_else(|| UNKNOWN.to_string())
        })
        .unwrap_or_else(|| UNKNOWN.to_string());

    let constructor_champion = last_race
        .and_then(|race| {
            ds.constructor_standings_for_race(race.id)
                .find(|s| s.rank == Some(1))
        })
        .map(|standing| {
            ds.constructor(standing.constructor)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN.to_string())
        })
        .unwrap_or_else(|| UNKNOWN.to_string());

    SeasonSummary {
        total_races: races.len(),
        top_drivers,
        champion,
        constructor_champion,
    }
}

/// The season calendar ordered by round, each race left-joined to its
/// winning driver; the winner stays `None` when no position-1 outcome (or
/// no matching driver row) exists.
pub fn races(ds: &Dataset, year: i32) -> Vec<SeasonRace> {
    let with_winner = left_join(ds.races_in_year(year), |race: &&Race| {
        ds.results_for_race(race.id)
            .find(|r| r.position.is_win())
            .and_then(|r| ds.driver(r.driver))
            .map(|d| d.full_name())
    });

    with_winner
        .into_iter()
        .map(|(race, winner)| SeasonRace {
            race_id: race.id,
            round: race.round,
            name: race.name.clone(),
            date: race.date,
            circuit_name: ds
                .circuit(race.circuit)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN_CIRCUIT.to_string()),
            winner,
        })
        .collect()
}

/// Final standings table of a season: every driver standing at the last
/// race, rank-ascending, joined to the driver's team at that race.
pub fn standings(ds: &Dataset, year: i32) -> Vec<StandingRow> {
    let Some(last_race) = ds.last_race_of_year(year) else {
        return Vec::new();
    };

    let mut rows: Vec<_> = ds.driver_standings_for_race(last_race.id).collect();
    rows.sort_by_key(|s| s.rank.unwrap_or(u32::MAX));

    rows.into_iter()
        .map(|standing| StandingRow {
            driver_id: standing.driver,
            driver_name: ds
                .driver(standing.driver)
                .map(|d| d.full_name())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            constructor_name: ds
                .results_for_race(last_race.id)
                .find(|r| r.driver == standing.driver)
                .and_then(|r| ds.constructor(r.constructor))
                .map(|c| c.name.clone()),
            points: standing.points,
            wins: standing.wins,
        })
        .collect()
}
