//! Constructor-centric analytical queries.

use std::collections::HashMap;

use crate::core::types::ConstructorId;
use crate::ops::bucket::{DECADE_COUNT, decade_index, decade_labels};
use crate::ops::group::Grouper;
use crate::ops::sort::{last_per_group, top_n_by};
use crate::query::response::{ConstructorInfo, ConstructorWins, DecadeWins, TeamDecadeWins, UNKNOWN};
use crate::store::dataset::Dataset;

/// All-time constructor ranking is capped at 20 rows.
pub const CONSTRUCTOR_RANKING_LIMIT: usize = 20;

/// The decade breakdown covers the 5 winningest teams.
pub const DECADE_TEAM_LIMIT: usize = 5;

pub fn all_constructors(ds: &Dataset) -> Vec<ConstructorInfo> {
    ds.constructors()
        .iter()
        .map(|c| ConstructorInfo {
            constructor_id: c.id,
            name: c.name.clone(),
            nationality: c.nationality.clone(),
        })
        .collect()
}

/// Race wins per constructor, first-seen order over winning outcomes.
fn win_counts(ds: &Dataset) -> Grouper<ConstructorId, u32> {
    let mut wins: Grouper<ConstructorId, u32> = Grouper::new();
    for result in ds.results() {
        if result.position.is_win() {
            wins.update(result.constructor, |w| *w += 1);
        }
    }
    wins
}

/// Championships per constructor: for every season, the rank-1 standing at
/// the season's last race. Seasons without a rank-1 snapshot tally nowhere.
fn championships(ds: &Dataset) -> HashMap<ConstructorId, u32> {
    let mut titles: HashMap<ConstructorId, u32> = HashMap::new();
    for (_year, last_race) in last_per_group(ds.races(), |r| r.year, |r| r.round) {
        let champion = ds
            .constructor_standings_for_race(last_race.id)
            .find(|s| s.rank == Some(1));
        if let Some(standing) = champion {
            *titles.entry(standing.constructor).or_insert(0) += 1;
        }
    }
    titles
}

pub fn top_by_wins(ds: &Dataset) -> Vec<ConstructorWins> {
    let titles = championships(ds);

    let rows: Vec<ConstructorWins> = win_counts(ds)
        .into_pairs()
        .into_iter()
        .map(|(id, wins)| {
            let constructor = ds.constructor(id);
            ConstructorWins {
                constructor_id: id,
                name: constructor
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                nationality: constructor
                    .map(|c| c.nationality.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                wins,
                championships: titles.get(&id).copied().unwrap_or(0),
            }
        })
        .collect();

    top_n_by(rows, CONSTRUCTOR_RANKING_LIMIT, |r| r.wins)
}

/// Per-decade win counts for the top 5 teams by total wins. Every team
/// reports over the full fixed bucket set; decades without wins are zero.
pub fn wins_by_decade(ds: &Dataset) -> DecadeWins {
    let top = top_n_by(
        win_counts(ds).into_pairs(),
        DECADE_TEAM_LIMIT,
        |&(_, wins)| wins,
    );

    let slots: HashMap<ConstructorId, usize> = top
        .iter()
        .enumerate()
        .map(|(slot, &(id, _))| (id, slot))
        .collect();
    let mut grids = vec![vec![0u32; DECADE_COUNT]; top.len()];

    for result in ds.results() {
        if !result.position.is_win() {
            continue;
        }
        let Some(&slot) = slots.get(&result.constructor) else {
            continue;
        };
        let Some(race) = ds.race(result.race) else {
            continue;
        };
        if let Some(bucket) = decade_index(race.year) {
            grids[slot][bucket] += 1;
        }
    }

    let teams = top
        .into_iter()
        .zip(grids)
        .map(|((id, _), wins_by_decade)| TeamDecadeWins {
            name: ds
                .constructor(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            wins_by_decade,
        })
        .collect();

    DecadeWins {
        decades: decade_labels(),
        teams,
    }
}
