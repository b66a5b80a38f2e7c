//! Cross-table statistics: overview counts, grid-vs-finish correlation,
//! lap-time trends, podium frequency.

use crate::core::types::DriverId;
use crate::ops::bucket::{DECADE_COUNT, decade_index, decade_labels};
use crate::ops::group::{Aggregate, Grouper};
use crate::ops::sort::top_n_by;
use crate::query::response::{DriverPodiums, GridFinish, LapTimeSeries, Overview, UNKNOWN};
use crate::store::dataset::Dataset;

/// Podium-frequency ranking is capped at 20 rows.
pub const PODIUM_RANKING_LIMIT: usize = 20;

/// Illustrative series served when the lap-time table is absent entirely,
/// in whole seconds per decade bucket.
pub const LAP_TIME_FALLBACK: [f64; DECADE_COUNT] = [120.0, 110.0, 100.0, 95.0, 90.0, 88.0, 85.0, 82.0];

pub fn overview(ds: &Dataset) -> Overview {
    Overview {
        total_races: ds.races().len(),
        total_drivers: ds.drivers().len(),
        total_constructors: ds.constructors().len(),
    }
}

/// Grid/finish pairs for outcomes inside the year range. Rows where either
/// value is missing or non-positive are excluded.
pub fn grid_vs_finish(ds: &Dataset, start_year: i32, end_year: i32) -> Vec<GridFinish> {
    ds.results()
        .iter()
        .filter_map(|result| {
            let race = ds.race(result.race)?;
            if race.year < start_year || race.year > end_year {
                return None;
            }
            let grid = result.grid.filter(|&g| g > 0)?;
            let position = result.position.number()?;
            Some(GridFinish { grid, position })
        })
        .collect()
}

/// Average lap time per decade bucket, in whole seconds. A decade with no
/// samples reports `None`; an entirely absent lap-time table yields the
/// fixed illustrative series instead.
pub fn lap_times_by_decade(ds: &Dataset) -> LapTimeSeries {
    if ds.lap_times().is_empty() {
        return LapTimeSeries {
            decades: decade_labels(),
            avg_times: LAP_TIME_FALLBACK.iter().map(|&s| Some(s)).collect(),
        };
    }

    let mut buckets: [Aggregate; DECADE_COUNT] = std::array::from_fn(|_| Aggregate::default());
    for lap in ds.lap_times() {
        let Some(ms) = lap.milliseconds else {
            continue;
        };
        let Some(race) = ds.race(lap.race) else {
            continue;
        };
        let Some(bucket) = decade_index(race.year) else {
            continue;
        };
        buckets[bucket].add(ms as f64 / 1000.0);
    }

    LapTimeSeries {
        decades: decade_labels(),
        avg_times: buckets
            .iter()
            .map(|agg| agg.avg().map(f64::round))
            .collect(),
    }
}

/// Podium finishes per driver over all outcomes, top-N.
pub fn podium_frequency(ds: &Dataset) -> Vec<DriverPodiums> {
    let mut podiums: Grouper<DriverId, u32> = Grouper::new();
    for result in ds.results() {
        if result.position.is_podium() {
            podiums.update(result.driver, |p| *p += 1);
        }
    }

    let rows: Vec<DriverPodiums> = podiums
        .into_pairs()
        .into_iter()
        .map(|(id, podiums)| DriverPodiums {
            driver_id: id,
            name: ds
                .driver(id)
                .map(|d| d.full_name())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            podiums,
        })
        .collect();

    top_n_by(rows, PODIUM_RANKING_LIMIT, |r| r.podiums)
}
