/// The fixed decade buckets every per-decade series reports over. Absent
/// data in a bucket is an explicit zero or `None`, never a missing key.
pub const DECADE_LABELS: [&str; 8] = [
    "1950s", "1960s", "1970s", "1980s", "1990s", "2000s", "2010s", "2020s",
];

pub const DECADE_COUNT: usize = DECADE_LABELS.len();

const FIRST_DECADE: i32 = 1950;

/// Bucket slot for a season year; `None` for years outside the fixed range.
pub fn decade_index(year: i32) -> Option<usize> {
    if year < FIRST_DECADE {
        return None;
    }
    let slot = ((year - FIRST_DECADE) / 10) as usize;
    (slot < DECADE_COUNT).then_some(slot)
}

pub fn decade_labels() -> Vec<String> {
    DECADE_LABELS.iter().map(|s| s.to_string()).collect()
}
