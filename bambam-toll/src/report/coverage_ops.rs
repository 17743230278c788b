use std::collections::BTreeMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use super::CoverageRow;
use crate::toll::rate::TollTimestamp;
use crate::toll::{LocationId, TollError};

const SECONDS_PER_DAY: u32 = 86_400;
const SECONDS_PER_WEEK: u32 = 7 * SECONDS_PER_DAY;

/// weekly coverage result of a location pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PairCoverage {
    pub id: LocationId,
    pub id_2: LocationId,
    /// true when the pair's spans cover Monday 00:00:00 through Sunday 23:59:59.
    pub complete: bool,
}

/// checks, for each (id, id_2) pair, if the recorded spans cover every
/// second of the week. a span whose end falls before its start wraps
/// around the end of the week. results are ordered by (id, id_2).
pub fn time_check(rows: &[CoverageRow]) -> Result<Vec<PairCoverage>, TollError> {
    if rows.is_empty() {
        return Err(TollError::EmptyInput(String::from("time check")));
    }
    let mut spans: BTreeMap<(LocationId, LocationId), Vec<(u32, u32)>> = BTreeMap::new();
    for row in rows {
        let start = week_second(&TollTimestamp::parse(&row.start_day, &row.start_time)?);
        let end = week_second(&TollTimestamp::parse(&row.end_day, &row.end_time)?);
        let pair_spans = spans.entry((row.id, row.id_2)).or_default();
        if start <= end {
            pair_spans.push((start, end));
        } else {
            pair_spans.push((start, SECONDS_PER_WEEK - 1));
            pair_spans.push((0, end));
        }
    }
    let coverage = spans
        .into_iter()
        .map(|((id, id_2), pair_spans)| PairCoverage {
            id,
            id_2,
            complete: covers_week(pair_spans),
        })
        .collect();
    Ok(coverage)
}

fn week_second(timestamp: &TollTimestamp) -> u32 {
    timestamp.day.num_days_from_monday() * SECONDS_PER_DAY
        + timestamp.time.num_seconds_from_midnight()
}

/// inclusive spans, in seconds from the start of the week.
fn covers_week(mut spans: Vec<(u32, u32)>) -> bool {
    spans.sort_unstable();
    let mut next_uncovered = 0;
    for (start, end) in spans {
        if start > next_uncovered {
            return false;
        }
        next_uncovered = next_uncovered.max(end + 1);
    }
    next_uncovered >= SECONDS_PER_WEEK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: u64, id_2: u64, start: (&str, &str), end: (&str, &str)) -> CoverageRow {
        CoverageRow {
            id,
            id_2,
            start_day: start.0.to_string(),
            start_time: start.1.to_string(),
            end_day: end.0.to_string(),
            end_time: end.1.to_string(),
        }
    }

    #[test]
    fn test_complete_and_incomplete_pairs() {
        let rows = vec![
            span(1, 2, ("Monday", "00:00:00"), ("Wednesday", "12:00:00")),
            span(1, 2, ("Wednesday", "12:00:01"), ("Sunday", "23:59:59")),
            span(3, 4, ("Monday", "00:00:00"), ("Friday", "23:59:59")),
            span(3, 4, ("Saturday", "00:00:01"), ("Sunday", "23:59:59")),
        ];
        let result = time_check(&rows).expect("should check");
        assert_eq!(
            result,
            vec![
                PairCoverage {
                    id: 1,
                    id_2: 2,
                    complete: true
                },
                PairCoverage {
                    id: 3,
                    id_2: 4,
                    complete: false
                },
            ]
        );
    }

    #[test]
    fn test_wrapping_span() {
        let rows = vec![
            span(5, 6, ("Friday", "00:00:00"), ("Tuesday", "00:00:00")),
            span(5, 6, ("Tuesday", "00:00:00"), ("Friday", "00:00:00")),
        ];
        let result = time_check(&rows).expect("should check");
        assert!(result[0].complete);
    }

    #[test]
    fn test_missing_end_of_day() {
        let rows = vec![span(7, 8, ("Monday", "00:00:00"), ("Sunday", "23:59:58"))];
        assert!(!time_check(&rows).expect("should check")[0].complete);
    }

    #[test]
    fn test_malformed_day() {
        let rows = vec![span(1, 2, ("Someday", "00:00:00"), ("Sunday", "23:59:59"))];
        assert!(matches!(
            time_check(&rows),
            Err(TollError::MalformedTimestamp { .. })
        ));
    }
}
