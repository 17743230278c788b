use rayon::prelude::*;

use super::{TollRateConfig, TollRecord, TollTimestamp};
use crate::toll::{round_to_tenth, TimestampedEdge, TollError};

/// prices edges per vehicle class with day-of-week and time-of-day discounts.
///
/// pricing happens in two stages. the base toll of each class is the edge
/// distance times the class coefficient. the base tolls are then multiplied
/// by the temporal discount: on Saturday and Sunday the weekend factor is
/// applied once, on weekdays the factor of every window containing the
/// start time is applied, in window order. with inclusive window bounds a
/// start time shared by two windows (10:00:00, 18:00:00 by default) receives
/// both factors. tolls are rounded to one decimal place after all factors.
pub struct TollRateEngine {
    config: TollRateConfig,
}

impl TollRateEngine {
    pub fn new(config: TollRateConfig) -> Result<TollRateEngine, TollError> {
        config.validate()?;
        Ok(TollRateEngine { config })
    }

    pub fn config(&self) -> &TollRateConfig {
        &self.config
    }

    /// the factors applied at this timestamp, in the order they are applied.
    pub fn matching_factors(&self, timestamp: &TollTimestamp) -> Vec<f64> {
        if timestamp.is_weekend() {
            return vec![self.config.weekend_factor];
        }
        let last = self.config.weekday_windows.len().saturating_sub(1);
        self.config
            .weekday_windows
            .iter()
            .enumerate()
            .filter(|(idx, window)| {
                window.contains(&timestamp.time, &self.config.window_boundary, *idx == last)
            })
            .map(|(_, window)| window.factor)
            .collect()
    }

    /// net temporal multiplier at this timestamp.
    pub fn discount_factor(&self, timestamp: &TollTimestamp) -> f64 {
        self.matching_factors(timestamp).iter().product()
    }

    /// prices every edge. fails without output if any row is invalid.
    pub fn price(&self, edges: &[TimestampedEdge]) -> Result<Vec<TollRecord>, TollError> {
        if edges.is_empty() {
            return Err(TollError::EmptyInput(String::from("toll pricing")));
        }
        let records = if self.config.parallelize {
            edges
                .par_iter()
                .map(|row| self.price_row(row))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            edges
                .iter()
                .map(|row| self.price_row(row))
                .collect::<Result<Vec<_>, _>>()?
        };
        log::debug!("priced {} edges", records.len());
        Ok(records)
    }

    fn price_row(&self, row: &TimestampedEdge) -> Result<TollRecord, TollError> {
        if row.id_start == row.id_end {
            return Err(TollError::SelfLoop(row.id_start));
        }
        if !row.distance.is_finite() || row.distance < 0.0 {
            return Err(TollError::InvalidDistance {
                start: row.id_start,
                end: row.id_end,
                distance: row.distance,
            });
        }
        let timestamp = TollTimestamp::parse(&row.start_day, &row.start_time)?;
        let factors = self.matching_factors(&timestamp);
        let tolls = self
            .config
            .vehicle_rates
            .base_tolls(row.distance)
            .map(|base| round_to_tenth(factors.iter().fold(base, |toll, factor| toll * factor)));
        Ok(TollRecord {
            edge: row.edge(),
            timestamp,
            end_day: row.end_day.clone(),
            end_time: row.end_time.clone(),
            tolls,
        })
    }
}

/// prices edges with the default [`TollRateConfig`].
pub fn price_edges(edges: &[TimestampedEdge]) -> Result<Vec<TollRecord>, TollError> {
    TollRateEngine::new(TollRateConfig::default())?.price(edges)
}
