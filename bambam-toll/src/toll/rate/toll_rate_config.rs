use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{TimeWindow, VehicleClass, VehicleRateTable, WindowBoundary};
use crate::toll::TollError;

/// rates and discounts applied by the [`super::TollRateEngine`].
///
/// missing fields in a configuration file fall back to the defaults: the
/// standard vehicle coefficients, three weekday windows (00:00:00-10:00:00
/// at 0.8, 10:00:00-18:00:00 at 1.2, 18:00:00-23:59:59 at 0.8), a weekend
/// factor of 0.7 and inclusive window bounds.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct TollRateConfig {
    pub vehicle_rates: VehicleRateTable,
    /// weekday windows, evaluated in this order. together they must cover
    /// the day from 00:00:00 to 23:59:59, each window starting where the
    /// previous one ends.
    pub weekday_windows: Vec<TimeWindow>,
    pub weekend_factor: f64,
    pub window_boundary: WindowBoundary,
    /// price rows on the rayon thread pool.
    pub parallelize: bool,
}

impl Default for TollRateConfig {
    fn default() -> Self {
        Self {
            vehicle_rates: VehicleRateTable::default(),
            weekday_windows: vec![
                TimeWindow::new(start_of_day(), clock(10, 0, 0), 0.8),
                TimeWindow::new(clock(10, 0, 0), clock(18, 0, 0), 1.2),
                TimeWindow::new(clock(18, 0, 0), end_of_day(), 0.8),
            ],
            weekend_factor: 0.7,
            window_boundary: WindowBoundary::Inclusive,
            parallelize: false,
        }
    }
}

impl TollRateConfig {
    /// checks that all factors are finite and non-negative and that the
    /// weekday windows tile the day.
    pub fn validate(&self) -> Result<(), TollError> {
        for class in VehicleClass::ALL {
            check_factor(
                &format!("{class} coefficient"),
                self.vehicle_rates.coefficient(class),
            )?;
        }
        check_factor("weekend factor", self.weekend_factor)?;

        let (first, last) = match (self.weekday_windows.first(), self.weekday_windows.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(TollError::ConfigurationError(String::from(
                    "at least one weekday window is required",
                )))
            }
        };
        for window in self.weekday_windows.iter() {
            check_factor("weekday window factor", window.factor)?;
            if window.end_time < window.start_time {
                return Err(TollError::ConfigurationError(format!(
                    "weekday window ends at {} before it starts at {}",
                    window.end_time, window.start_time
                )));
            }
        }
        if first.start_time != start_of_day() || last.end_time != end_of_day() {
            return Err(TollError::ConfigurationError(format!(
                "weekday windows must span {} to {}, found {} to {}",
                start_of_day(),
                end_of_day(),
                first.start_time,
                last.end_time
            )));
        }
        if let Some(pair) = self
            .weekday_windows
            .windows(2)
            .find(|pair| pair[0].end_time != pair[1].start_time)
        {
            return Err(TollError::ConfigurationError(format!(
                "weekday window starting at {} does not begin where the previous window ends ({})",
                pair[1].start_time, pair[0].end_time
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for TollRateConfig {
    type Error = TollError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if !(f.ends_with(".toml") || f.ends_with(".json")) {
            return Err(TollError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        }
        let contents = std::fs::read_to_string(f)
            .map_err(|e| TollError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        let config: TollRateConfig = if f.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| decoding_error(f, e))?
        } else {
            serde_json::from_str(&contents).map_err(|e| decoding_error(f, e))?
        };
        config.validate()?;
        Ok(config)
    }
}

fn decoding_error(f: &str, e: impl std::fmt::Display) -> TollError {
    TollError::ConfigurationError(format!("failure decoding {f}: {e}"))
}

fn check_factor(name: &str, value: f64) -> Result<(), TollError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TollError::ConfigurationError(format!(
            "{name} must be finite and non-negative, found {value}"
        )))
    }
}

fn start_of_day() -> NaiveTime {
    NaiveTime::MIN
}

fn end_of_day() -> NaiveTime {
    clock(23, 59, 59)
}

fn clock(hour: u32, min: u32, sec: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, sec).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test")
    }

    #[test]
    fn test_default_is_valid() {
        TollRateConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TollRateConfig = toml::from_str(
            r#"
            weekend_factor = 0.5
            window_boundary = "half_open"
            "#,
        )
        .expect("should decode");
        assert_eq!(config.weekend_factor, 0.5);
        assert_eq!(config.window_boundary, WindowBoundary::HalfOpen);
        assert_eq!(config.vehicle_rates, VehicleRateTable::default());
        assert_eq!(config.weekday_windows.len(), 3);
    }

    #[test]
    fn test_json_windows() {
        let config: TollRateConfig = serde_json::from_str(
            r#"{
                "weekday_windows": [
                    { "start_time": "00:00:00", "end_time": "12:00:00", "factor": 1.0 },
                    { "start_time": "12:00:00", "end_time": "23:59:59", "factor": 2.0 }
                ]
            }"#,
        )
        .expect("should decode");
        config.validate().expect("should be valid");
        assert_eq!(config.weekday_windows[1].start_time, clock(12, 0, 0));
    }

    #[test]
    fn test_rejects_gap_between_windows() {
        let mut config = TollRateConfig::default();
        config.weekday_windows[1].start_time = clock(11, 0, 0);
        assert!(matches!(
            config.validate(),
            Err(TollError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_rejects_partial_day() {
        let mut config = TollRateConfig::default();
        config.weekday_windows.pop();
        assert!(matches!(
            config.validate(),
            Err(TollError::ConfigurationError(_))
        ));
        config.weekday_windows.clear();
        assert!(matches!(
            config.validate(),
            Err(TollError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_rejects_negative_factor() {
        let mut config = TollRateConfig::default();
        config.vehicle_rates.truck = -3.6;
        assert!(matches!(
            config.validate(),
            Err(TollError::ConfigurationError(_))
        ));
        let mut config = TollRateConfig::default();
        config.weekend_factor = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_read_config_files() {
        let toml_file = test_dir().join("toll-config.toml");
        let config = TollRateConfig::try_from(&toml_file.to_string_lossy().to_string())
            .expect("should read toml config");
        assert_eq!(config.vehicle_rates.car, 1.5);
        assert_eq!(config.window_boundary, WindowBoundary::HalfOpen);

        let json_file = test_dir().join("toll-config.json");
        let config = TollRateConfig::try_from(&json_file.to_string_lossy().to_string())
            .expect("should read json config");
        assert!(config.parallelize);
        assert_eq!(config.weekday_windows.len(), 2);

        let unsupported = String::from("toll-config.yaml");
        assert!(matches!(
            TollRateConfig::try_from(&unsupported),
            Err(TollError::ConfigurationError(_))
        ));
    }
}
