//! SA configuration and cooling schedules.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Cooling schedule for temperature reduction.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// One iteration per temperature step.
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

impl CoolingSchedule {
    /// Next temperature after one cooling step.
    pub fn cool(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoolingSchedule::Geometric { alpha } => write!(f, "geometric:{alpha}"),
            CoolingSchedule::LundyMees { beta } => write!(f, "lundy-mees:{beta}"),
        }
    }
}

/// Parses `geometric[:alpha]` or `lundy-mees:beta`.
///
/// Range checks are left to [`SaConfig::validate`].
///
/// ```
/// use shikaku_anneal::sa::CoolingSchedule;
///
/// let schedule: CoolingSchedule = "lundy-mees:0.001".parse().unwrap();
/// assert_eq!(schedule, CoolingSchedule::LundyMees { beta: 0.001 });
/// ```
impl FromStr for CoolingSchedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s.trim(), None),
        };
        let parse_param = |param: &str| {
            param.parse::<f64>().map_err(|e| {
                Error::InvalidConfig(format!("bad cooling parameter '{param}': {e}"))
            })
        };
        match (name.to_ascii_lowercase().as_str(), param) {
            ("geometric", None) => Ok(CoolingSchedule::default()),
            ("geometric", Some(alpha)) => Ok(CoolingSchedule::Geometric {
                alpha: parse_param(alpha)?,
            }),
            ("lundy-mees" | "lundymees", Some(beta)) => Ok(CoolingSchedule::LundyMees {
                beta: parse_param(beta)?,
            }),
            ("lundy-mees" | "lundymees", None) => Err(Error::InvalidConfig(
                "lundy-mees needs a beta, e.g. lundy-mees:0.001".into(),
            )),
            _ => Err(Error::InvalidConfig(format!(
                "unknown cooling schedule '{s}', expected geometric[:alpha] or lundy-mees:beta"
            ))),
        }
    }
}

/// Configuration for the annealing driver.
///
/// The defaults are the classic Shikaku settings: `T0 = 1000`, 100
/// iterations per temperature, geometric cooling with `alpha = 0.95`,
/// and no budget, so a run only ends once the penalty reaches zero.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_iterations_per_temperature(200)
///     .with_max_iterations(1_000_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of iterations at each temperature level.
    ///
    /// For `LundyMees`, this is ignored (1 iteration per temperature).
    pub iterations_per_temperature: usize,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Optional wall-clock limit in milliseconds, checked once per
    /// temperature level.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 100,
            max_iterations: 0,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Iterations run between two cooling steps.
    pub fn batch_size(&self) -> usize {
        match self.cooling {
            CoolingSchedule::LundyMees { .. } => 1,
            CoolingSchedule::Geometric { .. } => self.iterations_per_temperature,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if self.batch_size() == 0 {
            return Err(Error::InvalidConfig(
                "iterations_per_temperature must be positive".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(Error::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(Error::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return Err(Error::InvalidConfig(format!(
                        "lundy-mees beta must be positive, got {beta}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert_eq!(config.iterations_per_temperature, 100);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.95 });
        assert_eq!(config.max_iterations, 0);
        assert!(config.time_limit_ms.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
        assert!(SaConfig::default()
            .with_cooling(CoolingSchedule::LundyMees { beta: 0.01 })
            .with_iterations_per_temperature(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        assert!(SaConfig::default()
            .with_initial_temperature(-1.0)
            .validate()
            .is_err());
        assert!(SaConfig::default()
            .with_initial_temperature(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_batch() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = SaConfig::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_cooling_schedule() {
        assert_eq!(
            "geometric".parse::<CoolingSchedule>().unwrap(),
            CoolingSchedule::Geometric { alpha: 0.95 }
        );
        assert_eq!(
            "geometric:0.9".parse::<CoolingSchedule>().unwrap(),
            CoolingSchedule::Geometric { alpha: 0.9 }
        );
        assert_eq!(
            "Lundy-Mees: 0.01".parse::<CoolingSchedule>().unwrap(),
            CoolingSchedule::LundyMees { beta: 0.01 }
        );
        assert!("lundy-mees".parse::<CoolingSchedule>().is_err());
        assert!("geometric:fast".parse::<CoolingSchedule>().is_err());
        assert!("linear".parse::<CoolingSchedule>().is_err());
    }

    #[test]
    fn test_cooling_display_round_trips() {
        for schedule in [
            CoolingSchedule::Geometric { alpha: 0.97 },
            CoolingSchedule::LundyMees { beta: 0.002 },
        ] {
            assert_eq!(schedule.to_string().parse::<CoolingSchedule>().unwrap(), schedule);
        }
    }

    #[test]
    fn test_cooling_steps() {
        let geo = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((geo.cool(8.0) - 4.0).abs() < 1e-12);
        let lm = CoolingSchedule::LundyMees { beta: 1.0 };
        assert!((lm.cool(1.0) - 0.5).abs() < 1e-12);
    }
}
