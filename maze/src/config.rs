#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    constants::{DEFAULT_BRAID_RATIO, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH},
    errors::{ConfigProblem, MazeError, MazeResult},
    room::{check_dimension, check_index},
};

// ============================================================================
// Level Configuration
// ============================================================================

/// Everything needed to generate one level. Usually comes from a level loader.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct LevelConfig {
    pub rows: i32,
    pub cols: i32,
    pub room_width: f32,
    pub room_height: f32,
    // Fixed seed for reproducible levels; random when absent
    pub seed: Option<u64>,
    // Chance (0..=1) to open an extra wall in each dead end
    pub braid: f64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            seed: None,
            braid: DEFAULT_BRAID_RATIO,
        }
    }
}

impl LevelConfig {
    /// Check every field and report all problems at once.
    pub fn validate(&self) -> MazeResult<()> {
        let mut failures = Vec::new();

        if let Err(e) = check_index("rows", self.rows) {
            failures.push(e);
        }
        if let Err(e) = check_index("cols", self.cols) {
            failures.push(e);
        }
        if let Err(e) = check_dimension("room_width", self.room_width) {
            failures.push(e);
        }
        if let Err(e) = check_dimension("room_height", self.room_height) {
            failures.push(e);
        }
        if let Err(e) = check_ratio("braid", self.braid) {
            failures.push(e);
        }

        let result = MazeError::from_batch(failures);
        if let Err(e) = &result {
            warn!("rejected level configuration: {e}");
        }
        result
    }
}

// Probability in 0..=1; NaN fails the range check as well.
pub(crate) fn check_ratio(field: &'static str, value: f64) -> MazeResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigProblem::OutOfRange { field, value }.into())
    }
}

#[cfg(feature = "json")]
impl LevelConfig {
    // Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LevelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn single_problem_is_reported_directly() {
        let config = LevelConfig {
            cols: -2,
            ..LevelConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MazeError::InvalidConfiguration(ConfigProblem::NegativeIndex {
                field: "cols",
                value: -2
            }))
        );
    }

    #[test]
    fn all_problems_are_collected() {
        let config = LevelConfig {
            rows: -1,
            cols: -1,
            room_width: f32::NAN,
            room_height: -3.0,
            seed: Some(7),
            braid: 1.5,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aggregate);
        assert_eq!(err.counts().get(&ErrorKind::InvalidConfiguration), Some(&5));
    }

    #[test]
    fn braid_ratio_must_be_a_probability() {
        for braid in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
            let config = LevelConfig {
                braid,
                ..LevelConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(
                    err,
                    MazeError::InvalidConfiguration(ConfigProblem::OutOfRange { field: "braid", .. })
                ),
                "{braid}: {err:?}"
            );
        }
        assert_eq!(check_ratio("braid", 0.0), Ok(0.0));
        assert_eq!(check_ratio("braid", 1.0), Ok(1.0));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = LevelConfig::from_json_str(r#"{ "rows": 3, "seed": 42 }"#).unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.cols, DEFAULT_GRID_COLS);
        assert_eq!(config.room_width, DEFAULT_ROOM_WIDTH);
    }
}
