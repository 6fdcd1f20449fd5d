use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use crate::sides::Side;

pub type MazeResult<T> = std::result::Result<T, MazeError>;

/// Every failure the maze core can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    /// Out-of-domain construction input. The caller can reject the level and move on.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigProblem),

    /// An internal invariant was broken. Programming error, never retried.
    #[error("structural defect: {0}")]
    StructuralDefect(Defect),

    /// Several independent failures from one batch operation.
    #[error("{}", summarize(.0))]
    Aggregate(Vec<MazeError>),
}

/// Failure classification used for aggregate counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    InvalidConfiguration,
    StructuralDefect,
    Aggregate,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidConfiguration => "invalid configuration",
            Self::StructuralDefect => "structural defect",
            Self::Aggregate => "aggregate",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigProblem {
    #[error("{field} must not be negative (got {value})")]
    NegativeDimension { field: &'static str, value: f32 },

    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    NegativeIndex { field: &'static str, value: i32 },

    #[error("{field} must be between 0 and 1 (got {value})")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("grid of {rows}x{cols} rooms does not fit in memory")]
    GridTooLarge { rows: i32, cols: i32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    #[error("side index {0} is not one of Top, Right, Bottom, Left")]
    InvalidSideIndex(usize),

    #[error("side {0:?} registered twice")]
    DuplicateSide(Side),

    #[error("side {0:?} missing from the registry")]
    MissingSide(Side),

    #[error("room {room_number} does not exist in a grid of {room_count} rooms")]
    NoSuchRoom { room_number: usize, room_count: usize },

    #[error("rooms {a} and {b} are not adjacent")]
    NotAdjacent { a: usize, b: usize },
}

impl MazeError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::StructuralDefect(_) => ErrorKind::StructuralDefect,
            Self::Aggregate(_) => ErrorKind::Aggregate,
        }
    }

    // Count leaf failures per kind; nested aggregates are flattened.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<ErrorKind, usize> {
        let mut counts = BTreeMap::new();
        self.count_into(&mut counts);
        counts
    }

    fn count_into(&self, counts: &mut BTreeMap<ErrorKind, usize>) {
        match self {
            Self::Aggregate(failures) => {
                for failure in failures {
                    failure.count_into(counts);
                }
            }
            other => *counts.entry(other.kind()).or_insert(0) += 1,
        }
    }

    /// Collapse a batch of failures: none is `None`, one is returned as is, more become
    /// an `Aggregate`.
    #[must_use]
    pub fn batch(mut failures: Vec<Self>) -> Option<Self> {
        match failures.len() {
            0 => None,
            1 => Some(failures.remove(0)),
            _ => Some(Self::Aggregate(failures)),
        }
    }

    pub fn from_batch(failures: Vec<Self>) -> MazeResult<()> {
        Self::batch(failures).map_or(Ok(()), Err)
    }
}

impl From<ConfigProblem> for MazeError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}

impl From<Defect> for MazeError {
    fn from(defect: Defect) -> Self {
        Self::StructuralDefect(defect)
    }
}

fn summarize(failures: &[MazeError]) -> String {
    let mut counts = BTreeMap::new();
    for failure in failures {
        failure.count_into(&mut counts);
    }
    let total: usize = counts.values().sum();
    let per_kind = counts
        .iter()
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    let details = failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
    format!("{total} failures ({per_kind}): {details}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_counts_flatten_nested_batches() {
        let inner = MazeError::Aggregate(vec![
            Defect::DuplicateSide(Side::Top).into(),
            ConfigProblem::NegativeIndex { field: "row", value: -1 }.into(),
        ]);
        let outer = MazeError::Aggregate(vec![inner, Defect::MissingSide(Side::Left).into()]);

        let counts = outer.counts();
        assert_eq!(counts.get(&ErrorKind::StructuralDefect), Some(&2));
        assert_eq!(counts.get(&ErrorKind::InvalidConfiguration), Some(&1));
        assert_eq!(counts.get(&ErrorKind::Aggregate), None);
    }

    #[test]
    fn aggregate_message_lists_counts_and_details() {
        let err = MazeError::Aggregate(vec![
            Defect::DuplicateSide(Side::Top).into(),
            Defect::DuplicateSide(Side::Right).into(),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("2 failures (structural defect: 2)"), "{text}");
        assert!(text.contains("side Top registered twice"));
    }

    #[test]
    fn from_batch_collapses_single_failure() {
        assert_eq!(MazeError::from_batch(Vec::new()), Ok(()));

        let single = MazeError::from_batch(vec![Defect::MissingSide(Side::Bottom).into()]);
        assert_eq!(single.map_err(|e| e.kind()), Err(ErrorKind::StructuralDefect));

        let many = MazeError::from_batch(vec![
            Defect::MissingSide(Side::Bottom).into(),
            Defect::MissingSide(Side::Top).into(),
        ]);
        assert_eq!(many.map_err(|e| e.kind()), Err(ErrorKind::Aggregate));
    }
}
