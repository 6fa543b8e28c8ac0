// SPDX-License-Identifier: MPL-2.0
//! Discrete zoom factor table.
//!
//! Zooming moves an index through a fixed, strictly ascending list of factors
//! instead of multiplying a free-floating scale. One entry is exactly `1.0`
//! (the natural size) and its index is resolved once at construction.

use crate::config::{DEFAULT_SCALE_LEVELS, MIN_SCALE_LEVELS, NATURAL_SCALE};
use crate::error::ScaleTableError;

/// Immutable, validated sequence of zoom factors.
///
/// # Example
///
/// ```
/// use image_preview::ui::state::ScaleTable;
///
/// let table = ScaleTable::new(vec![0.5, 1.0, 2.0]).unwrap();
/// assert_eq!(table.natural_index(), 1);
/// assert_eq!(table.clamp_index(-3), 0);
/// assert_eq!(table.clamp_index(9), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTable {
    levels: Vec<f32>,
    natural_index: usize,
}

impl ScaleTable {
    /// Validates `levels` and builds a table.
    pub fn new(levels: Vec<f32>) -> Result<Self, ScaleTableError> {
        if levels.len() < MIN_SCALE_LEVELS {
            return Err(ScaleTableError::TooFewLevels(levels.len()));
        }

        for (index, level) in levels.iter().enumerate() {
            if !level.is_finite() || *level <= 0.0 {
                return Err(ScaleTableError::NonPositive { index });
            }
            if index > 0 && *level <= levels[index - 1] {
                return Err(ScaleTableError::NotIncreasing { index });
            }
        }

        // Strict ordering guarantees at most one exact match
        let natural_index = levels
            .iter()
            .position(|level| *level == NATURAL_SCALE)
            .ok_or(ScaleTableError::MissingNaturalSize)?;

        Ok(Self {
            levels,
            natural_index,
        })
    }

    /// Returns the factor at `index`.
    pub fn level_at(&self, index: usize) -> Result<f32, ScaleTableError> {
        self.levels
            .get(index)
            .copied()
            .ok_or(ScaleTableError::IndexOutOfRange {
                index,
                len: self.levels.len(),
            })
    }

    /// Factor at an index already known to be valid (saturating otherwise).
    pub(crate) fn level(&self, index: usize) -> f32 {
        self.levels[index.min(self.levels.len() - 1)]
    }

    /// Index of the `1.0` entry.
    #[must_use]
    pub fn natural_index(&self) -> usize {
        self.natural_index
    }

    /// Saturates any index into `[0, len - 1]`.
    #[must_use]
    pub fn clamp_index(&self, index: isize) -> usize {
        let max = self.levels.len() - 1;
        usize::try_from(index).map_or(0, |index| index.min(max))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a table holds at least two levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether `index` is the largest factor.
    #[must_use]
    pub fn is_top(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    /// Whether `index` is the smallest factor.
    #[must_use]
    pub fn is_bottom(&self, index: usize) -> bool {
        index == 0
    }

    #[must_use]
    pub fn levels(&self) -> &[f32] {
        &self.levels
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        let levels = DEFAULT_SCALE_LEVELS.to_vec();
        let natural_index = levels
            .iter()
            .position(|level| *level == NATURAL_SCALE)
            .unwrap_or(0);
        Self {
            levels,
            natural_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_table_is_valid() {
        let table = ScaleTable::default();
        let rebuilt = ScaleTable::new(DEFAULT_SCALE_LEVELS.to_vec()).expect("default is valid");
        assert_eq!(table, rebuilt);
        assert_abs_diff_eq!(table.level(table.natural_index()), 1.0);
    }

    #[test]
    fn level_after_natural_is_one_point_two() {
        let table = ScaleTable::default();
        let next = table.level_at(table.natural_index() + 1).unwrap();
        assert_abs_diff_eq!(next, 1.2);
    }

    #[test]
    fn rejects_short_tables() {
        assert_eq!(
            ScaleTable::new(vec![1.0]),
            Err(ScaleTableError::TooFewLevels(1))
        );
        assert_eq!(ScaleTable::new(vec![]), Err(ScaleTableError::TooFewLevels(0)));
    }

    #[test]
    fn rejects_non_positive_levels() {
        assert_eq!(
            ScaleTable::new(vec![0.0, 1.0]),
            Err(ScaleTableError::NonPositive { index: 0 })
        );
        assert_eq!(
            ScaleTable::new(vec![1.0, f32::NAN]),
            Err(ScaleTableError::NonPositive { index: 1 })
        );
    }

    #[test]
    fn rejects_unordered_and_duplicate_levels() {
        assert_eq!(
            ScaleTable::new(vec![1.0, 0.5]),
            Err(ScaleTableError::NotIncreasing { index: 1 })
        );
        assert_eq!(
            ScaleTable::new(vec![0.5, 1.0, 1.0]),
            Err(ScaleTableError::NotIncreasing { index: 2 })
        );
    }

    #[test]
    fn rejects_table_without_natural_size() {
        assert_eq!(
            ScaleTable::new(vec![0.5, 2.0]),
            Err(ScaleTableError::MissingNaturalSize)
        );
    }

    #[test]
    fn natural_index_requires_exact_one() {
        let table = ScaleTable::new(vec![0.999_999_94, 1.0, 2.0]).unwrap();
        assert_eq!(table.natural_index(), 1);

        assert_eq!(
            ScaleTable::new(vec![0.5, 1.000_000_1]),
            Err(ScaleTableError::MissingNaturalSize)
        );
    }

    #[test]
    fn level_at_fails_out_of_range() {
        let table = ScaleTable::new(vec![0.5, 1.0, 2.0]).unwrap();
        assert_eq!(
            table.level_at(3),
            Err(ScaleTableError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn clamp_index_saturates_both_ends() {
        let table = ScaleTable::new(vec![0.5, 1.0, 2.0]).unwrap();
        assert_eq!(table.clamp_index(-1), 0);
        assert_eq!(table.clamp_index(0), 0);
        assert_eq!(table.clamp_index(2), 2);
        assert_eq!(table.clamp_index(isize::MAX), 2);
    }

    #[test]
    fn top_and_bottom_detection() {
        let table = ScaleTable::new(vec![0.5, 1.0, 2.0]).unwrap();
        assert!(table.is_bottom(0));
        assert!(!table.is_bottom(1));
        assert!(table.is_top(2));
        assert!(!table.is_top(1));
    }
}
