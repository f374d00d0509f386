//! Dense `location × criterion` grid of raw values.
//!
//! Rows follow the order of the supplied locations and columns follow the
//! order of the supplied criteria. The grid is driven by the criterion set,
//! so values a location records for unknown criteria never appear.

use crate::{Criterion, Location};

/// Smallest and largest raw value observed in a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnBounds {
    /// Minimum over every row, including defaulted zeros.
    pub min: f64,
    /// Maximum over every row, including defaulted zeros.
    pub max: f64,
}

/// Raw criterion values for every `(location, criterion)` pair.
///
/// # Examples
/// ```
/// use sitewise_core::{Criterion, CriterionKind, Location, ValueMatrix};
///
/// let criteria = [Criterion::new("rent", "Rent", 1.0, CriterionKind::Cost)];
/// let locations = [
///     Location::new(1, "A").with_value("rent", 10.0),
///     Location::new(2, "B"),
/// ];
/// let matrix = ValueMatrix::build(&locations, &criteria);
///
/// assert_eq!(matrix.row(0), &[10.0]);
/// assert_eq!(matrix.row(1), &[0.0]);
/// assert!(matrix.is_observed(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMatrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
    observed: Vec<bool>,
}

impl ValueMatrix {
    /// Materialise the grid, defaulting absent values to `0.0`.
    #[must_use]
    pub fn build(locations: &[Location], criteria: &[Criterion]) -> Self {
        let mut values = Vec::with_capacity(locations.len().saturating_mul(criteria.len()));
        let mut observed = vec![false; criteria.len()];
        for location in locations {
            for (seen, criterion) in observed.iter_mut().zip(criteria) {
                let stored = location.value(&criterion.id);
                *seen |= stored.is_some();
                values.push(stored.unwrap_or(0.0));
            }
        }
        Self {
            rows: locations.len(),
            columns: criteria.len(),
            values,
            observed,
        }
    }

    /// Number of locations.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of criteria.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Report whether the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Raw value for a cell; `0.0` outside the grid.
    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> f64 {
        if column >= self.columns {
            return 0.0;
        }
        row.checked_mul(self.columns)
            .and_then(|start| start.checked_add(column))
            .and_then(|index| self.values.get(index))
            .copied()
            .unwrap_or(0.0)
    }

    /// Values for one location in criterion order; empty outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        row.checked_mul(self.columns)
            .and_then(|start| Some(start..start.checked_add(self.columns)?))
            .and_then(|range| self.values.get(range))
            .unwrap_or(&[])
    }

    /// Iterate a criterion's values in location order.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        let in_range = column < self.columns;
        (0..self.rows)
            .filter(move |_| in_range)
            .map(move |row| self.value(row, column))
    }

    /// Report whether any location stored a value for the criterion.
    #[must_use]
    pub fn is_observed(&self, column: usize) -> bool {
        self.observed.get(column).copied().unwrap_or(false)
    }

    /// Minimum and maximum of a column, or `None` when it has no cells.
    #[must_use]
    pub fn column_bounds(&self, column: usize) -> Option<ColumnBounds> {
        self.column(column).fold(None, |bounds, value| {
            Some(bounds.map_or(
                ColumnBounds {
                    min: value,
                    max: value,
                },
                |current: ColumnBounds| ColumnBounds {
                    min: current.min.min(value),
                    max: current.max.max(value),
                },
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CriterionKind;
    use rstest::{fixture, rstest};

    #[fixture]
    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("footfall", "Footfall", 0.6, CriterionKind::Benefit),
            Criterion::new("rent", "Rent", 0.4, CriterionKind::Cost),
            Criterion::new("parking", "Parking", 0.1, CriterionKind::Benefit),
        ]
    }

    #[fixture]
    fn locations() -> Vec<Location> {
        vec![
            Location::new(1, "A")
                .with_value("footfall", 300.0)
                .with_value("rent", 12.0),
            Location::new(2, "B")
                .with_value("footfall", 450.0)
                .with_value("unknown", 99.0),
        ]
    }

    #[rstest]
    fn defaults_missing_values_to_zero(locations: Vec<Location>, criteria: Vec<Criterion>) {
        let matrix = ValueMatrix::build(&locations, &criteria);
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.columns(), 3);
        assert_eq!(matrix.row(0), &[300.0, 12.0, 0.0]);
        assert_eq!(matrix.row(1), &[450.0, 0.0, 0.0]);
    }

    #[rstest]
    fn tracks_observed_columns(locations: Vec<Location>, criteria: Vec<Criterion>) {
        let matrix = ValueMatrix::build(&locations, &criteria);
        assert!(matrix.is_observed(0));
        assert!(matrix.is_observed(1));
        assert!(!matrix.is_observed(2));
        assert!(!matrix.is_observed(3));
    }

    #[rstest]
    fn bounds_include_defaulted_zeros(locations: Vec<Location>, criteria: Vec<Criterion>) {
        let matrix = ValueMatrix::build(&locations, &criteria);
        assert_eq!(
            matrix.column_bounds(1),
            Some(ColumnBounds {
                min: 0.0,
                max: 12.0
            })
        );
        assert_eq!(
            matrix.column_bounds(0),
            Some(ColumnBounds {
                min: 300.0,
                max: 450.0
            })
        );
    }

    #[rstest]
    fn out_of_range_access_is_neutral(locations: Vec<Location>, criteria: Vec<Criterion>) {
        let matrix = ValueMatrix::build(&locations, &criteria);
        assert_eq!(matrix.value(5, 0), 0.0);
        assert_eq!(matrix.value(0, 7), 0.0);
        assert!(matrix.row(2).is_empty());
        assert_eq!(matrix.column(9).count(), 0);
        assert_eq!(matrix.column_bounds(9), None);
    }

    #[rstest]
    fn empty_inputs_produce_empty_grid(criteria: Vec<Criterion>) {
        let matrix = ValueMatrix::build(&[], &criteria);
        assert!(matrix.is_empty());
        assert_eq!(matrix.column_bounds(0), None);
        assert!(matrix.row(0).is_empty());
    }
}
