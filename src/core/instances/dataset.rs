use crate::error::HoeffdingError;

/// Column-major matrix of observations: each column is one point with
/// `dimensionality` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    dimensionality: usize,
    values: Vec<f64>,
}

impl Dataset {
    pub fn new(dimensionality: usize) -> Self {
        Self {
            dimensionality,
            values: Vec::new(),
        }
    }

    pub fn from_columns(dimensionality: usize, columns: Vec<Vec<f64>>) -> Result<Self, HoeffdingError> {
        let mut dataset = Self::new(dimensionality);
        dataset.values.reserve(dimensionality * columns.len());
        for column in columns {
            dataset.push(&column)?;
        }
        Ok(dataset)
    }

    pub fn push(&mut self, point: &[f64]) -> Result<(), HoeffdingError> {
        if point.len() != self.dimensionality {
            return Err(HoeffdingError::DimensionMismatch {
                expected: self.dimensionality,
                found: point.len(),
            });
        }
        self.values.extend_from_slice(point);
        Ok(())
    }

    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    pub fn n_cols(&self) -> usize {
        if self.dimensionality == 0 {
            return 0;
        }
        self.values.len() / self.dimensionality
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn col(&self, index: usize) -> &[f64] {
        let start = index * self.dimensionality;
        &self.values[start..start + self.dimensionality]
    }

    pub fn cols(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.values.chunks_exact(self.dimensionality.max(1))
    }

    /// Copies the given columns, in the given order, into a new dataset.
    pub fn select_cols(&self, indices: &[usize]) -> Dataset {
        let mut values = Vec::with_capacity(indices.len() * self.dimensionality);
        for &i in indices {
            values.extend_from_slice(self.col(i));
        }
        Dataset {
            dimensionality: self.dimensionality,
            values,
        }
    }
}
