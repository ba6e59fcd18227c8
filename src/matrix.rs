use crate::error::{Result, SeekError};
use log::{info, warn};

// Safety limits on catalog construction
const MAX_RATERS: usize = 1_000_000;
const MAX_ITEMS: usize = 100_000;

/// Immutable ratings table: rows = raters, columns = items.
///
/// Stored flat in row-major order, so one rater's scores are contiguous and
/// an item's rating vector is a strided column read. The table is validated
/// once at construction and read-only afterwards, which is what makes
/// concurrent scoring over it safe without locking.
#[derive(Debug, Clone)]
pub struct RatingsMatrix {
    values: Vec<f32>,
    raters: usize,
    items: usize,
}

impl RatingsMatrix {
    /// Builds a matrix from one row per rater.
    ///
    /// Fails with `InvalidInput` on an empty table, ragged rows, fewer than
    /// two items (nothing to compare against), or non-finite values.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(SeekError::InvalidInput("ratings matrix has no raters".into()));
        }
        if rows.len() > MAX_RATERS {
            return Err(SeekError::InvalidInput(format!(
                "too many raters: {} (max: {})",
                rows.len(),
                MAX_RATERS
            )));
        }

        let items = rows[0].len();
        if items < 2 {
            return Err(SeekError::InvalidInput(format!(
                "catalog needs at least 2 items, got {}",
                items
            )));
        }
        if items > MAX_ITEMS {
            return Err(SeekError::InvalidInput(format!(
                "too many items: {} (max: {})",
                items, MAX_ITEMS
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != items {
                return Err(SeekError::InvalidInput(format!(
                    "inconsistent row width at rater {}: expected {}, found {}",
                    i,
                    items,
                    row.len()
                )));
            }
        }

        let raters = rows.len();
        let mut values = Vec::with_capacity(raters * items);
        for row in &rows {
            values.extend_from_slice(row);
        }

        let invalid = values.iter().filter(|v| !v.is_finite()).count();
        if invalid > 0 {
            return Err(SeekError::InvalidInput(format!(
                "ratings contain {} non-finite values",
                invalid
            )));
        }

        info!("Ratings matrix loaded: {} raters x {} items", raters, items);
        Ok(Self { values, raters, items })
    }

    pub fn raters(&self) -> usize {
        self.raters
    }

    pub fn items(&self) -> usize {
        self.items
    }

    /// One rater's scores across the whole catalog.
    pub fn rater_row(&self, idx: usize) -> Option<&[f32]> {
        if idx >= self.raters {
            return None;
        }
        let s = idx * self.items;
        Some(&self.values[s..s + self.items])
    }

    /// One item's rating vector (all raters), gathered from the strided
    /// column. Allocates; columns exist only transiently during scoring.
    pub fn item_vector(&self, idx: usize) -> Option<Vec<f32>> {
        if idx >= self.items {
            return None;
        }
        let mut col = Vec::with_capacity(self.raters);
        for r in 0..self.raters {
            col.push(self.values[r * self.items + idx]);
        }
        Some(col)
    }

    /// Cheap internal consistency check.
    pub fn health_check(&self) -> Result<()> {
        if self.values.len() != self.raters * self.items {
            return Err(SeekError::InvalidInput(format!(
                "ratings buffer size inconsistent: {} values for {}x{}",
                self.values.len(),
                self.raters,
                self.items
            )));
        }
        if let Some(zero) = (0..self.items).find(|&i| {
            self.item_vector(i)
                .map(|v| v.iter().all(|&x| x == 0.0))
                .unwrap_or(false)
        }) {
            // Not an error: zero-norm columns score 0 by the saturation policy.
            warn!("Item column {} is all-zero; it will score 0 everywhere", zero);
        }
        Ok(())
    }
}
