//! rateseek — item-to-item recommendations over a fixed ratings matrix.
//!
//! Given a catalog of items rated by a set of raters, `rateseek` scores the
//! cosine similarity between a chosen item's rating column and every other
//! column, and returns the top-N most similar items. The matrix is loaded
//! once, validated, and read-only afterwards; every recommendation request
//! is a pure computation over it.
//!
//! ```
//! use rateseek::{Engine, RatingsMatrix};
//!
//! let matrix = RatingsMatrix::from_rows(vec![
//!     vec![5.0, 4.0, 1.0],
//!     vec![4.0, 5.0, 2.0],
//!     vec![1.0, 2.0, 5.0],
//! ])?;
//! let labels = vec!["alpha".into(), "beta".into(), "gamma".into()];
//!
//! let engine = Engine::new(matrix, labels)?;
//! let ranking = engine.recommend(0, 2)?;
//!
//! assert_eq!(ranking.len(), 2);
//! assert_eq!(ranking[0].label, "beta");
//! # Ok::<(), rateseek::SeekError>(())
//! ```

mod engine;
mod error;
mod matrix;
mod query;
mod utils;

pub use engine::{Engine, EngineMetrics, ScoredItem, DEFAULT_TOP_N};
pub use error::{Result, SeekError};
pub use matrix::RatingsMatrix;
pub use utils::vector::{compute_similarity, cosine_similarity, SimilarityMetric};
