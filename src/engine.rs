use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::error::{Result, SeekError};
use crate::matrix::RatingsMatrix;
use crate::utils::vector::SimilarityMetric;

/// Default number of recommendations returned — the core's only tunable.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Default)]
pub struct EngineMetrics {
    request_count: AtomicUsize,
    total_request_time_us: AtomicUsize,
    cosine_requests: AtomicUsize,
    alt_metric_requests: AtomicUsize,
}

impl EngineMetrics {
    pub fn record_request(&self, duration_us: u64, metric: SimilarityMetric) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.total_request_time_us
            .fetch_add(duration_us as usize, Ordering::Relaxed);
        match metric {
            SimilarityMetric::Cosine => {
                self.cosine_requests.fetch_add(1, Ordering::Relaxed);
            }
            _ => {
                self.alt_metric_requests.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn get_stats(&self) -> (usize, f64, usize, usize) {
        let n = self.request_count.load(Ordering::Relaxed);
        let t = self.total_request_time_us.load(Ordering::Relaxed);
        let avg = if n > 0 { t as f64 / n as f64 } else { 0.0 };
        (
            n,
            avg,
            self.cosine_requests.load(Ordering::Relaxed),
            self.alt_metric_requests.load(Ordering::Relaxed),
        )
    }
}

/// One entry of a ranking: an item and how similar it is to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    /// Original column index in the ratings matrix.
    pub index: usize,
    pub label: String,
    /// In [-1, 1] for cosine; exactly 0 for zero-norm columns.
    pub score: f32,
}

/// Recommendation engine over an immutable ratings matrix.
///
/// Owns the matrix and the item labels for the lifetime of the process.
/// All state is read-only after construction, so a shared `Engine` can
/// serve recommendations from many threads without locking.
pub struct Engine {
    matrix: RatingsMatrix,
    labels: Vec<String>,
    creation_time: Instant,
    metrics: Arc<EngineMetrics>,
}

impl Engine {
    /// Builds an engine from a validated matrix and one label per item.
    pub fn new(matrix: RatingsMatrix, labels: Vec<String>) -> Result<Self> {
        if labels.len() != matrix.items() {
            return Err(SeekError::InvalidInput(format!(
                "label count mismatch: {} labels for {} items",
                labels.len(),
                matrix.items()
            )));
        }

        let engine = Self {
            matrix,
            labels,
            creation_time: Instant::now(),
            metrics: Arc::new(EngineMetrics::default()),
        };
        engine.health_check()?;

        info!(
            "Engine ready: {} items x {} raters",
            engine.matrix.items(),
            engine.matrix.raters()
        );
        Ok(engine)
    }

    /// Top-N items most similar to `target_index`, cosine metric.
    ///
    /// The target never appears in its own ranking; the result holds
    /// `min(top_n, items - 1)` entries sorted by descending score, with
    /// ascending column index breaking ties. `top_n == 0` is not an error
    /// and yields an empty ranking.
    pub fn recommend(&self, target_index: usize, top_n: usize) -> Result<Vec<ScoredItem>> {
        self.recommend_with_metric(target_index, top_n, SimilarityMetric::Cosine)
    }

    pub fn recommend_with_metric(
        &self,
        target_index: usize,
        top_n: usize,
        metric: SimilarityMetric,
    ) -> Result<Vec<ScoredItem>> {
        if target_index >= self.matrix.items() {
            return Err(SeekError::IndexOutOfRange {
                index: target_index,
                items: self.matrix.items(),
            });
        }
        if top_n == 0 {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let ranking = self.rank_against(target_index, top_n, metric)?;
        self.metrics
            .record_request(start.elapsed().as_micros() as u64, metric);

        Ok(ranking)
    }

    pub fn item_count(&self) -> usize {
        self.matrix.items()
    }

    pub fn rater_count(&self) -> usize {
        self.matrix.raters()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub(crate) fn matrix(&self) -> &RatingsMatrix {
        &self.matrix
    }

    pub fn health_check(&self) -> Result<()> {
        self.matrix.health_check()?;
        if self.labels.iter().any(|l| l.trim().is_empty()) {
            return Err(SeekError::InvalidInput("empty item label".into()));
        }
        Ok(())
    }

    /// (requests, avg request time in µs, cosine requests, other-metric
    /// requests, uptime in seconds)
    pub fn get_stats(&self) -> (usize, f64, usize, usize, f64) {
        let (n, avg, cosine, alt) = self.metrics.get_stats();
        (n, avg, cosine, alt, self.creation_time.elapsed().as_secs_f64())
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        let (n, avg, _, _, uptime) = self.get_stats();
        info!(
            "Engine dropped: {} items, {} requests, {:.1}us avg, {:.1}s uptime",
            self.matrix.items(),
            n,
            avg,
            uptime
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::RatingsMatrix;

    fn small_engine() -> Engine {
        let matrix = RatingsMatrix::from_rows(vec![
            vec![5.0, 5.0, 1.0],
            vec![4.0, 4.0, 2.0],
            vec![1.0, 1.0, 5.0],
        ])
        .unwrap();
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        Engine::new(matrix, labels).unwrap()
    }

    #[test]
    fn new_rejects_label_count_mismatch() {
        let matrix = RatingsMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let err = Engine::new(matrix, vec!["only one".to_string()]);
        assert!(matches!(err, Err(SeekError::InvalidInput(_))));
    }

    #[test]
    fn recommend_rejects_out_of_range_target() {
        let engine = small_engine();
        match engine.recommend(3, 2) {
            Err(SeekError::IndexOutOfRange { index, items }) => {
                assert_eq!(index, 3);
                assert_eq!(items, 3);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn recommend_zero_top_n_is_empty_not_error() {
        let engine = small_engine();
        assert!(engine.recommend(0, 0).unwrap().is_empty());
    }

    #[test]
    fn recommend_excludes_target_and_ranks_by_score() {
        let engine = small_engine();
        let ranking = engine.recommend(0, 3).unwrap();
        // only two other items exist
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|r| r.index != 0));
        // column b is identical to a, column c points the other way
        assert_eq!(ranking[0].label, "b");
        assert!(ranking[0].score >= ranking[1].score);
    }

    #[test]
    fn alternate_metric_is_selectable() {
        let engine = small_engine();
        let ranking = engine
            .recommend_with_metric(2, 2, SimilarityMetric::Euclidean)
            .unwrap();
        assert_eq!(ranking.len(), 2);
        let (_, _, _, alt, _) = engine.get_stats();
        assert_eq!(alt, 1);
    }

    #[test]
    fn metrics_count_requests() {
        let engine = small_engine();
        engine.recommend(0, 1).unwrap();
        engine.recommend(1, 1).unwrap();
        let (n, _, cosine, alt, _) = engine.get_stats();
        assert_eq!(n, 2);
        assert_eq!(cosine, 2);
        assert_eq!(alt, 0);
    }
}
