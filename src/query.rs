use std::cmp::Reverse;

use log::debug;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::engine::{Engine, ScoredItem};
use crate::error::Result;
use crate::utils::vector::{compute_similarity, SimilarityMetric};

impl Engine {
    /// Scores every other item column against the target column and keeps
    /// the best `top_n`.
    ///
    /// Ties on score keep ascending column-index order, so rankings are
    /// reproducible across runs regardless of iteration order.
    pub(crate) fn rank_against(
        &self,
        target_index: usize,
        top_n: usize,
        metric: SimilarityMetric,
    ) -> Result<Vec<ScoredItem>> {
        let items = self.matrix().items();
        // target_index was bounds-checked by the caller
        let target = self
            .matrix()
            .item_vector(target_index)
            .unwrap_or_default();

        let mut scored = Vec::with_capacity(items - 1);
        for i in 0..items {
            if i == target_index {
                continue;
            }
            let column = self.matrix().item_vector(i).unwrap_or_default();
            let score = compute_similarity(&target, &column, metric)?;
            scored.push(ScoredItem {
                index: i,
                label: self.labels()[i].clone(),
                score,
            });
        }

        scored.sort_by_key(|s| (Reverse(OrderedFloat(s.score)), s.index));
        scored.truncate(top_n);

        debug!(
            "Ranked {} candidates against item {} ({}), kept {}",
            items - 1,
            target_index,
            metric.as_str(),
            scored.len()
        );
        Ok(scored)
    }

    /// Per-item rankings for the whole catalog, scored in parallel.
    ///
    /// Each ranking is independent and reads only the immutable matrix, so
    /// the result is identical to calling `recommend` item by item.
    pub fn recommend_all(&self, top_n: usize) -> Result<Vec<Vec<ScoredItem>>> {
        (0..self.item_count())
            .into_par_iter()
            .map(|i| self.rank_against(i, top_n, SimilarityMetric::Cosine))
            .collect()
    }
}
