use crate::error::{Result, SeekError};
use wide::f32x8;

const LANES: usize = 8;

/// Pairwise similarity measure between two equal-length rating vectors.
///
/// Cosine is the default everywhere; Dot and Euclidean are selectable for
/// callers that already normalized their data or want raw distance ranking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimilarityMetric {
    Cosine,
    Dot,
    Euclidean,
}

impl SimilarityMetric {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "cosine" => Ok(SimilarityMetric::Cosine),
            "dot" => Ok(SimilarityMetric::Dot),
            "euclidean" => Ok(SimilarityMetric::Euclidean),
            other => Err(SeekError::InvalidInput(format!(
                "invalid similarity metric '{}'. Use 'cosine', 'dot', or 'euclidean'",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Dot => "dot",
            SimilarityMetric::Euclidean => "euclidean",
        }
    }
}

/// Dot product with an f32x8 SIMD main loop and scalar remainder.
///
/// Callers guarantee equal lengths.
pub fn dot_simd(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let len = a.len();
    let chunks = len / LANES;

    let mut sum = f32x8::splat(0.0);
    for j in 0..chunks {
        let a_chunk = f32x8::new([
            a[j * LANES],
            a[j * LANES + 1],
            a[j * LANES + 2],
            a[j * LANES + 3],
            a[j * LANES + 4],
            a[j * LANES + 5],
            a[j * LANES + 6],
            a[j * LANES + 7],
        ]);
        let b_chunk = f32x8::new([
            b[j * LANES],
            b[j * LANES + 1],
            b[j * LANES + 2],
            b[j * LANES + 3],
            b[j * LANES + 4],
            b[j * LANES + 5],
            b[j * LANES + 6],
            b[j * LANES + 7],
        ]);
        sum += a_chunk * b_chunk;
    }

    let mut total = sum.reduce_add();
    for j in (chunks * LANES)..len {
        total += a[j] * b[j];
    }
    total
}

pub(crate) fn dot_scalar(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    // SIMD only pays off with several full lanes of data
    if a.len() >= LANES * 8 {
        dot_simd(a, b)
    } else {
        dot_scalar(a, b)
    }
}

pub fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns a value in [-1, 1]. A zero norm on either side yields 0 rather
/// than NaN; that is a saturation policy, not an error. A length mismatch
/// is a programming error and fails with `InvalidInput`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    check_lengths(a, b)?;
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(dot(a, b) / denom)
}

/// Dispatches to the requested metric. Euclidean distance d is mapped to
/// the similarity 1/(1+d) so that larger is always better.
pub fn compute_similarity(a: &[f32], b: &[f32], metric: SimilarityMetric) -> Result<f32> {
    match metric {
        SimilarityMetric::Cosine => cosine_similarity(a, b),
        SimilarityMetric::Dot => {
            check_lengths(a, b)?;
            Ok(dot(a, b))
        }
        SimilarityMetric::Euclidean => {
            check_lengths(a, b)?;
            let dist = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f32>()
                .sqrt();
            Ok(1.0 / (1.0 + dist))
        }
    }
}

fn check_lengths(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(SeekError::InvalidInput(format!(
            "vector length mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
