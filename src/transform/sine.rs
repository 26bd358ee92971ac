use super::{evaluate, Segment};
use crate::data::model::{FrequencyGrid, Sample, SampleSeries, SpectrumResult, TransformKind};

/// Nonuniform discrete sine transform.
///
/// Same structure as [`super::ndct`]; the segment term uses the cosine of the
/// half-sum with a positive sign and the boundary terms are swapped in sign.
pub fn ndst(grid: &FrequencyGrid, series: &SampleSeries) -> SpectrumResult {
    evaluate(TransformKind::Sine, grid, series)
}

/// `slope · 2 · cos(½w(t₁+t₀)) · sin(½w(t₁-t₀)) / w²`
#[inline]
pub(super) fn segment_term(s: &Segment, w: f64) -> f64 {
    s.slope * 2.0 * (0.5 * w * s.sum).cos() * (0.5 * w * s.width).sin() / (w * w)
}

/// Add the end-point terms: `- f[N-1]·cos(w·t[N-1])/w + f[0]·cos(w·t[0])/w`.
#[inline]
pub(super) fn close(acc: f64, first: Sample, last: Sample, w: f64) -> f64 {
    acc - last.f * (w * last.t).cos() / w + first.f * (w * first.t).cos() / w
}
