use super::{evaluate, Segment};
use crate::data::model::{FrequencyGrid, Sample, SampleSeries, SpectrumResult, TransformKind};

/// Nonuniform discrete cosine transform.
///
/// Exact integral of the series' piecewise-linear interpolant against
/// `cos(w·t)` over `[t[0], t[N-1]]`, for every `w` in `grid`.
pub fn ndct(grid: &FrequencyGrid, series: &SampleSeries) -> SpectrumResult {
    evaluate(TransformKind::Cosine, grid, series)
}

/// `slope · (-2) · sin(½w(t₁+t₀)) · sin(½w(t₁-t₀)) / w²`
#[inline]
pub(super) fn segment_term(s: &Segment, w: f64) -> f64 {
    s.slope * -2.0 * (0.5 * w * s.sum).sin() * (0.5 * w * s.width).sin() / (w * w)
}

/// Add the end-point terms: `+ f[N-1]·sin(w·t[N-1])/w - f[0]·sin(w·t[0])/w`.
#[inline]
pub(super) fn close(acc: f64, first: Sample, last: Sample, w: f64) -> f64 {
    acc + last.f * (w * last.t).sin() / w - first.f * (first.t * w).sin() / w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::sampled;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn triangle() -> SampleSeries {
        SampleSeries::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap()
    }

    #[test]
    fn triangle_at_unit_frequency() {
        let grid = FrequencyGrid::new(vec![1.0]).unwrap();
        let out = ndct(&grid, &triangle());

        let by_terms = -2.0 * 0.5f64.sin().powi(2) + 2.0 * 1.5f64.sin() * 0.5f64.sin();
        // ∫₀¹ t cos t dt + ∫₁² (2 - t) cos t dt
        let closed_form = 2.0 * 1f64.cos() - 1.0 - 2f64.cos();

        assert_eq!(out.points[0].frequency, 1.0);
        assert_abs_diff_eq!(out.points[0].value, by_terms, epsilon = 1e-14);
        assert_abs_diff_eq!(out.points[0].value, closed_form, epsilon = 1e-14);
    }

    #[test]
    fn boundary_terms_for_open_ends() {
        // f(t) = t on [1, 3]: ∫ t cos(wt) dt = t sin(wt)/w + cos(wt)/w²
        let series = SampleSeries::from_columns(&[1.0, 3.0], &[1.0, 3.0]).unwrap();
        let grid = FrequencyGrid::new(vec![1.0, 2.0, -0.7]).unwrap();
        let out = ndct(&grid, &series);

        let antiderivative = |t: f64, w: f64| t * (w * t).sin() / w + (w * t).cos() / (w * w);
        for p in &out.points {
            let w = p.frequency;
            let expected = antiderivative(3.0, w) - antiderivative(1.0, w);
            assert_abs_diff_eq!(p.value, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn decaying_exponential_matches_lorentzian() {
        let series = sampled(0.0, 20.0, 2001, |t| (-t).exp());
        let grid = FrequencyGrid::new(vec![0.5, 1.0, 3.0]).unwrap();
        for p in &ndct(&grid, &series).points {
            let w = p.frequency;
            assert_abs_diff_eq!(p.value, 1.0 / (1.0 + w * w), epsilon = 1e-4);
        }
    }

    /// Largest deviation of ndct(ndct(e^{-t})) from (π/2)·e^{-t}, with the
    /// intermediate spectrum sampled at `n` frequencies 0.01 apart.
    fn round_trip_error(n: usize) -> f64 {
        let series = sampled(0.0, 20.0, 2001, |t| (-t).exp());
        let forward =
            FrequencyGrid::new((0..n).map(|k| 0.001 + 0.01 * k as f64).collect()).unwrap();
        let spectrum = ndct(&forward, &series);

        let back_at = FrequencyGrid::new(vec![0.5, 1.0, 2.0]).unwrap();
        ndct(&back_at, &spectrum.to_series().unwrap())
            .points
            .iter()
            .map(|p| (p.value - FRAC_PI_2 * (-p.frequency).exp()).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn transform_of_transform_recovers_input() {
        let coarse = round_trip_error(1001);
        let fine = round_trip_error(5001);
        assert!(fine < 5e-3, "fine error {fine}");
        assert!(fine < coarse, "error should shrink with more samples: {fine} vs {coarse}");
    }
}
