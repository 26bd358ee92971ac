/// Transform layer: the two nDFT kernels and the loop they share.
///
/// Both kernels integrate the piecewise-linear interpolant of the series
/// against `cos(w·t)` / `sin(w·t)` in closed form:
///
/// ```text
///  for each w in grid:                       (map, output preallocated)
///      acc = Σ_i  term(segment_i, w)         (i ascending, N - 1 segments)
///      value = acc ± boundary(first, last, w)
/// ```
///
/// The segment slope only depends on the series, so it is computed once per
/// call and reused for every frequency.
pub mod cosine;
pub mod sine;

pub use cosine::ndct;
pub use sine::ndst;

use crate::data::model::{
    FrequencyGrid, SampleSeries, SpectrumPoint, SpectrumResult, TransformKind,
};

/// One interval between consecutive samples, in the form both kernels need.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    /// `(f[i+1] - f[i]) / (t[i+1] - t[i])`
    pub slope: f64,
    /// `t[i+1] + t[i]`
    pub sum: f64,
    /// `t[i+1] - t[i]`, strictly positive.
    pub width: f64,
}

fn segments(series: &SampleSeries) -> Vec<Segment> {
    series
        .segments()
        .map(|(a, b)| Segment {
            slope: (b.f - a.f) / (b.t - a.t),
            sum: b.t + a.t,
            width: b.t - a.t,
        })
        .collect()
}

/// Evaluate one half of the nDFT at every frequency of `grid`.
pub fn evaluate(kind: TransformKind, grid: &FrequencyGrid, series: &SampleSeries) -> SpectrumResult {
    let segments = segments(series);
    let (first, last) = (series.first(), series.last());

    let mut points = Vec::with_capacity(grid.len());
    points.extend(grid.values().iter().map(|&w| {
        let value = match kind {
            TransformKind::Cosine => {
                let acc: f64 = segments.iter().map(|s| cosine::segment_term(s, w)).sum();
                cosine::close(acc, first, last, w)
            }
            TransformKind::Sine => {
                let acc: f64 = segments.iter().map(|s| sine::segment_term(s, w)).sum();
                sine::close(acc, first, last, w)
            }
        };
        SpectrumPoint {
            frequency: w,
            value,
        }
    }));

    SpectrumResult { kind, points }
}

/// Run both kernels over the same inputs, cosine first.
pub fn ndft(grid: &FrequencyGrid, series: &SampleSeries) -> (SpectrumResult, SpectrumResult) {
    (ndct(grid, series), ndst(grid, series))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::model::{Sample, SampleSeries};

    /// `n` samples of `g` on `[t0, t1]`, evenly spaced.
    pub fn sampled(t0: f64, t1: f64, n: usize, g: impl Fn(f64) -> f64) -> SampleSeries {
        let step = (t1 - t0) / (n - 1) as f64;
        let samples = (0..n)
            .map(|i| {
                let t = t0 + i as f64 * step;
                Sample::new(t, g(t))
            })
            .collect();
        SampleSeries::new(samples).expect("evenly spaced series")
    }

    /// An irregular but sorted series for property checks.
    pub fn irregular() -> SampleSeries {
        let t = [0.1, 0.35, 0.4, 1.2, 1.25, 2.9, 3.0, 4.7];
        let f = [0.3, -1.2, 0.8, 2.5, 2.4, -0.7, 0.0, 1.1];
        SampleSeries::from_columns(&t, &f).expect("sorted series")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::irregular;
    use super::*;
    use approx::assert_abs_diff_eq;

    fn grid() -> FrequencyGrid {
        FrequencyGrid::new(vec![3.0, -0.5, 0.01, 12.0, 1.0]).unwrap()
    }

    #[test]
    fn output_follows_grid_order_and_length() {
        let g = grid();
        for kind in TransformKind::ALL {
            let out = evaluate(kind, &g, &irregular());
            assert_eq!(out.kind, kind);
            assert_eq!(out.len(), g.len());
            for (p, &w) in out.points.iter().zip(g.values()) {
                assert_eq!(p.frequency, w);
            }
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let g = grid();
        let s = irregular();
        let (c1, s1) = ndft(&g, &s);
        let (c2, s2) = ndft(&g, &s);
        let bits = |r: &SpectrumResult| r.values().map(f64::to_bits).collect::<Vec<_>>();
        assert_eq!(bits(&c1), bits(&c2));
        assert_eq!(bits(&s1), bits(&s2));
    }

    #[test]
    fn output_is_linear_in_amplitude() {
        let g = grid();
        let s = irregular();
        for kind in TransformKind::ALL {
            let base = evaluate(kind, &g, &s);
            for c in [-1.0, 2.5, -0.3] {
                let scaled = evaluate(kind, &g, &s.scaled(c));
                for (a, b) in base.values().zip(scaled.values()) {
                    assert_abs_diff_eq!(a * c, b, epsilon = 1e-12 * (1.0 + a.abs()));
                }
            }
        }
    }

    #[test]
    fn empty_grid_gives_empty_spectra() {
        let g = FrequencyGrid::new(vec![]).unwrap();
        let (c, s) = ndft(&g, &irregular());
        assert!(c.is_empty() && s.is_empty());
    }

    #[test]
    fn precomputed_segments_match_series() {
        let segs = segments(&irregular());
        assert_eq!(segs.len(), irregular().len() - 1);
        assert_abs_diff_eq!(segs[0].slope, (-1.2 - 0.3) / 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(segs[0].sum, 0.45, epsilon = 1e-15);
        assert!(segs.iter().all(|s| s.width > 0.0));
    }
}
