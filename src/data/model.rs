use std::fmt;

use crate::error::{DegenerateReason, NdftError, Result};

// ---------------------------------------------------------------------------
// Sample / SampleSeries – the transform's input
// ---------------------------------------------------------------------------

/// One abscissa and its ordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub f: f64,
}

impl Sample {
    pub fn new(t: f64, f: f64) -> Self {
        Sample { t, f }
    }
}

/// Samples ordered by strictly increasing `t`, at least two of them.
///
/// The only constructor is [`SampleSeries::new`], so every segment a kernel
/// sees has a non-zero positive width.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Validate and wrap a sample sequence.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.len() < 2 {
            return Err(NdftError::DegenerateSampleSeries(
                DegenerateReason::TooFewSamples {
                    count: samples.len(),
                },
            ));
        }
        for (index, pair) in samples.windows(2).enumerate() {
            let (a, b) = (pair[0].t, pair[1].t);
            if b == a {
                return Err(NdftError::DegenerateSampleSeries(
                    DegenerateReason::RepeatedAbscissa { index, t: a },
                ));
            }
            if b < a {
                return Err(NdftError::DegenerateSampleSeries(
                    DegenerateReason::Descending { index },
                ));
            }
        }
        Ok(SampleSeries { samples })
    }

    /// Build from parallel `t` / `f` slices (must be the same length).
    #[cfg(test)]
    pub fn from_columns(t: &[f64], f: &[f64]) -> Result<Self> {
        debug_assert_eq!(t.len(), f.len());
        Self::new(
            t.iter()
                .zip(f)
                .map(|(&t, &f)| Sample::new(t, f))
                .collect(),
        )
    }

    #[cfg(test)]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn first(&self) -> Sample {
        self.samples[0]
    }

    pub fn last(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }

    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.t)
    }

    /// Consecutive `(left, right)` sample pairs, `N - 1` of them.
    pub fn segments(&self) -> impl Iterator<Item = (Sample, Sample)> + '_ {
        self.samples.windows(2).map(|w| (w[0], w[1]))
    }

    /// Same abscissas, every amplitude multiplied by `c`.
    #[cfg(test)]
    pub fn scaled(&self, c: f64) -> SampleSeries {
        SampleSeries {
            samples: self
                .samples
                .iter()
                .map(|s| Sample::new(s.t, s.f * c))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// FrequencyGrid – where the transform is evaluated
// ---------------------------------------------------------------------------

/// Ordered, finite, non-zero angular frequencies whose squares are non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    values: Vec<f64>,
}

impl FrequencyGrid {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(NdftError::NonFiniteFrequency { index, value });
            }
            if value == 0.0 {
                return Err(NdftError::ZeroFrequency { index });
            }
            // every term divides by w²
            if value * value == 0.0 {
                return Err(NdftError::FrequencyUnderflow { index, value });
            }
        }
        Ok(FrequencyGrid { values })
    }

    /// The default grid: `w[i] = 1 / t[i]`, then the whole sequence reversed.
    pub fn reciprocal(series: &SampleSeries) -> Result<Self> {
        if let Some(index) = series.times().position(|t| t == 0.0) {
            return Err(NdftError::ZeroAbscissa { index });
        }
        let mut values: Vec<f64> = series.times().map(|t| 1.0 / t).collect();
        values.reverse();
        Self::new(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SpectrumResult – one kernel's output
// ---------------------------------------------------------------------------

/// Which half of the nDFT a spectrum holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformKind {
    Cosine,
    Sine,
}

impl TransformKind {
    pub const ALL: [TransformKind; 2] = [TransformKind::Cosine, TransformKind::Sine];

    /// Replacement for the input file's extension.
    pub fn file_suffix(self) -> &'static str {
        match self {
            TransformKind::Cosine => "_DCT.pef",
            TransformKind::Sine => "_DST.pef",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKind::Cosine => write!(f, "nDCT"),
            TransformKind::Sine => write!(f, "nDST"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    pub frequency: f64,
    pub value: f64,
}

/// `(w[j], value[j])` pairs in the order of the grid they were computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumResult {
    pub kind: TransformKind,
    pub points: Vec<SpectrumPoint>,
}

impl SpectrumResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Reinterpret the spectrum as a new sample series (frequency as `t`).
    ///
    /// The transform-of-transform check feeds a kernel its own output this way.
    #[cfg(test)]
    pub fn to_series(&self) -> Result<SampleSeries> {
        SampleSeries::new(
            self.points
                .iter()
                .map(|p| Sample::new(p.frequency, p.value))
                .collect(),
        )
    }
}
