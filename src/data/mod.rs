/// Data layer: core types, loading, and writing.
///
/// Architecture:
/// ```text
///  signal.txt  (t<TAB>f(t))      omega.txt (optional)
///        │                            │
///        ▼                            ▼
///   ┌──────────┐               ┌──────────┐
///   │  loader   │ → SampleSeries │  loader   │ → FrequencyGrid
///   └──────────┘               └──────────┘
///        │                            │
///        └──────────► transform ◄─────┘
///                        │
///                        ▼
///                  SpectrumResult ×2
///                        │
///                        ▼
///   ┌──────────┐
///   │  writer   │  signal_DCT.pef / signal_DST.pef
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
