/// Data layer: peak lists, ppm matching and export.
///
/// Architecture:
/// ```text
///  pasted sample text        pasted background text
///        │                          │
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  parser   │  Vec<Peak>  │  parser   │  Vec<f64>
///   └──────────┘              └──────────┘
///        │                          │
///        └────────────┬─────────────┘
///                     ▼
///   ┌──────────────────────────────┐
///   │ filter + matcher (ppm window) │  → FilterOutcome
///   └──────────────────────────────┘
///                     │
///                     ▼
///   ┌──────────┐
///   │  export   │  retained peaks → filtered_peaks.csv
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod matcher;
pub mod model;
pub mod parser;
