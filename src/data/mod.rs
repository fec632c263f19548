/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   remote CSV (HTTPS)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<PatientRecord>, derived column facts
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Outcome predicate → row indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
