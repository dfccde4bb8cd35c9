/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, distinct label index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  label + confidence predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  summary  │  metrics and per-label aggregates over the view
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
