/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  genetics_results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  group by thread → Vec<Series>
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
