/// Data layer: core table type and delimited-text loading.
///
/// Architecture:
/// ```text
///  .csv (comma or whitespace delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → NumericTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ NumericTable  │  column-major f64 storage
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ datasets  │  named column views per exam file
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
