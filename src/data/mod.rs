/// Data layer: normalized records, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  finalDataSet.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  trim headers, coerce currency / counts, bucket AUM
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<RiaRecord>, state + AUM range choice lists
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  state / account type / AUM range → visible indices
///   └──────────┘
///        │
///        ├──▶ aggregate   metrics + pie slices
///        └──▶ sort        table ordering, top-by-AUM view
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
