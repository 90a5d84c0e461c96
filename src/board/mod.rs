// Pure job board engine: filtering, ordering, windowing and aggregation.
// Nothing here holds state between calls; callers own the job list and
// the view criteria.

pub mod facets;
pub mod filter;
pub mod sort;
pub mod stats;
pub mod view;

pub use facets::Facets;
pub use filter::{SalaryRange, filter_jobs};
pub use sort::{SortKey, sort_jobs};
pub use stats::{ChartSpec, Statistics};
pub use view::{JobWindow, PAGE_SIZE, ViewState, ViewUpdate, window};
