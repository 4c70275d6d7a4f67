pub mod filter;
pub mod record;

pub use filter::{AlbumFilter, ExplicitFilter, FilterSelection};
pub use record::{LifecycleRecord, REQUIRED_COLUMNS};
