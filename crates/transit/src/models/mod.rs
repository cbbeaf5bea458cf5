//! Transit data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::{Route, TransitNetwork, TransitStop};
pub use types::{Result, RouteStats, StopStats, TransitError};
