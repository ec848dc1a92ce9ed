//! In-memory happiness aggregate.
//!
//! [`HappinessIndex`] owns the rolling scores, per-source counters, recent
//! posts, synthetic region values and their bounded histories. Every write
//! goes through one update sequence; reads copy snapshots out.

pub mod bounded;
pub mod error;
pub mod index;
pub mod region;
pub mod snapshot;
pub mod state;

pub use bounded::BoundedQueue;
pub use error::IndexError;
pub use index::{HappinessIndex, TREND_LEN};
pub use region::{synthesize, FixedJitter, Jitter, RegionReading, RngJitter, REGIONS};
pub use snapshot::{
    EnrichedPost, PostRecord, RegionPoint, RegionTimeline, StatusSnapshot, TimeSeriesPoint,
};
pub use state::{AggregateState, IndexLimits, INITIAL_HAPPINESS};
