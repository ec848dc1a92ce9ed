//! Post collectors feeding the happiness index.
//!
//! Reddit and Mastodon are read through their public JSON endpoints. Trends,
//! YouTube, news, Twitter and forums have no usable free API and are served
//! from fixed pools of representative posts. [`Ingestor`] runs one source per
//! cycle through the analyzer into the index.

mod client;
mod error;
mod ingest;
mod mastodon;
mod pools;
mod reddit;
mod types;

pub use client::{CollectorClient, Endpoints};
pub use error::CollectorError;
pub use ingest::{to_record, CycleReport, Ingestor, DISPLAY_TEXT_CHARS};
pub use types::CollectedPost;
