//! Text sentiment scoring for the happiness index.
//!
//! Normalizes social-media text, runs two polarity collaborators plus a
//! keyword-bucket heuristic and an emoji scorer, and blends the four into a
//! single 0–100 happiness score with a label and confidence.

pub mod error;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use error::CollaboratorFailure;
pub use models::{CompoundModel, PatternModel, Polarity, PolarityModel, ValenceModel};
pub use normalize::normalize;
pub use pipeline::SentimentAnalyzer;
pub use scorer::{context_happiness, score_context, score_emoji};
pub use types::{BucketCounts, ContextResult, Label, Method, ScoredText, TextFeatures};
