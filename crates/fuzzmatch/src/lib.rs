//! fuzzmatch record processor
//!
//! Wraps [`fuzzmatch_core`] for a record-processing host: properties are
//! resolved against each record's attributes, the pair is scored, the score
//! is written to the `fuzzy.match.ratio` attribute, and the record is routed
//! to `matched` or `unmatched`.
//!
//! # Example
//!
//! ```rust
//! use fuzzmatch::{FlowRecord, FuzzyMatchProcessor, ProcessorConfig, Record, Relationship};
//!
//! let config = ProcessorConfig::new("${team}", "New York Mets")
//!     .with_match_type("tokenSetRatio")
//!     .with_threshold("80");
//! let processor = FuzzyMatchProcessor::new(config).unwrap();
//!
//! let record = FlowRecord::new("rec-1").with_attribute("team", "mets new york");
//! let routed = processor.on_trigger(record).unwrap();
//!
//! assert_eq!(routed.relationship, Relationship::Matched);
//! assert_eq!(routed.record.attribute("fuzzy.match.ratio"), Some("100"));
//! ```

pub mod config;
pub mod error;
pub mod expression;
pub mod processor;
pub mod properties;
pub mod record;
pub mod tracing;

pub use config::ProcessorConfig;
pub use error::{Error, Result};
pub use processor::{FuzzyMatchProcessor, Relationship, Routed, RATIO_ATTRIBUTE};
pub use properties::PropertyDescriptor;
pub use record::{FlowRecord, Record};

// Re-export the scoring core
pub use fuzzmatch_core::{AlgorithmKind, MatchError, MatchRequest, MatchResult};
