//! Fuzzy match processor
//!
//! Resolves the configured properties against each record, scores the pair
//! with [`fuzzmatch_core`], records the score as an attribute and picks the
//! outgoing relationship. Failures are returned to the host, which decides
//! where the record goes.

use std::fmt;

use fuzzmatch_core::{MatchRequest, MatchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ProcessorConfig;
use crate::error::{Error, Result};
use crate::expression::evaluate;
use crate::properties::{self, PropertyDescriptor};
use crate::record::Record;
use crate::tracing::target;

/// Attribute that receives the computed score
pub const RATIO_ATTRIBUTE: &str = "fuzzy.match.ratio";

/// Outgoing relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Matched,
    Unmatched,
}

impl Relationship {
    pub const ALL: [Relationship; 2] = [Self::Matched, Self::Unmatched];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::Unmatched => "unmatched",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Matched => {
                "Records are routed here when the fuzzy match is at or above the threshold."
            }
            Self::Unmatched => "Records are routed here when the fuzzy match is below the threshold.",
        }
    }

    fn for_result(result: &MatchResult) -> Self {
        if result.matched {
            Self::Matched
        } else {
            Self::Unmatched
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scored record and where it should go
#[derive(Debug, Clone, PartialEq)]
pub struct Routed<R> {
    pub relationship: Relationship,
    pub record: R,
    pub result: MatchResult,
}

/// Processor instance bound to one validated configuration
#[derive(Debug, Clone)]
pub struct FuzzyMatchProcessor {
    config: ProcessorConfig,
}

impl FuzzyMatchProcessor {
    /// Validate the configuration and build a processor.
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            match_type = %config.match_type,
            threshold = %config.match_threshold,
            "fuzzy match processor configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn relationships() -> [Relationship; 2] {
        Relationship::ALL
    }

    pub fn properties() -> [PropertyDescriptor; 4] {
        properties::ALL
    }

    /// Resolve properties for one record into a validated request.
    pub fn resolve_request<R: Record + ?Sized>(&self, record: &R) -> Result<MatchRequest> {
        let match_type = self.resolve(&properties::MATCH_TYPE, record)?;
        let threshold = self.resolve(&properties::MATCH_THRESHOLD, record)?;
        let target = self.resolve(&properties::MATCH_AGAINST, record)?;
        let input = self.resolve(&properties::MATCH_INPUT, record)?;

        Ok(MatchRequest::parse(&input, &target, &match_type, &threshold)?)
    }

    /// Score one record, set its ratio attribute and route it.
    pub fn on_trigger<R: Record>(&self, mut record: R) -> Result<Routed<R>> {
        let request = match self.resolve_request(&record) {
            Ok(request) => request,
            Err(e) => {
                warn!(target: target::ROUTING, record = record.id(), error = %e, "fuzzy match failed");
                return Err(e);
            }
        };

        let result = fuzzmatch_core::score(&request);

        record.put_attribute(RATIO_ATTRIBUTE, result.score.to_string());
        info!(
            target: target::PROVENANCE,
            record = record.id(),
            event = "ATTRIBUTES_MODIFIED",
            attribute = RATIO_ATTRIBUTE,
            "record attributes modified"
        );

        let relationship = Relationship::for_result(&result);
        debug!(
            target: target::ROUTING,
            record = record.id(),
            algorithm = %request.algorithm(),
            score = result.score,
            threshold = request.threshold(),
            relationship = %relationship,
            "routed record"
        );

        Ok(Routed {
            relationship,
            record,
            result,
        })
    }

    fn resolve<R: Record + ?Sized>(&self, descriptor: &PropertyDescriptor, record: &R) -> Result<String> {
        let raw = self
            .config
            .value(descriptor)
            .or(descriptor.default_value)
            .ok_or_else(|| Error::MissingProperty(descriptor.name.to_string()))?;

        if descriptor.expression_language {
            Ok(evaluate(raw, record))
        } else {
            Ok(raw.to_string())
        }
    }
}
