//! Processor property descriptors
//!
//! Names and defaults follow the host's property sheet: `Match Type`,
//! `Match Threshold`, `Match Against` and `Match Input`.

use fuzzmatch_core::AlgorithmKind;

use crate::error::{Error, Result};
use crate::expression::is_expression;

/// Default algorithm key
pub const DEFAULT_MATCH_TYPE: &str = "ratio";

/// Default threshold
pub const DEFAULT_THRESHOLD: &str = "80";

/// How a literal property value is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Must contain a non-whitespace character
    NonBlank,
    /// Integer in `0..=100`
    Percentage,
    /// One of the algorithm keys
    MatchType,
}

impl Validator {
    fn check(&self, property: &str, value: &str) -> Result<()> {
        let valid = match self {
            Self::NonBlank => !value.trim().is_empty(),
            Self::Percentage => matches!(value.trim().parse::<i64>(), Ok(n) if (0..=100).contains(&n)),
            Self::MatchType => value.parse::<AlgorithmKind>().is_ok(),
        };

        if valid {
            Ok(())
        } else {
            Err(Error::Config(format!("'{}' is not a valid value for {}", value, property)))
        }
    }
}

/// A configurable processor property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub default_value: Option<&'static str>,
    /// Whether `${attr}` references are resolved per record
    pub expression_language: bool,
    pub validator: Validator,
}

impl PropertyDescriptor {
    /// Allowed literal values, if the property is an enumeration
    pub fn allowable_values(&self) -> Option<Vec<&'static str>> {
        match self.validator {
            Validator::MatchType => Some(AlgorithmKind::keys()),
            _ => None,
        }
    }

    /// Check a configured value (falling back to the default).
    ///
    /// Expression values are only checked once resolved for a record.
    pub fn validate(&self, value: Option<&str>) -> Result<()> {
        match value.or(self.default_value) {
            None if self.required => Err(Error::MissingProperty(self.name.to_string())),
            None => Ok(()),
            Some(v) if self.expression_language && is_expression(v) => Ok(()),
            Some(v) => self.validator.check(self.name, v),
        }
    }
}

pub const MATCH_TYPE: PropertyDescriptor = PropertyDescriptor {
    name: "Match Type",
    description: "The matching algorithm to apply to the value.",
    required: true,
    default_value: Some(DEFAULT_MATCH_TYPE),
    expression_language: false,
    validator: Validator::MatchType,
};

pub const MATCH_THRESHOLD: PropertyDescriptor = PropertyDescriptor {
    name: "Match Threshold",
    description: "The lowest ratio that should be considered a match.",
    required: true,
    default_value: Some(DEFAULT_THRESHOLD),
    expression_language: true,
    validator: Validator::Percentage,
};

pub const MATCH_AGAINST: PropertyDescriptor = PropertyDescriptor {
    name: "Match Against",
    description: "The string to compare the input to.",
    required: true,
    default_value: None,
    expression_language: true,
    validator: Validator::NonBlank,
};

pub const MATCH_INPUT: PropertyDescriptor = PropertyDescriptor {
    name: "Match Input",
    description: "The input string to compare.",
    required: true,
    default_value: None,
    expression_language: true,
    validator: Validator::NonBlank,
};

/// Supported properties, in display order
pub const ALL: [PropertyDescriptor; 4] = [MATCH_TYPE, MATCH_THRESHOLD, MATCH_AGAINST, MATCH_INPUT];
