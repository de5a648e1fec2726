// healthdq-core/src/infrastructure/config/type_spec.rs
//
// Free-form "column:type" text typed by the analyst, e.g. "age:int, dob=date".

use regex::Regex;
use tracing::debug;

use crate::domain::quality::TypeExpectations;
use crate::infrastructure::error::InfrastructureError;

pub struct TypeSpecParser {
    separator: Regex,
    pair: Regex,
}

impl TypeSpecParser {
    pub fn new() -> Result<Self, InfrastructureError> {
        Ok(Self {
            separator: Regex::new(r"[,;\n]")?,
            pair: Regex::new(r"^\s*([^:=]*[^:=\s])\s*[:=]\s*(\S(?:.*\S)?)\s*$")?,
        })
    }

    /// Splits `text` into (column, tag) pairs. Pairs without a separator, or with an
    /// empty side, are dropped.
    pub fn parse(&self, text: &str) -> Vec<(String, String)> {
        self.separator
            .split(text)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .filter_map(|chunk| match self.pair.captures(chunk) {
                Some(caps) => Some((caps[1].trim().to_string(), caps[2].to_string())),
                None => {
                    debug!(chunk, "Dropping malformed type pair");
                    None
                }
            })
            .collect()
    }

    /// Parses `text` on top of existing expectations; later pairs win.
    pub fn extend(&self, expectations: &mut TypeExpectations, text: &str) {
        expectations.extend(self.parse(text));
    }
}
