//! Requirement string parser
//!
//! Splits strings such as `foo>=1.2.0<2.0` into the module name and its
//! ordered constraints. Operators are maximal runs of `<`, `=`, `>` and `!`.
//! A trailing operator without a version is dropped, as older tooling did.

use std::str::FromStr;

use regex::Regex;
use tracing::debug;

use crate::requirement::types::{Constraint, Operator, Requirement};
use crate::version::loose::Version;

/// Error type for requirement parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The requirement does not start with a module name
    #[error("Module name is missing in requirement '{0}'")]
    MissingModuleName(String),

    /// An operator run is not one of `<`, `<=`, `>`, `>=`, `==`, `!=`
    #[error("Unknown operator '{operator}' in requirement '{requirement}'")]
    UnknownOperator {
        operator: String,
        requirement: String,
    },

    /// An operator is directly followed by another operator
    #[error("Operator '{operator}' has no version in requirement '{requirement}'")]
    MissingVersion {
        operator: String,
        requirement: String,
    },

    /// A constraint version does not start with a number
    #[error("Invalid version '{version}' in requirement '{requirement}'")]
    InvalidVersion {
        version: String,
        requirement: String,
    },
}

enum Token<'a> {
    Operator(&'a str),
    Text(&'a str),
}

/// Parser for requirement strings
pub struct RequirementParser {
    operator_re: Regex,
}

impl RequirementParser {
    pub fn new() -> Self {
        Self {
            operator_re: Regex::new(r"[<>=!]+").unwrap(),
        }
    }

    pub fn parse(&self, input: &str) -> Result<Requirement, ParseError> {
        let input = input.trim();
        let tokens = self.tokenize(input);
        let mut tokens = tokens.into_iter();

        let module_name = match tokens.next() {
            Some(Token::Text(name)) => name.to_string(),
            _ => return Err(ParseError::MissingModuleName(input.to_string())),
        };

        let mut constraints = Vec::new();
        let mut pending: Option<Operator> = None;

        for token in tokens {
            match (token, pending.take()) {
                (Token::Operator(op), None) => {
                    let operator =
                        Operator::from_str(op).map_err(|_| ParseError::UnknownOperator {
                            operator: op.to_string(),
                            requirement: input.to_string(),
                        })?;
                    pending = Some(operator);
                }
                (Token::Text(text), Some(operator)) => {
                    let version =
                        Version::parse(text).ok_or_else(|| ParseError::InvalidVersion {
                            version: text.to_string(),
                            requirement: input.to_string(),
                        })?;
                    constraints.push(Constraint::new(operator, version));
                }
                (Token::Operator(_), Some(operator)) => {
                    return Err(ParseError::MissingVersion {
                        operator: operator.to_string(),
                        requirement: input.to_string(),
                    });
                }
                (Token::Text(text), None) => {
                    return Err(ParseError::InvalidVersion {
                        version: text.to_string(),
                        requirement: input.to_string(),
                    });
                }
            }
        }

        if let Some(operator) = pending {
            debug!(
                "Ignoring trailing operator '{}' in requirement '{}'",
                operator, input
            );
        }

        Ok(Requirement {
            module_name,
            constraints,
        })
    }

    fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for m in self.operator_re.find_iter(input) {
            push_text(&mut tokens, &input[last_end..m.start()]);
            tokens.push(Token::Operator(m.as_str()));
            last_end = m.end();
        }
        push_text(&mut tokens, &input[last_end..]);

        tokens
    }
}

impl Default for RequirementParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Commas and whitespace only separate constraints
fn push_text<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    let text = text.trim_matches(|c: char| c == ',' || c.is_whitespace());
    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
}

/// Parse a requirement string with a fresh parser
pub fn parse_requirement(input: &str) -> Result<Requirement, ParseError> {
    RequirementParser::new().parse(input)
}
