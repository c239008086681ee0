//! Requirement layer
//! - types.rs: Requirement, Constraint and Operator values
//! - parser.rs: requirement string parser (`foo>=1.2<2.0`)

pub mod parser;
pub mod types;

pub use parser::{ParseError, RequirementParser, parse_requirement};
pub use types::{Constraint, Operator, Requirement};
