//! Condition catalog - closed mapping from abstract condition identifiers
//! to protocol operator tokens and rendering shapes
//!
//! Adding a condition is a data change in [`CATALOG`], not a new code path.

use crate::error::{QueryError, QueryResult};

/// How a condition renders into a filter sub-expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// `<field> <op> <value>`
    Infix(&'static str),
    /// `<op>(<field>, <value>)`
    Function(&'static str),
    /// `<field> <op> null`
    NullCheck(&'static str),
    /// `length(<field>) <op> 0`
    LengthCheck(&'static str),
}

impl Rendering {
    /// Protocol operator token for this rendering
    pub fn token(&self) -> &'static str {
        match self {
            Rendering::Infix(op)
            | Rendering::Function(op)
            | Rendering::NullCheck(op)
            | Rendering::LengthCheck(op) => op,
        }
    }

    /// Whether the operand's search value participates in the rendered
    /// expression. Null checks and length checks ignore it.
    pub fn requires_value(&self) -> bool {
        matches!(self, Rendering::Infix(_) | Rendering::Function(_))
    }
}

/// The closed set of supported condition identifiers and their rendering rules
const CATALOG: &[(&str, Rendering)] = &[
    ("contains", Rendering::Function("contains")),
    ("startsWith", Rendering::Function("startswith")),
    ("endsWith", Rendering::Function("endswith")),
    ("equals", Rendering::Infix("eq")),
    ("doesNotEqual", Rendering::Infix("ne")),
    ("doesNotContain", Rendering::Function("not contains")),
    ("greaterThan", Rendering::Infix("gt")),
    ("lessThan", Rendering::Infix("lt")),
    ("greaterThanOrEqualTo", Rendering::Infix("ge")),
    ("lessThanOrEqualTo", Rendering::Infix("le")),
    ("empty", Rendering::LengthCheck("eq")),
    ("notEmpty", Rendering::LengthCheck("gt")),
    ("null", Rendering::NullCheck("eq")),
    ("notNull", Rendering::NullCheck("ne")),
];

/// Look up the rendering rule for a condition identifier
///
/// Unknown identifiers are a contract violation reported to the caller,
/// never a silently empty sub-expression.
pub fn operator_token(condition: &str) -> QueryResult<Rendering> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == condition)
        .map(|(_, rendering)| *rendering)
        .ok_or_else(|| QueryError::UnknownCondition(condition.to_string()))
}
