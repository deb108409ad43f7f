//! `$filter` fragment compilation
//!
//! Each operand renders through the condition catalog; operands inside a
//! group join on the group's own logic operator, and rendered groups always
//! join on `and` regardless of their internal operator. That fixed AND is a
//! protocol-level choice, not configurable per group.

use serde_json::Value;

use crate::condition::{operator_token, Rendering};
use crate::error::QueryResult;
use crate::types::{FilterGroup, FilterLogic, FilterOperand, QuerySpec};

/// Format a search value for the wire
///
/// Numeric values render bare; everything else renders single-quoted. The
/// protocol defines no escape for quote characters inside text, so they
/// pass through as-is — a known limitation of the backend's query grammar.
fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        other => format!("'{}'", other),
    }
}

/// Render one operand into a filter sub-expression
fn render_operand(operand: &FilterOperand) -> QueryResult<String> {
    let field = &operand.field_name;
    let expr = match operator_token(&operand.condition)? {
        Rendering::Infix(op) => {
            format!("{} {} {}", field, op, format_value(&operand.search_val))
        }
        Rendering::Function(op) => {
            format!("{}({}, {})", op, field, format_value(&operand.search_val))
        }
        Rendering::NullCheck(op) => format!("{} {} null", field, op),
        Rendering::LengthCheck(op) => format!("length({}) {} 0", field, op),
    };
    Ok(expr)
}

/// Compile filter groups into a single filter expression
///
/// Empty input compiles to the empty string so the assembler can omit the
/// fragment. An unknown condition identifier anywhere aborts the whole
/// compilation; no partial expression is ever returned.
pub(crate) fn compile(groups: &[FilterGroup]) -> QueryResult<String> {
    let mut rendered = Vec::new();

    for group in groups {
        if group.operands.is_empty() {
            continue;
        }
        let operands = group
            .operands
            .iter()
            .map(render_operand)
            .collect::<QueryResult<Vec<String>>>()?;
        rendered.push(operands.join(&format!(" {} ", group.operator)));
    }

    Ok(rendered.join(&format!(" {} ", FilterLogic::And)))
}

impl FilterGroup {
    /// New group with the given intra-group operator
    pub fn new(operator: FilterLogic) -> Self {
        Self {
            operator,
            operands: Vec::new(),
        }
    }

    /// Group whose operands must all match
    pub fn all() -> Self {
        Self::new(FilterLogic::And)
    }

    /// Group where any one operand may match
    pub fn any() -> Self {
        Self::new(FilterLogic::Or)
    }

    /// Add an operand by raw condition identifier
    ///
    /// Escape hatch for descriptors arriving from a UI layer; the name is
    /// validated against the catalog at compile time, not here.
    pub fn condition<T: Into<Value>>(mut self, field: &str, condition: &str, value: T) -> Self {
        self.operands.push(FilterOperand::new(field, condition, value));
        self
    }

    /// Add a substring-match operand
    pub fn contains<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "contains", value)
    }

    /// Add a prefix-match operand
    pub fn starts_with<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "startsWith", value)
    }

    /// Add a suffix-match operand
    pub fn ends_with<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "endsWith", value)
    }

    /// Add an equality operand
    pub fn eq<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "equals", value)
    }

    /// Add an inequality operand
    pub fn ne<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "doesNotEqual", value)
    }

    /// Add a negated substring-match operand
    pub fn not_contains<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "doesNotContain", value)
    }

    /// Add a greater-than operand
    pub fn gt<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "greaterThan", value)
    }

    /// Add a less-than operand
    pub fn lt<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "lessThan", value)
    }

    /// Add a greater-or-equal operand
    pub fn gte<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "greaterThanOrEqualTo", value)
    }

    /// Add a less-or-equal operand
    pub fn lte<T: Into<Value>>(self, field: &str, value: T) -> Self {
        self.condition(field, "lessThanOrEqualTo", value)
    }

    /// Add an is-empty operand (`length(field) eq 0`)
    pub fn empty(self, field: &str) -> Self {
        self.condition(field, "empty", Value::Null)
    }

    /// Add an is-not-empty operand (`length(field) gt 0`)
    pub fn not_empty(self, field: &str) -> Self {
        self.condition(field, "notEmpty", Value::Null)
    }

    /// Add an is-null operand
    pub fn null(self, field: &str) -> Self {
        self.condition(field, "null", Value::Null)
    }

    /// Add an is-not-null operand
    pub fn not_null(self, field: &str) -> Self {
        self.condition(field, "notNull", Value::Null)
    }
}

impl QuerySpec {
    /// Append one filter group; groups combine with logical AND
    pub fn filter_group(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }
}
