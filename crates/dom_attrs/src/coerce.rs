//! Value coercion for unknown attributes.
//!
//! `policy` is the decision table: one row per `ValueCategory`, naming the DOM
//! action and the diagnostic family (if any). `coerce` turns a row into a
//! concrete decision for one value.
//!
//! | category | action       | diagnostic          |
//! |----------|--------------|---------------------|
//! | absent   | remove       | -                   |
//! | boolean  | remove       | non-boolean         |
//! | number   | write string | -                   |
//! | nan      | write "NaN"  | nan                 |
//! | infinity | write string | -                   |
//! | string   | write as-is  | -                   |
//! | object   | write string | -                   |
//! | symbol   | remove       | invalid value       |
//! | function | remove       | invalid value       |

use crate::diagnostics::{DiagnosticEvent, DiagnosticKind};
use crate::number::number_to_string;
use crate::value::{LogicalValue, NumberKind, ValueCategory, classify};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Write(String),
    Remove,
}

impl Decision {
    pub fn is_remove(&self) -> bool {
        matches!(self, Decision::Remove)
    }

    pub fn as_write(&self) -> Option<&str> {
        match self {
            Decision::Write(value) => Some(value),
            Decision::Remove => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Remove,
    WriteString,
}

/// Diagnostic families raised by the value table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueWarning {
    NonBoolean,
    NaN,
    InvalidValue,
}

impl ValueWarning {
    pub const fn kind(self) -> DiagnosticKind {
        match self {
            Self::NonBoolean => DiagnosticKind::NonBooleanAttribute,
            Self::NaN => DiagnosticKind::NaNValue,
            Self::InvalidValue => DiagnosticKind::InvalidValue,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub action: Action,
    pub diagnostic: Option<ValueWarning>,
}

pub const fn policy(category: ValueCategory) -> Policy {
    let (action, diagnostic) = match category {
        ValueCategory::Absent => (Action::Remove, None),
        ValueCategory::Boolean => (Action::Remove, Some(ValueWarning::NonBoolean)),
        ValueCategory::Number(NumberKind::NaN) => (Action::WriteString, Some(ValueWarning::NaN)),
        ValueCategory::Number(_) => (Action::WriteString, None),
        ValueCategory::String => (Action::WriteString, None),
        ValueCategory::Object => (Action::WriteString, None),
        ValueCategory::Symbol | ValueCategory::Function => {
            (Action::Remove, Some(ValueWarning::InvalidValue))
        }
    };
    Policy { action, diagnostic }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coercion {
    pub decision: Decision,
    pub diagnostic: Option<DiagnosticEvent>,
}

/// Coerce `value` for attribute `name` on a `<tag>` element.
///
/// `name` is the authored name; diagnostics quote it as written.
pub fn coerce(name: &str, tag: &str, value: &LogicalValue) -> Coercion {
    let category = classify(value);
    let row = policy(category);

    let decision = match row.action {
        Action::Remove => Decision::Remove,
        Action::WriteString => Decision::Write(stringify(value)),
    };

    let diagnostic = row.diagnostic.map(|warning| match warning {
        ValueWarning::NonBoolean => {
            let flag = matches!(value, LogicalValue::Bool(true));
            DiagnosticEvent::non_boolean(name, flag)
        }
        ValueWarning::NaN => DiagnosticEvent::nan(name),
        ValueWarning::InvalidValue => DiagnosticEvent::invalid_value(name, tag),
    });

    log::trace!(
        target: "dom_attrs.reconcile",
        "coerce {name}: {category} -> {decision:?}"
    );

    Coercion {
        decision,
        diagnostic,
    }
}

fn stringify(value: &LogicalValue) -> String {
    match value {
        LogicalValue::String(s) => s.clone(),
        LogicalValue::Number(n) => number_to_string(*n),
        LogicalValue::Object(obj) => obj.to_dom_string(),
        // Only string, number and object categories have a write policy.
        _ => String::new(),
    }
}
