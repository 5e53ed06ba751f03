//! Text literals for logical values, used by scenario files and fixtures.
//!
//! Grammar (exact match, case-sensitive):
//! `null`, `undefined`, `true`, `false`, `nan`, `infinity`, `-infinity`,
//! `number:<f64>`, `string:<text>`, `object`, `object:<toString result>`,
//! `symbol`, `symbol:<description>`, `function`, `function:<name>`.
//!
//! Every `symbol`/`function`/`object` literal yields a fresh identity.

use std::fmt;

use crate::value::{FunctionRef, LogicalValue, ObjectValue, Symbol};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiteralError {
    UnknownForm(String),
    InvalidNumber(String),
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::UnknownForm(raw) => write!(f, "unknown value literal {raw:?}"),
            LiteralError::InvalidNumber(raw) => write!(f, "invalid number literal {raw:?}"),
        }
    }
}

impl std::error::Error for LiteralError {}

pub fn parse_literal(raw: &str) -> Result<LogicalValue, LiteralError> {
    let value = match raw {
        "null" => LogicalValue::Null,
        "undefined" => LogicalValue::Undefined,
        "true" => LogicalValue::Bool(true),
        "false" => LogicalValue::Bool(false),
        "nan" => LogicalValue::Number(f64::NAN),
        "infinity" => LogicalValue::Number(f64::INFINITY),
        "-infinity" => LogicalValue::Number(f64::NEG_INFINITY),
        "object" => LogicalValue::Object(ObjectValue::plain()),
        "symbol" => LogicalValue::Symbol(Symbol::new(None)),
        "function" => LogicalValue::Function(FunctionRef::new(None)),
        _ => {
            let Some((form, rest)) = raw.split_once(':') else {
                return Err(LiteralError::UnknownForm(raw.to_string()));
            };
            match form {
                "string" => LogicalValue::String(rest.to_string()),
                "number" => {
                    let n = rest
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| LiteralError::InvalidNumber(rest.to_string()))?;
                    LogicalValue::Number(n)
                }
                "object" => {
                    let text = rest.to_string();
                    LogicalValue::Object(ObjectValue::with_to_string(move || text.clone()))
                }
                "symbol" => LogicalValue::Symbol(Symbol::new(Some(rest))),
                "function" => LogicalValue::Function(FunctionRef::new(Some(rest))),
                _ => return Err(LiteralError::UnknownForm(raw.to_string())),
            }
        }
    };
    Ok(value)
}
