//! Logical attribute values and their classification.
//!
//! A `LogicalValue` is whatever application code handed to an element for an
//! unknown attribute. It is untyped at the boundary, so the first thing the
//! pipeline does is put it into exactly one `ValueCategory`.

use std::fmt;
use std::rc::Rc;

/// Default string form of an object without its own conversion.
pub const DEFAULT_OBJECT_STRING: &str = "[object Object]";

/// String-conversion capability for object values.
///
/// Implementations must return a plain string. A panic raised here is not
/// caught by this crate.
pub trait ToDomString {
    fn to_dom_string(&self) -> String;
}

impl<F> ToDomString for F
where
    F: Fn() -> String,
{
    fn to_dom_string(&self) -> String {
        self()
    }
}

/// Opaque symbol. Two symbols are the same value only if they share identity.
#[derive(Clone)]
pub struct Symbol(Rc<Option<String>>);

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Symbol(Rc::new(description.map(str::to_owned)))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// Opaque function reference, identified by allocation.
#[derive(Clone)]
pub struct FunctionRef(Rc<Option<String>>);

impl FunctionRef {
    pub fn new(name: Option<&str>) -> Self {
        FunctionRef(Rc::new(name.map(str::to_owned)))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn ptr_eq(&self, other: &FunctionRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}()", self.name().unwrap_or(""))
    }
}

struct ObjectInner {
    to_string: Option<Box<dyn ToDomString>>,
}

/// Object value, optionally carrying its own string conversion.
#[derive(Clone)]
pub struct ObjectValue(Rc<ObjectInner>);

impl ObjectValue {
    /// A plain object with no custom conversion.
    pub fn plain() -> Self {
        ObjectValue(Rc::new(ObjectInner { to_string: None }))
    }

    pub fn with_to_string<T>(conversion: T) -> Self
    where
        T: ToDomString + 'static,
    {
        ObjectValue(Rc::new(ObjectInner {
            to_string: Some(Box::new(conversion)),
        }))
    }

    pub fn has_custom_to_string(&self) -> bool {
        self.0.to_string.is_some()
    }

    /// Invoke the custom conversion if present, else the default form.
    pub fn to_dom_string(&self) -> String {
        match &self.0.to_string {
            Some(conversion) => conversion.to_dom_string(),
            None => DEFAULT_OBJECT_STRING.to_string(),
        }
    }

    pub fn ptr_eq(&self, other: &ObjectValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_custom_to_string() {
            f.write_str("Object { toString }")
        } else {
            f.write_str("Object {}")
        }
    }
}

#[derive(Clone, Debug)]
pub enum LogicalValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Function(FunctionRef),
    Object(ObjectValue),
}

impl LogicalValue {
    pub fn string(value: impl Into<String>) -> Self {
        LogicalValue::String(value.into())
    }

    pub fn classify(&self) -> ValueCategory {
        classify(self)
    }
}

impl From<bool> for LogicalValue {
    fn from(value: bool) -> Self {
        LogicalValue::Bool(value)
    }
}

impl From<f64> for LogicalValue {
    fn from(value: f64) -> Self {
        LogicalValue::Number(value)
    }
}

impl From<i32> for LogicalValue {
    fn from(value: i32) -> Self {
        LogicalValue::Number(f64::from(value))
    }
}

impl From<&str> for LogicalValue {
    fn from(value: &str) -> Self {
        LogicalValue::String(value.to_string())
    }
}

impl From<String> for LogicalValue {
    fn from(value: String) -> Self {
        LogicalValue::String(value)
    }
}

impl<T: Into<LogicalValue>> From<Option<T>> for LogicalValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogicalValue::Null, Into::into)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Finite,
    NaN,
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    Absent,
    Boolean,
    Number(NumberKind),
    String,
    Symbol,
    Function,
    Object,
}

impl ValueCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Boolean => "boolean",
            Self::Number(NumberKind::Finite) => "number",
            Self::Number(NumberKind::NaN) => "nan",
            Self::Number(NumberKind::Infinite) => "infinity",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Function => "function",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assign a value to exactly one category. Pure and total.
pub fn classify(value: &LogicalValue) -> ValueCategory {
    match value {
        LogicalValue::Undefined | LogicalValue::Null => ValueCategory::Absent,
        LogicalValue::Bool(_) => ValueCategory::Boolean,
        LogicalValue::Number(n) if n.is_nan() => ValueCategory::Number(NumberKind::NaN),
        LogicalValue::Number(n) if n.is_infinite() => ValueCategory::Number(NumberKind::Infinite),
        LogicalValue::Number(_) => ValueCategory::Number(NumberKind::Finite),
        LogicalValue::String(_) => ValueCategory::String,
        LogicalValue::Symbol(_) => ValueCategory::Symbol,
        LogicalValue::Function(_) => ValueCategory::Function,
        LogicalValue::Object(_) => ValueCategory::Object,
    }
}

/// SameValue comparison: NaN equals NaN, +0 and -0 differ, and reference
/// values compare by identity.
pub fn same_value(a: &LogicalValue, b: &LogicalValue) -> bool {
    match (a, b) {
        (LogicalValue::Undefined, LogicalValue::Undefined) => true,
        (LogicalValue::Null, LogicalValue::Null) => true,
        (LogicalValue::Bool(x), LogicalValue::Bool(y)) => x == y,
        (LogicalValue::Number(x), LogicalValue::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                return true;
            }
            x == y && x.is_sign_negative() == y.is_sign_negative()
        }
        (LogicalValue::String(x), LogicalValue::String(y)) => x == y,
        (LogicalValue::Symbol(x), LogicalValue::Symbol(y)) => x.ptr_eq(y),
        (LogicalValue::Function(x), LogicalValue::Function(y)) => x.ptr_eq(y),
        (LogicalValue::Object(x), LogicalValue::Object(y)) => x.ptr_eq(y),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_undefined_are_absent() {
        assert_eq!(classify(&LogicalValue::Null), ValueCategory::Absent);
        assert_eq!(classify(&LogicalValue::Undefined), ValueCategory::Absent);
    }

    #[test]
    fn numbers_split_by_kind() {
        assert_eq!(
            classify(&LogicalValue::Number(9000.99)),
            ValueCategory::Number(NumberKind::Finite)
        );
        assert_eq!(
            classify(&LogicalValue::Number(f64::NAN)),
            ValueCategory::Number(NumberKind::NaN)
        );
        assert_eq!(
            classify(&LogicalValue::Number(f64::NEG_INFINITY)),
            ValueCategory::Number(NumberKind::Infinite)
        );
    }

    #[test]
    fn reference_values_classify_by_kind() {
        assert_eq!(
            classify(&LogicalValue::Symbol(Symbol::new(Some("foo")))),
            ValueCategory::Symbol
        );
        assert_eq!(
            classify(&LogicalValue::Function(FunctionRef::new(None))),
            ValueCategory::Function
        );
        assert_eq!(
            classify(&LogicalValue::Object(ObjectValue::plain())),
            ValueCategory::Object
        );
        assert_eq!(classify(&LogicalValue::from("")), ValueCategory::String);
        assert_eq!(classify(&LogicalValue::from(false)), ValueCategory::Boolean);
    }

    #[test]
    fn object_conversion_falls_back_to_default() {
        assert_eq!(ObjectValue::plain().to_dom_string(), "[object Object]");
        let custom = ObjectValue::with_to_string(|| "lol".to_string());
        assert!(custom.has_custom_to_string());
        assert_eq!(custom.to_dom_string(), "lol");
    }

    #[test]
    fn same_value_follows_identity_and_nan_rules() {
        let nan = LogicalValue::Number(f64::NAN);
        assert!(same_value(&nan, &nan.clone()));
        assert!(!same_value(
            &LogicalValue::Number(0.0),
            &LogicalValue::Number(-0.0)
        ));
        assert!(!same_value(&LogicalValue::Null, &LogicalValue::Undefined));

        let sym = Symbol::new(Some("foo"));
        assert!(same_value(
            &LogicalValue::Symbol(sym.clone()),
            &LogicalValue::Symbol(sym)
        ));
        assert!(!same_value(
            &LogicalValue::Symbol(Symbol::new(Some("foo"))),
            &LogicalValue::Symbol(Symbol::new(Some("foo")))
        ));

        let obj = ObjectValue::plain();
        assert!(same_value(
            &LogicalValue::Object(obj.clone()),
            &LogicalValue::Object(obj)
        ));
        assert!(!same_value(
            &LogicalValue::Object(ObjectValue::plain()),
            &LogicalValue::Object(ObjectValue::plain())
        ));
    }

    #[test]
    fn option_converts_none_to_null() {
        let v: LogicalValue = Option::<&str>::None.into();
        assert!(matches!(v, LogicalValue::Null));
        let v: LogicalValue = Some("x").into();
        assert!(matches!(v, LogicalValue::String(ref s) if s == "x"));
    }
}
