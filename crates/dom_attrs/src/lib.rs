//! Reconciliation of unknown/custom DOM attributes.
//!
//! When a rendered element carries an attribute with no dedicated handler,
//! the value supplied by application code goes through this crate:
//!
//! 1. `name::validate` folds the name to its lowercase canonical form.
//! 2. `value::classify` puts the value into one `ValueCategory`.
//! 3. `coerce::coerce` maps it to write-or-remove plus an optional diagnostic.
//! 4. `writer::apply` performs the decision against an `AttributeStore`.
//!
//! Diagnostics are rendered by `diagnostics::DiagnosticEmitter` and handed to
//! a `DiagnosticSink`; the final attribute table never depends on them.
//! `reconcile::Reconciler` drives the whole pipeline from previous/next props.

pub mod coerce;
pub mod config;
pub mod debug;
pub mod diagnostics;
pub mod literal;
pub mod name;
pub mod number;
pub mod reconcile;
pub mod stats;
pub mod value;
pub mod writer;

pub use crate::coerce::{Action, Coercion, Decision, Policy, ValueWarning, coerce, policy};
pub use crate::config::ReconcileConfig;
pub use crate::diagnostics::{
    CallSite, DedupSink, DiagnosticEmitter, DiagnosticEvent, DiagnosticKind, DiagnosticSink,
    LogSink, VecDiagnosticSink,
};
pub use crate::literal::{LiteralError, parse_literal};
pub use crate::name::{NameCheck, validate};
pub use crate::reconcile::{Outcome, Props, Reconciler};
pub use crate::stats::ReconcileStats;
pub use crate::value::{
    FunctionRef, LogicalValue, NumberKind, ObjectValue, Symbol, ToDomString, ValueCategory,
    classify, same_value,
};
pub use crate::writer::{AttributeError, AttributeStore, Element, apply};
