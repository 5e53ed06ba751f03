//! Per-attribute and per-element reconciliation of unknown attributes.
//!
//! The reconciler is handed previous and next prop values by the tree diff
//! and runs, for each attribute:
//! name check -> classify -> coerce -> emit diagnostics -> apply.
//!
//! Contract:
//! - The name-casing diagnostic fires on every pass that carries a
//!   non-canonical name, whether or not the value changed.
//! - A prop whose next value is the same value (SameValue) as its previous
//!   value is otherwise skipped: no DOM access and no value diagnostic.
//! - Props are matched across passes by canonical name. A canonical name
//!   present in the previous props but absent from the next props is removed
//!   before any write of the pass.
//! - When several authored names in one prop set share a canonical name, the
//!   last one wins. Earlier ones only get their casing diagnostic.
//! - Attributes with distinct canonical names are independent; processing
//!   order does not affect the final attribute table.
//! - Host errors from the attribute store propagate unchanged.

use crate::coerce::{Decision, coerce};
use crate::config::ReconcileConfig;
use crate::diagnostics::{CallSite, DiagnosticEmitter, DiagnosticEvent, DiagnosticSink};
use crate::name::validate;
use crate::stats::ReconcileStats;
use crate::value::{LogicalValue, same_value};
use crate::writer::{AttributeError, AttributeStore, apply};

/// Ordered prop list for one element. Later inserts replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct Props {
    entries: Vec<(String, LogicalValue)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<LogicalValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: LogicalValue) {
        match self.entries.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&LogicalValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LogicalValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Written,
    Removed,
}

pub struct Reconciler<'a> {
    emitter: DiagnosticEmitter<'a>,
    stats: ReconcileStats,
}

impl<'a> Reconciler<'a> {
    pub fn new(config: ReconcileConfig, sink: &'a mut dyn DiagnosticSink) -> Self {
        let emitter = if config.emit_diagnostics {
            DiagnosticEmitter::new(sink)
        } else {
            DiagnosticEmitter::disabled(sink)
        };
        Self {
            emitter,
            stats: ReconcileStats::default(),
        }
    }

    pub fn stats(&self) -> &ReconcileStats {
        &self.stats
    }

    pub fn finish(self) -> ReconcileStats {
        #[cfg(feature = "debug-stats")]
        log::trace!(target: "dom_attrs.reconcile", "stats: {:?}", self.stats);
        self.stats
    }

    /// Reconcile one attribute. `prev` is `None` on the element's first render.
    pub fn reconcile_attribute<S>(
        &mut self,
        store: &mut S,
        call_site: &CallSite,
        name: &str,
        prev: Option<&LogicalValue>,
        next: &LogicalValue,
    ) -> Result<Outcome, AttributeError>
    where
        S: AttributeStore + ?Sized,
    {
        let check = validate(name);
        if let Some(event) = check.diagnostic(name) {
            self.emit(&event, call_site);
        }

        if prev.is_some_and(|prev| same_value(prev, next)) {
            self.stats.skipped += 1;
            return Ok(Outcome::Skipped);
        }

        let coercion = coerce(name, &call_site.tag, next);
        if let Some(event) = &coercion.diagnostic {
            self.emit(event, call_site);
        }

        apply(store, &check.canonical, &coercion.decision)?;
        let outcome = match coercion.decision {
            Decision::Write(_) => {
                self.stats.writes += 1;
                Outcome::Written
            }
            Decision::Remove => {
                self.stats.removals += 1;
                Outcome::Removed
            }
        };
        Ok(outcome)
    }

    /// Reconcile every unknown attribute of one element for a render pass.
    pub fn reconcile_element<S>(
        &mut self,
        store: &mut S,
        call_site: &CallSite,
        prev: Option<&Props>,
        next: &Props,
    ) -> Result<(), AttributeError>
    where
        S: AttributeStore + ?Sized,
    {
        let next_slots = by_canonical(next);
        let prev_slots = prev.map(by_canonical).unwrap_or_default();

        for slot in &prev_slots {
            if !next_slots.iter().any(|n| n.canonical == slot.canonical) {
                log::trace!(
                    target: "dom_attrs.reconcile",
                    "omitted prop {} removes {}",
                    slot.name,
                    slot.canonical
                );
                apply(store, &slot.canonical, &Decision::Remove)?;
                self.stats.removals += 1;
            }
        }

        for (name, _) in next.iter() {
            let shadowed = !next_slots.iter().any(|n| n.name == name);
            if shadowed && let Some(event) = validate(name).diagnostic(name) {
                self.emit(&event, call_site);
            }
        }

        for slot in &next_slots {
            let prev_value = prev_slots
                .iter()
                .find(|p| p.canonical == slot.canonical)
                .map(|p| p.value);
            self.reconcile_attribute(store, call_site, slot.name, prev_value, slot.value)?;
        }
        Ok(())
    }

    fn emit(&mut self, event: &DiagnosticEvent, call_site: &CallSite) {
        let before = self.emitter.emitted();
        self.emitter.emit(event, call_site);
        self.stats.diagnostics += self.emitter.emitted() - before;
    }
}

/// The prop that decides one canonical attribute name.
struct Slot<'p> {
    canonical: String,
    name: &'p str,
    value: &'p LogicalValue,
}

/// Collapses props onto canonical names, keeping the first position and the
/// last authored entry for each.
fn by_canonical(props: &Props) -> Vec<Slot<'_>> {
    let mut slots: Vec<Slot<'_>> = Vec::with_capacity(props.len());
    for (name, value) in props.iter() {
        let canonical = validate(name).canonical.into_owned();
        match slots.iter_mut().find(|s| s.canonical == canonical) {
            Some(slot) => {
                slot.name = name;
                slot.value = value;
            }
            None => slots.push(Slot {
                canonical,
                name,
                value,
            }),
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FunctionRef, Symbol};
    use crate::writer::Element;

    fn site() -> CallSite {
        CallSite::at("div", "test.js", 1)
    }

    #[test]
    fn string_then_null_removes() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);

        let first = LogicalValue::string("something");
        r.reconcile_attribute(&mut el, &site(), "unknown", None, &first)
            .unwrap();
        assert_eq!(el.get_attribute("unknown"), Some("something"));

        let outcome = r
            .reconcile_attribute(&mut el, &site(), "unknown", Some(&first), &LogicalValue::Null)
            .unwrap();
        assert_eq!(outcome, Outcome::Removed);
        assert!(!el.has_attribute("unknown"));
        drop(r);
        assert!(warnings.is_empty());
    }

    #[test]
    fn same_value_is_skipped_without_diagnostics() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);
        let value = LogicalValue::Bool(true);

        r.reconcile_attribute(&mut el, &site(), "unknown", None, &value)
            .unwrap();
        let outcome = r
            .reconcile_attribute(&mut el, &site(), "unknown", Some(&value), &value)
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        let stats = r.finish();
        assert_eq!(stats.diagnostics, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(warnings.len(), 1);
        assert!(!el.has_attribute("unknown"));
    }

    #[test]
    fn casing_and_value_diagnostics_both_fire() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);
        r.reconcile_attribute(
            &mut el,
            &site(),
            "helloWorld",
            None,
            &LogicalValue::Number(f64::NAN),
        )
        .unwrap();
        drop(r);
        assert_eq!(el.get_attribute("helloworld"), Some("NaN"));
        assert!(!el.has_attribute("helloWorld"));
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("React does not recognize the `helloWorld` prop"));
        assert!(warnings[1].contains("Received NaN for the `helloWorld` attribute"));
        assert!(warnings.iter().all(|w| w.ends_with("    in div (at test.js:1)")));
    }

    #[test]
    fn skipped_values_still_report_casing() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);
        let value = LogicalValue::string("x");

        r.reconcile_attribute(&mut el, &site(), "helloWorld", None, &value)
            .unwrap();
        let outcome = r
            .reconcile_attribute(&mut el, &site(), "helloWorld", Some(&value), &value)
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(r.finish().diagnostics, 2);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], warnings[1]);
        assert!(warnings[1].contains("React does not recognize the `helloWorld` prop"));
    }

    #[test]
    fn renamed_casing_keeps_the_new_value() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);

        let first = Props::new().with("helloWorld", "x");
        let second = Props::new().with("helloworld", "y");
        r.reconcile_element(&mut el, &site(), None, &first).unwrap();
        r.reconcile_element(&mut el, &site(), Some(&first), &second)
            .unwrap();
        assert_eq!(el.get_attribute("helloworld"), Some("y"));
        assert_eq!(el.len(), 1);
        assert_eq!(r.stats().removals, 0);
    }

    #[test]
    fn last_casing_in_one_pass_wins() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);

        let props = Props::new().with("helloWorld", "a").with("helloworld", "b");
        r.reconcile_element(&mut el, &site(), None, &props).unwrap();
        assert_eq!(el.get_attribute("helloworld"), Some("b"));
        assert_eq!(el.len(), 1);
        assert_eq!(r.stats().writes, 1);
        drop(r);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("`helloWorld`"));
    }

    #[test]
    fn omitted_props_are_removed() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);

        let first = Props::new().with("a", "1").with("b", 2.0);
        let second = Props::new().with("b", 3.0);
        r.reconcile_element(&mut el, &site(), None, &first).unwrap();
        r.reconcile_element(&mut el, &site(), Some(&first), &second)
            .unwrap();
        assert!(!el.has_attribute("a"));
        assert_eq!(el.get_attribute("b"), Some("3"));
        assert_eq!(r.stats().writes, 3);
        assert_eq!(r.stats().removals, 1);
    }

    #[test]
    fn production_config_keeps_decisions_but_drops_messages() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::production(), &mut warnings);
        let props = Props::new()
            .with("sym", LogicalValue::Symbol(Symbol::new(None)))
            .with("fn", LogicalValue::Function(FunctionRef::new(None)))
            .with("camelCase", "x");
        r.reconcile_element(&mut el, &site(), None, &props).unwrap();
        assert_eq!(r.finish().diagnostics, 0);
        assert!(warnings.is_empty());
        assert_eq!(el.get_attribute("camelcase"), Some("x"));
        assert_eq!(el.len(), 1);
    }

    #[test]
    fn host_errors_propagate() {
        let mut warnings: Vec<String> = Vec::new();
        let mut el = Element::new("div");
        let mut r = Reconciler::new(ReconcileConfig::default(), &mut warnings);
        let err = r
            .reconcile_attribute(&mut el, &site(), "bad name", None, &"x".into())
            .unwrap_err();
        assert_eq!(err, AttributeError::InvalidName("bad name".to_string()));
    }
}
