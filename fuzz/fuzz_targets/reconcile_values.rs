#![no_main]

use dom_attrs::{
    AttributeStore, CallSite, Decision, Element, FunctionRef, LogicalValue, ObjectValue, Props,
    ReconcileConfig, Reconciler, Symbol, coerce, validate,
};
use libfuzzer_sys::fuzz_target;

const MAX_PROPS: usize = 16;

fn byte(data: &[u8], idx: usize) -> u8 {
    data.get(idx).copied().unwrap_or(0)
}

fn value_from(data: &[u8], idx: usize) -> LogicalValue {
    let tag = byte(data, idx);
    let payload = byte(data, idx + 1);
    match tag % 10 {
        0 => LogicalValue::Null,
        1 => LogicalValue::Undefined,
        2 => LogicalValue::Bool(payload & 1 == 1),
        3 => {
            let mut raw = [0u8; 8];
            for (i, b) in raw.iter_mut().enumerate() {
                *b = byte(data, idx + 1 + i);
            }
            LogicalValue::Number(f64::from_le_bytes(raw))
        }
        4 => LogicalValue::String(String::from_utf8_lossy(&data[idx.min(data.len())..]).into()),
        5 => LogicalValue::Symbol(Symbol::new(None)),
        6 => LogicalValue::Function(FunctionRef::new(None)),
        7 => LogicalValue::Object(ObjectValue::plain()),
        8 => {
            let text = format!("obj{payload}");
            LogicalValue::Object(ObjectValue::with_to_string(move || text.clone()))
        }
        _ => LogicalValue::Number(f64::from(payload) - 128.0),
    }
}

fn name_from(data: &[u8], idx: usize) -> String {
    let base = [
        "unknown",
        "helloWorld",
        "helloworld",
        "HelloWorld",
        "HELLOWORLD",
        "data-x",
        "ÄRGER",
        "ärger",
        "x",
    ];
    let pick = base[usize::from(byte(data, idx)) % base.len()];
    format!("{pick}{}", byte(data, idx + 1) % 4)
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let count = usize::from(byte(data, 0)) % MAX_PROPS;
    let mut first = Props::new();
    let mut second = Props::new();
    for i in 0..count {
        let name = name_from(data, i * 3 + 1);
        let value = value_from(data, i * 3 + 2);
        if byte(data, i * 3 + 3) & 1 == 0 {
            second.insert(&name, value.clone());
        }
        first.insert(&name, value);
    }

    let mut el = Element::new("div");
    let mut warnings: Vec<String> = Vec::new();
    let site = CallSite::new("div");
    {
        let mut reconciler = Reconciler::new(ReconcileConfig::default(), &mut warnings);
        reconciler
            .reconcile_element(&mut el, &site, None, &first)
            .expect("fuzzed names are valid");
        reconciler
            .reconcile_element(&mut el, &site, Some(&first), &second)
            .expect("fuzzed names are valid");
    }

    // Final state depends only on the latest props; the last casing of a
    // canonical name wins.
    let mut expected: Vec<(String, Decision)> = Vec::new();
    for (name, value) in second.iter() {
        let canonical = validate(name).canonical.into_owned();
        let decision = coerce(name, "div", value).decision;
        match expected.iter_mut().find(|(c, _)| *c == canonical) {
            Some(slot) => slot.1 = decision,
            None => expected.push((canonical, decision)),
        }
    }
    for (canonical, decision) in &expected {
        match decision {
            Decision::Write(text) => assert_eq!(el.get_attribute(canonical), Some(text.as_str())),
            Decision::Remove => assert!(!el.has_attribute(canonical)),
        }
    }
    for (name, _) in first.iter() {
        let canonical = validate(name).canonical.into_owned();
        if !expected.iter().any(|(c, _)| *c == canonical) {
            assert!(!el.has_attribute(&canonical));
        }
    }
    assert!(el.len() <= expected.len());
});
