//! TOML manifest of single-attribute coercion cases.
//!
//! Each case renders one value for one attribute on a fresh element and
//! states the expected attribute text (or absence) and the diagnostics that
//! must appear, as substrings, in emission order.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use dom_attrs::{LogicalValue, parse_literal};

pub const COERCION_CASES_FORMAT_V1: &str = "dom-attrs-coercion-v1";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct CoercionManifest {
    format: String,
    #[serde(rename = "case")]
    cases: Vec<RawCase>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct RawCase {
    id: String,
    #[serde(default = "default_tag")]
    tag: String,
    name: String,
    value: String,
    /// Absent means the attribute must not exist after the render.
    expect: Option<String>,
    #[serde(default)]
    diagnostics: Vec<String>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Clone, Debug)]
pub struct CoercionCase {
    pub id: String,
    pub tag: String,
    pub name: String,
    pub literal: String,
    pub value: LogicalValue,
    pub expect: Option<String>,
    pub diagnostics: Vec<String>,
}

pub fn load_coercion_cases(path: &Path) -> Vec<CoercionCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read coercion manifest {path:?}: {err}"));
    let manifest: CoercionManifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse coercion manifest {path:?}: {err}"));
    assert_eq!(
        manifest.format, COERCION_CASES_FORMAT_V1,
        "unsupported format in {path:?}"
    );
    assert!(
        !manifest.cases.is_empty(),
        "coercion manifest {path:?} has no cases"
    );

    let mut ids = BTreeSet::new();
    manifest
        .cases
        .into_iter()
        .map(|raw| {
            assert!(
                ids.insert(raw.id.clone()),
                "duplicate case id '{}' in {path:?}",
                raw.id
            );
            let value = parse_literal(&raw.value).unwrap_or_else(|err| {
                panic!("case '{}' in {path:?}: {err}", raw.id)
            });
            CoercionCase {
                id: raw.id,
                tag: raw.tag,
                name: raw.name,
                literal: raw.value,
                value,
                expect: raw.expect,
                diagnostics: raw.diagnostics,
            }
        })
        .collect()
}
