//! Render-pass scenarios loaded from TOML.
//!
//! ```toml
//! tag = "div"
//! file = "app.js"
//! line = 12
//!
//! [[pass]]
//! props = { unknown = "string:something", helloWorld = "true" }
//!
//! [[pass]]
//! props = { unknown = "null" }
//! ```
//!
//! Prop values use the `dom_attrs::literal` grammar.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use dom_attrs::debug::outline_element;
use dom_attrs::{
    AttributeError, CallSite, Element, LiteralError, Props, ReconcileConfig, ReconcileStats,
    Reconciler, parse_literal,
};

#[derive(Debug)]
pub enum ScenarioError {
    Io(io::Error),
    Parse(toml::de::Error),
    Literal {
        pass: usize,
        name: String,
        error: LiteralError,
    },
    Attribute {
        pass: usize,
        error: AttributeError,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io(err) => write!(f, "failed to read scenario: {err}"),
            ScenarioError::Parse(err) => write!(f, "failed to parse scenario: {err}"),
            ScenarioError::Literal { pass, name, error } => {
                write!(f, "pass {pass}, prop `{name}`: {error}")
            }
            ScenarioError::Attribute { pass, error } => write!(f, "pass {pass}: {error}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(err) => Some(err),
            ScenarioError::Parse(err) => Some(err),
            ScenarioError::Literal { error, .. } => Some(error),
            ScenarioError::Attribute { error, .. } => Some(error),
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(err: io::Error) -> Self {
        ScenarioError::Io(err)
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(err: toml::de::Error) -> Self {
        ScenarioError::Parse(err)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_tag")]
    pub tag: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    #[serde(default, rename = "pass")]
    pub passes: Vec<Pass>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Pass {
    #[serde(default)]
    pub props: BTreeMap<String, String>,
}

fn default_tag() -> String {
    "div".to_string()
}

/// Result of one render pass.
#[derive(Clone, Debug)]
pub struct PassReport {
    pub outline: String,
    pub warnings: Vec<String>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    fn call_site(&self) -> CallSite {
        CallSite {
            tag: self.tag.clone(),
            file: self.file.clone(),
            line: self.line,
        }
    }

    /// Replay every pass against one fresh element.
    pub fn run(&self) -> Result<(Vec<PassReport>, ReconcileStats), ScenarioError> {
        let site = self.call_site();
        let mut el = Element::new(&self.tag);
        let mut reports = Vec::with_capacity(self.passes.len());
        let mut totals = ReconcileStats::default();
        let mut prev: Option<Props> = None;

        for (index, pass) in self.passes.iter().enumerate() {
            let pass_no = index + 1;
            let mut props = Props::new();
            for (name, raw) in &pass.props {
                let value = parse_literal(raw).map_err(|error| ScenarioError::Literal {
                    pass: pass_no,
                    name: name.clone(),
                    error,
                })?;
                props.insert(name, value);
            }

            let mut warnings: Vec<String> = Vec::new();
            let mut reconciler = Reconciler::new(ReconcileConfig::default(), &mut warnings);
            reconciler
                .reconcile_element(&mut el, &site, prev.as_ref(), &props)
                .map_err(|error| ScenarioError::Attribute {
                    pass: pass_no,
                    error,
                })?;
            let stats = reconciler.finish();
            totals.writes += stats.writes;
            totals.removals += stats.removals;
            totals.skipped += stats.skipped;
            totals.diagnostics += stats.diagnostics;

            reports.push(PassReport {
                outline: outline_element(&el),
                warnings,
            });
            prev = Some(props);
        }
        Ok((reports, totals))
    }
}
