//! Developer diagnostics for lossy or discouraged attribute values.
//!
//! Events are created by the coercer and the name check, rendered here with a
//! caller-location trailer, and forwarded to a `DiagnosticSink`. This module
//! never suppresses anything on its own: every event handed to
//! `DiagnosticEmitter::emit` reaches the sink exactly once. Hosts that want
//! "warn once" behavior wrap their sink in `DedupSink`.

use std::collections::HashSet;
use std::fmt;

pub const NON_BOOLEAN_TEMPLATE: &str = "Received `%s` for a non-boolean attribute `%s`. \
If you want to write it to the DOM, pass a string instead: %s=\"%s\" or %s={value.toString()}.";

pub const NAN_TEMPLATE: &str =
    "Received NaN for the `%s` attribute. If this is expected, cast the value to a string.";

pub const INVALID_VALUE_TEMPLATE: &str = "Invalid value for prop `%s` on <%s> tag. \
Either remove it from the element, or pass a string or number value to keep it in the DOM. \
For details, see https://fb.me/react-attribute-behavior";

pub const UNKNOWN_PROP_CASING_TEMPLATE: &str = "React does not recognize the `%s` prop on a \
DOM element. If you intentionally want it to appear in the DOM as a custom attribute, spell it \
as lowercase `%s` instead. If you accidentally passed it from a parent component, remove it \
from the DOM element.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    NonBooleanAttribute,
    NaNValue,
    InvalidValue,
    UnknownPropCasing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub kind: DiagnosticKind,
    pub template: &'static str,
    pub args: Vec<String>,
    /// Attribute name as authored.
    pub attribute: String,
}

impl DiagnosticEvent {
    pub fn non_boolean(name: &str, value: bool) -> Self {
        let value = if value { "true" } else { "false" };
        Self {
            kind: DiagnosticKind::NonBooleanAttribute,
            template: NON_BOOLEAN_TEMPLATE,
            args: vec![
                value.to_string(),
                name.to_string(),
                name.to_string(),
                value.to_string(),
                name.to_string(),
            ],
            attribute: name.to_string(),
        }
    }

    pub fn nan(name: &str) -> Self {
        Self {
            kind: DiagnosticKind::NaNValue,
            template: NAN_TEMPLATE,
            args: vec![name.to_string()],
            attribute: name.to_string(),
        }
    }

    pub fn invalid_value(name: &str, tag: &str) -> Self {
        Self {
            kind: DiagnosticKind::InvalidValue,
            template: INVALID_VALUE_TEMPLATE,
            args: vec![name.to_string(), tag.to_string()],
            attribute: name.to_string(),
        }
    }

    pub fn unknown_prop_casing(name: &str, canonical: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnknownPropCasing,
            template: UNKNOWN_PROP_CASING_TEMPLATE,
            args: vec![name.to_string(), canonical.to_string()],
            attribute: name.to_string(),
        }
    }

    /// Message body with every `%s` replaced by the next argument.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn format_body(&self) -> String {
        let mut out = String::with_capacity(self.template.len() + 32);
        let mut args = self.args.iter();
        let mut rest = self.template;
        while let Some(pos) = rest.find("%s") {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str("%s"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_body())
    }
}

/// Caller location supplied by the surrounding framework.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallSite {
    pub tag: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl CallSite {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            file: None,
            line: None,
        }
    }

    pub fn at(tag: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            tag: tag.into(),
            file: Some(file.into()),
            line: Some(line),
        }
    }

    /// `"    in <tag> (at <file>:<line>)"`, or `"    in <tag>"` without a location.
    pub fn trailer(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("    in {} (at {file}:{line})", self.tag),
            (Some(file), None) => format!("    in {} (at {file})", self.tag),
            _ => format!("    in {}", self.tag),
        }
    }
}

/// Receiver for rendered diagnostic messages.
pub trait DiagnosticSink {
    fn warn(&mut self, message: &str);
}

/// Sink that buffers into a Vec.
pub struct VecDiagnosticSink<'a>(pub &'a mut Vec<String>);

impl DiagnosticSink for VecDiagnosticSink<'_> {
    fn warn(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

impl DiagnosticSink for Vec<String> {
    fn warn(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Sink that forwards to the `log` facade at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, message: &str) {
        log::warn!(target: "dom_attrs.diagnostics", "{message}");
    }
}

/// Passes each distinct message (body plus call-site trailer) through once.
pub struct DedupSink<S> {
    inner: S,
    seen: HashSet<String>,
}

impl<S: DiagnosticSink> DedupSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            seen: HashSet::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DiagnosticSink> DiagnosticSink for DedupSink<S> {
    fn warn(&mut self, message: &str) {
        if self.seen.insert(message.to_string()) {
            self.inner.warn(message);
        }
    }
}

/// Renders events and forwards them to a sink.
pub struct DiagnosticEmitter<'a> {
    sink: &'a mut dyn DiagnosticSink,
    enabled: bool,
    emitted: u64,
}

impl<'a> DiagnosticEmitter<'a> {
    pub fn new(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            sink,
            enabled: true,
            emitted: 0,
        }
    }

    /// An emitter that drops every event (production builds).
    pub fn disabled(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            sink,
            enabled: false,
            emitted: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn emit(&mut self, event: &DiagnosticEvent, call_site: &CallSite) {
        if !self.enabled {
            return;
        }
        let message = render_message(event, call_site);
        self.sink.warn(&message);
        self.emitted += 1;
    }
}

pub fn render_message(event: &DiagnosticEvent, call_site: &CallSite) -> String {
    let mut message = event.format_body();
    message.push('\n');
    message.push_str(&call_site.trailer());
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_boolean_message_names_value_and_attribute() {
        let event = DiagnosticEvent::non_boolean("unknown", true);
        assert_eq!(
            event.format_body(),
            "Received `true` for a non-boolean attribute `unknown`. If you want to write it \
             to the DOM, pass a string instead: unknown=\"true\" or unknown={value.toString()}."
        );
    }

    #[test]
    fn invalid_value_message_mentions_tag_and_link() {
        let body = DiagnosticEvent::invalid_value("unknown", "div").format_body();
        assert!(body.starts_with("Invalid value for prop `unknown` on <div> tag."));
        assert!(body.ends_with("https://fb.me/react-attribute-behavior"));
    }

    #[test]
    fn missing_args_leave_placeholders() {
        let mut event = DiagnosticEvent::nan("x");
        event.args.clear();
        assert_eq!(
            event.format_body(),
            "Received NaN for the `%s` attribute. If this is expected, cast the value to a string."
        );
    }

    #[test]
    fn trailer_formats() {
        assert_eq!(
            CallSite::at("div", "app.js", 12).trailer(),
            "    in div (at app.js:12)"
        );
        assert_eq!(CallSite::new("span").trailer(), "    in span");
    }

    #[test]
    fn emitter_appends_trailer_and_counts() {
        let mut out = Vec::new();
        let mut sink = VecDiagnosticSink(&mut out);
        let mut emitter = DiagnosticEmitter::new(&mut sink);
        emitter.emit(&DiagnosticEvent::nan("width"), &CallSite::at("div", "a.js", 3));
        assert_eq!(emitter.emitted(), 1);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0],
            "Received NaN for the `width` attribute. If this is expected, cast the value to a \
             string.\n    in div (at a.js:3)"
        );
    }

    #[test]
    fn disabled_emitter_drops_events() {
        let mut out: Vec<String> = Vec::new();
        let mut emitter = DiagnosticEmitter::disabled(&mut out);
        emitter.emit(&DiagnosticEvent::nan("width"), &CallSite::new("div"));
        assert_eq!(emitter.emitted(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn log_sink_accepts_messages_without_a_logger() {
        let mut sink = LogSink;
        let mut emitter = DiagnosticEmitter::new(&mut sink);
        emitter.emit(&DiagnosticEvent::nan("width"), &CallSite::new("div"));
        assert_eq!(emitter.emitted(), 1);
        assert!(emitter.is_enabled());
    }

    #[test]
    fn dedup_sink_passes_each_message_once() {
        let mut sink = DedupSink::new(Vec::<String>::new());
        sink.warn("a");
        sink.warn("a");
        sink.warn("b");
        assert_eq!(sink.into_inner(), vec!["a".to_string(), "b".to_string()]);
    }
}
