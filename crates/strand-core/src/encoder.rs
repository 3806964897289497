//! Script encoder.
//!
//! Renders a [`Traversal`] to dot-chained Gremlin script text:
//! - the top level is seeded with the traversal source (`g`)
//! - nested traversal arguments are seeded empty, or with `__` when they
//!   start with the anonymous marker
//! - text arguments are single-quoted with unescaped quotes escaped

use crate::argument::{Argument, ElementId};
use crate::error::{EncodeError, EncodeResult};
use crate::traversal::{Step, Traversal, ANONYMOUS_MARKER};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use strand_config::EncoderConfig;
use tracing::{debug, trace};

/// A single quote together with the run of backslashes directly before it.
static QUOTE_WITH_BACKSLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\\*)'").unwrap());

/// Encoded script text, ready to hand to an execution client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Script(String);

impl Script {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Script {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Script> for String {
    fn from(script: Script) -> Self {
        script.0
    }
}

/// Encoder with a configurable traversal source.
#[derive(Debug, Clone)]
pub struct ScriptEncoder {
    source: String,
}

impl Default for ScriptEncoder {
    fn default() -> Self {
        Self::from_config(&EncoderConfig::default())
    }
}

impl ScriptEncoder {
    /// Create encoder seeding top-level scripts with `source` instead of `g`
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Create encoder from the configured traversal source
    pub fn from_config(config: &EncoderConfig) -> Self {
        Self::with_source(config.traversal_source.as_str())
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Encode a traversal.
    ///
    /// Fails if the anonymous marker appears anywhere but first, in this
    /// traversal or any nested one. No partial output is returned.
    pub fn encode(&self, traversal: &Traversal) -> EncodeResult<Script> {
        debug!(source = %self.source, steps = traversal.len(), "encoding traversal");
        let text = encode_steps(traversal.steps(), &self.source)?;
        debug!(len = text.len(), "encoded traversal");
        Ok(Script(text))
    }
}

/// Encode a traversal against the default `g` source.
pub fn encode(traversal: &Traversal) -> EncodeResult<Script> {
    ScriptEncoder::default().encode(traversal)
}

/// A traversal being folded, plus the step whose arguments are in progress.
struct Frame<'a> {
    steps: &'a [Step],
    position: usize,
    script: String,
    args: Vec<String>,
}

impl<'a> Frame<'a> {
    fn new(steps: &'a [Step], seed: &str) -> Self {
        Self {
            steps,
            position: 0,
            script: seed.to_string(),
            args: Vec::new(),
        }
    }
}

/// Fold the steps into `seed`, one call per step.
///
/// Nested traversal arguments are pushed onto an explicit stack, so nesting
/// depth is bounded by memory rather than by the call stack.
fn encode_steps(steps: &[Step], seed: &str) -> EncodeResult<String> {
    let mut stack = vec![Frame::new(steps, seed)];

    loop {
        let Some(frame) = stack.last_mut() else {
            return Ok(String::new());
        };

        let steps = frame.steps;
        let Some(step) = steps.get(frame.position) else {
            let Some(done) = stack.pop() else {
                return Ok(String::new());
            };
            match stack.last_mut() {
                Some(parent) => parent.args.push(done.script),
                None => return Ok(done.script),
            }
            continue;
        };

        if step.is_anonymous_marker() {
            if frame.position != 0 {
                let err = EncodeError::misplaced_marker(frame.position);
                stack.pop();
                return Err(wrap_in_parents(&stack, err));
            }
            frame.script = ANONYMOUS_MARKER.to_string();
            frame.position += 1;
            continue;
        }

        if let Some(arg) = step.args.get(frame.args.len()) {
            match arg {
                Argument::Traversal(nested) => stack.push(Frame::new(nested.steps(), "")),
                other => {
                    let text = encode_argument(other)?;
                    frame.args.push(text);
                }
            }
            continue;
        }

        if !frame.script.is_empty() {
            frame.script.push('.');
        }
        frame.script.push_str(&step.name);
        frame.script.push('(');
        frame.script.push_str(&frame.args.join(", "));
        frame.script.push(')');
        frame.args.clear();

        trace!(position = frame.position, step = %step.name, "encoded step");
        frame.position += 1;
    }
}

/// Attribute a failure to every enclosing step, innermost first.
fn wrap_in_parents(stack: &[Frame<'_>], err: EncodeError) -> EncodeError {
    stack.iter().rev().fold(err, |err, parent| {
        let step = &parent.steps[parent.position];
        EncodeError::nested(step.name.as_str(), parent.args.len(), err)
    })
}

fn encode_argument(arg: &Argument) -> EncodeResult<String> {
    let text = match arg {
        Argument::Null => "none".to_string(),
        Argument::Number(n) => n.to_string(),
        Argument::Atom(atom) => atom.to_string(),
        Argument::Text(s) => quote(s),
        Argument::VertexRef(id) => format!("V({})", encode_id(id)),
        Argument::EdgeRef(id) => format!("E({})", encode_id(id)),
        Argument::Traversal(nested) => encode_steps(nested.steps(), "")?,
    };
    Ok(text)
}

fn encode_id(id: &ElementId) -> String {
    match id {
        ElementId::Number(n) => n.to_string(),
        ElementId::Text(s) => quote(s),
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", escape_quotes(text))
}

/// Escape single quotes that are not already escaped.
///
/// A quote preceded by an odd run of backslashes counts as escaped and is
/// left alone; any other quote gets a backslash. Nothing else changes.
///
/// ```
/// use strand_core::escape_quotes;
///
/// assert_eq!(escape_quotes("it's"), r"it\'s");
/// assert_eq!(escape_quotes(r"it\'s"), r"it\'s");
/// ```
pub fn escape_quotes(text: &str) -> Cow<'_, str> {
    QUOTE_WITH_BACKSLASHES.replace_all(text, |caps: &Captures| {
        let backslashes = &caps[1];
        if backslashes.len() % 2 == 1 {
            format!("{}'", backslashes)
        } else {
            format!("{}\\'", backslashes)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{edge, vertex};
    use crate::traversal::{anonymous, g};

    // =========================================================================
    // Seeding and chaining
    // =========================================================================

    #[test]
    fn test_empty_traversal_is_source() {
        assert_eq!(encode(&g()).unwrap().as_str(), "g");
    }

    #[test]
    fn test_custom_source() {
        let encoder = ScriptEncoder::with_source("social");
        let script = encoder.encode(&g().v(()).count(())).unwrap();
        assert_eq!(script.as_str(), "social.V().count()");
    }

    #[test]
    fn test_empty_seed_emits_bare_call() {
        let steps = vec![Step::new("gt", 3)];
        assert_eq!(encode_steps(&steps, "").unwrap(), "gt(3)");
    }

    #[test]
    fn test_anonymous_marker_replaces_seed() {
        let script = encode(&anonymous().out("knows")).unwrap();
        assert_eq!(script.as_str(), "__.out('knows')");
    }

    #[test]
    fn test_misplaced_marker_fails() {
        let t = g().v(1).push(Step::anonymous_marker());
        assert_eq!(encode(&t), Err(EncodeError::misplaced_marker(1)));
    }

    #[test]
    fn test_misplaced_marker_in_nested_traversal_fails() {
        let inner = anonymous().out(()).push(Step::anonymous_marker());
        let t = g().v(1).repeat(inner);

        let err = encode(&t).unwrap_err();
        assert!(matches!(err, EncodeError::Nested { ref step, argument: 0, .. } if step == "repeat"));
        assert_eq!(err.root_cause(), &EncodeError::misplaced_marker(2));
    }

    // =========================================================================
    // Argument formatting
    // =========================================================================

    #[test]
    fn test_deep_nesting_does_not_use_call_stack() {
        const DEPTH: usize = 5_000;

        // Small stack: a recursive encoder would overflow at this depth
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut t = anonymous().out(());
                for _ in 0..DEPTH {
                    t = anonymous().where_(t);
                }
                let query = g().v(()).where_(t);
                let script = encode(&query).map(Script::into_string);
                // Dropping the nested value is itself recursive
                std::mem::forget(query);
                script
            })
            .unwrap();

        let script = handle.join().unwrap().unwrap();
        assert!(script.starts_with("g.V().where(__.where(__.where("));
        assert!(script.ends_with("__.out()))"));
        assert_eq!(script.matches("__.").count(), DEPTH + 1);
    }

    #[test]
    fn test_nested_failure_names_each_enclosing_step() {
        let bad = anonymous().out(()).push(Step::anonymous_marker());
        let t = g().v(()).union([anonymous(), anonymous().where_(bad)]);

        let err = encode(&t).unwrap_err();
        let expected = EncodeError::nested(
            "union",
            1,
            EncodeError::nested("where", 0, EncodeError::misplaced_marker(2)),
        );
        assert_eq!(err, expected);
    }

    #[test]
    fn test_null_renders_none() {
        let script = encode(&g().inject(Argument::Null)).unwrap();
        assert_eq!(script.as_str(), "g.inject(none)");
    }

    #[test]
    fn test_references() {
        assert_eq!(encode_argument(&vertex(3).into()).unwrap(), "V(3)");
        assert_eq!(encode_argument(&vertex("abc").into()).unwrap(), "V('abc')");
        assert_eq!(encode_argument(&edge(3).into()).unwrap(), "E(3)");
        assert_eq!(encode_argument(&edge("abc").into()).unwrap(), "E('abc')");
    }

    #[test]
    fn test_reference_id_is_escaped() {
        assert_eq!(encode_argument(&vertex("o'neil").into()).unwrap(), r"V('o\'neil')");
    }

    #[test]
    fn test_arguments_joined_with_comma_space() {
        let script = encode(&g().v([1, 2, 3])).unwrap();
        assert_eq!(script.as_str(), "g.V(1, 2, 3)");
    }

    // =========================================================================
    // Escaping
    // =========================================================================

    #[test]
    fn test_escape_plain_quote() {
        assert_eq!(escape_quotes("it's"), r"it\'s");
    }

    #[test]
    fn test_escape_leaves_escaped_quote() {
        assert_eq!(escape_quotes(r"it\'s"), r"it\'s");
    }

    #[test]
    fn test_escape_even_backslash_run_gets_escape() {
        assert_eq!(escape_quotes(r"a\\'b"), r"a\\\'b");
    }

    #[test]
    fn test_escape_odd_backslash_run_untouched() {
        assert_eq!(escape_quotes(r"a\\\'b"), r"a\\\'b");
    }

    #[test]
    fn test_escape_leading_and_repeated_quotes() {
        assert_eq!(escape_quotes("''"), r"\'\'");
    }

    #[test]
    fn test_escape_other_characters_untouched() {
        let text = "line\nbreak \"double\" \\ back";
        assert_eq!(escape_quotes(text), text);
    }

    #[test]
    fn test_escape_without_quotes_borrows() {
        assert!(matches!(escape_quotes("plain"), Cow::Borrowed(_)));
    }
}
