//! Traversal and step values.
//!
//! A [`Traversal`] is an ordered list of [`Step`]s that only ever grows at the
//! tail. Builder methods take `self` and return the extended traversal, so a
//! query reads as a chain:
//!
//! ```
//! use strand_core::{anonymous, encode, g};
//!
//! let query = g().v(1).repeat(anonymous().out("knows")).times(2).values("name");
//! assert_eq!(
//!     encode(&query).unwrap().as_str(),
//!     "g.V(1).repeat(__.out('knows')).times(2).values('name')"
//! );
//! ```

use crate::argument::{Argument, IntoArgs};
use serde::{Deserialize, Serialize};

/// Step name reserved for the anonymous-traversal marker.
pub const ANONYMOUS_MARKER: &str = "__";

/// A named step with its ordered arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Argument>,
}

impl Step {
    pub fn new(name: impl Into<String>, args: impl IntoArgs) -> Self {
        Self {
            name: name.into(),
            args: args.into_args(),
        }
    }

    /// The anonymous marker step (`__`, no arguments)
    pub fn anonymous_marker() -> Self {
        Self {
            name: ANONYMOUS_MARKER.to_string(),
            args: Vec::new(),
        }
    }

    pub fn is_anonymous_marker(&self) -> bool {
        self.name == ANONYMOUS_MARKER
    }
}

/// An ordered sequence of steps describing a graph query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Traversal {
    steps: Vec<Step>,
}

/// Start an empty traversal, rendered against the traversal source (`g`).
pub fn g() -> Traversal {
    Traversal::new()
}

/// Start an anonymous sub-traversal (`__`) for use as a step argument.
pub fn anonymous() -> Traversal {
    Traversal::anonymous()
}

impl Traversal {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn anonymous() -> Self {
        Self {
            steps: vec![Step::anonymous_marker()],
        }
    }

    /// Build a traversal from an existing step list, as-is.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Append an arbitrary named step.
    ///
    /// Typed constructors such as [`Traversal::out`] are thin wrappers over
    /// this; it also covers any step without a dedicated method.
    pub fn step(self, name: impl Into<String>, args: impl IntoArgs) -> Self {
        self.push(Step::new(name, args))
    }

    /// Append an already-built step.
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append every step of `other` after this traversal's steps.
    pub fn then(mut self, other: Traversal) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether this traversal starts with the anonymous marker
    pub fn is_anonymous(&self) -> bool {
        self.steps
            .first()
            .is_some_and(Step::is_anonymous_marker)
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl FromIterator<Step> for Traversal {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Step>> for Traversal {
    fn from(steps: Vec<Step>) -> Self {
        Self::from_steps(steps)
    }
}

impl IntoIterator for Traversal {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Number;

    #[test]
    fn test_new_is_empty() {
        let t = g();
        assert!(t.is_empty());
        assert!(!t.is_anonymous());
    }

    #[test]
    fn test_anonymous_has_single_marker() {
        let t = anonymous();
        assert_eq!(t.len(), 1);
        assert!(t.is_anonymous());
        assert!(t.steps()[0].args.is_empty());
    }

    #[test]
    fn test_step_appends_at_tail() {
        let t = g().step("V", 1).step("out", ["a", "b"]);

        assert_eq!(t.steps()[0].name, "V");
        assert_eq!(t.steps()[0].args, vec![Argument::Number(Number::Int(1))]);
        assert_eq!(t.steps()[1].name, "out");
        assert_eq!(t.steps()[1].args.len(), 2);
    }

    #[test]
    fn test_builder_does_not_touch_earlier_steps() {
        let base = g().step("V", ());
        let extended = base.clone().step("count", ());

        assert_eq!(base.len(), 1);
        assert_eq!(extended.steps()[0], base.steps()[0]);
    }

    #[test]
    fn test_then_concatenates() {
        let t = g().step("V", ()).then(Traversal::new().step("count", ()));
        let names: Vec<_> = t.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["V", "count"]);
    }

    #[test]
    fn test_traversal_serializes_as_step_list() {
        let t = g().step("V", 1);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"name": "V", "args": [{"type": "number", "value": 1}]}])
        );
    }
}
