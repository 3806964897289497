//! Comparison predicates for `has`, `is` and `where`.
//!
//! A predicate is a one-step traversal without the anonymous marker, so when
//! nested as an argument it renders as a bare call: `has('age', gt(30))`.

use crate::argument::{Argument, IntoArgs};
use crate::traversal::Traversal;

fn predicate(name: &str, args: impl IntoArgs) -> Traversal {
    Traversal::new().step(name, args)
}

macro_rules! unary_predicates {
    ($($fn_name:ident => $name:literal),+ $(,)?) => {
        $(
            pub fn $fn_name(value: impl Into<Argument>) -> Traversal {
                let value: Argument = value.into();
                predicate($name, value)
            }
        )+
    };
}

macro_rules! range_predicates {
    ($($fn_name:ident => $name:literal),+ $(,)?) => {
        $(
            pub fn $fn_name(low: impl Into<Argument>, high: impl Into<Argument>) -> Traversal {
                let bounds: [Argument; 2] = [low.into(), high.into()];
                predicate($name, bounds)
            }
        )+
    };
}

unary_predicates! {
    eq => "eq",
    neq => "neq",
    lt => "lt",
    lte => "lte",
    gt => "gt",
    gte => "gte",
    containing => "containing",
    not_containing => "notContaining",
    starting_with => "startingWith",
    ending_with => "endingWith",
}

range_predicates! {
    between => "between",
    inside => "inside",
    outside => "outside",
}

/// `within(a, b, ...)`
pub fn within(values: impl IntoArgs) -> Traversal {
    predicate("within", values)
}

/// `without(a, b, ...)`
pub fn without(values: impl IntoArgs) -> Traversal {
    predicate("without", values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Number;

    #[test]
    fn test_predicate_is_single_unmarked_step() {
        let p = gt(30);
        assert_eq!(p.len(), 1);
        assert!(!p.is_anonymous());
        assert_eq!(p.steps()[0].name, "gt");
        assert_eq!(p.steps()[0].args, vec![Argument::Number(Number::Int(30))]);
    }

    #[test]
    fn test_range_predicate_keeps_bounds_order() {
        let p = between(1, 10);
        assert_eq!(
            p.steps()[0].args,
            vec![
                Argument::Number(Number::Int(1)),
                Argument::Number(Number::Int(10))
            ]
        );
    }

    #[test]
    fn test_within_takes_list() {
        let p = within(["a", "b", "c"]);
        assert_eq!(p.steps()[0].name, "within");
        assert_eq!(p.steps()[0].args.len(), 3);
    }
}
