//! Typed step constructors.
//!
//! Each method appends one step through [`Traversal::step`]. Method names are
//! snake_case; the emitted step name is the Gremlin camelCase name. Steps that
//! clash with Rust keywords carry a trailing underscore (`in_`, `as_`,
//! `where_`, `match_`).

use crate::argument::{Argument, EdgeRef, IntoArgs, VertexRef};
use crate::tokens::Cardinality;
use crate::traversal::Traversal;

/// Steps taking any number of arguments (`()` for none).
macro_rules! variadic_steps {
    ($($(#[$meta:meta])* $method:ident => $name:literal),+ $(,)?) => {
        impl Traversal {
            $(
                $(#[$meta])*
                pub fn $method(self, args: impl IntoArgs) -> Self {
                    self.step($name, args)
                }
            )+
        }
    };
}

/// Steps that never take arguments.
macro_rules! nullary_steps {
    ($($method:ident => $name:literal),+ $(,)?) => {
        impl Traversal {
            $(
                pub fn $method(self) -> Self {
                    self.step($name, ())
                }
            )+
        }
    };
}

variadic_steps! {
    /// Select vertices, by id or all with `()`.
    v => "V",
    /// Select edges, by id or all with `()`.
    e => "E",
    add_v => "addV",
    add_e => "addE",
    inject => "inject",

    out => "out",
    in_ => "in",
    both => "both",
    out_e => "outE",
    in_e => "inE",
    both_e => "bothE",

    has_label => "hasLabel",
    has_id => "hasId",
    has_key => "hasKey",
    has_value => "hasValue",
    has_not => "hasNot",
    is => "is",

    values => "values",
    value_map => "valueMap",
    element_map => "elementMap",
    properties => "properties",
    property_map => "propertyMap",

    /// Label the current step for a later `select`.
    as_ => "as",
    select => "select",
    project => "project",
    /// Modulate the previous step (`order().by('age', desc)`).
    by => "by",
    from => "from",
    to => "to",
    option => "option",

    limit => "limit",
    range => "range",
    skip => "skip",
    tail => "tail",
    sample => "sample",
    coin => "coin",
    order => "order",
    dedup => "dedup",

    repeat => "repeat",
    times => "times",
    until => "until",
    emit => "emit",
    loops => "loops",

    where_ => "where",
    not => "not",
    and => "and",
    or => "or",
    coalesce => "coalesce",
    union => "union",
    choose => "choose",
    optional => "optional",
    local => "local",
    match_ => "match",
    filter => "filter",
    map => "map",
    flat_map => "flatMap",
    side_effect => "sideEffect",

    constant => "constant",
    count => "count",
    sum => "sum",
    max => "max",
    min => "min",
    mean => "mean",
    fold => "fold",
    group => "group",
    group_count => "groupCount",
    aggregate => "aggregate",
    store => "store",
    cap => "cap",
    barrier => "barrier",
    math => "math",
    with => "with",
}

nullary_steps! {
    id => "id",
    label => "label",
    key => "key",
    value => "value",
    unfold => "unfold",
    path => "path",
    simple_path => "simplePath",
    cyclic_path => "cyclicPath",
    identity => "identity",
    drop => "drop",
    out_v => "outV",
    in_v => "inV",
    both_v => "bothV",
    other_v => "otherV",
    iterate => "iterate",
    next => "next",
    to_list => "toList",
}

impl Traversal {
    /// `has(key, value)`
    pub fn has(self, key: impl Into<Argument>, value: impl Into<Argument>) -> Self {
        let args: [Argument; 2] = [key.into(), value.into()];
        self.step("has", args)
    }

    /// `has(label, key, value)`
    pub fn has_labelled(
        self,
        label: impl Into<Argument>,
        key: impl Into<Argument>,
        value: impl Into<Argument>,
    ) -> Self {
        let args: [Argument; 3] = [label.into(), key.into(), value.into()];
        self.step("has", args)
    }

    /// `property(key, value)`
    pub fn property(self, key: impl Into<Argument>, value: impl Into<Argument>) -> Self {
        let args: [Argument; 2] = [key.into(), value.into()];
        self.step("property", args)
    }

    /// `property(cardinality, key, value)`
    pub fn property_with(
        self,
        cardinality: Cardinality,
        key: impl Into<Argument>,
        value: impl Into<Argument>,
    ) -> Self {
        let args: [Argument; 3] = [cardinality.into(), key.into(), value.into()];
        self.step("property", args)
    }

    /// Append `V(id)` for an existing vertex reference.
    pub fn v_ref(self, vertex: &VertexRef) -> Self {
        self.step("V", vertex.id.clone())
    }

    /// Append `E(id)` for an existing edge reference.
    pub fn e_ref(self, edge: &EdgeRef) -> Self {
        self.step("E", edge.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::argument::{vertex, Argument, Atom, ElementId, Number};
    use crate::traversal::{anonymous, g};

    fn names(t: &crate::Traversal) -> Vec<&str> {
        t.steps().iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_camel_case_step_names() {
        let t = g().add_v("person").out_e(()).in_v().value_map(()).to_list();
        assert_eq!(names(&t), vec!["addV", "outE", "inV", "valueMap", "toList"]);
    }

    #[test]
    fn test_keyword_steps() {
        let t = g().v(()).as_("a").in_("knows").where_(anonymous().out(()));
        assert_eq!(names(&t), vec!["V", "as", "in", "where"]);
    }

    #[test]
    fn test_single_and_list_arguments_share_rule() {
        let single = g().out("knows");
        let list = g().out(["knows", "created"]);

        assert_eq!(single.steps()[0].args.len(), 1);
        assert_eq!(list.steps()[0].args.len(), 2);
        assert_eq!(single.steps()[0].args[0], list.steps()[0].args[0]);
    }

    #[test]
    fn test_property_with_cardinality() {
        let t = g().v(1).property_with(crate::Cardinality::List, "alias", "m");
        assert_eq!(
            t.steps()[1].args[0],
            Argument::Atom(Atom::new("list"))
        );
    }

    #[test]
    fn test_v_ref_appends_selection_by_id() {
        let marko = vertex("marko");
        let t = g().v_ref(&marko);

        assert_eq!(t.steps()[0].name, "V");
        assert_eq!(t.steps()[0].args, vec![Argument::Text("marko".into())]);
    }

    #[test]
    fn test_v_accepts_bare_id() {
        let t = g().v(ElementId::from(9));
        assert_eq!(t.steps()[0].args, vec![Argument::Number(Number::Int(9))]);
    }
}
