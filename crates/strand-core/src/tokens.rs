//! Enumerated Gremlin tokens.
//!
//! Each token renders as an unquoted [`Atom`], e.g. `property(single, 'name', 'marko')`
//! or `order().by('age', desc)`.

use crate::argument::{Argument, Atom, IntoArgs};
use std::fmt;

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Script text of this token
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for Atom {
            fn from(token: $name) -> Self {
                Atom::new(token.as_str())
            }
        }

        impl From<$name> for Argument {
            fn from(token: $name) -> Self {
                Argument::Atom(token.into())
            }
        }

        impl IntoArgs for $name {
            fn into_args(self) -> Vec<Argument> {
                vec![self.into()]
            }
        }
    };
}

token_enum! {
    /// Property cardinality for `property()`.
    Cardinality {
        Single => "single",
        List => "list",
        Set => "set",
    }
}

token_enum! {
    /// Sort direction for `order().by()`.
    Order {
        Asc => "asc",
        Desc => "desc",
        Shuffle => "shuffle",
    }
}

token_enum! {
    Scope {
        Local => "local",
        Global => "global",
    }
}

token_enum! {
    /// Map column selector for `select()`.
    Column {
        Keys => "keys",
        Values => "values",
    }
}

token_enum! {
    /// Element accessor tokens (`T.id`, `T.label`).
    T {
        Id => "T.id",
        Label => "T.label",
        Key => "T.key",
        Value => "T.value",
    }
}

token_enum! {
    /// Which labelled object `select()` pops when a label repeats.
    Pop {
        First => "first",
        Last => "last",
        All => "all",
        Mixed => "mixed",
    }
}
