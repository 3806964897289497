//! Namespace helpers.
//!
//! Shortcuts that tag or filter elements by the configured namespace
//! property, delegating to `property` and `has`.

use crate::traversal::Traversal;
use strand_config::NamespaceConfig;

impl Traversal {
    /// `property(<namespace key>, <namespace value>)`
    pub fn namespace_property(self, config: &NamespaceConfig) -> Self {
        self.property(
            config.namespace_property_key.as_str(),
            config.namespace_value.as_str(),
        )
    }

    /// `has(<namespace key>, <namespace value>)`
    pub fn has_namespace(self, config: &NamespaceConfig) -> Self {
        self.has(
            config.namespace_property_key.as_str(),
            config.namespace_value.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{encode, g};
    use strand_config::NamespaceConfig;

    #[test]
    fn test_default_namespace_property() {
        let config = NamespaceConfig::default();
        let script = encode(&g().add_v("person").namespace_property(&config)).unwrap();
        assert_eq!(
            script.as_str(),
            "g.addV('person').property('namespace', 'default')"
        );
    }

    #[test]
    fn test_injected_namespace_filter() {
        let config = NamespaceConfig::new("tenant", "acme");
        let script = encode(&g().v(()).has_namespace(&config).count(())).unwrap();
        assert_eq!(script.as_str(), "g.V().has('tenant', 'acme').count()");
    }
}
