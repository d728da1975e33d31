//! Resolver configuration
//!
//! Controls how much of a type the resolver materializes and how deep it may recurse while doing
//! so. Options are always passed explicitly to [`crate::resolver::TypeResolver::with_options`].

/// Configuration for type resolution
///
/// The defaults produce the complete type-description tree. Lighter presets exist for callers
/// that only need member lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Maximum recursion depth for signature types and nested types (default: 64)
    pub max_depth: usize,

    /// Populate `Type::types` from the NestedClass table
    pub include_nested: bool,

    /// Populate `Type::specialization` and `Method::specialization` with the declared generic
    /// parameters of the definition
    pub include_generic_parameters: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            include_nested: true,
            include_generic_parameters: true,
        }
    }
}

impl ResolverOptions {
    /// Creates a minimal configuration: members, base type and interfaces only
    ///
    /// Nested types and declared generic parameters are skipped.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            max_depth: 64,
            include_nested: false,
            include_generic_parameters: false,
        }
    }

    /// Creates a configuration that materializes everything
    #[must_use]
    pub fn complete() -> Self {
        Self::default()
    }

    /// Replace the recursion bound
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
