//! Function registry for template helpers.

use std::collections::BTreeMap;

use log::debug;

use crate::functions::args::Args;
use crate::functions::builtins::register_builtins;
use crate::functions::error::{FunctionError, compute_suggestions};
use crate::types::Value;

/// Signature of a template helper.
pub type FunctionFn = fn(&Args<'_>) -> Result<Value, FunctionError>;

/// Table of template helpers keyed by template name.
///
/// # Example
///
/// ```
/// use stencil::{FunctionRegistry, Value};
///
/// let registry = FunctionRegistry::with_builtins();
/// let result = registry.call("concat", &["a".into(), "b".into()]).unwrap();
/// assert_eq!(result, Value::from("ab"));
/// ```
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, FunctionFn>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in helper.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Register or replace a helper.
    pub fn register(&mut self, name: impl Into<String>, function: FunctionFn) {
        let name = name.into();
        debug!("registering function '{name}'");
        self.functions.insert(name, function);
    }

    pub fn get(&self, name: &str) -> Option<FunctionFn> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Call the helper registered as `name`.
    ///
    /// Unknown names fail with [`FunctionError::UnknownFunction`] listing
    /// close matches.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, FunctionError> {
        let function = self.get(name).ok_or_else(|| FunctionError::UnknownFunction {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &self.names()),
        })?;
        function(&Args::new(name, args))
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
