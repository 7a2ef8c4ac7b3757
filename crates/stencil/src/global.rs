//! Process-wide function registry.
//!
//! Seeded with the built-in helpers on first use. Template engines that
//! bind helpers once at startup read from here.

use std::sync::{LazyLock, RwLock};

use crate::functions::{FunctionError, FunctionFn, FunctionRegistry};
use crate::types::Value;

static GLOBAL_REGISTRY: LazyLock<RwLock<FunctionRegistry>> =
    LazyLock::new(|| RwLock::new(FunctionRegistry::with_builtins()));

/// Provides read access to the global registry.
pub fn with_registry<T>(f: impl FnOnce(&FunctionRegistry) -> T) -> T {
    let guard = GLOBAL_REGISTRY.read().expect("global registry lock poisoned");
    f(&guard)
}

fn with_registry_mut<T>(f: impl FnOnce(&mut FunctionRegistry) -> T) -> T {
    let mut guard = GLOBAL_REGISTRY.write().expect("global registry lock poisoned");
    f(&mut guard)
}

/// Registers or replaces a helper in the global registry.
pub fn register_function(name: impl Into<String>, function: FunctionFn) {
    with_registry_mut(|registry| registry.register(name, function));
}

/// Returns every registered helper name, sorted.
pub fn function_names() -> Vec<String> {
    with_registry(FunctionRegistry::names)
}

/// Calls a helper from the global registry.
pub fn call_function(name: &str, args: &[Value]) -> Result<Value, FunctionError> {
    with_registry(|registry| registry.call(name, args))
}
