//! Tool registry.

use indexmap::IndexMap;

use super::traits::{Tool, ToolSchema};

/// Registry of available tools, looked up by name at dispatch time.
///
/// Registration order is preserved so help output lists tools in a stable
/// order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. A later registration under the
    /// same name replaces the earlier one.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Schemas of all registered tools, in registration order.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    /// Names of all registered tools, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::register_builtins;

    #[test]
    fn builtins_are_registered_in_order() {
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        assert!(registry.get("cd").is_some());
        assert!(registry.get("tac").is_some());
        assert!(registry.get("rm").is_none());
        assert_eq!(registry.names(), ["cat", "cd", "ls", "pwd", "tac", "whoami"]);
    }
}
