//! Tool system for tarsh.
//!
//! Every command is a tool — all builtins implement the same `Tool` trait
//! and are dispatched by name through the registry.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{ParamSchema, Tool, ToolArgs, ToolSchema};
