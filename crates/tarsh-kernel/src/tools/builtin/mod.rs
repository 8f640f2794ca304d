//! Built-in tools for tarsh.
//!
//! These tools are always available and provide the whole command surface
//! of the emulator.

mod cat;
mod cd;
mod ls;
mod pwd;
mod tac;
mod whoami;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cat::Cat);
    registry.register(cd::Cd);
    registry.register(ls::Ls);
    registry.register(pwd::Pwd);
    registry.register(tac::Tac);
    registry.register(whoami::Whoami);
}
