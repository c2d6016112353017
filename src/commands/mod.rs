//! Command implementations
//!
//! Each command is a module with an execute function that takes loaded
//! configuration and collaborators and runs one mode of the program.

pub mod lookup;
pub mod pick;

// Re-export execute functions for convenience
pub use lookup::execute as lookup;
pub use pick::execute as pick;
