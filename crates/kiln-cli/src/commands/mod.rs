//! Command implementations for the Kiln CLI.
//!
//! - [`print`] - Print the final configuration
//! - [`check`] - Validate the configuration against the project
//! - [`rules`] - Match a source file against the module rules
//! - [`env`] - Report mode and transform environment
//! - [`schema`] - Print the settings schema
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod env;
pub mod print;
pub mod rules;
pub mod schema;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use env::execute as env_execute;
pub use print::execute as print_execute;
pub use rules::execute as rules_execute;
pub use schema::execute as schema_execute;
