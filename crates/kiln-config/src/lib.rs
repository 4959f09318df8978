//! Mode-aware configuration for a front-end module bundler.
//!
//! The final configuration is a base skeleton merged with one overlay chosen
//! by the lifecycle token (`start` → development, `build`/`stats` →
//! production). All builders are pure: the environment and the dependency
//! manifest are passed in explicitly.
//!
//! ```
//! use kiln_config::{
//!     resolve_config, ConfigInputs, DependencyManifest, LifecycleEnv, Mode, PathTable,
//!     ProjectSettings,
//! };
//!
//! let env = LifecycleEnv::from_vars([("npm_lifecycle_event", "build")]);
//! let manifest = DependencyManifest::with_dependencies([("react", "^15.1.0")]);
//! let paths = PathTable::new("/work/site");
//! let settings = ProjectSettings::default();
//!
//! let resolved = resolve_config(&ConfigInputs {
//!     env: &env,
//!     manifest: &manifest,
//!     paths: &paths,
//!     settings: &settings,
//! })
//! .unwrap();
//!
//! assert_eq!(resolved.mode, Mode::Production);
//! assert!(resolved.bundle.entry.contains_key("vendor"));
//! ```

pub mod builder;
pub mod bundle;
pub mod discovery;
pub mod env;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod mode;
pub mod paths;
pub mod settings;
pub mod validation;

// Re-export main types
pub use builder::*;
pub use bundle::*;
pub use env::*;
pub use error::*;
pub use manifest::DependencyManifest;
pub use merge::{OutputOverlay, Overlay};
pub use mode::Mode;
pub use paths::PathTable;
pub use settings::ProjectSettings;

// Re-export discovery and validation
pub use discovery::{discover, Project, ProjectDiscovery};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
