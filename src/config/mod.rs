//! Profile resolution and loading
//!
//! Resolves which profile document is active (explicit env path > named
//! profile > default), loads it once, and exposes its sections through typed
//! accessors that degrade to compiled-in defaults.

pub mod accessors;
pub mod env;
pub mod loader;
pub mod resolver;

pub use accessors::{Section, TermList};
pub use env::EnvSnapshot;
pub use loader::{Document, Profile};
pub use resolver::{resolve_profile_path, AppLayout};
