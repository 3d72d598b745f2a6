//! job-applier-profile: profile resolution and resume facts for job-application automation
//!
//! Resolves the active profile document from the environment, exposes its
//! sections as typed settings with compiled-in defaults, and extracts
//! years-of-experience facts from resume plaintext.

pub mod config;
pub mod error;
pub mod resume;
pub mod sections;
pub mod utils;

pub use config::{AppLayout, EnvSnapshot, Profile, Section};
pub use error::{ProfileError, Result};
pub use resume::{ResumeIngestion, SkillYears};
pub use sections::Settings;
