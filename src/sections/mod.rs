//! Typed settings built from profile sections
//!
//! Each section struct pairs profile overrides with compiled-in defaults. The
//! automation layer reads these as plain values.

pub mod bot;
pub mod personals;
pub mod resume;
pub mod search;
pub mod secrets;

pub use bot::BotSettings;
pub use personals::Personals;
pub use resume::ResumeSettings;
pub use search::SearchPreferences;
pub use secrets::Secrets;

use crate::config::Profile;
use crate::error::Result;
use serde::Serialize;

/// All typed sections of one profile.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub personals: Personals,
    pub search: SearchPreferences,
    pub secrets: Secrets,
    pub settings: BotSettings,
    pub resume: ResumeSettings,
}

impl Settings {
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        Ok(Self {
            personals: Personals::from_section(&profile.load_section(personals::SECTION)?),
            search: SearchPreferences::from_section(&profile.load_section(search::SECTION)?),
            secrets: Secrets::from_section(&profile.load_section(secrets::SECTION)?),
            settings: BotSettings::from_section(&profile.load_section(bot::SECTION)?),
            resume: ResumeSettings::from_sections(
                &profile.load_section(resume::SECTION)?,
                &profile.load_section(resume::INGESTION_SECTION)?,
            ),
        })
    }
}
