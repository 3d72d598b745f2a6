//! Resume ingestion
//!
//! Loads resume plaintext, infers years of experience per configured skill,
//! and composes an information block for answering application questions.
//! Text and skill map are computed once per [`ResumeIngestion`].

pub mod compose;
pub mod skills;
pub mod text;

pub use skills::SkillYears;

use crate::config::Profile;
use crate::error::Result;
use crate::sections::resume::{IngestionConfig, INGESTION_SECTION};
use once_cell::sync::OnceCell;

pub struct ResumeIngestion<'p> {
    profile: &'p Profile,
    config: OnceCell<IngestionConfig>,
    text: OnceCell<String>,
    skill_years: OnceCell<SkillYears>,
}

impl<'p> ResumeIngestion<'p> {
    pub fn new(profile: &'p Profile) -> Self {
        Self {
            profile,
            config: OnceCell::new(),
            text: OnceCell::new(),
            skill_years: OnceCell::new(),
        }
    }

    pub fn config(&self) -> Result<&IngestionConfig> {
        self.config.get_or_try_init(|| {
            let section = self.profile.load_section(INGESTION_SECTION)?;
            Ok(IngestionConfig::from_section(&section))
        })
    }

    /// Resume plaintext, or empty when none is configured or found.
    pub fn resume_text(&self) -> Result<&str> {
        let config = self.config()?;
        let text = self.text.get_or_init(|| {
            text::load_resume_text(self.profile.root(), self.profile.home(), config)
        });
        Ok(text.as_str())
    }

    pub fn skill_years(&self) -> Result<&SkillYears> {
        let text = self.resume_text()?;
        let config = self.config()?;
        Ok(self.skill_years.get_or_init(|| skills::extract_skill_years(text, config)))
    }

    /// Years for the first known skill mentioned in a question label.
    pub fn find_years_for_label(&self, label: &str) -> Result<Option<&str>> {
        Ok(self.skill_years()?.find_for_label(label))
    }

    pub fn compose_user_information(&self, base_text: &str) -> Result<String> {
        let text = self.resume_text()?;
        let skill_years = self.skill_years()?;
        let config = self.config()?;
        Ok(compose::compose(base_text, text, skill_years, &config.highlights))
    }
}
