//! Path, show and check commands

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use job_applier_profile::sections::bot::{self, BotSettings};
use job_applier_profile::sections::personals::{self, Personals};
use job_applier_profile::{Profile, Settings};

#[derive(Clone, Copy, ValueEnum)]
pub enum SectionName {
    Personals,
    Search,
    Secrets,
    Settings,
    Resume,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Only print this section
    #[arg(short, long, value_enum)]
    pub section: Option<SectionName>,
}

pub fn run_path(profile: &Profile) -> Result<()> {
    let state = if profile.path().is_file() { "" } else { " (missing, using defaults)" };
    println!("{}{}", profile.path().display(), state);
    Ok(())
}

pub fn run(args: ShowArgs, profile: &Profile) -> Result<()> {
    let settings = Settings::from_profile(profile)?;
    let rendered = match args.section {
        None => serde_json::to_string_pretty(&settings)?,
        Some(SectionName::Personals) => serde_json::to_string_pretty(&settings.personals)?,
        Some(SectionName::Search) => serde_json::to_string_pretty(&settings.search)?,
        Some(SectionName::Secrets) => serde_json::to_string_pretty(&settings.secrets)?,
        Some(SectionName::Settings) => serde_json::to_string_pretty(&settings.settings)?,
        Some(SectionName::Resume) => serde_json::to_string_pretty(&settings.resume)?,
    };
    println!("{}", rendered);
    Ok(())
}

pub fn run_check(profile: &Profile) -> Result<()> {
    let missing = profile.list_missing_fields(personals::SECTION, &personals::REQUIRED_FIELDS)?;
    if !missing.is_empty() {
        bail!("Missing required personal fields: {}", missing.join(", "));
    }

    let personals = Personals::from_section(&profile.load_section(personals::SECTION)?);
    println!("Profile OK for {}", personals.full_name());

    let settings = BotSettings::from_section(&profile.load_section(bot::SECTION)?);
    if settings.has_budget() {
        println!("Application budget: {} per run", settings.application_budget_per_run);
    } else {
        println!("Application budget: unlimited");
    }
    Ok(())
}
