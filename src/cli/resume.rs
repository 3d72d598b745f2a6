//! Resume ingestion commands

use anyhow::{bail, Context, Result};
use clap::Args;
use job_applier_profile::{Profile, ResumeIngestion};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct YearsArgs {
    /// Question label, e.g. "How many years of Python experience do you have?"
    #[arg(value_name = "LABEL")]
    pub label: String,
}

#[derive(Args)]
pub struct ComposeArgs {
    /// Base text to extend
    #[arg(long, value_name = "TEXT", conflicts_with = "base_file")]
    pub base: Option<String>,

    /// Read the base text from a file
    #[arg(long, value_name = "PATH")]
    pub base_file: Option<PathBuf>,
}

pub fn run_skills(profile: &Profile) -> Result<()> {
    let ingestion = ResumeIngestion::new(profile);
    let skill_years = ingestion.skill_years()?;
    if skill_years.is_empty() {
        println!("No skills found.");
        return Ok(());
    }
    for (skill, years) in skill_years.iter() {
        println!("{}: {}", skill, years);
    }
    Ok(())
}

pub fn run_years(args: YearsArgs, profile: &Profile) -> Result<()> {
    let ingestion = ResumeIngestion::new(profile);
    match ingestion.find_years_for_label(&args.label)? {
        Some(years) => {
            println!("{}", years);
            Ok(())
        }
        None => bail!("No known skill matches label: {}", args.label),
    }
}

pub fn run_compose(args: ComposeArgs, profile: &Profile) -> Result<()> {
    let base = match (args.base, args.base_file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed reading base text: {}", path.display()))?,
        (None, None) => String::new(),
    };

    let ingestion = ResumeIngestion::new(profile);
    println!("{}", ingestion.compose_user_information(&base)?);
    Ok(())
}
