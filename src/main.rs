//! job-profile: inspect the resolved job-applier profile
//!
//! Prints the active profile path, typed settings, and resume-derived facts
//! the automation layer would consume.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
