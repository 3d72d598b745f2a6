//! Information block composition

use crate::resume::skills::SkillYears;

pub const INTRO_WORD_LIMIT: usize = 80;
pub const SKILLS_HEADING: &str = "Core Experience Highlights:";
pub const HIGHLIGHTS_HEADING: &str = "Additional Highlights:";

/// The first `limit` whitespace-delimited words, single-spaced.
pub fn extract_intro(text: &str, limit: usize) -> String {
    text.split_whitespace().take(limit).collect::<Vec<_>>().join(" ")
}

/// Uppercase the first letter of each alphabetic run, lowercase the rest.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// One line per skill, sorted by skill key.
pub fn format_skill_summary(skill_years: &SkillYears) -> String {
    skill_years
        .sorted()
        .into_iter()
        .map(|(skill, years)| format!("{}: {} years of experience.", title_case(skill), years))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append generated resume facts to `base_text`.
///
/// With nothing generated, `base_text` comes back untouched.
pub fn compose(
    base_text: &str,
    resume_text: &str,
    skill_years: &SkillYears,
    highlights: &[String],
) -> String {
    let mut blocks: Vec<String> = Vec::new();

    let intro = extract_intro(resume_text, INTRO_WORD_LIMIT);
    if !intro.is_empty() {
        blocks.push(intro);
    }

    let summary = format_skill_summary(skill_years);
    if !summary.is_empty() {
        blocks.push(SKILLS_HEADING.to_string());
        blocks.push(summary);
    }

    if !highlights.is_empty() {
        blocks.push(HIGHLIGHTS_HEADING.to_string());
        blocks.extend(highlights.iter().cloned());
    }

    let generated = blocks.join("\n\n");
    let generated = generated.trim();
    if generated.is_empty() {
        return base_text.to_string();
    }

    let base = base_text.trim();
    if base.is_empty() {
        generated.to_string()
    } else {
        format!("{}\n\n{}", base, generated)
    }
}
