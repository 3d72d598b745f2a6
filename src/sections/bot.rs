//! Bot behaviour and pacing (`settings` section)

use crate::config::Section;
use serde::Serialize;

pub const SECTION: &str = "settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotSettings {
    pub close_tabs: bool,
    pub follow_companies: bool,
    pub run_non_stop: bool,
    pub alternate_sortby: bool,
    pub cycle_date_posted: bool,
    pub stop_date_cycle_at_24hr: bool,

    /// 0 means unlimited.
    pub application_budget_per_run: i64,
    pub confirm_after_budget: bool,
    pub stagger_applications: bool,
    pub stagger_min_delay: i64,
    pub stagger_max_delay: i64,

    pub generated_resume_path: String,
    pub file_name: String,
    pub failed_file_name: String,
    pub logs_folder_path: String,

    pub click_gap: i64,
    pub run_in_background: bool,
    pub disable_extensions: bool,
    pub safe_mode: bool,
    pub smooth_scroll: bool,
    pub keep_screen_awake: bool,
    pub stealth_mode: bool,
    #[serde(rename = "showAiErrorAlerts")]
    pub show_ai_error_alerts: bool,
}

impl BotSettings {
    pub fn from_section(section: &Section<'_>) -> Self {
        let stagger_min_delay = section.get_int("stagger_min_delay", 10);
        // max never drops below min
        let stagger_max_delay = section.get_int("stagger_max_delay", 25).max(stagger_min_delay);

        Self {
            close_tabs: section.get_bool("close_tabs", false),
            follow_companies: section.get_bool("follow_companies", false),
            run_non_stop: section.get_bool("run_non_stop", false),
            alternate_sortby: section.get_bool("alternate_sortby", true),
            cycle_date_posted: section.get_bool("cycle_date_posted", true),
            stop_date_cycle_at_24hr: section.get_bool("stop_date_cycle_at_24hr", true),

            application_budget_per_run: section.get_int("application_budget_per_run", 20),
            confirm_after_budget: section.get_bool("confirm_after_budget", true),
            stagger_applications: section.get_bool("stagger_applications", true),
            stagger_min_delay,
            stagger_max_delay,

            generated_resume_path: section.get_str("generated_resume_path", "all resumes/"),
            file_name: section
                .get_str("file_name", "all excels/all_applied_applications_history.csv"),
            failed_file_name: section
                .get_str("failed_file_name", "all excels/all_failed_applications_history.csv"),
            logs_folder_path: section.get_str("logs_folder_path", "logs/"),

            click_gap: section.get_int("click_gap", 0),
            run_in_background: section.get_bool("run_in_background", false),
            disable_extensions: section.get_bool("disable_extensions", false),
            safe_mode: section.get_bool("safe_mode", true),
            smooth_scroll: section.get_bool("smooth_scroll", false),
            keep_screen_awake: section.get_bool("keep_screen_awake", true),
            stealth_mode: section.get_bool("stealth_mode", false),
            show_ai_error_alerts: section.get_bool("showAiErrorAlerts", true),
        }
    }

    pub fn has_budget(&self) -> bool {
        self.application_budget_per_run > 0
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self::from_section(&Section::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stagger_max_clamped_to_min() {
        let raw = json!({"stagger_min_delay": 30, "stagger_max_delay": "5"});
        let settings = BotSettings::from_section(&Section::new(raw.as_object().expect("object")));
        assert_eq!(settings.stagger_min_delay, 30);
        assert_eq!(settings.stagger_max_delay, 30);
    }

    #[test]
    fn test_unlimited_budget() {
        let raw = json!({"application_budget_per_run": 0, "safe_mode": "no"});
        let settings = BotSettings::from_section(&Section::new(raw.as_object().expect("object")));
        assert!(!settings.has_budget());
        assert!(!settings.safe_mode);
        assert!(BotSettings::default().has_budget());
    }
}
