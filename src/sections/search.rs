//! Job search preferences (`search` section)

use crate::config::Section;
use serde::Serialize;

pub const SECTION: &str = "search";

pub const DEFAULT_SEARCH_TERMS: &[&str] = &[
    // Enterprise & digital architecture
    "Digital Architect",
    "Enterprise Architect",
    "Principal Enterprise Architect",
    "Director of Enterprise Architecture",
    // Cloud architecture leadership
    "Chief Cloud Architect",
    "Director of Cloud Architecture",
    "Director of Cloud Engineering",
    "Director of Cloud Infrastructure",
    "Director of Cloud Strategy",
    // Platform, DevOps and SRE
    "Head of Platform Engineering",
    "Director of Platform Engineering",
    "Director of Site Reliability Engineering",
    "Director of DevOps",
    "DevOps Transformation Lead",
    // Technology & digital strategy
    "Director of Technology Strategy",
    "Director of Digital Transformation",
    "Technology Strategy Director",
    "Infrastructure Modernization Lead",
    "Director of Digital Strategy",
    "Head of Digital Strategy",
    "Director of IT Strategy",
    "Information Technology Operations Manager",
    "Director of Technology Innovation",
    // Data & integration leadership
    "Enterprise Integration Director",
    "Director of Data Platforms",
    // IT leadership
    "Head of IT Strategy",
    "Director of IT Operations",
];

pub const DEFAULT_BAD_WORDS: &[&str] = &[
    "US Citizen",
    "USA Citizen",
    "No C2C",
    "No Corp2Corp",
    "Embedded Programming",
    "Ruby",
    "CNC",
];

pub const DEFAULT_COMPANY_BAD_WORDS: &[&str] = &["Crossover"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPreferences {
    pub search_terms: Vec<String>,
    pub search_location: String,
    pub switch_number: i64,
    pub randomize_search_order: bool,

    pub sort_by: String,
    pub date_posted: String,
    pub salary: String,
    pub easy_apply_only: bool,

    pub experience_level: Vec<String>,
    pub job_type: Vec<String>,
    pub on_site: Vec<String>,
    pub companies: Vec<String>,
    pub location: Vec<String>,
    pub industry: Vec<String>,
    pub job_function: Vec<String>,
    pub job_titles: Vec<String>,
    pub benefits: Vec<String>,
    pub commitments: Vec<String>,

    pub under_10_applicants: bool,
    pub in_your_network: bool,
    pub fair_chance_employer: bool,
    pub pause_after_filters: bool,

    pub about_company_bad_words: Vec<String>,
    pub about_company_good_words: Vec<String>,
    pub bad_words: Vec<String>,

    pub security_clearance: bool,
    pub did_masters: bool,
    pub current_experience: i64,
}

impl SearchPreferences {
    pub fn from_section(section: &Section<'_>) -> Self {
        let list = |key: &str| section.get_list(key, &[]);
        Self {
            search_terms: section.get_list("search_terms", DEFAULT_SEARCH_TERMS),
            search_location: section.get_str("search_location", "Ireland"),
            switch_number: section.get_int("switch_number", 2),
            randomize_search_order: section.get_bool("randomize_search_order", true),

            sort_by: section.get_str("sort_by", ""),
            date_posted: section.get_str("date_posted", "Past week"),
            salary: section.get_str("salary", ""),
            easy_apply_only: section.get_bool("easy_apply_only", true),

            experience_level: list("experience_level"),
            job_type: list("job_type"),
            on_site: list("on_site"),
            companies: list("companies"),
            location: list("location"),
            industry: list("industry"),
            job_function: list("job_function"),
            job_titles: list("job_titles"),
            benefits: list("benefits"),
            commitments: list("commitments"),

            under_10_applicants: section.get_bool("under_10_applicants", false),
            in_your_network: section.get_bool("in_your_network", false),
            fair_chance_employer: section.get_bool("fair_chance_employer", false),
            pause_after_filters: section.get_bool("pause_after_filters", true),

            about_company_bad_words: section
                .get_list("about_company_bad_words", DEFAULT_COMPANY_BAD_WORDS),
            about_company_good_words: list("about_company_good_words"),
            bad_words: section.get_list("bad_words", DEFAULT_BAD_WORDS),

            security_clearance: section.get_bool("security_clearance", false),
            did_masters: section.get_bool("did_masters", true),
            current_experience: section.get_int("current_experience", 20),
        }
    }
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self::from_section(&Section::empty())
    }
}
