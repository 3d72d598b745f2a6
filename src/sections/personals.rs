//! Personal details (`personals` section)

use crate::config::Section;
use serde::Serialize;

pub const SECTION: &str = "personals";

/// Fields the automation cannot proceed without.
pub const REQUIRED_FIELDS: [&str; 5] =
    ["first_name", "last_name", "phone_number", "current_city", "country"];

/// Personal values are strings only; anything else reads as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Personals {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub current_city: String,
    pub street: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub phone_country_code: String,
    pub preferred_email: String,
    pub preferred_location: String,
    pub ethnicity: String,
    pub gender: String,
    pub disability_status: String,
    pub veteran_status: String,
}

impl Personals {
    pub fn from_section(section: &Section<'_>) -> Self {
        let get = |key: &str| section.get_text(key, "");
        let current_city = get("current_city");
        Self {
            first_name: get("first_name"),
            middle_name: get("middle_name"),
            last_name: get("last_name"),
            phone_number: get("phone_number"),
            street: get("street"),
            state: get("state"),
            zipcode: get("zipcode"),
            country: get("country"),
            phone_country_code: get("phone_country_code"),
            preferred_email: get("preferred_email"),
            preferred_location: section.get_text("preferred_location", &current_city),
            ethnicity: get("ethnicity"),
            gender: get("gender"),
            disability_status: get("disability_status"),
            veteran_status: get("veteran_status"),
            current_city,
        }
    }

    /// Name parts joined with single spaces, skipping blanks.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
