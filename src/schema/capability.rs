use crate::process::table::TabularDataset;

static EDUCATION_ALIASES: &[&str] = &["education", "highest education", "degree"];
static SALARY_ALIASES: &[&str] = &["salary", "yearly salary", "annual salary", "income"];
static EXPERIENCE_ALIASES: &[&str] = &[
    "years experience",
    "yearsexperience",
    "years of experience",
    "experience",
];
static ROLE_ALIASES: &[&str] = &["role", "job title", "position", "title"];
static COUNTRY_ALIASES: &[&str] = &["country", "location", "region"];
static SATISFACTION_ALIASES: &[&str] = &["satisfaction", "job satisfaction", "jobsatisfaction"];
static WORK_LIFE_BALANCE_ALIASES: &[&str] =
    &["work life balance", "worklifebalance", "work-life balance"];
static LANGUAGES_ALIASES: &[&str] = &[
    "programming languages",
    "programminglanguages",
    "languages",
    "favorite programming language",
];

/// Which canonical fields are present and usable in a dataset. Computed
/// once, after normalization, and consumed as plain data by whatever sits
/// downstream; a false flag means "skip that view", never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    pub education: bool,
    pub salary: bool,
    pub experience: bool,
    pub role: bool,
    pub country: bool,
    pub satisfaction: bool,
    pub work_life_balance: bool,
    pub languages: bool,
}

impl CapabilitySet {
    /// Derive the flag set from the dataset's column names. Matching is a
    /// case-insensitive exact test against each field's alias list; every
    /// alias list contains the canonical name itself, so detection after
    /// normalization always agrees with the canonical vocabulary. Total
    /// over any dataset shape, including zero columns.
    pub fn detect(dataset: &TabularDataset) -> Self {
        let lower: Vec<String> = dataset
            .column_names()
            .map(|name| name.to_lowercase())
            .collect();
        let has = |aliases: &[&str]| lower.iter().any(|name| aliases.contains(&name.as_str()));

        Self {
            education: has(EDUCATION_ALIASES),
            salary: has(SALARY_ALIASES),
            experience: has(EXPERIENCE_ALIASES),
            role: has(ROLE_ALIASES),
            country: has(COUNTRY_ALIASES),
            satisfaction: has(SATISFACTION_ALIASES),
            work_life_balance: has(WORK_LIFE_BALANCE_ALIASES),
            languages: has(LANGUAGES_ALIASES),
        }
    }

    /// Name/value pairs for logging and display.
    pub fn flags(&self) -> [(&'static str, bool); 8] {
        [
            ("education", self.education),
            ("salary", self.salary),
            ("experience", self.experience),
            ("role", self.role),
            ("country", self.country),
            ("satisfaction", self.satisfaction),
            ("work_life_balance", self.work_life_balance),
            ("languages", self.languages),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::table::{Column, ColumnData, TabularDataset};
    use crate::schema::normalize;

    fn dataset(names: &[&str]) -> TabularDataset {
        let columns = names
            .iter()
            .map(|name| Column::new(*name, ColumnData::Int(vec![1])))
            .collect();
        TabularDataset::from_columns(columns).unwrap()
    }

    #[test]
    fn zero_columns_means_all_flags_false() {
        let ds = TabularDataset::from_columns(Vec::new()).unwrap();
        assert_eq!(CapabilitySet::detect(&ds), CapabilitySet::default());
    }

    #[test]
    fn detects_normalized_survey_columns() {
        let mut ds = dataset(&["Job Title", "Annual Salary", "Years of Experience"]);
        normalize(&mut ds);

        let caps = CapabilitySet::detect(&ds);
        assert!(caps.role);
        assert!(caps.salary);
        assert!(caps.experience);
        assert!(!caps.education);
        assert!(!caps.country);
        assert!(!caps.satisfaction);
        assert!(!caps.work_life_balance);
        assert!(!caps.languages);
    }

    #[test]
    fn alias_match_is_exact_and_case_insensitive() {
        assert!(CapabilitySet::detect(&dataset(&["REGION"])).country);
        assert!(CapabilitySet::detect(&dataset(&["WorkLifeBalance"])).work_life_balance);
        // Substring is not enough for detection, unlike normalization.
        assert!(!CapabilitySet::detect(&dataset(&["My Salary Notes"])).salary);
    }
}
