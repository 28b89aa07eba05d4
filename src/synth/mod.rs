// src/synth/mod.rs
use crate::process::table::{Column, ColumnData, TabularDataset};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

pub const DEFAULT_ROW_COUNT: usize = 500;

static ROLES: &[&str] = &[
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
    "BI Developer",
];
static COUNTRIES: &[&str] = &[
    "USA",
    "UK",
    "Canada",
    "Germany",
    "France",
    "Australia",
    "India",
    "Japan",
    "China",
    "Brazil",
];
static EDUCATION_LEVELS: &[&str] = &["Bachelor's", "Master's", "PhD", "Self-taught", "Bootcamp"];
static LANGUAGES: &[&str] = &["Python", "R", "SQL", "Java", "JavaScript", "C++", "Julia"];
static CAREER_SWITCH: &[&str] = &["Yes", "No"];
static GENDERS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];
static REMOTE_WORK: &[&str] = &["Fully Remote", "Hybrid", "In Office"];

/// Generate a complete survey dataset with every canonical field populated.
/// This is the terminal fallback of the acquisition chain, so it cannot
/// fail.
///
/// With a seed the output is reproducible bit-for-bit across runs and
/// platforms: `StdRng` is a portable ChaCha-based generator and the columns
/// are sampled in a fixed order. Without a seed the generator is seeded
/// from entropy. The language column joins 1–4 independent draws, so a row
/// may list the same language twice.
pub fn generate(row_count: usize, seed: Option<u64>) -> TabularDataset {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(row_count, seeded = seed.is_some(), "generating synthetic dataset");

    let columns = vec![
        pick_column("Role", ROLES, row_count, &mut rng),
        pick_column("Country", COUNTRIES, row_count, &mut rng),
        pick_column("Education", EDUCATION_LEVELS, row_count, &mut rng),
        int_column("YearsExperience", 0..20, row_count, &mut rng),
        int_column("Salary", 40_000..150_000, row_count, &mut rng),
        int_column("WorkLifeBalance", 1..11, row_count, &mut rng),
        int_column("JobSatisfaction", 1..11, row_count, &mut rng),
        pick_column("CareerSwitch", CAREER_SWITCH, row_count, &mut rng),
        languages_column(row_count, &mut rng),
        int_column("Age", 22..65, row_count, &mut rng),
        pick_column("Gender", GENDERS, row_count, &mut rng),
        pick_column("RemoteWork", REMOTE_WORK, row_count, &mut rng),
    ];

    TabularDataset::from_columns(columns)
        .expect("generated columns share one row count and distinct names")
}

fn pick_column(name: &str, choices: &[&str], row_count: usize, rng: &mut StdRng) -> Column {
    let values = (0..row_count)
        .map(|_| choices[rng.gen_range(0..choices.len())].to_string())
        .collect();
    Column::new(name, ColumnData::Text(values))
}

fn int_column(name: &str, range: std::ops::Range<i64>, row_count: usize, rng: &mut StdRng) -> Column {
    let values = (0..row_count).map(|_| rng.gen_range(range.clone())).collect();
    Column::new(name, ColumnData::Int(values))
}

fn languages_column(row_count: usize, rng: &mut StdRng) -> Column {
    let values = (0..row_count)
        .map(|_| {
            let picks = rng.gen_range(1..5);
            (0..picks)
                .map(|_| LANGUAGES[rng.gen_range(0..LANGUAGES.len())])
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    Column::new("ProgrammingLanguages", ColumnData::Text(values))
}
