use crate::process::table::TabularDataset;
use std::collections::HashSet;
use tracing::debug;

/// A substring test against a lower-cased raw column name.
#[derive(Debug)]
enum Predicate {
    AnyOf(&'static [&'static str]),
    AllOf(&'static [&'static str]),
}

impl Predicate {
    fn matches(&self, lower: &str) -> bool {
        match self {
            Predicate::AnyOf(keywords) => keywords.iter().any(|k| lower.contains(k)),
            Predicate::AllOf(keywords) => keywords.iter().all(|k| lower.contains(k)),
        }
    }
}

struct KeywordRule {
    predicate: Predicate,
    canonical: &'static str,
}

/// Ordered rule table; the first matching rule wins, so order is part of
/// the contract. A name containing both `experience` and `role` is
/// `YearsExperience` only because that rule is tested first, and `language`
/// must be tested before `age` (which it contains).
static RULES: &[KeywordRule] = &[
    KeywordRule {
        predicate: Predicate::AnyOf(&["education", "degree"]),
        canonical: "Education",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["salary", "income"]),
        canonical: "Salary",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["experience"]),
        canonical: "YearsExperience",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["role", "title", "position"]),
        canonical: "Role",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["country", "location"]),
        canonical: "Country",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["satisfaction"]),
        canonical: "JobSatisfaction",
    },
    KeywordRule {
        predicate: Predicate::AllOf(&["work", "balance"]),
        canonical: "WorkLifeBalance",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["language", "programming"]),
        canonical: "ProgrammingLanguages",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["gender", "sex"]),
        canonical: "Gender",
    },
    KeywordRule {
        predicate: Predicate::AnyOf(&["age"]),
        canonical: "Age",
    },
];

/// The canonical name a raw column name maps to, if any rule matches.
pub fn canonical_for(raw: &str) -> Option<&'static str> {
    let lower = raw.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.predicate.matches(&lower))
        .map(|rule| rule.canonical)
}

/// Rename matched columns to their canonical names, in place. Columns are
/// never dropped, reordered, or retyped, and unmatched names stay as they
/// are.
///
/// When several columns map to the same canonical name, first-seen wins: a
/// column already bearing the canonical name keeps it, otherwise the
/// earliest claimant (dataset order) is renamed and later claimants keep
/// their raw names. Renaming therefore never produces a duplicate name,
/// and running it again is a no-op.
pub fn normalize(dataset: &mut TabularDataset) {
    let names: Vec<String> = dataset.column_names().map(str::to_owned).collect();

    let mut claimed: HashSet<&'static str> = HashSet::new();
    for name in &names {
        if let Some(canonical) = canonical_for(name) {
            if name == canonical {
                claimed.insert(canonical);
            }
        }
    }

    for (idx, name) in names.iter().enumerate() {
        let canonical = match canonical_for(name) {
            Some(c) if name != c => c,
            _ => continue,
        };
        if claimed.insert(canonical) {
            debug!(from = %name, to = canonical, "renaming column");
            dataset.rename_column(idx, canonical);
        }
    }
}
