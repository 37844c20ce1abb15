//! The condition catalog.
//!
//! The reference catalog is a `static` table compiled into the binary. It is never mutated, so
//! any number of threads may read it concurrently without locking.

use crate::{SymptomError, SymptomResult};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use symcheck_types::normalise;

/// A named medical condition and its symptom profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// Human-readable name, unique across the catalog.
    pub name: &'static str,

    /// Normalised symptom tags fully describing the condition.
    pub symptoms: &'static [&'static str],

    /// The most characteristic subset of `symptoms`.
    ///
    /// Not used for scoring.
    pub common_symptoms: &'static [&'static str],
}

/// The twenty common conditions shipped with SymCheck, in tie-break order.
pub static REFERENCE_CONDITIONS: [Condition; 20] = [
    Condition {
        name: "Flu (Influenza)",
        symptoms: &[
            "fever",
            "cough",
            "sore throat",
            "tiredness",
            "body aches",
            "headache",
            "chills",
            "runny nose",
        ],
        common_symptoms: &["fever", "cough", "sore throat", "tiredness"],
    },
    Condition {
        name: "Migraine",
        symptoms: &[
            "headache",
            "nausea",
            "vomiting",
            "light sensitivity",
            "sound sensitivity",
            "visual disturbances",
            "dizziness",
        ],
        common_symptoms: &["headache", "nausea", "light sensitivity"],
    },
    Condition {
        name: "Type 2 Diabetes",
        symptoms: &[
            "frequent urination",
            "thirst",
            "fatigue",
            "blurred vision",
            "slow healing",
            "weight loss",
            "tingling hands",
            "tingling feet",
        ],
        common_symptoms: &["frequent urination", "thirst", "fatigue", "blurred vision"],
    },
    Condition {
        name: "Common Cold",
        symptoms: &[
            "runny nose",
            "sneezing",
            "sore throat",
            "cough",
            "congestion",
            "mild headache",
            "mild fever",
        ],
        common_symptoms: &["runny nose", "sneezing", "sore throat", "cough"],
    },
    Condition {
        name: "COVID-19",
        symptoms: &[
            "fever",
            "dry cough",
            "tiredness",
            "loss of taste",
            "loss of smell",
            "difficulty breathing",
            "chest pain",
            "body aches",
        ],
        common_symptoms: &["fever", "dry cough", "tiredness", "loss of taste"],
    },
    Condition {
        name: "Allergic Rhinitis",
        symptoms: &[
            "sneezing",
            "runny nose",
            "itchy eyes",
            "nasal congestion",
            "postnasal drip",
            "cough",
            "fatigue",
        ],
        common_symptoms: &["sneezing", "runny nose", "itchy eyes", "nasal congestion"],
    },
    Condition {
        name: "Asthma",
        symptoms: &[
            "wheezing",
            "shortness of breath",
            "chest tightness",
            "cough",
            "difficulty breathing",
            "rapid breathing",
        ],
        common_symptoms: &["wheezing", "shortness of breath", "chest tightness", "cough"],
    },
    Condition {
        name: "Hypertension (High Blood Pressure)",
        symptoms: &[
            "headache",
            "dizziness",
            "blurred vision",
            "chest pain",
            "shortness of breath",
            "nosebleeds",
            "fatigue",
        ],
        common_symptoms: &["headache", "dizziness", "blurred vision"],
    },
    Condition {
        name: "Gastroenteritis (Stomach Flu)",
        symptoms: &[
            "diarrhea",
            "nausea",
            "vomiting",
            "stomach cramps",
            "fever",
            "dehydration",
            "loss of appetite",
        ],
        common_symptoms: &["diarrhea", "nausea", "vomiting", "stomach cramps"],
    },
    Condition {
        name: "Urinary Tract Infection (UTI)",
        symptoms: &[
            "burning urination",
            "frequent urination",
            "cloudy urine",
            "pelvic pain",
            "strong urge to urinate",
            "blood in urine",
        ],
        common_symptoms: &["burning urination", "frequent urination", "pelvic pain"],
    },
    Condition {
        name: "Anxiety Disorder",
        symptoms: &[
            "excessive worry",
            "restlessness",
            "fatigue",
            "difficulty concentrating",
            "irritability",
            "muscle tension",
            "sleep problems",
        ],
        common_symptoms: &["excessive worry", "restlessness", "fatigue"],
    },
    Condition {
        name: "Depression",
        symptoms: &[
            "persistent sadness",
            "loss of interest",
            "fatigue",
            "sleep problems",
            "appetite changes",
            "difficulty concentrating",
            "feelings of worthlessness",
        ],
        common_symptoms: &["persistent sadness", "loss of interest", "fatigue"],
    },
    Condition {
        name: "Pneumonia",
        symptoms: &[
            "cough",
            "fever",
            "chest pain",
            "difficulty breathing",
            "fatigue",
            "sweating",
            "chills",
            "confusion",
        ],
        common_symptoms: &["cough", "fever", "chest pain", "difficulty breathing"],
    },
    Condition {
        name: "Bronchitis",
        symptoms: &[
            "cough",
            "mucus production",
            "chest discomfort",
            "fatigue",
            "shortness of breath",
            "mild fever",
        ],
        common_symptoms: &["cough", "mucus production", "chest discomfort"],
    },
    Condition {
        name: "Anemia",
        symptoms: &[
            "fatigue",
            "weakness",
            "pale skin",
            "dizziness",
            "cold hands",
            "cold feet",
            "headache",
            "irregular heartbeat",
        ],
        common_symptoms: &["fatigue", "weakness", "pale skin", "dizziness"],
    },
    Condition {
        name: "Hypothyroidism",
        symptoms: &[
            "fatigue",
            "weight gain",
            "cold intolerance",
            "constipation",
            "dry skin",
            "hair loss",
            "depression",
            "muscle weakness",
        ],
        common_symptoms: &["fatigue", "weight gain", "cold intolerance"],
    },
    Condition {
        name: "Hyperthyroidism",
        symptoms: &[
            "weight loss",
            "rapid heartbeat",
            "increased appetite",
            "nervousness",
            "tremors",
            "sweating",
            "heat intolerance",
            "fatigue",
        ],
        common_symptoms: &["weight loss", "rapid heartbeat", "nervousness"],
    },
    Condition {
        name: "Sinusitis",
        symptoms: &[
            "facial pain",
            "nasal congestion",
            "thick nasal discharge",
            "reduced smell",
            "cough",
            "headache",
            "ear pressure",
        ],
        common_symptoms: &["facial pain", "nasal congestion", "headache"],
    },
    Condition {
        name: "Strep Throat",
        symptoms: &[
            "severe sore throat",
            "fever",
            "swollen tonsils",
            "white patches throat",
            "swollen lymph nodes",
            "headache",
            "rash",
        ],
        common_symptoms: &["severe sore throat", "fever", "swollen tonsils"],
    },
    Condition {
        name: "Mononucleosis",
        symptoms: &[
            "severe fatigue",
            "fever",
            "sore throat",
            "swollen lymph nodes",
            "swollen tonsils",
            "headache",
            "rash",
        ],
        common_symptoms: &[
            "severe fatigue",
            "fever",
            "sore throat",
            "swollen lymph nodes",
        ],
    },
];

/// Read-only view over a table of conditions.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    conditions: &'a [Condition],
}

impl Catalog<'static> {
    /// The built-in reference catalog.
    pub fn reference() -> Self {
        Self {
            conditions: &REFERENCE_CONDITIONS,
        }
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> Catalog<'a> {
    /// Wrap a caller-supplied table after checking the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns `SymptomError::InvalidCatalog` if:
    /// - the table is empty,
    /// - two conditions share a name,
    /// - a name or tag is blank, or a tag is not in normalised form,
    /// - a common symptom is missing from the condition's symptoms.
    pub fn try_new(conditions: &'a [Condition]) -> SymptomResult<Self> {
        validate_conditions(conditions)?;
        Ok(Self { conditions })
    }

    /// Every condition, in stable catalog order.
    pub fn all(&self) -> &'a [Condition] {
        self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Look a condition up by its exact name.
    pub fn find(&self, name: &str) -> Option<&'a Condition> {
        self.conditions.iter().find(|c| c.name == name)
    }

    /// The union of every condition's symptoms, deduplicated and sorted.
    ///
    /// Consumed by suggestion providers for autocomplete.
    pub fn all_symptom_tags(&self) -> Vec<&'static str> {
        self.conditions
            .iter()
            .flat_map(|c| c.symptoms.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn validate_conditions(conditions: &[Condition]) -> SymptomResult<()> {
    if conditions.is_empty() {
        return Err(SymptomError::InvalidCatalog(
            "catalog must contain at least one condition".into(),
        ));
    }

    let mut names = HashSet::new();
    for condition in conditions {
        if condition.name.trim().is_empty() {
            return Err(SymptomError::InvalidCatalog(
                "condition name cannot be empty".into(),
            ));
        }
        if !names.insert(condition.name) {
            return Err(SymptomError::InvalidCatalog(format!(
                "duplicate condition name: {}",
                condition.name
            )));
        }

        for tag in condition.symptoms.iter().chain(condition.common_symptoms) {
            if tag.is_empty() || normalise(tag) != *tag {
                return Err(SymptomError::InvalidCatalog(format!(
                    "{}: symptom {tag:?} is not a normalised tag",
                    condition.name
                )));
            }
        }

        if let Some(missing) = condition
            .common_symptoms
            .iter()
            .find(|tag| !condition.symptoms.contains(*tag))
        {
            return Err(SymptomError::InvalidCatalog(format!(
                "{}: common symptom {missing:?} is not listed in its symptoms",
                condition.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_satisfies_invariants() {
        let catalog = Catalog::try_new(&REFERENCE_CONDITIONS).expect("reference catalog is valid");
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.all()[0].name, "Flu (Influenza)");
        assert_eq!(catalog.all()[19].name, "Mononucleosis");
    }

    #[test]
    fn all_symptom_tags_is_sorted_and_unique() {
        let tags = Catalog::reference().all_symptom_tags();

        let mut expected = tags.clone();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(tags, expected);

        assert!(tags.contains(&"fever"));
        assert!(tags.contains(&"white patches throat"));
        assert_eq!(tags.iter().filter(|t| **t == "fatigue").count(), 1);
        assert_eq!(tags.first(), Some(&"appetite changes"));
    }

    #[test]
    fn find_looks_up_by_exact_name() {
        let catalog = Catalog::reference();
        let flu = catalog.find("Flu (Influenza)").expect("flu is catalogued");
        assert_eq!(flu.symptoms.len(), 8);
        assert!(catalog.find("flu").is_none());
    }

    #[test]
    fn try_new_rejects_empty_table() {
        let err = Catalog::try_new(&[]).expect_err("empty catalog should fail");
        assert!(matches!(err, SymptomError::InvalidCatalog(_)));
    }

    #[test]
    fn try_new_rejects_duplicate_names() {
        let conditions = [
            Condition {
                name: "A",
                symptoms: &["x"],
                common_symptoms: &[],
            },
            Condition {
                name: "A",
                symptoms: &["y"],
                common_symptoms: &[],
            },
        ];
        let err = Catalog::try_new(&conditions).expect_err("duplicate names should fail");
        match err {
            SymptomError::InvalidCatalog(msg) => assert!(msg.contains("duplicate")),
            other => panic!("expected InvalidCatalog error, got {other:?}"),
        }
    }

    #[test]
    fn try_new_rejects_common_symptom_outside_profile() {
        let conditions = [Condition {
            name: "A",
            symptoms: &["x"],
            common_symptoms: &["y"],
        }];
        let err = Catalog::try_new(&conditions).expect_err("stray common symptom should fail");
        match err {
            SymptomError::InvalidCatalog(msg) => assert!(msg.contains("\"y\"")),
            other => panic!("expected InvalidCatalog error, got {other:?}"),
        }
    }

    #[test]
    fn try_new_rejects_unnormalised_tags() {
        let conditions = [Condition {
            name: "A",
            symptoms: &["Fever "],
            common_symptoms: &[],
        }];
        assert!(Catalog::try_new(&conditions).is_err());
    }
}
