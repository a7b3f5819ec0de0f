//! Disease registry and symptom vocabulary.
//!
//! The built-in registry is compiled in and shared process-wide through
//! [`KnowledgeBase::builtin`]. Alternative registries can be loaded from a
//! JSON document with the same shape; those go through validation first.

use crate::{DiagnosisError, Disease, Symptom};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

const SYMPTOMS: &[(&str, &str)] = &[
    ("demam", "Demam"),
    ("batuk", "Batuk"),
    ("sakit-kepala", "Sakit Kepala"),
    ("kelelahan", "Kelelahan"),
    ("nyeri-otot", "Nyeri Otot"),
    ("hidung-tersumbat", "Hidung Tersumbat"),
    ("sesak-napas", "Sesak Napas"),
    ("kehilangan-indra-penciuman", "Kehilangan Indra Penciuman/Perasa"),
    ("batuk-berdarah", "Batuk Berdarah"),
    ("berkeringat-malam", "Berkeringat di Malam Hari"),
    ("penurunan-berat-badan", "Penurunan Berat Badan"),
    ("nyeri-dada", "Nyeri Dada"),
    ("mengi", "Mengi (Napas Berbunyi)"),
    ("nyeri-wajah", "Nyeri Wajah/Sekitar Mata"),
    ("mual", "Mual"),
    ("muntah", "Muntah"),
    ("sensitif-cahaya", "Sensitif terhadap Cahaya"),
    ("pusing", "Pusing"),
];

struct DiseaseEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    symptoms: &'static [&'static str],
    prior: f64,
}

const DISEASES: &[DiseaseEntry] = &[
    DiseaseEntry {
        id: "flu",
        name: "Influenza (Flu)",
        description: "Infeksi virus yang menyerang sistem pernapasan",
        symptoms: &[
            "demam",
            "batuk",
            "sakit-kepala",
            "kelelahan",
            "nyeri-otot",
            "hidung-tersumbat",
        ],
        prior: 0.15,
    },
    DiseaseEntry {
        id: "covid",
        name: "COVID-19",
        description: "Infeksi virus SARS-CoV-2",
        symptoms: &[
            "demam",
            "batuk",
            "sesak-napas",
            "kelelahan",
            "kehilangan-indra-penciuman",
            "sakit-kepala",
        ],
        prior: 0.12,
    },
    DiseaseEntry {
        id: "tbc",
        name: "Tuberkulosis (TBC)",
        description: "Infeksi bakteri pada paru-paru",
        symptoms: &[
            "batuk",
            "batuk-berdarah",
            "demam",
            "berkeringat-malam",
            "penurunan-berat-badan",
            "kelelahan",
        ],
        prior: 0.08,
    },
    DiseaseEntry {
        id: "pneumonia",
        name: "Pneumonia",
        description: "Infeksi paru-paru yang menyebabkan peradangan",
        symptoms: &["demam", "batuk", "sesak-napas", "nyeri-dada", "kelelahan"],
        prior: 0.10,
    },
    DiseaseEntry {
        id: "bronkitis",
        name: "Bronkitis",
        description: "Peradangan pada bronkus (saluran udara ke paru-paru)",
        symptoms: &["batuk", "demam", "kelelahan", "sesak-napas", "nyeri-dada"],
        prior: 0.13,
    },
    DiseaseEntry {
        id: "asma",
        name: "Asma",
        description: "Penyakit kronis yang menyebabkan penyempitan saluran napas",
        symptoms: &["sesak-napas", "batuk", "mengi", "nyeri-dada", "kelelahan"],
        prior: 0.11,
    },
    DiseaseEntry {
        id: "sinusitis",
        name: "Sinusitis",
        description: "Peradangan atau pembengkakan pada jaringan sinus",
        symptoms: &["sakit-kepala", "hidung-tersumbat", "nyeri-wajah", "demam", "batuk"],
        prior: 0.14,
    },
    DiseaseEntry {
        id: "migrain",
        name: "Migrain",
        description: "Sakit kepala berat yang sering disertai mual",
        symptoms: &["sakit-kepala", "mual", "muntah", "sensitif-cahaya", "pusing"],
        prior: 0.09,
    },
];

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(|| KnowledgeBase {
    symptoms: SYMPTOMS
        .iter()
        .map(|(id, label)| Symptom::new(*id, *label))
        .collect(),
    diseases: DISEASES
        .iter()
        .map(|d| Disease {
            id: d.id.to_string(),
            name: d.name.to_string(),
            description: d.description.to_string(),
            symptoms: d.symptoms.iter().map(|s| s.to_string()).collect(),
            prior: d.prior,
        })
        .collect(),
});

/// Read-only registry of diseases over a fixed symptom vocabulary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeBase {
    symptoms: Vec<Symptom>,
    diseases: Vec<Disease>,
}

/// Unvalidated on-disk shape of a knowledge base
#[derive(Deserialize)]
struct KnowledgeBaseDocument {
    symptoms: Vec<Symptom>,
    diseases: Vec<Disease>,
}

impl<'de> Deserialize<'de> for KnowledgeBase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = KnowledgeBaseDocument::deserialize(deserializer)?;
        KnowledgeBase::new(doc.symptoms, doc.diseases).map_err(serde::de::Error::custom)
    }
}

impl KnowledgeBase {
    /// The compiled-in registry (8 diseases, 18 symptoms)
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Build a registry, checking ids, symptom references and priors.
    pub fn new(symptoms: Vec<Symptom>, diseases: Vec<Disease>) -> Result<Self, DiagnosisError> {
        if symptoms.is_empty() {
            return Err(invalid("symptom vocabulary is empty"));
        }
        if diseases.is_empty() {
            return Err(invalid("disease registry is empty"));
        }

        let mut vocabulary = HashSet::with_capacity(symptoms.len());
        for symptom in &symptoms {
            if symptom.id.trim().is_empty() {
                return Err(invalid("symptom with empty id"));
            }
            if !vocabulary.insert(symptom.id.as_str()) {
                return Err(invalid(format!("duplicate symptom id '{}'", symptom.id)));
            }
        }

        let mut disease_ids = HashSet::with_capacity(diseases.len());
        for disease in &diseases {
            if disease.id.trim().is_empty() {
                return Err(invalid("disease with empty id"));
            }
            if !disease_ids.insert(disease.id.as_str()) {
                return Err(invalid(format!("duplicate disease id '{}'", disease.id)));
            }
            if !disease.prior.is_finite() || disease.prior <= 0.0 || disease.prior >= 1.0 {
                return Err(invalid(format!(
                    "disease '{}' has prior {} outside (0, 1)",
                    disease.id, disease.prior
                )));
            }

            let mut seen = HashSet::with_capacity(disease.symptoms.len());
            for symptom_id in &disease.symptoms {
                if !vocabulary.contains(symptom_id.as_str()) {
                    return Err(invalid(format!(
                        "disease '{}' references unknown symptom '{}'",
                        disease.id, symptom_id
                    )));
                }
                if !seen.insert(symptom_id.as_str()) {
                    return Err(invalid(format!(
                        "disease '{}' lists symptom '{}' twice",
                        disease.id, symptom_id
                    )));
                }
            }
        }

        Ok(Self { symptoms, diseases })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DiagnosisError> {
        let doc: KnowledgeBaseDocument = serde_json::from_str(json)?;
        Self::new(doc.symptoms, doc.diseases)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DiagnosisError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let kb = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded knowledge base from {} ({} symptoms, {} diseases)",
            path.display(),
            kb.symptoms.len(),
            kb.diseases.len()
        );
        Ok(kb)
    }

    /// Symptom vocabulary in canonical feature order
    pub fn list_symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Disease registry in registration order
    pub fn list_diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    pub fn contains_symptom(&self, id: &str) -> bool {
        self.symptom(id).is_some()
    }
}

fn invalid(message: impl Into<String>) -> DiagnosisError {
    DiagnosisError::InvalidKnowledgeBase(message.into())
}
