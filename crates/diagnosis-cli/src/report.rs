//! Plain-text rendering of diagnosis output.

use diagnosis_core::{DiagnosisResult, KnowledgeBase};

pub const EMPTY_SELECTION: &str = "Pilih minimal satu gejala";
pub const EMPTY_SELECTION_HINT: &str =
    "Silakan pilih gejala yang Anda alami untuk melakukan diagnosa";
pub const NO_RESULTS: &str = "Tidak ada hasil";
pub const NO_RESULTS_HINT: &str = "Kombinasi gejala tidak cocok dengan database penyakit";

pub const DISCLAIMER: &str = "Disclaimer Penting: Sistem ini hanya alat bantu untuk memberikan \
gambaran awal. Hasil diagnosa tidak dapat menggantikan pemeriksaan dan konsultasi langsung \
dengan dokter profesional. Segera konsultasikan dengan tenaga medis untuk diagnosa yang akurat \
dan penanganan yang tepat.";

/// Ranked result table followed by the summary line and disclaimer
pub fn render_results(results: &[DiagnosisResult]) -> String {
    if results.is_empty() {
        return format!("{NO_RESULTS}: {NO_RESULTS_HINT}\n");
    }

    let mut out = String::from("Hasil Diagnosa (Naive Bayes)\n");
    let name_width = results.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for (rank, r) in results.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  {:>5.1}%  {}\n    {}\n",
            rank + 1,
            r.name,
            r.probability,
            r.confidence.to_label(),
            r.description,
            width = name_width
        ));
    }

    out.push_str(&format!(
        "\nDitemukan {} kemungkinan penyakit\n\n{DISCLAIMER}\n",
        results.len()
    ));
    out
}

pub fn render_symptoms(kb: &KnowledgeBase) -> String {
    let mut out = String::new();
    let width = kb
        .list_symptoms()
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0);
    for symptom in kb.list_symptoms() {
        out.push_str(&format!("{:<width$}  {}\n", symptom.id, symptom.label));
    }
    out
}

pub fn render_diseases(kb: &KnowledgeBase) -> String {
    let mut out = String::new();
    for disease in kb.list_diseases() {
        out.push_str(&format!(
            "{} - {} (prior {:.2})\n    {}\n    gejala: {}\n",
            disease.id,
            disease.name,
            disease.prior,
            disease.description,
            disease.symptoms.join(", ")
        ));
    }
    out
}
