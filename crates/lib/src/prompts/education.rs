//! # Patient Education Prompt
//!
//! Renders the single instruction sent to the generation service from a
//! [`PatientDemographics`] and [`ClinicalFindings`] pair.

use super::fill_placeholders;
use crate::types::{ClinicalFindings, Language, PatientDemographics, Section};

/// The patient education prompt.
///
/// Placeholders: `{age}`, `{language}`, `{education_level}`, `{diagnosis}`,
/// `{va_re}`, `{va_le}`, `{oct_findings}`, `{sections}`, `{language_instruction}`
pub const PATIENT_EDUCATION_PROMPT: &str = r#"Create a colorful, engaging patient education material with emojis and formatting. Use the following patient information:

Patient Details:
- Age: {age}
- Preferred Language: {language}
- Education Level: {education_level}

Clinical Information:
- Diagnosis: {diagnosis}
- Visual Acuity RE: {va_re}
- Visual Acuity LE: {va_le}
- OCT Findings: {oct_findings}

Include these sections: {sections}

Make the content patient-friendly, using simple language. Add emojis and color indicators using markdown.
Use different colors for different sections (using markdown).
Include a summary at the end.{language_instruction}"#;

/// The delimiter placed between requested section names.
pub const SECTION_DELIMITER: &str = ", ";

/// Joins the requested sections in selection order.
pub fn format_section_list(sections: &[Section]) -> String {
    sections
        .iter()
        .map(Section::as_str)
        .collect::<Vec<_>>()
        .join(SECTION_DELIMITER)
}

/// Returns the bilingual-output instruction, or `None` for English.
pub fn get_language_instruction(language: Language) -> Option<String> {
    match language {
        Language::English => None,
        other => Some(format!(
            "The selected language is not English: provide the content in both English and {other}."
        )),
    }
}

/// Builds the patient education prompt.
///
/// The inputs are trusted to satisfy the form's invariants; nothing is validated here.
pub fn build_education_prompt(
    demographics: &PatientDemographics,
    clinical: &ClinicalFindings,
) -> String {
    let age = demographics.age.to_string();
    let sections = format_section_list(clinical.sections.as_slice());
    let language_instruction = get_language_instruction(demographics.language)
        .map(|instruction| format!("\n\n{instruction}"))
        .unwrap_or_default();

    fill_placeholders(
        PATIENT_EDUCATION_PROMPT,
        &[
            ("age", age.as_str()),
            ("language", demographics.language.as_str()),
            ("education_level", demographics.education_level.as_str()),
            ("diagnosis", clinical.diagnosis.as_str()),
            ("va_re", clinical.visual_acuity_right_eye.as_str()),
            ("va_le", clinical.visual_acuity_left_eye.as_str()),
            ("oct_findings", clinical.oct_findings.as_str()),
            ("sections", sections.as_str()),
            ("language_instruction", language_instruction.as_str()),
        ],
    )
}
