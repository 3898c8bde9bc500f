use retina_edu::{
    Age, ClinicalFindings, Diagnosis, EducationLevel, Language, PatientDemographics,
    SectionSelection,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// The form payload accepted by the generation endpoints.
///
/// Field names follow the form (`age`, `language`, `education`, `diagnosis`,
/// `va_re`, `va_le`, `oct_findings`, `sections`). Missing fields take the form's
/// defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub age: Age,
    pub language: Language,
    pub education: EducationLevel,
    pub diagnosis: Diagnosis,
    pub va_re: String,
    pub va_le: String,
    pub oct_findings: String,
    pub sections: SectionSelection,
}

impl Default for EducationRequest {
    fn default() -> Self {
        let demographics = PatientDemographics::default();
        let clinical = ClinicalFindings::default();
        Self {
            age: demographics.age,
            language: demographics.language,
            education: demographics.education_level,
            diagnosis: clinical.diagnosis,
            va_re: clinical.visual_acuity_right_eye,
            va_le: clinical.visual_acuity_left_eye,
            oct_findings: clinical.oct_findings,
            sections: clinical.sections,
        }
    }
}

impl EducationRequest {
    /// Splits the form into the two Input Model structures.
    pub fn into_parts(self) -> (PatientDemographics, ClinicalFindings) {
        (
            PatientDemographics {
                age: self.age,
                language: self.language,
                education_level: self.education,
            },
            ClinicalFindings {
                diagnosis: self.diagnosis,
                visual_acuity_right_eye: self.va_re,
                visual_acuity_left_eye: self.va_le,
                oct_findings: self.oct_findings,
                sections: self.sections,
            },
        )
    }
}

/// The response body of the `/generate` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated material, or the error text in its place.
    pub text: String,
    /// The file name offered for downloading `text`.
    pub file_name: String,
}
