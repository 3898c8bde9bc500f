#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as mock providers and
//! sample form inputs, to ensure tests are isolated and repeatable.

use async_trait::async_trait;
use retina_edu::providers::ai::AiProvider;
use retina_edu::{
    Age, ClinicalFindings, Diagnosis, EducationLevel, Language, PatientDemographics, PromptError,
    Section, SectionSelection,
};
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<String>>>,
    pub responses: Arc<RwLock<Vec<Result<String, String>>>>,
}

impl MockAiProvider {
    /// A provider that answers each call with the next response, in order.
    pub fn new(responses: Vec<String>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    /// A provider whose calls fail with `PromptError::AiApi` carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self::with_results(vec![Err(message.to_string())])
    }

    pub fn with_results(results: Vec<Result<String, String>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(results.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PromptError> {
        self.call_history.write().unwrap().push(prompt.to_string());

        match self.responses.write().unwrap().pop() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(PromptError::AiApi {
                status: 503,
                message,
            }),
            None => Ok("Default mock response".to_string()),
        }
    }
}

// --- Sample form inputs ---

/// The worked example: a 50-year-old Hindi speaker with diabetic retinopathy.
pub fn hindi_patient() -> (PatientDemographics, ClinicalFindings) {
    let demographics = PatientDemographics {
        age: Age::new(50).unwrap(),
        language: Language::Hindi,
        education_level: EducationLevel::Secondary,
    };
    let clinical = ClinicalFindings {
        diagnosis: Diagnosis::DiabeticRetinopathy,
        visual_acuity_right_eye: "6/9".to_string(),
        visual_acuity_left_eye: "6/6".to_string(),
        oct_findings: "mild edema".to_string(),
        sections: SectionSelection::new([Section::DiseaseOverview, Section::TreatmentOptions]),
    };
    (demographics, clinical)
}

/// An English speaker with no sections selected.
pub fn english_patient_without_sections() -> (PatientDemographics, ClinicalFindings) {
    let demographics = PatientDemographics {
        age: Age::new(72).unwrap(),
        language: Language::English,
        education_level: EducationLevel::Tertiary,
    };
    let clinical = ClinicalFindings {
        diagnosis: Diagnosis::AgeRelatedMacularDegeneration,
        visual_acuity_right_eye: "6/18".to_string(),
        visual_acuity_left_eye: "6/60".to_string(),
        oct_findings: String::new(),
        sections: SectionSelection::default(),
    };
    (demographics, clinical)
}
