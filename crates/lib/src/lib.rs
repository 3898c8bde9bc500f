//! # Retina Patient Education
//!
//! This crate turns structured patient demographics and clinical ophthalmology findings
//! into a prompt, and submits that prompt to a generative-text model to produce
//! patient-facing education material.
//!
//! The pipeline is linear: the [`types`] Input Model is rendered by
//! [`prompts::education::build_education_prompt`], and the resulting prompt is sent
//! through a [`GenerationClient`], which always answers with a [`GenerationOutcome`].

pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod types;

pub use client::{
    GeneratedMaterial, GenerationClient, GenerationClientBuilder, GenerationFailure,
    GenerationOutcome,
};
pub use config::{GenerationConfig, ProviderKind};
pub use errors::PromptError;
pub use prompts::education::build_education_prompt;
pub use types::{
    Age, ClinicalFindings, Diagnosis, Download, EducationLevel, FormOptions, Language,
    PatientDemographics, Section, SectionSelection,
};
