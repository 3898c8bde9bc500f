//! # retina-edu: Patient Education from the Command Line
//!
//! The command-line counterpart of the education form. Flags mirror the form's
//! fields and defaults; the generated material (or the error text in its place) is
//! printed and written to the download file.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use retina_edu::constants::{DEFAULT_GEMINI_MODEL, DOWNLOAD_FILE_NAME, GEMINI_API_KEY_ENV};
use retina_edu::{
    build_education_prompt, Age, ClinicalFindings, Diagnosis, EducationLevel, FormOptions,
    GenerationClient, GenerationConfig, Language, PatientDemographics, ProviderKind, Section,
    SectionSelection,
};
use std::path::PathBuf;
use tracing::info;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate education material for one patient
    Generate(GenerateArgs),
    /// Print the form's option catalog as JSON
    Options,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Patient age in years (1-100).
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub age: u32,
    /// Preferred language: English, Hindi, Punjabi or Odiya.
    #[arg(long, default_value = "English")]
    pub language: Language,
    /// Education level: Primary, Secondary or Tertiary.
    #[arg(long, default_value = "Primary")]
    pub education: EducationLevel,
    /// The diagnosis, e.g. "Diabetic Retinopathy".
    #[arg(long, default_value = "Diabetic Retinopathy")]
    pub diagnosis: Diagnosis,
    /// Visual acuity of the right eye.
    #[arg(long, default_value = "6/6")]
    pub va_re: String,
    /// Visual acuity of the left eye.
    #[arg(long, default_value = "6/6")]
    pub va_le: String,
    /// OCT findings, free text.
    #[arg(long, default_value = "")]
    pub oct_findings: String,
    /// A section to include; repeat or comma-separate. Order is kept.
    #[arg(
        long = "section",
        value_delimiter = ',',
        default_values = ["Disease Overview", "Treatment Options"],
        conflicts_with = "no_sections"
    )]
    pub sections: Vec<Section>,
    /// Request no specific sections.
    #[arg(long)]
    pub no_sections: bool,
    /// Print the prompt instead of calling the generation service.
    #[arg(long)]
    pub dry_run: bool,
    /// Where to write the downloadable material.
    #[arg(long, default_value = DOWNLOAD_FILE_NAME)]
    pub output: PathBuf,
    /// The generation backend: gemini or local.
    #[arg(long, env = "RETINA_EDU_PROVIDER", default_value = "gemini")]
    pub provider: ProviderKind,
    /// The API key for the generation service.
    #[arg(long, env = GEMINI_API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,
    /// The model identifier.
    #[arg(long, env = "RETINA_EDU_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,
    /// Overrides the generation endpoint URL.
    #[arg(long, env = "RETINA_EDU_API_URL")]
    pub api_url: Option<String>,
}

impl GenerateArgs {
    /// Builds the Input Model from the flags.
    pub fn to_inputs(&self) -> Result<(PatientDemographics, ClinicalFindings)> {
        let demographics = PatientDemographics {
            age: Age::new(self.age)?,
            language: self.language,
            education_level: self.education,
        };
        let sections = if self.no_sections {
            SectionSelection::default()
        } else {
            SectionSelection::new(self.sections.iter().copied())
        };
        let clinical = ClinicalFindings {
            diagnosis: self.diagnosis,
            visual_acuity_right_eye: self.va_re.clone(),
            visual_acuity_left_eye: self.va_le.clone(),
            oct_findings: self.oct_findings.clone(),
            sections,
        };
        Ok((demographics, clinical))
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            provider: self.provider,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

/// Runs a command and returns the text to print.
pub async fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Options => Ok(serde_json::to_string_pretty(&FormOptions::default())?),
    }
}

/// Generates the material and writes the download file.
///
/// With `--dry-run`, returns the rendered prompt and touches nothing else.
async fn handle_generate(args: GenerateArgs) -> Result<String> {
    let (demographics, clinical) = args.to_inputs()?;

    if args.dry_run {
        return Ok(build_education_prompt(&demographics, &clinical));
    }

    let client = GenerationClient::from_config(&args.generation_config())
        .context("Failed to configure the generation client")?;
    let material = client.generate_material(&demographics, &clinical).await;
    let download = material.outcome.to_download();

    tokio::fs::write(&args.output, &download.body)
        .await
        .with_context(|| format!("Failed to write '{}'", args.output.display()))?;
    info!(path = %args.output.display(), "Wrote education material.");

    Ok(download.body)
}
