//! # Input Model
//!
//! Typed structures for the patient demographics and clinical findings collected by the
//! form layer. Every enumerated field maps one-to-one onto the option set offered by the
//! form, and (de)serializes as the exact label shown to the clinician.

use crate::errors::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of form options with their display labels.
///
/// The generated enum gets an ordered `ALL` list, `as_str`, `Display`, `FromStr`, and
/// serde support through its label.
macro_rules! form_option {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every option, in the order the form presents them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label shown in the form and used in the prompt.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PromptError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == value)
                    .ok_or_else(|| {
                        PromptError::InvalidInput(format!(
                            "unknown {} '{}'",
                            $field, value
                        ))
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = PromptError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }
    };
}

form_option! {
    /// The patient's preferred language for the material.
    #[derive(Default)]
    Language, "language" {
        #[default]
        English => "English",
        Hindi => "Hindi",
        Punjabi => "Punjabi",
        Odiya => "Odiya",
    }
}

form_option! {
    /// The patient's level of formal education.
    #[derive(Default)]
    EducationLevel, "education level" {
        #[default]
        Primary => "Primary",
        Secondary => "Secondary",
        Tertiary => "Tertiary",
    }
}

form_option! {
    /// The supported retinal diagnoses.
    #[derive(Default)]
    Diagnosis, "diagnosis" {
        #[default]
        DiabeticRetinopathy => "Diabetic Retinopathy",
        AgeRelatedMacularDegeneration => "Age-related Macular Degeneration",
        RetinalDetachment => "Retinal Detachment",
        CentralSerousChorioretinopathy => "Central Serous Chorioretinopathy",
        DiabeticMacularEdema => "Diabetic Macular Edema",
    }
}

form_option! {
    /// A section the generated material should cover.
    Section, "section" {
        DiseaseOverview => "Disease Overview",
        TreatmentOptions => "Treatment Options",
        LifestyleModifications => "Lifestyle Modifications",
        FollowUpCare => "Follow-up Care",
        EmergencySigns => "Emergency Signs",
        DietaryRecommendations => "Dietary Recommendations",
        VisualAidsAndRehabilitation => "Visual Aids and Rehabilitation",
    }
}

impl Section {
    /// The sections pre-selected by the form.
    pub const DEFAULT_SELECTION: &'static [Section] =
        &[Section::DiseaseOverview, Section::TreatmentOptions];
}

/// A patient age in whole years, within `Age::MIN..=Age::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 50;

    /// Creates an age, rejecting values outside the form's bounds.
    pub fn new(years: u32) -> Result<Self, PromptError> {
        if (u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&years) {
            Ok(Self(years as u8))
        } else {
            Err(PromptError::InvalidInput(format!(
                "age {years} is outside {}..={}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn years(&self) -> u8 {
        self.0
    }
}

impl Default for Age {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Age {
    type Error = PromptError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Age::new(value)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> Self {
        u32::from(age.0)
    }
}

/// An ordered selection of distinct sections.
///
/// Selection order is preserved. A repeated section keeps its first position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Section>", into = "Vec<Section>")]
pub struct SectionSelection(Vec<Section>);

impl SectionSelection {
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        sections.into_iter().collect()
    }

    /// The form's default selection.
    pub fn form_default() -> Self {
        Self::new(Section::DEFAULT_SELECTION.iter().copied())
    }

    pub fn as_slice(&self) -> &[Section] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Section> for SectionSelection {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut sections = Vec::new();
        for section in iter {
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        Self(sections)
    }
}

impl From<Vec<Section>> for SectionSelection {
    fn from(sections: Vec<Section>) -> Self {
        sections.into_iter().collect()
    }
}

impl From<SectionSelection> for Vec<Section> {
    fn from(selection: SectionSelection) -> Self {
        selection.0
    }
}

/// Who the material is written for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientDemographics {
    pub age: Age,
    pub language: Language,
    #[serde(alias = "education")]
    pub education_level: EducationLevel,
}

/// What the material is about.
///
/// Missing fields take the form's defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalFindings {
    pub diagnosis: Diagnosis,
    #[serde(alias = "va_re")]
    pub visual_acuity_right_eye: String,
    #[serde(alias = "va_le")]
    pub visual_acuity_left_eye: String,
    pub oct_findings: String,
    pub sections: SectionSelection,
}

/// The visual acuity the form pre-fills for both eyes.
pub const DEFAULT_VISUAL_ACUITY: &str = "6/6";

impl Default for ClinicalFindings {
    fn default() -> Self {
        Self {
            diagnosis: Diagnosis::default(),
            visual_acuity_right_eye: DEFAULT_VISUAL_ACUITY.to_string(),
            visual_acuity_left_eye: DEFAULT_VISUAL_ACUITY.to_string(),
            oct_findings: String::new(),
            sections: SectionSelection::form_default(),
        }
    }
}

/// The complete option catalog a form needs to render its widgets.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub languages: Vec<Language>,
    pub education_levels: Vec<EducationLevel>,
    pub diagnoses: Vec<Diagnosis>,
    pub sections: Vec<Section>,
    pub default_sections: Vec<Section>,
    pub age_min: u8,
    pub age_max: u8,
    pub age_default: u8,
    pub visual_acuity_default: &'static str,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            education_levels: EducationLevel::ALL.to_vec(),
            diagnoses: Diagnosis::ALL.to_vec(),
            sections: Section::ALL.to_vec(),
            default_sections: Section::DEFAULT_SELECTION.to_vec(),
            age_min: Age::MIN,
            age_max: Age::MAX,
            age_default: Age::DEFAULT,
            visual_acuity_default: DEFAULT_VISUAL_ACUITY,
        }
    }
}

/// A plain-text file offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub body: String,
}
