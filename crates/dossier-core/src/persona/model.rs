//! Persona domain model.
//!
//! A persona is a synthesized fictional profile: demographics, a professional
//! profile, a bundle of synthetic technical identifiers, and an optional photo.
//! The wire shape (camelCase, exact enum strings) is shared by the text-stage
//! output, the history snapshot and the share token.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::error::{DossierError, Result};

/// Upper bound for a skill value.
pub const MAX_SKILL_VALUE: u8 = 100;

/// Gender of a persona.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    #[strum(serialize = "Non-binary")]
    NonBinary,
    Other,
}

/// Marital status of a persona.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    #[serde(rename = "In a relationship")]
    #[strum(serialize = "In a relationship")]
    InRelationship,
}

/// Device class recorded in the technical metadata.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    Desktop,
    Mobile,
    Tablet,
}

/// Education record.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
}

/// A named skill with a 0-100 proficiency value.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub value: u8,
}

/// Synthetic identifiers. Opaque strings, never validated beyond presence.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalMetadata {
    pub email: String,
    pub password: String,
    pub username: String,
    pub user_agent: String,
    pub browser: String,
    pub platform: Platform,
    pub iban: String,
    pub card_type: String,
    pub card_expiry: String,
}

/// Everything the text stage produces: every persona field except identity and media.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    pub full_name: String,
    pub age: u32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub region: String,
    pub occupation: String,
    pub education: Education,
    pub biography: String,
    pub skills: Vec<Skill>,
    pub technical_metadata: TechnicalMetadata,
}

impl PersonaProfile {
    /// Checks the constraints the type system cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(DossierError::Serialization {
                format: "persona".to_string(),
                message: "fullName is empty".to_string(),
            });
        }

        if let Some(skill) = self.skills.iter().find(|s| s.value > MAX_SKILL_VALUE) {
            return Err(DossierError::Serialization {
                format: "persona".to_string(),
                message: format!(
                    "skill '{}' has value {} (max {})",
                    skill.name, skill.value, MAX_SKILL_VALUE
                ),
            });
        }

        Ok(())
    }
}

/// A synthesized persona.
///
/// Immutable once assembled; the photo is absent when the image stage produced
/// nothing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Unique identifier (UUID format)
    pub id: String,
    #[serde(flatten)]
    pub profile: PersonaProfile,
    /// Photo as a `data:` URI; an empty string is never a photo and reads as absent
    #[serde(
        rename = "actionPhotoUrl",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub photo: Option<String>,
}

impl Persona {
    /// Merges a text-stage profile with the resolved media under a fresh identifier.
    ///
    /// An empty photo is stored as `None`.
    pub fn assemble(profile: PersonaProfile, photo: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile,
            photo: photo.filter(|p| !p.is_empty()),
        }
    }

    /// First four characters of the identifier, used as a compact subject tag.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(4) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// Biography paragraphs (split on blank lines).
    pub fn biography_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.profile
            .biography
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Validates the identifier and the profile.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(DossierError::Serialization {
                format: "persona".to_string(),
                message: "id is empty".to_string(),
            });
        }
        self.profile.validate()
    }
}

// Older snapshots stored an empty string when the image stage found nothing.
fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::fixtures::sample_profile;
    use std::str::FromStr;

    #[test]
    fn test_enum_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Gender::NonBinary).unwrap(),
            "\"Non-binary\""
        );
        assert_eq!(
            serde_json::to_string(&MaritalStatus::InRelationship).unwrap(),
            "\"In a relationship\""
        );
        assert_eq!(Gender::NonBinary.to_string(), "Non-binary");
        assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
        assert_eq!(Gender::from_str("non-binary").unwrap(), Gender::NonBinary);
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let persona = Persona::assemble(sample_profile("Ada Obi"), None);
        let value = serde_json::to_value(&persona).unwrap();

        assert_eq!(value["fullName"], "Ada Obi");
        assert_eq!(value["maritalStatus"], "Married");
        assert_eq!(value["education"]["fieldOfStudy"], "Computer Science");
        assert_eq!(value["technicalMetadata"]["cardExpiry"], "09/29");
        assert!(value.get("actionPhotoUrl").is_none());
    }

    #[test]
    fn test_empty_photo_reads_as_absent() {
        let persona = Persona::assemble(sample_profile("Ada Obi"), None);
        let mut value = serde_json::to_value(&persona).unwrap();
        value["actionPhotoUrl"] = serde_json::json!("");

        let parsed: Persona = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.photo, None);
        assert_eq!(parsed, persona);
    }

    #[test]
    fn test_assemble_treats_empty_photo_as_absent() {
        let persona = Persona::assemble(sample_profile("Ada Obi"), Some(String::new()));
        assert_eq!(persona.photo, None);
        assert!(!persona.has_photo());

        let raw = serde_json::to_string(&persona).unwrap();
        assert_eq!(serde_json::from_str::<Persona>(&raw).unwrap(), persona);
    }

    #[test]
    fn test_assemble_assigns_unique_ids() {
        let a = Persona::assemble(sample_profile("A"), None);
        let b = Persona::assemble(sample_profile("B"), None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.short_id().len(), 4);
        assert!(a.id.starts_with(a.short_id()));
    }

    #[test]
    fn test_validate_rejects_out_of_range_skill() {
        let mut profile = sample_profile("Ada Obi");
        profile.skills.push(Skill {
            name: "Juggling".to_string(),
            value: 140,
        });
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        assert!(sample_profile("   ").validate().is_err());
    }

    #[test]
    fn test_biography_paragraphs() {
        let mut profile = sample_profile("Ada Obi");
        profile.biography = "First.\n\nSecond.\n\n\n\nThird.".to_string();
        let persona = Persona::assemble(profile, None);
        let paragraphs: Vec<_> = persona.biography_paragraphs().collect();
        assert_eq!(paragraphs, vec!["First.", "Second.", "Third."]);
    }
}
