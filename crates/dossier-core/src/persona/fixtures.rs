//! Sample personas for tests.

use super::model::{
    Education, Gender, MaritalStatus, Persona, PersonaProfile, Platform, Skill, TechnicalMetadata,
};

/// A fully populated profile with the given name.
pub fn sample_profile(full_name: &str) -> PersonaProfile {
    PersonaProfile {
        full_name: full_name.to_string(),
        age: 34,
        gender: Gender::Female,
        marital_status: MaritalStatus::Married,
        region: "Nigeria".to_string(),
        occupation: "Cloud Architect".to_string(),
        education: Education {
            degree: "MSc".to_string(),
            institution: "University of Lagos".to_string(),
            field_of_study: "Computer Science".to_string(),
        },
        biography: "Grew up in Ibadan.\n\nNow designs resilient platforms.".to_string(),
        skills: vec![
            Skill {
                name: "Kubernetes".to_string(),
                value: 88,
            },
            Skill {
                name: "Mentoring".to_string(),
                value: 72,
            },
        ],
        technical_metadata: TechnicalMetadata {
            email: "ada.obi@example.com".to_string(),
            password: "s3cr3t-Pass".to_string(),
            username: "adaobi".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".to_string(),
            browser: "Firefox".to_string(),
            platform: Platform::Desktop,
            iban: "NG00 0000 0000 0000".to_string(),
            card_type: "Visa".to_string(),
            card_expiry: "09/29".to_string(),
        },
    }
}

/// A persona with a fixed identifier, so ordering assertions can name it.
pub fn sample_persona(id: &str) -> Persona {
    Persona {
        id: id.to_string(),
        profile: sample_profile(&format!("Subject {id}")),
        photo: None,
    }
}
