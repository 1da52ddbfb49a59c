//! Output schema declared to the text stage.
//!
//! Uses the OpenAPI subset understood by the Gemini structured-output mode:
//! upper-case type names, string enums and a `required` list.

use serde_json::{Value, json};
use strum::IntoEnumIterator;

use crate::persona::{Gender, MaritalStatus, Platform};

fn enum_values<E: IntoEnumIterator + ToString>() -> Vec<String> {
    E::iter().map(|v| v.to_string()).collect()
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

/// Schema for every persona field except the identifier and the photo.
pub fn persona_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "fullName": string(),
            "age": { "type": "INTEGER" },
            "gender": { "type": "STRING", "enum": enum_values::<Gender>() },
            "maritalStatus": { "type": "STRING", "enum": enum_values::<MaritalStatus>() },
            "region": string(),
            "occupation": string(),
            "education": {
                "type": "OBJECT",
                "properties": {
                    "degree": string(),
                    "institution": string(),
                    "fieldOfStudy": string(),
                },
                "required": ["degree", "institution", "fieldOfStudy"],
            },
            "biography": string(),
            "skills": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": string(),
                        "value": { "type": "INTEGER", "minimum": 0, "maximum": 100 },
                    },
                    "required": ["name", "value"],
                },
            },
            "technicalMetadata": {
                "type": "OBJECT",
                "properties": {
                    "email": string(),
                    "password": string(),
                    "username": string(),
                    "userAgent": string(),
                    "browser": string(),
                    "platform": { "type": "STRING", "enum": enum_values::<Platform>() },
                    "iban": string(),
                    "cardType": string(),
                    "cardExpiry": string(),
                },
                "required": [
                    "email", "password", "username", "userAgent", "browser",
                    "platform", "iban", "cardType", "cardExpiry",
                ],
            },
        },
        "required": [
            "fullName", "age", "gender", "maritalStatus", "region", "occupation",
            "education", "biography", "skills", "technicalMetadata",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaProfile;
    use crate::persona::fixtures::sample_profile;

    #[test]
    fn test_schema_enums_match_wire_strings() {
        let schema = persona_response_schema();
        assert_eq!(
            schema["properties"]["gender"]["enum"],
            json!(["Male", "Female", "Non-binary", "Other"])
        );
        assert_eq!(
            schema["properties"]["maritalStatus"]["enum"],
            json!(["Single", "Married", "Divorced", "Widowed", "In a relationship"])
        );
    }

    #[test]
    fn test_schema_covers_every_profile_field() {
        let schema = persona_response_schema();
        let profile = serde_json::to_value(sample_profile("Ada")).unwrap();

        let properties = schema["properties"].as_object().unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();

        for key in profile.as_object().unwrap().keys() {
            assert!(properties.contains_key(key), "schema misses {key}");
            assert!(required.contains(&key.as_str()), "{key} not required");
        }
        assert!(!properties.contains_key("id"));
        assert!(!properties.contains_key("actionPhotoUrl"));
    }

    #[test]
    fn test_profile_fields_parse_from_schema_shaped_json() {
        let raw = serde_json::to_string(&sample_profile("Ada")).unwrap();
        let parsed: PersonaProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.full_name, "Ada");
    }
}
