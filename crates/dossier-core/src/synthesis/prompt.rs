//! Prompts for the two synthesis stages.

use super::filter::GenderFilter;
use crate::persona::PersonaProfile;

/// Text-stage prompt for one persona.
pub fn text_prompt(region: &str, gender: &GenderFilter, archetype: &str) -> String {
    format!(
        "Synthesize a realistic persona. Region: {region}, Gender: {}, Profession: {archetype}. \
         Detailed bio, education, skills, technical metadata.",
        gender.prompt_label()
    )
}

/// Image-stage prompt built from the synthesized profile.
pub fn image_prompt(profile: &PersonaProfile) -> String {
    format!(
        "Extreme close-up headshot, cinematic photorealistic portrait of {}, a {} in {}. \
         Neutral background, high detail, realistic skin, 8k professional studio lighting.",
        profile.full_name, profile.gender, profile.region
    )
}
