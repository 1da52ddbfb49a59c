//! Plain-text dossier export.

use crate::persona::Persona;

/// Short plain-text summary for the clipboard.
pub fn dossier_summary(persona: &Persona) -> String {
    let p = &persona.profile;
    format!(
        "Full Name: {}\nAge: {}\nOccupation: {}\nRegion: {}\nBio: {}",
        p.full_name, p.age, p.occupation, p.region, p.biography
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::fixtures::sample_persona;

    #[test]
    fn test_dossier_summary() {
        let persona = sample_persona("p1");
        let summary = dossier_summary(&persona);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "Full Name: Subject p1");
        assert_eq!(lines[1], "Age: 34");
        assert_eq!(lines[2], "Occupation: Cloud Architect");
        assert_eq!(lines[3], "Region: Nigeria");
        assert_eq!(lines[4], "Bio: Grew up in Ibadan.");
    }
}
