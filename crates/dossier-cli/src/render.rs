//! Terminal rendering of dossiers, history listings and progress.

use colored::Colorize;
use dossier_core::persona::Persona;
use dossier_core::synthesis::SynthesisStage;

const BAR_WIDTH: usize = 20;

/// Fixed-width bar for a 0-100 skill value.
pub fn skill_bar(value: u8) -> String {
    let filled = (usize::from(value.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// MIME type of a `data:` URI photo.
pub fn photo_mime(photo: &str) -> Option<&str> {
    photo
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
}

/// Full dossier view.
pub fn dossier(persona: &Persona) -> String {
    let p = &persona.profile;
    let t = &p.technical_metadata;
    let mut out = Vec::new();

    out.push(format!(
        "{} {}",
        "SUBJECT".bright_black(),
        format!("#{}", persona.short_id().to_uppercase()).bright_cyan().bold()
    ));
    out.push(p.full_name.bold().to_string());
    out.push(format!(
        "{} · {} · {} · {}",
        p.age, p.gender, p.marital_status, p.region
    ));
    out.push(p.occupation.bright_blue().to_string());

    let photo = match persona.photo.as_deref() {
        Some(photo) => format!(
            "{} ({}, {} bytes encoded)",
            "attached".green(),
            photo_mime(photo).unwrap_or("unknown"),
            photo.len()
        ),
        None => "none".yellow().to_string(),
    };
    out.push(format!("{} {}", "Photo:".bright_black(), photo));

    out.push(String::new());
    out.push("BIOGRAPHY".bright_black().to_string());
    out.extend(persona.biography_paragraphs().map(str::to_string));

    if !p.skills.is_empty() {
        out.push(String::new());
        out.push("SKILLS".bright_black().to_string());
        let width = p.skills.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
        for skill in &p.skills {
            out.push(format!(
                "{:<width$}  {} {:>3}",
                skill.name,
                skill_bar(skill.value).cyan(),
                skill.value,
            ));
        }
    }

    out.push(String::new());
    out.push("EDUCATION".bright_black().to_string());
    out.push(format!(
        "{}, {} ({})",
        p.education.degree, p.education.field_of_study, p.education.institution
    ));

    out.push(String::new());
    out.push("TECHNICAL FOOTPRINT".bright_black().to_string());
    out.push(format!("Username  {}", t.username));
    out.push(format!("Email     {}", t.email));
    out.push(format!("IBAN      {}", t.iban));
    out.push(format!("Card      {} exp {}", t.card_type, t.card_expiry));
    out.push(format!("Device    {} / {}", t.platform, t.browser));

    out.join("\n")
}

/// One line per history entry, newest first, with the active one marked.
pub fn history_listing(entries: &[Persona], active_id: Option<&str>) -> String {
    if entries.is_empty() {
        return "No personas generated yet.".bright_black().to_string();
    }

    entries
        .iter()
        .map(|p| {
            let marker = if Some(p.id.as_str()) == active_id {
                "▶".bright_cyan().to_string()
            } else {
                " ".to_string()
            };
            let photo = if p.has_photo() { "◉" } else { "○" };
            format!(
                "{} {} {} {}, {} ({})",
                marker,
                p.id.bright_black(),
                photo,
                p.profile.full_name.bold(),
                p.profile.occupation,
                p.profile.region
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Progress line for a busy stage.
pub fn stage_line(stage: SynthesisStage) -> String {
    format!(
        "{} {}",
        format!("[{}]", stage.headline()).bright_magenta(),
        stage.detail().bright_black()
    )
}
