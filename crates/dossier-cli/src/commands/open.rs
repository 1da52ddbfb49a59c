use anyhow::Result;
use colored::Colorize;
use dossier_application::View;
use url::Url;

use crate::context::AppContext;
use crate::render;

pub async fn run(ctx: &AppContext, address: &Url) -> Result<()> {
    let session = ctx.session(Some(address))?;

    if session.view().await != View::Shared {
        eprintln!(
            "{}",
            "Link does not carry a readable dossier, showing the live stream.".yellow()
        );
    }

    match session.active_persona().await {
        Some(persona) => println!("{}", render::dossier(&persona)),
        None => println!("{}", "No personas generated yet.".bright_black()),
    }
    Ok(())
}
