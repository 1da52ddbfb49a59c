use anyhow::Result;
use colored::Colorize;
use dossier_application::SessionController;
use dossier_core::persona::Persona;
use dossier_core::synthesis::{GenderFilter, RegionFilter, SynthesisFilter};

use crate::context::AppContext;
use crate::render;

pub async fn run(ctx: &AppContext, region: RegionFilter, gender: GenderFilter) -> Result<()> {
    let session = ctx.session(None)?;
    session.set_filter(SynthesisFilter { region, gender }).await;

    let persona = generate_with_progress(&session).await?;
    println!("{}", render::dossier(&persona));
    Ok(())
}

/// Runs one generation while printing stage transitions to stderr.
pub async fn generate_with_progress(session: &SessionController) -> Result<Persona> {
    let mut stages = session.subscribe_stage();
    let progress = tokio::spawn(async move {
        while stages.changed().await.is_ok() {
            let stage = *stages.borrow_and_update();
            if stage.is_busy() {
                eprintln!("{}", render::stage_line(stage));
            }
        }
    });

    let result = session.generate().await;
    progress.abort();

    let persona = result?;
    eprintln!("{}", "Synthesis complete.".green());
    Ok(persona)
}
