use anyhow::Result;

use crate::context::AppContext;
use crate::render;

pub async fn history(ctx: &AppContext) -> Result<()> {
    let session = ctx.session(None)?;
    let active = session.active_persona().await.map(|p| p.id);
    println!(
        "{}",
        render::history_listing(&session.history().await, active.as_deref())
    );
    Ok(())
}

pub async fn show(ctx: &AppContext, id: Option<&str>) -> Result<()> {
    let session = ctx.session(None)?;
    let persona = match id {
        Some(id) => session.select(id).await?,
        None => session
            .active_persona()
            .await
            .ok_or_else(|| anyhow::anyhow!("no personas generated yet"))?,
    };
    println!("{}", render::dossier(&persona));
    Ok(())
}

pub async fn share(ctx: &AppContext, id: Option<&str>) -> Result<()> {
    let session = ctx.session(None)?;
    println!("{}", session.share_link(id).await?);
    Ok(())
}

pub async fn export(ctx: &AppContext, id: Option<&str>) -> Result<()> {
    let session = ctx.session(None)?;
    println!("{}", session.export_dossier(id).await?);
    Ok(())
}
