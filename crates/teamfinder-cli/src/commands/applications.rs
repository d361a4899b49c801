use anyhow::Result;
use teamfinder_application::TeamfinderApp;
use teamfinder_core::role::Role;

use super::authenticated;

pub async fn apply(app: &TeamfinderApp, hackathon_id: u64, role: Role) -> Result<()> {
    authenticated(app).await?;
    let application = match app.applications().mine_for_hackathon(hackathon_id).await? {
        Some(existing) if existing.role == role => {
            println!("Already applied as {}", role.label());
            return Ok(());
        }
        Some(existing) => app.applications().change_role(existing.id, role).await?,
        None => app.applications().apply(hackathon_id, role).await?,
    };
    println!(
        "✅ Application #{} to hackathon #{} as {}",
        application.id,
        application.hackathon_id,
        application.role.label()
    );
    Ok(())
}

pub async fn list(app: &TeamfinderApp) -> Result<()> {
    authenticated(app).await?;
    let page = app.applications().mine().await?;
    if page.is_empty() {
        println!("No applications yet");
        return Ok(());
    }
    for application in &page.items {
        println!(
            "📝 #{} hackathon #{} · {}",
            application.id,
            application.hackathon_id,
            application.role.label()
        );
    }
    Ok(())
}

pub async fn withdraw(app: &TeamfinderApp, id: u64) -> Result<()> {
    authenticated(app).await?;
    app.applications().withdraw(id).await?;
    println!("🗑️  Application #{} withdrawn", id);
    Ok(())
}
