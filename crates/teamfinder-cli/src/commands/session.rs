use anyhow::Result;
use teamfinder_application::TeamfinderApp;

use super::authenticated;
use super::profile::print_profile;

pub async fn login(app: &TeamfinderApp) -> Result<()> {
    let session = authenticated(app).await?;
    println!("✅ Signed in");
    print_profile(&session.profile);
    Ok(())
}

pub async fn logout(app: &TeamfinderApp) -> Result<()> {
    app.logout().await?;
    println!("👋 Signed out");
    Ok(())
}
