use anyhow::Result;
use teamfinder_application::TeamfinderApp;
use teamfinder_core::user::User;

use super::authenticated;

pub(super) fn print_profile(user: &User) {
    println!("👤 {}", user.display_name());
    if let Some(username) = &user.username {
        println!("   @{}", username);
    }
    for (label, value) in [
        ("City", &user.city),
        ("University", &user.university),
        ("Link", &user.link),
    ] {
        if let Some(value) = value {
            println!("   {}: {}", label, value);
        }
    }
    if let Some(bio) = user.bio.as_deref().filter(|b| !b.is_empty()) {
        println!();
        println!("{}", bio);
    }
    if !user.skills.is_empty() {
        let names: Vec<&str> = user.skills.iter().map(|s| s.name.as_str()).collect();
        println!();
        println!("Skills: {}", names.join(", "));
    }
}

pub async fn me(app: &TeamfinderApp) -> Result<()> {
    authenticated(app).await?;
    let user = app.profile().me().await?;
    print_profile(&user);
    Ok(())
}

pub async fn skills(app: &TeamfinderApp) -> Result<()> {
    authenticated(app).await?;
    let mine = app.profile().me().await?.skill_slugs();
    for skill in app.skills().skills().await? {
        let mark = if mine.contains(&skill.slug) { "*" } else { " " };
        println!("{} {:<20} {}", mark, skill.slug, skill.name);
    }
    Ok(())
}

pub async fn bio(app: &TeamfinderApp, text: String) -> Result<()> {
    authenticated(app).await?;
    let profile = app.profile().me().await?;
    let editor = app
        .profile()
        .bio_editor(&profile, app.config().autosave_debounce());

    if !editor.edit(text)? {
        println!("Bio unchanged");
        return Ok(());
    }
    editor.flush().await?;
    println!("✅ Bio saved");
    Ok(())
}

pub async fn set_skills(app: &TeamfinderApp, slugs: Vec<String>) -> Result<()> {
    authenticated(app).await?;
    let profile = app.profile().me().await?;
    let editor = app.profile().skills_editor(&profile);

    if editor.select(slugs).await? {
        println!("✅ Skills saved: {}", editor.selected().join(", "));
    } else {
        println!("Skills unchanged");
    }
    Ok(())
}

pub async fn achievements(app: &TeamfinderApp) -> Result<()> {
    authenticated(app).await?;
    let page = app.achievements().mine().await?;
    if page.is_empty() {
        println!("No achievements yet");
        return Ok(());
    }
    for achievement in &page.items {
        let hackathon = achievement.hackathon_name.as_deref().unwrap_or("-");
        let role = achievement.role.as_deref().unwrap_or("-");
        let place = achievement.place.map(|p| p.label()).unwrap_or("-");
        println!("🏆 #{} {} · {} · {}", achievement.id, hackathon, role, place);
    }
    Ok(())
}
