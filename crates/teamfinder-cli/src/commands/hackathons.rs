use anyhow::Result;
use chrono::Utc;
use teamfinder_application::TeamfinderApp;
use teamfinder_core::hackathon::Hackathon;
use teamfinder_core::page::PageRequest;

use super::authenticated;

fn print_summary(hackathon: &Hackathon) {
    let open = if hackathon.is_registration_open(Utc::now()) {
        "🟢"
    } else {
        "⚪"
    };
    println!("{} #{} {}", open, hackathon.id, hackathon.name);
    println!("   {} · {}", hackathon.dates_label(), hackathon.registration_label());
}

pub async fn list(
    app: &TeamfinderApp,
    query: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<()> {
    authenticated(app).await?;
    let request = PageRequest {
        query,
        limit,
        offset,
    };
    let page = app.hackathons().list(&request).await?;
    if page.is_empty() {
        println!("No hackathons found");
        return Ok(());
    }
    for hackathon in &page.items {
        print_summary(hackathon);
    }
    if let Some(total) = page.total {
        println!();
        println!("{} of {}", page.offset as u64 + page.items.len() as u64, total);
    }
    Ok(())
}

pub async fn show(app: &TeamfinderApp, id: u64) -> Result<()> {
    authenticated(app).await?;
    let hackathon = app.hackathons().get(id).await?;
    print_summary(&hackathon);
    println!("   Team: {}", hackathon.team_size_label());
    if let Some(city) = &hackathon.city {
        println!("   City: {}", city);
    }
    if let Some(prize) = &hackathon.prize_fund {
        println!("   Prize fund: {}", prize);
    }
    println!();
    println!("{}", hackathon.description);

    match app.applications().mine_for_hackathon(id).await? {
        Some(application) => println!(
            "\n📝 You applied as {} (application #{})",
            application.role.label(),
            application.id
        ),
        None => println!("\nYou have not applied yet"),
    }

    let pool = app.applications().for_hackathon(id).await?;
    if !pool.is_empty() {
        println!("\nLooking for a team:");
        for application in &pool.items {
            let name = application
                .username
                .as_deref()
                .or(application.first_name.as_deref())
                .unwrap_or("?");
            println!("   {} · {}", name, application.role.label());
        }
    }
    Ok(())
}
