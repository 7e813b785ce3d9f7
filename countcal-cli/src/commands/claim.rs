use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::App;

pub fn run(app: &App, link: &str) -> Result<()> {
    let session = app.session(Some(link))?;

    if !session.is_viewing_link() {
        anyhow::bail!("That link has no dates, title or display settings to claim");
    }

    session.claim()?;

    println!("{}", "  Claimed. These are your dates now.".green());
    println!("  {}", "countcal show".dimmed());
    Ok(())
}
