use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::App;

pub fn run(app: &App, link: &str) -> Result<()> {
    let session = app.session(Some(link))?;
    let bare = session.clear();

    println!("{bare}");
    println!("{}", "  Back to your own dates: countcal show".dimmed());
    Ok(())
}
