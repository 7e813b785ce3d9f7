use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::App;

pub fn run(app: &App, link: Option<&str>, open: bool) -> Result<()> {
    let session = app.session(link)?;
    let url = session.share_url()?;

    if session.effective()?.has_no_dates() {
        eprintln!("{}", "Nothing set yet, the link only carries your title and display.".yellow());
    }

    println!("{url}");

    if open && open::that(url.as_str()).is_err() {
        eprintln!("(Could not open browser automatically, please copy the URL above)");
    }

    Ok(())
}
