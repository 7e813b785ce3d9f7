use anyhow::{Context, Result};
use countcal_core::view::SettingsPanel;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::render_page;

pub fn run(app: &App, text: &str) -> Result<()> {
    let url = app
        .session(None)?
        .redeem(text)
        .with_context(|| format!("Not a valid link: \"{}\"", text.trim()))?;

    println!("{}", url.as_str().cyan());
    println!();

    let session = app.session(Some(url.as_str()))?;
    let today = App::today();
    let page = render_page(
        &session,
        today,
        today,
        SettingsPanel::default(),
        app.config.week_start.weekday(),
    )?;
    println!("{page}");

    Ok(())
}
