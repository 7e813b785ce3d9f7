use anyhow::Result;
use chrono::NaiveDate;
use countcal_core::view::SettingsPanel;

use crate::app::App;
use crate::render::render_page;

pub fn run(app: &App, link: Option<&str>, date: Option<NaiveDate>, settings: bool) -> Result<()> {
    let session = app.session(link)?;
    let today = App::today();
    let selected = date.unwrap_or(today);

    let page = render_page(
        &session,
        selected,
        today,
        SettingsPanel::new(settings),
        app.config.week_start.weekday(),
    )?;
    println!("{page}");

    Ok(())
}
