use std::time::Duration;

use anyhow::Result;
use countcal_core::State;
use countcal_core::store::DocumentStore;
use countcal_core::view::SettingsPanel;
use tokio::sync::mpsc;

use crate::app::App;
use crate::render::render_page;

/// How often the document is checked for writes by other processes.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub async fn run(app: &App, link: Option<&str>, interval: Duration) -> Result<()> {
    let session = app.session(link)?;
    let week_start = app.config.week_start.weekday();

    let (tx, mut changes) = mpsc::unbounded_channel();
    let _subscription = app.store.subscribe(Box::new(move |_: &State| {
        let _ = tx.send(());
    }));

    let draw = || -> Result<()> {
        let today = App::today();
        let page = render_page(&session, today, today, SettingsPanel::default(), week_start)?;
        println!("{CLEAR_SCREEN}{page}");
        Ok(())
    };

    let mut redraw = tokio::time::interval(interval);
    let mut poll = tokio::time::interval(POLL_INTERVAL);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = redraw.tick() => draw()?,
            _ = poll.tick() => {
                if let Err(e) = app.store.refresh() {
                    tracing::warn!(error = %e, "could not re-read document");
                }
            }
            Some(()) = changes.recv() => draw()?,
            _ = &mut ctrl_c => break,
        }
    }

    Ok(())
}
