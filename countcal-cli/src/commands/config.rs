use anyhow::Result;
use countcal_core::config::CountcalConfig;
use countcal_core::store::FileStore;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = CountcalConfig::config_path()?;
    let config = CountcalConfig::load()?;
    let document = FileStore::existing_document_path(&config.data_path())?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data:       {}", config.data_path().display());
    match document {
        Some(path) => println!("  Document:   {}", path.display()),
        None => println!("  Document:   {}", "(none yet)".dimmed()),
    }

    println!();
    println!("{}", "Settings".bold());
    println!("  Base URL:   {}", config.base_url);
    println!("  Week start: {:?}", config.week_start);

    Ok(())
}
