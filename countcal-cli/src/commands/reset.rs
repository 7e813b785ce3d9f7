use anyhow::Result;
use countcal_core::config::CountcalConfig;
use countcal_core::store::FileStore;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(yes: bool) -> Result<()> {
    let config = CountcalConfig::load()?;
    let data_path = config.data_path();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("  Delete your stored dates and start over?")
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    if FileStore::reset(&data_path)? {
        println!("{}", "  Storage reset".green());
    } else {
        println!("{}", "  Nothing stored yet".dimmed());
    }
    Ok(())
}
