use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use countcal_core::config::CountcalConfig;
use countcal_core::session::Session;
use countcal_core::share;
use countcal_core::store::FileStore;
use url::Url;

/// Loaded config plus the opened document store.
pub struct App {
    pub config: CountcalConfig,
    pub store: FileStore,
    base_url: Url,
}

impl App {
    pub fn load() -> Result<Self> {
        let config = CountcalConfig::load()?;
        let base_url = config.base_url()?;
        let data_path = config.data_path();
        let store = FileStore::open(&data_path)
            .with_context(|| format!("Could not open data directory {}", data_path.display()))?;

        Ok(App {
            config,
            store,
            base_url,
        })
    }

    /// Where a render takes place: the configured base URL, carrying the
    /// share params of `link` when one is given.
    pub fn location(&self, link: Option<&str>) -> Result<Url> {
        let Some(link) = link else {
            return Ok(share::bare(&self.base_url));
        };

        let location = match share::decode(link).context("Could not read link")? {
            Some(params) => share::encode(&params, &self.base_url),
            None => {
                tracing::warn!(%link, "link carries no share params, showing your own dates");
                share::bare(&self.base_url)
            }
        };
        Ok(location)
    }

    pub fn session(&self, link: Option<&str>) -> Result<Session<'_>> {
        Ok(Session::open(&self.store, self.location(link)?)?)
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}
