//! One page view: the persisted document, the current location, and any
//! share-link override decoded from it.

use chrono::NaiveDate;
use url::Url;

use crate::error::{CountError, CountResult};
use crate::share;
use crate::state::{Params, State};
use crate::store::DocumentStore;
use crate::view::EffectiveView;

pub struct Session<'a> {
    store: &'a dyn DocumentStore,
    location: Url,
    params: Option<Params>,
}

impl<'a> Session<'a> {
    /// Decode the share params carried by `location`, if any.
    pub fn open(store: &'a dyn DocumentStore, location: Url) -> CountResult<Self> {
        let params = share::decode(location.as_str())?;
        Ok(Session {
            store,
            location,
            params,
        })
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    pub fn is_viewing_link(&self) -> bool {
        self.params.is_some()
    }

    /// Editing while viewing a link would leave it unclear whose values
    /// change, so settings are read-only until the link is claimed or cleared.
    pub fn settings_editable(&self) -> bool {
        !self.is_viewing_link()
    }

    pub fn state(&self) -> CountResult<State> {
        self.store.get()
    }

    pub fn effective(&self) -> CountResult<EffectiveView> {
        let state = self.store.get()?;
        Ok(EffectiveView::resolve(&state, self.params.as_ref()))
    }

    /// Link encoding what is currently shown.
    pub fn share_url(&self) -> CountResult<Url> {
        let view = self.effective()?;
        Ok(share::encode(&Params::from(&view), &self.location))
    }

    /// Adopt everything currently shown into the persisted document and
    /// return the bare location to continue on.
    pub fn claim(&self) -> CountResult<Url> {
        let view = self.effective()?;
        self.store.mutate(&mut |state| view.apply_to(state))?;

        tracing::info!("claimed shared view");
        Ok(share::bare(&self.location))
    }

    /// Drop the share-link override. The document is left as it is.
    pub fn clear(&self) -> Url {
        share::bare(&self.location)
    }

    /// Decode pasted text and return the normalized link to navigate to.
    pub fn redeem(&self, text: &str) -> CountResult<Url> {
        let params = share::decode(text)?.ok_or(CountError::NotAShareLink)?;
        Ok(share::encode(&params, &self.location))
    }

    pub fn set_count_up_date(&self, date: Option<NaiveDate>) -> CountResult<State> {
        self.edit(&mut |state| state.count_up_date = date)
    }

    pub fn set_count_down_date(&self, date: Option<NaiveDate>) -> CountResult<State> {
        self.edit(&mut |state| state.count_down_date = date)
    }

    /// An empty title removes it.
    pub fn set_title(&self, title: Option<String>) -> CountResult<State> {
        let title = title.filter(|t| !t.trim().is_empty());
        self.edit(&mut |state| state.title = title.clone())
    }

    pub fn set_show_calendar(&self, show: bool) -> CountResult<State> {
        self.edit(&mut |state| {
            state.display_settings.get_or_insert_default().calendar = Some(show);
        })
    }

    fn edit(&self, f: &mut dyn FnMut(&mut State)) -> CountResult<State> {
        if !self.settings_editable() {
            return Err(CountError::SettingsLocked);
        }
        self.store.mutate(f)
    }
}
