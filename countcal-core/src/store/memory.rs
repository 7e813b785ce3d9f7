use std::sync::Mutex;

use super::{Callback, DocumentStore, Subscribers, Subscription};
use crate::error::CountResult;
use crate::state::State;

/// A store that lives and dies with the process.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    subscribers: Subscribers,
}

impl MemoryStore {
    pub fn new(state: State) -> Self {
        MemoryStore {
            state: Mutex::new(state),
            subscribers: Subscribers::default(),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self) -> CountResult<State> {
        Ok(self.state.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn mutate(&self, f: &mut dyn FnMut(&mut State)) -> CountResult<State> {
        let snapshot = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut state);
            state.clone()
        };
        self.subscribers.notify(&snapshot);
        Ok(snapshot)
    }

    fn subscribe(&self, callback: Callback) -> Subscription {
        self.subscribers.add(callback)
    }
}
