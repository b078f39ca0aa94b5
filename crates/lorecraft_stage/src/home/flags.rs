//! Flags persisted between visits

use crate::storage::KeyValueStore;

pub const CAT_MODE_KEY: &str = "lorecraftCatMode 82jfnfoi239uf2jibn29yt928rth984h3ut9u923r";
pub const SCREEN_SEEN_KEY: &str =
    "lorecraftScreenSeed 82jfnfoi239uf2jibn29yt928rth984h3ut9u923r";

/// Flags read once when the home screen mounts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeFlags {
    /// The visitor already reached the cat captions
    pub cat_mode: bool,
    /// On small screens, show the message half (true) or the images half (false)
    pub show_message: bool,
}

impl HomeFlags {
    /// Read the flags and record which half this visit shows
    ///
    /// Small screens alternate halves between visits. `first_visit_coin`
    /// picks the half the first visit counts as having seen last.
    pub fn load(store: &mut impl KeyValueStore, first_visit_coin: bool) -> Self {
        let cat_mode = store.get(CAT_MODE_KEY).is_some_and(|v| !v.is_empty());
        let last_seen = match store.get(SCREEN_SEEN_KEY).as_deref() {
            Some("true") => true,
            Some("false") => false,
            Some(other) => {
                tracing::warn!(value = other, "unreadable last-seen flag");
                first_visit_coin
            }
            None => first_visit_coin,
        };
        let show_message = !last_seen;
        store.set(SCREEN_SEEN_KEY, if show_message { "true" } else { "false" });

        tracing::debug!(cat_mode, show_message, "home flags loaded");
        Self {
            cat_mode,
            show_message,
        }
    }

    pub fn persist_cat_mode(store: &mut impl KeyValueStore) {
        store.set(CAT_MODE_KEY, "yes");
    }
}
