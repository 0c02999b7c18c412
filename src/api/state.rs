use std::sync::Arc;

use crate::{
    db::UserStore,
    nlp::Tagger,
    services::{Lexicon, MetadataProvider},
};

/// Shared application state
///
/// Every field is a startup-constructed singleton held for the process
/// lifetime: the tagger and lexicon are read-only after load, and the store
/// and provider clients are long-lived shared resources. Handlers receive
/// the state through axum's `State` extractor rather than ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub tagger: Arc<Tagger>,
    pub lexicon: Arc<Lexicon>,
    pub store: Arc<dyn UserStore>,
    pub provider: Arc<dyn MetadataProvider>,
}

impl AppState {
    pub fn new(
        tagger: Arc<Tagger>,
        lexicon: Arc<Lexicon>,
        store: Arc<dyn UserStore>,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            tagger,
            lexicon,
            store,
            provider,
        }
    }
}
