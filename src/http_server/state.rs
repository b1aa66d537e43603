//! Shared gateway state

use std::sync::Arc;

use crate::store::QuoteStore;
use crate::view::ViewRenderer;

/// Everything a handler needs: the store handle and the compiled templates
pub struct GatewayState {
    pub store: Arc<dyn QuoteStore>,
    pub views: ViewRenderer,
}

impl GatewayState {
    pub fn new(store: Arc<dyn QuoteStore>, views: ViewRenderer) -> Arc<Self> {
        Arc::new(Self { store, views })
    }
}
