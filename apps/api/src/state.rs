use std::sync::Arc;

use crate::publish::Publisher;
use crate::site::extractor::SiteExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable collaborators; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<SiteExtractor>,
    /// Pluggable publisher. Default: NetlifyPublisher.
    pub publisher: Arc<dyn Publisher>,
}
