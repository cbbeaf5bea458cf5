//! Single entry point for statistics and routing requests.

use std::sync::{Mutex, OnceLock};

use tracing::debug;

use crate::models::types::{Result, RouteStats, StopStats, TransitError};
use crate::provider::static_provider::TransitCatalogue;
use crate::routing::router::{Itinerary, TransitRouter};
use crate::routing::settings::RoutingSettings;

/// Answers requests against a finished catalogue
///
/// The router is built on the first routing request and reused by every
/// request after it. The catalogue cannot be changed once it is handed over.
#[derive(Debug)]
pub struct RequestHandler {
    catalogue: TransitCatalogue,
    settings: Option<RoutingSettings>,
    router: OnceLock<TransitRouter>,
    build_lock: Mutex<()>,
}

impl RequestHandler {
    /// Handler that can answer statistics requests only
    pub fn new(catalogue: TransitCatalogue) -> Self {
        Self {
            catalogue,
            settings: None,
            router: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    pub fn with_routing(catalogue: TransitCatalogue, settings: RoutingSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings: Some(settings),
            ..Self::new(catalogue)
        })
    }

    pub fn catalogue(&self) -> &TransitCatalogue {
        &self.catalogue
    }

    pub fn route_stats(&self, name: &str) -> Result<Option<RouteStats>> {
        self.catalogue.route_stats(name)
    }

    pub fn stop_stats(&self, name: &str) -> Option<StopStats> {
        self.catalogue.stop_stats(name)
    }

    /// Fastest itinerary between two stops, see [`TransitRouter::route`]
    pub fn route(&self, from: &str, to: &str) -> Result<Option<Itinerary>> {
        self.router()?.route(from, to)
    }

    /// The router, built exactly once on first use
    pub fn router(&self) -> Result<&TransitRouter> {
        if let Some(router) = self.router.get() {
            return Ok(router);
        }

        let settings = self.settings.ok_or_else(|| {
            TransitError::InvalidConfiguration("routing settings were not provided".into())
        })?;

        // A poisoned lock only means another build failed; the cell is still empty.
        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(router) = self.router.get() {
            return Ok(router);
        }

        debug!("Building router on first routing request");
        let router = TransitRouter::new(&self.catalogue, settings)?;
        Ok(self.router.get_or_init(|| router))
    }
}
