//! Result selection and widget state on SiteApi.

use std::sync::Arc;

use crate::error::{Result, SiteError};
use crate::index::EntryKind;
use crate::navigation::{NavigationBus, NavigationOutcome};
use crate::widgets::{AchievementMap, Timeline};
use crate::SiteApi;

impl SiteApi {
    /// Select a search result: close the overlay, scroll to the widget's
    /// section, wait for the scroll to settle, then signal the widget.
    pub async fn select_result(&self, id: &str, kind: EntryKind) -> Result<NavigationOutcome> {
        self.controller
            .select_result(id, kind)
            .await
            .map_err(|e| SiteError::Other(format!("Navigation task failed: {}", e)))
    }

    /// The shared signal bus. Extra widgets subscribe here.
    pub fn bus(&self) -> &Arc<NavigationBus> {
        &self.bus
    }

    /// Snapshot of the map widget.
    pub fn map_state(&self) -> AchievementMap {
        match self.map.lock() {
            Ok(map) => map.clone(),
            Err(e) => e.into_inner().clone(),
        }
    }

    /// Snapshot of the timeline widget.
    pub fn timeline_state(&self) -> Timeline {
        match self.timeline.lock() {
            Ok(timeline) => timeline.clone(),
            Err(e) => e.into_inner().clone(),
        }
    }
}
