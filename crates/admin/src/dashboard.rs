//! Admin dashboard service.
//!
//! Ties the [`Copywriter`] to the session [`Store`]: generated descriptions are
//! written back into the catalog, and the marketing insight is regenerated
//! whenever the catalog changes. Each AI call is split into `begin_*` and
//! `finish_*` steps so a caller can run the request itself (for example on a
//! spawned task) while the [`RequestTracker`] decides which results still
//! apply.

use rand::Rng;
use tracing::{debug, info, instrument};

use berrima_core::{Catalog, Product, ProductId, ProductUpdate, StoreStats};
use berrima_storefront::{Command, Event, Store};

use crate::copywriter::{Copywriter, TextGenerator};
use crate::tracker::{RequestTracker, Ticket};

/// Insight text before the first insight arrives.
pub const INSIGHT_PLACEHOLDER: &str = "Analyzing your store data...";

/// Insight text while a refresh is outstanding.
pub const INSIGHT_PENDING: &str = "Analyzing...";

/// A started description request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRequest {
    pub id: ProductId,
    pub name: String,
    pub category: String,
}

/// A description written into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDescription {
    pub text: String,
    /// Events from the catalog update, for [`Dashboard::refresh_on_change`].
    pub events: Vec<Event>,
}

/// A started insight request with the catalog snapshot it covers.
#[derive(Debug, Clone)]
pub struct InsightRequest {
    pub ticket: Ticket,
    pub snapshot: Vec<Product>,
}

/// Admin-side state: the copywriter, outstanding requests and current insight.
#[derive(Debug)]
pub struct Dashboard<G> {
    copywriter: Copywriter<G>,
    tracker: RequestTracker,
    insight: String,
}

impl<G: TextGenerator> Dashboard<G> {
    #[must_use]
    pub fn new(copywriter: Copywriter<G>) -> Self {
        Self {
            copywriter,
            tracker: RequestTracker::new(),
            insight: INSIGHT_PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub const fn copywriter(&self) -> &Copywriter<G> {
        &self.copywriter
    }

    /// Current marketing insight text.
    #[must_use]
    pub fn insight(&self) -> &str {
        &self.insight
    }

    /// Whether a description is being generated for `id`.
    #[must_use]
    pub fn is_generating(&self, id: &ProductId) -> bool {
        self.tracker.is_describing(id)
    }

    /// Headline figures for `catalog`.
    pub fn stats<R: Rng>(&self, catalog: &Catalog, rng: &mut R) -> StoreStats {
        StoreStats::from_catalog(catalog, rng)
    }

    /// Start a description request for product `id`.
    ///
    /// Returns `None` if the product does not exist or a request for it is
    /// already outstanding.
    pub fn begin_description(
        &mut self,
        store: &Store,
        id: &ProductId,
    ) -> Option<DescriptionRequest> {
        let product = store.state().catalog().get(id)?;
        if !self.tracker.begin_description(id) {
            debug!(product_id = %id, "Description already in progress");
            return None;
        }

        Some(DescriptionRequest {
            id: id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
        })
    }

    /// Settle a description request, returning the command that stores `text`
    /// as the product's description.
    pub fn finish_description(&mut self, request: DescriptionRequest, text: String) -> Command {
        self.tracker.finish_description(&request.id);
        Command::UpdateProduct {
            id: request.id,
            update: ProductUpdate::default().description(text),
        }
    }

    /// Generate a description for product `id` and write it into the catalog.
    ///
    /// Returns `None` if the request was refused.
    #[instrument(skip(self, store))]
    pub async fn generate_description(
        &mut self,
        store: &mut Store,
        id: &ProductId,
    ) -> Option<GeneratedDescription> {
        let request = self.begin_description(store, id)?;
        let text = self
            .copywriter
            .describe(&request.name, &request.category)
            .await;

        let command = self.finish_description(request, text.clone());
        let events = store.dispatch(command);
        info!(product_id = %id, "Product description generated");
        Some(GeneratedDescription { text, events })
    }

    /// Start an insight request over the current catalog.
    ///
    /// Supersedes any outstanding insight request.
    pub fn begin_insight(&mut self, store: &Store) -> InsightRequest {
        let ticket = self.tracker.begin_insight();
        self.insight = INSIGHT_PENDING.to_string();
        InsightRequest {
            ticket,
            snapshot: store.state().catalog().products().to_vec(),
        }
    }

    /// Settle an insight request.
    ///
    /// Returns `false` and leaves the insight untouched if a newer request was
    /// issued after `ticket`.
    pub fn finish_insight(&mut self, ticket: Ticket, text: String) -> bool {
        if !self.tracker.finish_insight(ticket) {
            debug!(ticket = ticket.get(), "Discarding stale insight");
            return false;
        }
        self.insight = text;
        true
    }

    /// Regenerate the insight for the current catalog.
    #[instrument(skip_all)]
    pub async fn refresh_insight(&mut self, store: &Store) -> &str {
        let request = self.begin_insight(store);
        let text = self.copywriter.insight(&request.snapshot).await;
        self.finish_insight(request.ticket, text);
        &self.insight
    }

    /// Refresh the insight if any of `events` changed the catalog.
    ///
    /// Returns whether a refresh ran.
    pub async fn refresh_on_change(&mut self, store: &Store, events: &[Event]) -> bool {
        if !events.iter().any(Event::changes_catalog) {
            return false;
        }
        self.refresh_insight(store).await;
        true
    }
}
