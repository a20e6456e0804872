//! Navigation router
//!
//! This module provides the centralized router owning one navigation path
//! per navigation root, with stack mutation operations, named convenience
//! wrappers, deep-link handling, and synchronous change notification for
//! the rendering layer.

use tracing::debug;

use crate::deeplink::{self, DeepLinkOutcome};
use crate::destination::Destination;
use crate::stack::NavigationPath;

/// Kind of path mutation reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationChange {
    /// An entry was appended
    Pushed,
    /// One or more entries were removed from the end
    Popped,
    /// The top entry was swapped
    Replaced,
    /// The path was cleared back to the root
    Reset,
}

/// Change notification delivered to listeners after a mutation completes.
///
/// Carries a snapshot of the post-mutation path, so a listener never
/// observes state older than the most recent completed mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEvent {
    /// What kind of mutation occurred
    pub change: NavigationChange,
    /// The path after the mutation, bottom to top
    pub path: Vec<Destination>,
}

type Listener = Box<dyn Fn(&NavigationEvent)>;

/// Stack-based navigation router for one navigation root.
///
/// Each top-level tab owns its own `Router`; instances share no state.
/// All operations are synchronous and must be invoked from the single
/// thread that owns the instance (UI affinity is a precondition, not
/// enforced with locks).
#[derive(Default)]
pub struct Router {
    path: NavigationPath,
    listeners: Vec<Listener>,
}

impl Router {
    /// Create a router with an empty path (root screen shown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener invoked synchronously after every path change.
    pub fn subscribe(&mut self, listener: impl Fn(&NavigationEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, change: NavigationChange) {
        let event = NavigationEvent {
            change,
            path: self.path.entries().to_vec(),
        };
        for listener in &self.listeners {
            listener(&event);
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Push a destination onto the path.
    pub fn navigate(&mut self, destination: Destination) {
        debug!(title = destination.title(), depth = self.path.len() + 1, "navigate");
        self.path.push(destination);
        self.notify(NavigationChange::Pushed);
    }

    /// Pop the top destination. No-op when already at the root.
    pub fn navigate_back(&mut self) {
        if self.path.pop().is_some() {
            debug!(depth = self.path.len(), "navigate back");
            self.notify(NavigationChange::Popped);
        }
    }

    /// Pop up to `levels` destinations, clamped to the current depth.
    pub fn navigate_back_by(&mut self, levels: usize) {
        if self.path.pop_levels(levels) > 0 {
            debug!(levels, depth = self.path.len(), "navigate back by");
            self.notify(NavigationChange::Popped);
        }
    }

    /// Clear the path back to the root in one observable step.
    pub fn navigate_to_root(&mut self) {
        debug!("navigate to root");
        self.path.clear();
        // Always one Reset event, even when already at root
        self.notify(NavigationChange::Reset);
    }

    /// Make `destination` the top of the stack.
    ///
    /// Swaps the top entry when the path is non-empty, pushes otherwise;
    /// depth is unchanged unless the path was empty (then it becomes 1).
    pub fn replace(&mut self, destination: Destination) {
        debug!(title = destination.title(), "replace top");
        self.path.replace_top(destination);
        self.notify(NavigationChange::Replaced);
    }

    // ------------------------------------------------------------------
    // Convenience wrappers
    // ------------------------------------------------------------------

    /// Show a product detail page.
    pub fn show_product(&mut self, product_id: impl Into<String>) {
        self.navigate(Destination::ProductDetail {
            product_id: product_id.into(),
        });
    }

    /// Show a collection.
    pub fn show_collection(&mut self, collection_id: impl Into<String>) {
        self.navigate(Destination::CollectionDetail {
            collection_id: collection_id.into(),
        });
    }

    /// Show a boutique.
    pub fn show_boutique(&mut self, boutique_id: impl Into<String>) {
        self.navigate(Destination::BoutiqueDetail {
            boutique_id: boutique_id.into(),
        });
    }

    /// Open the watch configurator for a product.
    pub fn show_watch_configurator(&mut self, product_id: impl Into<String>) {
        self.navigate(Destination::WatchConfigurator {
            product_id: product_id.into(),
        });
    }

    /// Open AR try-on for a product.
    pub fn show_ar_try_on(&mut self, product_id: impl Into<String>) {
        self.navigate(Destination::ArTryOn {
            product_id: product_id.into(),
        });
    }

    /// Open appointment booking for a store.
    pub fn show_appointment_booking(&mut self, store_id: impl Into<String>) {
        self.navigate(Destination::AppointmentBooking {
            store_id: store_id.into(),
        });
    }

    /// Show order history.
    pub fn show_order_history(&mut self) {
        self.navigate(Destination::OrderHistory);
    }

    /// Show a single order.
    pub fn show_order(&mut self, order_id: impl Into<String>) {
        self.navigate(Destination::OrderDetail {
            order_id: order_id.into(),
        });
    }

    /// Show a wishlist.
    pub fn show_wishlist(&mut self, wishlist_id: impl Into<String>) {
        self.navigate(Destination::WishlistDetail {
            wishlist_id: wishlist_id.into(),
        });
    }

    /// Show settings.
    pub fn show_settings(&mut self) {
        self.navigate(Destination::Settings);
    }

    // ------------------------------------------------------------------
    // Deep links
    // ------------------------------------------------------------------

    /// Resolve and apply an external deep-link URL.
    ///
    /// Recognized hosts navigate to the matching destination, unrecognized
    /// hosts reset to the root, and malformed or incomplete links leave the
    /// path untouched. The outcome is returned so callers can log or alert,
    /// and may be ignored.
    pub fn handle_deep_link(&mut self, url: &str) -> DeepLinkOutcome {
        let outcome = deeplink::resolve(url);
        match &outcome {
            DeepLinkOutcome::Matched(destination) => {
                self.navigate(destination.clone());
            }
            DeepLinkOutcome::Reset => {
                self.navigate_to_root();
            }
            DeepLinkOutcome::MissingParameter { .. } | DeepLinkOutcome::Malformed => {}
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Check if there is anything to pop.
    pub fn can_go_back(&self) -> bool {
        !self.path.is_empty()
    }

    /// Current path depth (number of pushed entries).
    pub fn navigation_depth(&self) -> usize {
        self.path.len()
    }

    /// Check if the root screen is showing.
    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The current path, bottom to top.
    pub fn path(&self) -> &[Destination] {
        self.path.entries()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("path", &self.path)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
