//! Navigation routing for the Maison companion app
//!
//! This crate provides the centralized navigation layer: a closed catalog
//! of typed destinations, a per-root stack of visited destinations, a
//! router exposing push/pop/replace/reset mutations with synchronous
//! change notification, and a deep-link resolver mapping external URLs to
//! destinations.
//!
//! The rendering layer is an external collaborator: it subscribes to
//! [`Router`] change events and renders one screen per path entry, looking
//! up chrome via the destination metadata ([`Destination::title`],
//! [`Destination::requires_auth`], [`Destination::is_premium`]).
//!
//! Each navigation root (one per top-level tab) owns its own [`Router`];
//! instances are single-threaded by contract and share no state.
//!
//! # Example
//!
//! ```rust
//! use app_navigation::{Destination, Router};
//!
//! let mut router = Router::new();
//! router.show_collection("navitimer");
//! router.show_product("AB0138241C1A1");
//! assert_eq!(router.navigation_depth(), 2);
//!
//! router.handle_deep_link("app://ar?product=AB0138241C1A1");
//! assert!(matches!(
//!     router.path().last(),
//!     Some(Destination::ArTryOn { .. })
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deeplink;
pub mod destination;
pub mod filters;
pub mod router;
pub mod stack;

// Re-export commonly used types
pub use deeplink::DeepLinkOutcome;
pub use destination::Destination;
pub use filters::{Availability, FilterError, PriceRange, SearchFilters};
pub use router::{NavigationChange, NavigationEvent, Router};
pub use stack::NavigationPath;
