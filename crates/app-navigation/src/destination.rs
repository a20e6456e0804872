//! Destination catalog
//!
//! This module defines the closed set of navigation targets for the app,
//! together with per-destination metadata (display title, authentication
//! requirement, premium flag).

use serde::{Deserialize, Serialize};

use crate::filters::SearchFilters;

/// All navigable destinations in the application.
///
/// The set is closed: screens are added by adding a variant here, which
/// forces the metadata lookups below ([`Destination::title`],
/// [`Destination::requires_auth`], [`Destination::is_premium`]) to be
/// updated before the crate compiles again.
///
/// A `Destination` is immutable once constructed; equality and hashing are
/// structural, and the same destination may appear more than once in a
/// navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "destination", content = "params")]
pub enum Destination {
    // Catalog
    /// Product detail page
    ProductDetail {
        /// Product identifier
        product_id: String,
    },
    /// Collection overview
    CollectionDetail {
        /// Collection identifier
        collection_id: String,
    },
    /// Boutique detail page
    BoutiqueDetail {
        /// Boutique identifier
        boutique_id: String,
    },

    // Experiences
    /// In-store appointment booking
    AppointmentBooking {
        /// Store identifier
        store_id: String,
    },
    /// Watch configurator
    WatchConfigurator {
        /// Product identifier
        product_id: String,
    },
    /// Augmented-reality try-on
    ArTryOn {
        /// Product identifier
        product_id: String,
    },

    // Account
    /// Past orders
    OrderHistory,
    /// Single order detail
    OrderDetail {
        /// Order identifier
        order_id: String,
    },
    /// Wishlist detail
    WishlistDetail {
        /// Wishlist identifier
        wishlist_id: String,
    },
    /// Account settings
    Settings,
    /// Profile editing
    EditProfile,

    // Search
    /// Search results, optionally narrowed by filters
    SearchResults {
        /// Free-text query
        query: String,
        /// Optional filter set
        #[serde(skip_serializing_if = "Option::is_none")]
        filters: Option<SearchFilters>,
    },
    /// Filtered view of a single collection
    CollectionFilter {
        /// Collection identifier
        collection_id: String,
    },

    // Editorial
    /// Heritage story
    HeritageStory {
        /// Story identifier
        story_id: String,
    },
    /// Brand editorial content
    BrandContent {
        /// Content identifier
        content_id: String,
    },

    // Service
    /// Customer support
    CustomerSupport,
    /// Warranty registration for a purchased product
    WarrantyRegistration {
        /// Product identifier
        product_id: String,
    },
    /// Service request at a boutique
    ServiceRequest {
        /// Store identifier
        store_id: String,
    },

    // Membership
    /// Members-only editorial content
    ExclusiveContent,
    /// Limited edition releases
    LimitedEditions,
    /// Membership programme benefits
    MembershipBenefits,

    // Onboarding
    /// Welcome step
    WelcomeOnboarding,
    /// Style preference survey
    StylePreferences,
    /// Location permission prompt
    LocationPermissions,
    /// Notification permission prompt
    NotificationPermissions,
}

impl Destination {
    /// Get the display title for this destination.
    pub fn title(&self) -> &'static str {
        match self {
            Destination::ProductDetail { .. } => "Product Details",
            Destination::CollectionDetail { .. } => "Collection",
            Destination::BoutiqueDetail { .. } => "Boutique",
            Destination::AppointmentBooking { .. } => "Book Appointment",
            Destination::WatchConfigurator { .. } => "Customize Watch",
            Destination::ArTryOn { .. } => "AR Try-On",
            Destination::OrderHistory => "Order History",
            Destination::OrderDetail { .. } => "Order Details",
            Destination::WishlistDetail { .. } => "Wishlist",
            Destination::Settings => "Settings",
            Destination::EditProfile => "Edit Profile",
            Destination::SearchResults { .. } => "Search Results",
            Destination::CollectionFilter { .. } => "Collection",
            Destination::HeritageStory { .. } => "Heritage",
            Destination::BrandContent { .. } => "Breitling",
            Destination::CustomerSupport => "Support",
            Destination::WarrantyRegistration { .. } => "Warranty Registration",
            Destination::ServiceRequest { .. } => "Service Request",
            Destination::ExclusiveContent => "Exclusive",
            Destination::LimitedEditions => "Limited Editions",
            Destination::MembershipBenefits => "Membership",
            Destination::WelcomeOnboarding => "Welcome",
            Destination::StylePreferences => "Style Preferences",
            Destination::LocationPermissions => "Location Services",
            Destination::NotificationPermissions => "Notifications",
        }
    }

    /// Check if this destination requires an authenticated session.
    pub fn requires_auth(&self) -> bool {
        match self {
            Destination::OrderHistory
            | Destination::OrderDetail { .. }
            | Destination::WishlistDetail { .. }
            | Destination::Settings
            | Destination::EditProfile
            | Destination::AppointmentBooking { .. }
            | Destination::WarrantyRegistration { .. }
            | Destination::ServiceRequest { .. }
            | Destination::ExclusiveContent
            | Destination::MembershipBenefits => true,

            Destination::ProductDetail { .. }
            | Destination::CollectionDetail { .. }
            | Destination::BoutiqueDetail { .. }
            | Destination::WatchConfigurator { .. }
            | Destination::ArTryOn { .. }
            | Destination::SearchResults { .. }
            | Destination::CollectionFilter { .. }
            | Destination::HeritageStory { .. }
            | Destination::BrandContent { .. }
            | Destination::CustomerSupport
            | Destination::LimitedEditions
            | Destination::WelcomeOnboarding
            | Destination::StylePreferences
            | Destination::LocationPermissions
            | Destination::NotificationPermissions => false,
        }
    }

    /// Check if this destination is premium (members-only) content.
    pub fn is_premium(&self) -> bool {
        match self {
            Destination::ExclusiveContent
            | Destination::LimitedEditions
            | Destination::MembershipBenefits => true,

            Destination::ProductDetail { .. }
            | Destination::CollectionDetail { .. }
            | Destination::BoutiqueDetail { .. }
            | Destination::AppointmentBooking { .. }
            | Destination::WatchConfigurator { .. }
            | Destination::ArTryOn { .. }
            | Destination::OrderHistory
            | Destination::OrderDetail { .. }
            | Destination::WishlistDetail { .. }
            | Destination::Settings
            | Destination::EditProfile
            | Destination::SearchResults { .. }
            | Destination::CollectionFilter { .. }
            | Destination::HeritageStory { .. }
            | Destination::BrandContent { .. }
            | Destination::CustomerSupport
            | Destination::WarrantyRegistration { .. }
            | Destination::ServiceRequest { .. }
            | Destination::WelcomeOnboarding
            | Destination::StylePreferences
            | Destination::LocationPermissions
            | Destination::NotificationPermissions => false,
        }
    }
}
