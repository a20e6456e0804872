//! Deep-link resolution
//!
//! This module parses external URLs of the form `scheme://<host>?<query>`
//! and maps recognized hosts to destinations via a fixed dispatch table.
//! Resolution is pure; [`crate::Router::handle_deep_link`] applies the
//! outcome to the navigation path.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::destination::Destination;

/// Result of resolving a deep-link URL.
///
/// Only [`DeepLinkOutcome::Matched`] and [`DeepLinkOutcome::Reset`] change
/// navigation state; the failure outcomes carry diagnostics for callers
/// that want to log or alert, and are otherwise silent.
#[derive(Debug, Clone, PartialEq)]
pub enum DeepLinkOutcome {
    /// A recognized host with its required parameter
    Matched(Destination),
    /// An unrecognized host; the path resets to the root
    Reset,
    /// A recognized host missing its required query parameter
    MissingParameter {
        /// The host whose parameter was absent
        host: String,
    },
    /// The URL could not be parsed into a host component
    Malformed,
}

/// Resolve a deep-link URL against the dispatch table.
pub fn resolve(url: &str) -> DeepLinkOutcome {
    let Some((host, query)) = parse(url) else {
        warn!(url, "malformed deep link");
        return DeepLinkOutcome::Malformed;
    };

    let params = parse_query(query);
    let outcome = dispatch(host, &params);
    debug!(host, ?outcome, "resolved deep link");
    outcome
}

/// Split a URL into host and raw query string.
///
/// Returns `None` when the scheme separator is absent or the host is empty.
/// Any path segment after the host is ignored.
fn parse(url: &str) -> Option<(&str, Option<&str>)> {
    let (_, rest) = url.split_once("://")?;
    let (authority, query) = match rest.split_once('?') {
        Some((authority, query)) => (authority, Some(query)),
        None => (rest, None),
    };
    let host = authority.split('/').next().unwrap_or("");
    if host.is_empty() {
        return None;
    }
    Some((host, query))
}

/// Parse a query string into a key/value map.
///
/// Values are percent-decoded; the first occurrence of a key wins.
fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let Some(query) = query else {
        return params;
    };
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if let Ok(decoded) = urlencoding::decode(value) {
                params
                    .entry(key.to_string())
                    .or_insert_with(|| decoded.into_owned());
            }
        }
    }
    params
}

/// The host dispatch table.
fn dispatch(host: &str, params: &HashMap<String, String>) -> DeepLinkOutcome {
    match host {
        "product" => with_param(host, params, "id", |id| Destination::ProductDetail {
            product_id: id,
        }),
        "collection" => with_param(host, params, "id", |id| Destination::CollectionDetail {
            collection_id: id,
        }),
        "boutique" => with_param(host, params, "id", |id| Destination::BoutiqueDetail {
            boutique_id: id,
        }),
        "ar" => with_param(host, params, "product", |id| Destination::ArTryOn {
            product_id: id,
        }),
        "configurator" => with_param(host, params, "product", |id| {
            Destination::WatchConfigurator { product_id: id }
        }),
        "appointment" => with_param(host, params, "store", |id| {
            Destination::AppointmentBooking { store_id: id }
        }),
        "orders" => DeepLinkOutcome::Matched(Destination::OrderHistory),
        "order" => with_param(host, params, "id", |id| Destination::OrderDetail {
            order_id: id,
        }),
        "wishlist" => with_param(host, params, "id", |id| Destination::WishlistDetail {
            wishlist_id: id,
        }),
        "settings" => DeepLinkOutcome::Matched(Destination::Settings),
        _ => DeepLinkOutcome::Reset,
    }
}

fn with_param(
    host: &str,
    params: &HashMap<String, String>,
    key: &str,
    build: impl FnOnce(String) -> Destination,
) -> DeepLinkOutcome {
    match params.get(key) {
        Some(value) => DeepLinkOutcome::Matched(build(value.clone())),
        None => DeepLinkOutcome::MissingParameter {
            host: host.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_link() {
        assert_eq!(
            resolve("app://product?id=ABC123"),
            DeepLinkOutcome::Matched(Destination::ProductDetail {
                product_id: "ABC123".into()
            })
        );
    }

    #[test]
    fn test_ar_link() {
        assert_eq!(
            resolve("app://ar?product=XYZ"),
            DeepLinkOutcome::Matched(Destination::ArTryOn {
                product_id: "XYZ".into()
            })
        );
    }

    #[test]
    fn test_configurator_and_appointment_params() {
        assert_eq!(
            resolve("app://configurator?product=NAV-01"),
            DeepLinkOutcome::Matched(Destination::WatchConfigurator {
                product_id: "NAV-01".into()
            })
        );
        assert_eq!(
            resolve("app://appointment?store=geneva-1"),
            DeepLinkOutcome::Matched(Destination::AppointmentBooking {
                store_id: "geneva-1".into()
            })
        );
    }

    #[test]
    fn test_unconditional_hosts_ignore_query() {
        assert_eq!(
            resolve("app://orders"),
            DeepLinkOutcome::Matched(Destination::OrderHistory)
        );
        assert_eq!(
            resolve("app://settings?tab=profile"),
            DeepLinkOutcome::Matched(Destination::Settings)
        );
    }

    #[test]
    fn test_unknown_host_resets() {
        assert_eq!(resolve("app://unknown-host"), DeepLinkOutcome::Reset);
        assert_eq!(resolve("app://promo?id=1"), DeepLinkOutcome::Reset);
    }

    #[test]
    fn test_missing_required_parameter() {
        assert_eq!(
            resolve("app://product"),
            DeepLinkOutcome::MissingParameter {
                host: "product".into()
            }
        );
        // Wrong key counts as missing
        assert_eq!(
            resolve("app://ar?id=XYZ"),
            DeepLinkOutcome::MissingParameter { host: "ar".into() }
        );
    }

    #[test]
    fn test_malformed_urls() {
        assert_eq!(resolve("not a url"), DeepLinkOutcome::Malformed);
        assert_eq!(resolve("app://"), DeepLinkOutcome::Malformed);
        assert_eq!(resolve("app://?id=1"), DeepLinkOutcome::Malformed);
        assert_eq!(resolve(""), DeepLinkOutcome::Malformed);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            resolve("app://product?id=A&id=B"),
            DeepLinkOutcome::Matched(Destination::ProductDetail {
                product_id: "A".into()
            })
        );
    }

    #[test]
    fn test_values_are_percent_decoded() {
        assert_eq!(
            resolve("app://product?id=A%20B"),
            DeepLinkOutcome::Matched(Destination::ProductDetail {
                product_id: "A B".into()
            })
        );
    }

    #[test]
    fn test_trailing_path_after_host_is_ignored() {
        assert_eq!(
            resolve("app://orders/recent"),
            DeepLinkOutcome::Matched(Destination::OrderHistory)
        );
    }

    #[test]
    fn test_valueless_pair_is_ignored() {
        assert_eq!(
            resolve("app://product?id"),
            DeepLinkOutcome::MissingParameter {
                host: "product".into()
            }
        );
    }
}
