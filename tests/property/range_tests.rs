//! Property-based tests for the ranges of randomized fields

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use serde_json::json;

use mock_gateway::providers::{delivery_id, pidge, two_factor};
use mock_gateway::types::{CreateOrderRequest, DeliveryStatus, QuoteRequest, Trip};

fn millis_strategy() -> impl Strategy<Value = i64> {
    // 2001 through 2286
    1_000_000_000_000i64..10_000_000_000_000
}

proptest! {
    #[test]
    fn test_delivery_id_shape(seed in any::<u64>(), millis in millis_strategy()) {
        let now = Utc.timestamp_millis_opt(millis).unwrap();
        let id = delivery_id(&mut StdRng::seed_from_u64(seed), now);

        let pattern = Regex::new(r"^\d+[0-9A-Z]{8}$").unwrap();
        prop_assert!(pattern.is_match(&id), "bad id {}", id);
        prop_assert!(id.starts_with(&millis.to_string()));
    }

    #[test]
    fn test_order_status_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = pidge::order_status("ORD", &mut rng, Utc::now()).data;

        prop_assert!(DeliveryStatus::PROGRESS.contains(&data.status));
        prop_assert!(data.rider_location.lat >= pidge::BASE_LATITUDE);
        prop_assert!(data.rider_location.lat < pidge::BASE_LATITUDE + pidge::COORDINATE_JITTER);
        prop_assert!(data.rider_location.lng >= pidge::BASE_LONGITUDE);
        prop_assert!(data.rider_location.lng < pidge::BASE_LONGITUDE + pidge::COORDINATE_JITTER);
    }

    #[test]
    fn test_quote_distance_in_range(seed in any::<u64>(), reference in "[A-Z0-9-]{1,12}") {
        let request: QuoteRequest = serde_json::from_value(json!({"drop": [{"ref": reference.clone()}]})).unwrap();
        let data = pidge::quote(&request, &mut StdRng::seed_from_u64(seed), Utc::now()).data;

        prop_assert_eq!(&data.distance[0].reference, &json!(reference));
        prop_assert!((2000..10000).contains(&data.distance[0].distance));
        prop_assert_eq!(data.items[0].quote.distance, data.distance[0].distance);
    }

    #[test]
    fn test_legacy_quote_in_range(seed in any::<u64>()) {
        let data = pidge::legacy_quote(&mut StdRng::seed_from_u64(seed), Utc::now()).data;

        prop_assert!((30..80).contains(&data.delivery_fee));
        prop_assert!((1..11).contains(&data.distance_km));
        prop_assert!((20..50).contains(&data.estimated_time_minutes));
        prop_assert_eq!(data.quote_id.len(), 14);
    }

    #[test]
    fn test_create_order_covers_all_sources(
        seed in any::<u64>(),
        sources in prop::collection::hash_set("[A-Z]{1,6}", 1..8),
    ) {
        let sources: Vec<String> = sources.into_iter().collect();
        let trips = sources.iter().map(|s| Trip::with_source(s.as_str())).collect();
        let request = CreateOrderRequest::new(trips);
        let data = pidge::create_order(&request, &mut StdRng::seed_from_u64(seed), Utc::now()).data;

        let keys: Vec<_> = data.keys().cloned().collect();
        prop_assert_eq!(keys, sources);
    }

    #[test]
    fn test_mask_keeps_last_four(mobile in "[0-9]{4,15}") {
        let masked = two_factor::mask_recipient(&mobile);
        prop_assert_eq!(masked.len(), mobile.len());
        prop_assert!(masked.ends_with(&mobile[mobile.len() - 4..]));
        prop_assert!(masked[..mobile.len() - 4].chars().all(|c| c == '*'));
    }
}
