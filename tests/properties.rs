use std::collections::HashSet;

use proptest::prelude::*;
use zone_routing::distance::{great_circle_km, path_length_km};
use zone_routing::models::DeliveryPoint;
use zone_routing::{build_routes, partition};

fn to_points(coords: &[(f64, f64)]) -> Vec<DeliveryPoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lat, lon))| DeliveryPoint::new(format!("E_{i}"), lat, lon).expect("in range"))
        .collect()
}

fn distinct(coords: &[(f64, f64)]) -> usize {
    coords
        .iter()
        .map(|&(lat, lon)| (lat.to_bits(), lon.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

fn city_coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-23.7f64..-23.4, -46.8f64..-46.4), 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distance_is_symmetric(
        lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
    ) {
        let ab = great_circle_km(lat1, lon1, lat2, lon2).expect("in range");
        let ba = great_circle_km(lat2, lon2, lat1, lon1).expect("in range");
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
        prop_assert_eq!(great_circle_km(lat, lon, lat, lon).expect("in range"), 0.0);
    }

    #[test]
    fn every_point_routed_exactly_once(coords in city_coords(), k in 1usize..6) {
        let k = k.min(coords.len());
        prop_assume!(distinct(&coords) >= k);
        let points = to_points(&coords);

        let zones = partition(&points, k, 42).expect("valid input");
        prop_assert_eq!(zones.zone_count(), k);
        prop_assert!(zones.zone_sizes().iter().all(|&s| s > 0));

        let summary = build_routes(&points, &zones).expect("valid partition");
        prop_assert_eq!(summary.num_zones(), k);

        let mut routed: Vec<&str> = summary
            .routes()
            .flat_map(|r| r.point_ids().iter().map(String::as_str))
            .collect();
        routed.sort_unstable();
        let mut input: Vec<&str> = points.iter().map(DeliveryPoint::id).collect();
        input.sort_unstable();
        prop_assert_eq!(routed, input);
    }

    #[test]
    fn routes_are_member_permutations(coords in city_coords(), k in 1usize..6) {
        let k = k.min(coords.len());
        prop_assume!(distinct(&coords) >= k);
        let points = to_points(&coords);

        let zones = partition(&points, k, 7).expect("valid input");
        let summary = build_routes(&points, &zones).expect("valid partition");

        for zone in zones.zones() {
            let route = summary.route(zone.id()).expect("zone routed");
            let ids: Vec<&str> = route.point_ids().iter().map(String::as_str).collect();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len());

            let members: HashSet<&str> = zone.member_ids(&points).into_iter().collect();
            prop_assert_eq!(unique, members);
        }
    }

    #[test]
    fn route_distance_is_path_length(coords in city_coords(), k in 1usize..6) {
        let k = k.min(coords.len());
        prop_assume!(distinct(&coords) >= k);
        let points = to_points(&coords);

        let zones = partition(&points, k, 42).expect("valid input");
        let summary = build_routes(&points, &zones).expect("valid partition");

        let mut total = 0.0;
        for route in summary.routes() {
            let recomputed = path_length_km(route.coordinates());
            prop_assert!((route.total_distance() - recomputed).abs() < 1e-6);
            if route.len() > 1 {
                prop_assert!(route.total_distance() >= 0.0);
            } else {
                prop_assert_eq!(route.total_distance(), 0.0);
            }
            total += route.total_distance();
        }
        prop_assert!((summary.total_distance() - total).abs() < 1e-6);
    }

    #[test]
    fn rerun_is_identical(coords in city_coords(), k in 1usize..6, seed in any::<u64>()) {
        let k = k.min(coords.len());
        prop_assume!(distinct(&coords) >= k);
        let points = to_points(&coords);

        let a = partition(&points, k, seed).expect("valid input");
        let b = partition(&points, k, seed).expect("valid input");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(
            build_routes(&points, &a).expect("valid partition"),
            build_routes(&points, &b).expect("valid partition")
        );
    }
}
