use std::collections::HashSet;

use csv2pronto::config::FallbackConfig;
use csv2pronto::identity::{EntityKind, FallbackPolicy, IdentifierStrategy, Resolution};
use csv2pronto::model::{IriMinter, Node};
use csv2pronto::{Field, Row};

const NS: &str = "http://example.org/pronto#";

fn strategy(fallbacks: FallbackConfig) -> IdentifierStrategy {
    IdentifierStrategy::new(IriMinter::new(NS), fallbacks)
}

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().copied().collect()
}

#[test]
fn attempt_is_deterministic() {
    let ids = strategy(FallbackConfig::default());
    let r = row(&[("site", "site1"), ("listing_id", "42")]);
    let expected = Resolution::Resolved(Node::iri(format!("{NS}listing_site1_42")));
    assert_eq!(ids.attempt(EntityKind::Listing, &r), expected);
    assert_eq!(ids.attempt(EntityKind::Listing, &r), expected);
    assert_eq!(ids.counters().next(EntityKind::Listing), 0, "attempt never consumes a counter");
}

#[test]
fn attempt_names_first_missing_field() {
    let ids = strategy(FallbackConfig::default());
    let r = row(&[("site", "site1"), ("province", "Buenos Aires")]);
    assert_eq!(
        ids.attempt(EntityKind::Listing, &r),
        Resolution::MissingField(Field::ListingId)
    );
    assert_eq!(
        ids.attempt(EntityKind::Neighborhood, &r),
        Resolution::MissingField(Field::District)
    );
    assert_eq!(
        ids.attempt(EntityKind::Agent, &r),
        Resolution::MissingField(Field::AdvertiserName)
    );
}

#[test]
fn sentinel_fallback_is_null() {
    let ids = strategy(FallbackConfig::default());
    let node = ids.identify(EntityKind::Agent, &Row::default());
    assert_eq!(node, Node::Null);
    assert!(!node.is_present());
}

#[test]
fn anonymous_fallback_is_fresh_blank_node() {
    let ids = strategy(FallbackConfig {
        agent: FallbackPolicy::Anonymous,
        ..FallbackConfig::default()
    });
    let a = ids.identify(EntityKind::Agent, &Row::default());
    let b = ids.identify(EntityKind::Agent, &Row::default());
    assert!(a.is_blank());
    assert!(b.is_blank());
    assert_ne!(a, b);
}

#[test]
fn incremental_fallback_advances_counter() {
    let ids = strategy(FallbackConfig::default());
    let a = ids.identify(EntityKind::Listing, &Row::default());
    let b = ids.identify(EntityKind::Listing, &Row::default());

    let a = a.as_iri().unwrap();
    let b = b.as_iri().unwrap();
    assert!(a.starts_with(&format!("{NS}listing_")), "got {a}");
    assert!(a.ends_with("_0"), "got {a}");
    assert!(b.ends_with("_1"), "got {b}");
    assert_eq!(ids.counters().next(EntityKind::Listing), 2);
    assert_eq!(ids.counters().next(EntityKind::Space), 0);
}

#[test]
fn resolved_identity_ignores_fallback() {
    let ids = strategy(FallbackConfig {
        province: FallbackPolicy::Anonymous,
        ..FallbackConfig::default()
    });
    let r = row(&[("province", "Mendoza")]);
    assert_eq!(
        ids.identify(EntityKind::Province, &r),
        Node::iri(format!("{NS}province_Mendoza"))
    );
}

#[test]
fn default_policies() {
    let fallbacks = FallbackConfig::default();
    for kind in [EntityKind::Listing, EntityKind::RealEstate, EntityKind::Space] {
        assert_eq!(fallbacks.policy(kind), FallbackPolicy::Incremental, "{kind:?}");
    }
    for kind in [
        EntityKind::Site,
        EntityKind::Agent,
        EntityKind::Account,
        EntityKind::Province,
        EntityKind::District,
        EntityKind::Neighborhood,
    ] {
        assert_eq!(fallbacks.policy(kind), FallbackPolicy::Sentinel, "{kind:?}");
    }
}

#[test]
fn incremental_ids_are_unique_across_threads() {
    let ids = strategy(FallbackConfig::default());
    let empty = Row::default();

    let all: Vec<Node> = std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for _ in 0..8 {
            handles.push(scope.spawn(|| {
                (0..200)
                    .map(|_| ids.identify(EntityKind::Space, &empty))
                    .collect::<Vec<_>>()
            }));
        }
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(all.len(), 1600);
    assert_eq!(all.iter().collect::<HashSet<_>>().len(), 1600);
    assert_eq!(ids.counters().next(EntityKind::Space), 1600);
}
