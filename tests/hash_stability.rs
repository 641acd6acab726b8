use imageserver_parameters::hashing::hash_str;
use imageserver_parameters::Parameters;
use serde_json::json;

#[test]
fn hash_ignores_insertion_order() {
    let mut a = Parameters::new();
    a.set("width", 100);
    a.set("height", 200);
    a.set("cache", Parameters::new().with("ttl", 60).with("backend", "memory"));

    let mut b = Parameters::new();
    b.set("cache", Parameters::new().with("backend", "memory").with("ttl", 60));
    b.set("height", 200);
    b.set("width", 100);

    assert_eq!(a.hash(), b.hash());
}

#[test]
fn hash_is_sha256_of_canonical_rendering() {
    let b = Parameters::new().with("b", 2).with("a", 1);
    assert_eq!(b.to_string(), "{\"a\":1,\"b\":2}");
    assert_eq!(b.hash(), hash_str("{\"a\":1,\"b\":2}"));
    assert_eq!(
        Parameters::new().hash(),
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
    );
}

#[test]
fn hash_changes_with_content() {
    let base = Parameters::new().with("width", 100).with("height", 200);
    let added = base.clone().with("format", "png");
    let changed = base.clone().with("width", 101);
    let removed = Parameters::new().with("width", 100);
    let retyped = base.clone().with("width", "100");
    let float = base.clone().with("width", 100.0);
    let nested = base.clone().with("inner", Parameters::new().with("width", 100));

    let hashes = [&base, &added, &changed, &removed, &retyped, &float, &nested].map(|p| p.hash());
    for (i, a) in hashes.iter().enumerate() {
        for b in hashes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn hash_matches_between_json_and_builder() {
    let from_json = Parameters::from_json(&json!({ "height": 200, "width": 100 })).unwrap();
    let built = Parameters::new().with("width", 100).with("height", 200);
    assert_eq!(from_json.hash(), built.hash());
}

#[test]
fn hash_agrees_with_equality_for_signed_zero() {
    let pos = Parameters::new().with("offset", 0.0);
    let neg = Parameters::new().with("offset", -0.0);
    assert_eq!(pos, neg);
    assert_eq!(pos.hash(), neg.hash());
}
