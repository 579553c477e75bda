use super::*;

fn entry(key: &str, category: Category) -> CatalogEntry {
    CatalogEntry::new(key, key.to_uppercase(), category, "TST", false, "test entry")
}

#[test]
fn lookup_and_unknown_key() {
    let c = Catalog::new(vec![
        entry("a", Category::Retrieval),
        entry("b", Category::Reasoning),
    ])
    .unwrap();
    assert_eq!(c.lookup("b").unwrap().label, "B");
    let err = c.lookup("zzz").unwrap_err();
    assert!(matches!(err, LoopreelError::UnknownCatalogKey(k) if k == "zzz"));
}

#[test]
fn duplicate_and_empty_keys_rejected() {
    assert!(
        Catalog::new(vec![
            entry("a", Category::Retrieval),
            entry("a", Category::Alignment),
        ])
        .is_err()
    );
    assert!(Catalog::new(vec![entry(" ", Category::Retrieval)]).is_err());
}

#[test]
fn category_listing_preserves_declaration_order() {
    let c = Catalog::new(vec![
        entry("r1", Category::Retrieval),
        entry("s1", Category::Speculative),
        entry("r2", Category::Retrieval),
        entry("s2", Category::Speculative),
    ])
    .unwrap();
    let keys: Vec<_> = c
        .list_by_category(Category::Speculative)
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, ["s1", "s2"]);
    assert_eq!(c.list_filtered(None).len(), 4);
    assert_eq!(c.keys().collect::<Vec<_>>(), ["r1", "s1", "r2", "s2"]);
}
