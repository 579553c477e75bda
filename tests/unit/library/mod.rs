use super::*;
use crate::catalog::category::Category;
use crate::foundation::core::{Canvas, Progress};
use crate::frame::model::Frame;

struct Blank;

impl Animation for Blank {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: 4,
            height: 4,
        }
    }

    fn render(&self, _progress: Progress) -> Frame {
        Frame::new(self.canvas())
    }
}

fn catalog(keys: &[&str]) -> Catalog {
    Catalog::new(
        keys.iter()
            .map(|k| CatalogEntry::new(*k, *k, Category::Alignment, "TST", false, ""))
            .collect(),
    )
    .unwrap()
}

#[test]
fn consistent_pair_builds() {
    let registry = Registry::new().with("a", Blank).unwrap().with("b", Blank).unwrap();
    let lib = Library::new(catalog(&["a", "b"]), registry).unwrap();
    let (entry, _) = lib.resolve("b").unwrap();
    assert_eq!(entry.key, "b");
}

#[test]
fn catalog_key_without_renderer_is_reported() {
    let registry = Registry::new().with("a", Blank).unwrap();
    let err = Library::new(catalog(&["a", "b"]), registry).unwrap_err();
    match err {
        LoopreelError::MissingRenderer(msg) => assert!(msg.contains("without renderer: b")),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn renderer_without_catalog_key_is_reported() {
    let registry = Registry::new().with("a", Blank).unwrap().with("ghost", Blank).unwrap();
    let err = Library::new(catalog(&["a"]), registry).unwrap_err();
    match err {
        LoopreelError::MissingRenderer(msg) => assert!(msg.contains("ghost")),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn duplicate_registration_is_rejected() {
    let err = Registry::new().with("a", Blank).unwrap().with("a", Blank);
    assert!(err.is_err());
}

#[test]
fn unknown_key_takes_precedence_over_registry() {
    let lib = Library::new(catalog(&["a"]), Registry::new().with("a", Blank).unwrap()).unwrap();
    assert!(matches!(
        lib.resolve("nope"),
        Err(LoopreelError::UnknownCatalogKey(_))
    ));
}

#[test]
fn builtin_library_is_consistent_and_shared() {
    let a = Library::builtin().unwrap();
    let b = Library::builtin().unwrap();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.catalog().len(), 26);
    assert_eq!(a.registry().len(), 26);
    assert_eq!(a.catalog().list_all()[0].key, "indexing");
}
