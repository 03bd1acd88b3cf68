//! In-memory document: host resolution, schema checks, transaction rollback.

use hostmark_core::errors::DocumentError;
use hostmark_core::types::{AttributeWrite, Category, ElementId};
use hostmark_core::Document;
use hostmark_storage::InMemoryDocument;

const SLOTS: &[&str] = &["baseCategoryLabel", "baseMark"];

fn write(element: ElementId, name: &str, value: &str) -> AttributeWrite {
    AttributeWrite::new(element, name, Some(value.to_string()))
}

#[test]
fn elements_are_listed_in_id_order() {
    let mut doc = InMemoryDocument::new();
    let host = doc.add_host(Some(Category::Walls), Some("W-1"));
    let a = doc.add_reinforcement(Some(host), SLOTS);
    let b = doc.add_reinforcement(None, SLOTS);

    let ids: Vec<_> = doc
        .reinforcement_elements()
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn resolve_host_distinguishes_absent_from_dangling() {
    let mut doc = InMemoryDocument::new();
    let host = doc.add_host(Some(Category::Doors), Some("D-101"));
    let hosted = doc.add_reinforcement(Some(host), SLOTS);
    let loose = doc.add_reinforcement(None, SLOTS);
    let dangling = doc.add_reinforcement(Some(ElementId(999)), SLOTS);

    let elements = doc.reinforcement_elements().unwrap();
    let find = |id| elements.iter().find(|e| e.id == id).unwrap();

    let resolved = doc.resolve_host(find(hosted)).unwrap().unwrap();
    assert_eq!(resolved.category, Some(Category::Doors));
    assert_eq!(resolved.mark.as_deref(), Some("D-101"));

    assert_eq!(doc.resolve_host(find(loose)).unwrap(), None);
    assert!(matches!(
        doc.resolve_host(find(dangling)),
        Err(DocumentError::CorruptReference { .. })
    ));
}

#[test]
fn damaged_host_fails_to_resolve() {
    let mut doc = InMemoryDocument::new();
    let host = doc.add_host(Some(Category::Walls), None);
    let rebar = doc.add_reinforcement(Some(host), SLOTS);
    doc.damage_host(host, "unreadable");

    let element = doc.reinforcement_elements().unwrap().remove(0);
    assert_eq!(element.id, rebar);
    let err = doc.resolve_host(&element).unwrap_err();
    assert!(err.to_string().contains("unreadable"));
}

#[test]
fn get_attribute_checks_schema() {
    let mut doc = InMemoryDocument::new();
    let rebar = doc.add_reinforcement(None, &["baseMark"]);

    assert_eq!(doc.get_attribute(rebar, "baseMark").unwrap(), None);
    assert!(matches!(
        doc.get_attribute(rebar, "baseCategoryLabel"),
        Err(DocumentError::AttributeNotFound { .. })
    ));
    assert!(matches!(
        doc.get_attribute(ElementId(42), "baseMark"),
        Err(DocumentError::NotAReinforcement { .. })
    ));
}

#[test]
fn apply_atomically_commits_every_write() {
    let mut doc = InMemoryDocument::new();
    let a = doc.add_reinforcement(None, SLOTS);
    let b = doc.add_reinforcement(None, SLOTS);

    doc.apply_atomically(
        "tx",
        &[write(a, "baseMark", "1"), write(b, "baseMark", "2")],
    )
    .unwrap();

    assert_eq!(doc.get_attribute(a, "baseMark").unwrap().as_deref(), Some("1"));
    assert_eq!(doc.get_attribute(b, "baseMark").unwrap().as_deref(), Some("2"));
}

#[test]
fn failing_write_rolls_back_earlier_writes() {
    let mut doc = InMemoryDocument::new();
    let good = doc.add_reinforcement(None, SLOTS);
    let bad = doc.add_reinforcement(None, &["baseMark"]);
    doc.apply_atomically("seed", &[write(good, "baseMark", "old")])
        .unwrap();

    let err = doc
        .apply_atomically(
            "tx",
            &[
                write(good, "baseMark", "new"),
                write(good, "baseCategoryLabel", "Wall"),
                write(bad, "baseCategoryLabel", "Wall"),
            ],
        )
        .unwrap_err();

    assert!(matches!(err, DocumentError::AttributeNotFound { element, .. } if element == bad));
    assert_eq!(doc.get_attribute(good, "baseMark").unwrap().as_deref(), Some("old"));
    assert_eq!(doc.get_attribute(good, "baseCategoryLabel").unwrap(), None);
}

#[test]
fn dropped_transaction_restores_repeated_writes_in_order() {
    let mut doc = InMemoryDocument::new();
    let rebar = doc.add_reinforcement(None, SLOTS);
    doc.apply_atomically("seed", &[write(rebar, "baseMark", "original")])
        .unwrap();

    {
        let mut tx = doc.transaction("scratch");
        tx.set_attribute(rebar, "baseMark", Some("first".to_string()))
            .unwrap();
        tx.set_attribute(rebar, "baseMark", Some("second".to_string()))
            .unwrap();
        assert_eq!(tx.pending_writes(), 2);
        tx.rollback();
    }

    assert_eq!(
        doc.get_attribute(rebar, "baseMark").unwrap().as_deref(),
        Some("original")
    );
}

#[test]
fn committed_transaction_keeps_writes() {
    let mut doc = InMemoryDocument::new();
    let rebar = doc.add_reinforcement(None, SLOTS);

    let mut tx = doc.transaction("keep");
    assert_eq!(tx.name(), "keep");
    tx.set_attribute(rebar, "baseMark", None).unwrap();
    tx.set_attribute(rebar, "baseCategoryLabel", Some("Wall".to_string()))
        .unwrap();
    tx.commit();

    assert_eq!(
        doc.get_attribute(rebar, "baseCategoryLabel").unwrap().as_deref(),
        Some("Wall")
    );
}

#[test]
fn host_edits_are_seen_by_later_resolution() {
    let mut doc = InMemoryDocument::new();
    let host = doc.add_host(Some(Category::Floors), Some("F-1"));
    doc.add_reinforcement(Some(host), SLOTS);

    doc.host_mut(host).unwrap().mark = Some("F-2".to_string());
    let element = doc.reinforcement_elements().unwrap().remove(0);
    let resolved = doc.resolve_host(&element).unwrap().unwrap();
    assert_eq!(resolved.mark.as_deref(), Some("F-2"));

    let removed = doc.remove_host(host).unwrap();
    assert_eq!(removed.category, Some(Category::Floors));
    assert!(matches!(
        doc.resolve_host(&element),
        Err(DocumentError::CorruptReference { .. })
    ));
    assert!(doc.host_mut(host).is_none());
}
