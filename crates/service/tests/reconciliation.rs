//! Reconciliation workflow over the in-memory backend.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use mfr_recon_core::{ActiveFilter, Manufacturer, Page, SupplierAlias, slugify};
use mfr_recon_service::{AliasService, ManufacturerService, ServiceError};
use mfr_recon_storage::traits::{AliasStore, ManufacturerStore};
use mfr_recon_storage::{MemoryStorage, StorageBackend};

struct Fixture {
    memory: MemoryStorage,
    manufacturers: ManufacturerService,
    aliases: AliasService,
}

async fn fixture() -> Fixture {
    let memory = MemoryStorage::default();
    for (id, name) in [("m-acme", "Acme"), ("m-bosch", "Bosch"), ("m-3m", "3M")] {
        memory
            .insert_manufacturer(Manufacturer {
                id: id.to_owned(),
                name: name.to_owned(),
                slug: slugify(name),
                is_active: true,
            })
            .await
            .unwrap();
    }
    for (id, name, manufacturer_id) in [
        ("a-acme-exact", "acme", Some("m-acme")),
        ("a-acme-ind", "Acme Industries", Some("m-acme")),
        ("a-bosch-rb", "Robert Bosch GmbH", Some("m-bosch")),
        ("a-free-1", "Makita Corp", None),
        ("a-free-2", "makita", None),
    ] {
        memory
            .insert_alias(SupplierAlias {
                id: id.to_owned(),
                name: name.to_owned(),
                manufacturer_id: manufacturer_id.map(str::to_owned),
                is_active: true,
            })
            .await
            .unwrap();
    }
    let storage = Arc::new(StorageBackend::Memory(memory.clone()));
    Fixture {
        memory,
        manufacturers: ManufacturerService::new(Arc::clone(&storage)),
        aliases: AliasService::new(storage),
    }
}

fn assert_missing(err: ServiceError, expected: &[&str]) {
    match err {
        ServiceError::MissingFields(names) => assert_eq!(names, expected),
        other => panic!("expected missing fields, got {other}"),
    }
}

#[tokio::test]
async fn empty_search_lists_all_manufacturers_by_name() {
    let f = fixture().await;
    let rows = f.manufacturers.list_with_aliases(None, ActiveFilter::Any, Page::FIRST).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["3M", "Acme", "Bosch"]);
}

#[tokio::test]
async fn search_results_contain_term_in_name_or_non_exact_alias() {
    let f = fixture().await;
    for term in ["acme", "BOSCH", "industries", "gmbh", "zzz"] {
        let rows =
            f.manufacturers.list_with_aliases(Some(term), ActiveFilter::Any, Page::FIRST).await.unwrap();
        let needle = term.to_lowercase();
        for row in &rows {
            let hit = row.name.to_lowercase().contains(&needle)
                || row.aliases.iter().any(|a| a.name.to_lowercase().contains(&needle));
            assert!(hit, "{} returned for {term}", row.name);
        }
    }
    let rows =
        f.manufacturers.list_with_aliases(Some("industries"), ActiveFilter::Any, Page::FIRST).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "m-acme");
}

#[tokio::test]
async fn aliases_never_include_exact_match() {
    let f = fixture().await;
    let rows = f.manufacturers.list_with_aliases(None, ActiveFilter::Any, Page::FIRST).await.unwrap();
    for row in &rows {
        assert!(row.aliases.iter().all(|a| a.name.to_lowercase() != row.name.to_lowercase()));
    }
    let acme = rows.iter().find(|r| r.id == "m-acme").unwrap();
    assert!(acme.has_exact_match);
    let three_m = rows.iter().find(|r| r.id == "m-3m").unwrap();
    assert!(!three_m.has_exact_match);
    assert!(three_m.aliases.is_empty());
}

#[tokio::test]
async fn create_and_link_creates_manufacturer_and_links_alias() {
    let f = fixture().await;
    let id = f.manufacturers.create_and_link(Some("a-free-1"), Some("Makita Corp.")).await.unwrap();

    let stored = f.memory.get_manufacturer(&id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Makita Corp.");
    assert_eq!(stored.slug, "makita-corp");
    let alias = f.memory.get_alias("a-free-1").await.unwrap().unwrap();
    assert_eq!(alias.manufacturer_id.as_deref(), Some(id.as_str()));

    let unmatched = f.aliases.list_unmatched(None, Page::FIRST).await.unwrap();
    assert!(unmatched.iter().all(|a| a.id != "a-free-1"));
}

#[tokio::test]
async fn create_and_link_with_unknown_alias_still_creates_manufacturer() {
    let f = fixture().await;
    let id = f.manufacturers.create_and_link(Some("ghost"), Some("Ghost Works")).await.unwrap();
    assert!(f.memory.get_manufacturer(&id).await.unwrap().is_some());
}

#[tokio::test]
async fn missing_fields_do_not_mutate() {
    let f = fixture().await;
    let before_m = f.memory.all_manufacturers().await;
    let before_a = f.memory.all_aliases().await;

    assert_missing(
        f.manufacturers.create_and_link(None, Some("")).await.unwrap_err(),
        &["supplier_manufacturer_id", "name"],
    );
    assert_missing(f.manufacturers.rename(Some("m-acme"), None).await.unwrap_err(), &["new_name"]);
    assert_missing(f.aliases.inactivate(Some("")).await.unwrap_err(), &["supplier_manufacturer_id"]);
    assert_missing(f.aliases.pair(Some("a-free-1"), None).await.unwrap_err(), &["manufacturer_id"]);
    assert_missing(f.aliases.unpair(None).await.unwrap_err(), &["supplier_manufacturer_id"]);
    assert_missing(f.aliases.unpair_all(None).await.unwrap_err(), &["manufacturer_id"]);

    assert_eq!(f.memory.all_manufacturers().await, before_m);
    assert_eq!(f.memory.all_aliases().await, before_a);
}

#[tokio::test]
async fn unpair_all_clears_every_link() {
    let f = fixture().await;
    f.aliases.unpair_all(Some("m-acme")).await.unwrap();
    assert!(f.memory.all_aliases().await.iter().all(|a| a.manufacturer_id.as_deref() != Some("m-acme")));
    // Nothing left to clear is still success.
    f.aliases.unpair_all(Some("m-acme")).await.unwrap();
}

#[tokio::test]
async fn inactivate_and_unpair_are_idempotent() {
    let f = fixture().await;
    let id = f.aliases.inactivate(Some("a-free-2")).await.unwrap();
    assert_eq!(id, "a-free-2");
    let once = f.memory.all_aliases().await;
    f.aliases.inactivate(Some("a-free-2")).await.unwrap();
    assert_eq!(f.memory.all_aliases().await, once);

    f.aliases.unpair(Some("a-bosch-rb")).await.unwrap();
    let once = f.memory.all_aliases().await;
    f.aliases.unpair(Some("a-bosch-rb")).await.unwrap();
    assert_eq!(f.memory.all_aliases().await, once);
}

#[tokio::test]
async fn pair_moves_alias_between_manufacturers() {
    let f = fixture().await;
    f.aliases.pair(Some("a-bosch-rb"), Some("m-3m")).await.unwrap();
    let alias = f.memory.get_alias("a-bosch-rb").await.unwrap().unwrap();
    assert_eq!(alias.manufacturer_id.as_deref(), Some("m-3m"));
}

#[tokio::test]
async fn pair_to_unknown_manufacturer_is_storage_error() {
    let f = fixture().await;
    let err = f.aliases.pair(Some("a-free-1"), Some("nope")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(ref e) if e.is_foreign_key()));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn rename_recomputes_slug() {
    let f = fixture().await;
    f.manufacturers.rename(Some("m-acme"), Some("ACME Corp.")).await.unwrap();
    let stored = f.memory.get_manufacturer("m-acme").await.unwrap().unwrap();
    assert_eq!(stored.name, "ACME Corp.");
    assert_eq!(stored.slug, "acme-corp");
}

#[tokio::test]
async fn unmatched_search_is_case_insensitive() {
    let f = fixture().await;
    let rows = f.aliases.list_unmatched(Some("MAKITA"), Page::FIRST).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Makita Corp", "makita"]);
}

#[tokio::test]
async fn inactive_filter_hides_active_manufacturers() {
    let f = fixture().await;
    let rows =
        f.manufacturers.list_with_aliases(None, ActiveFilter::Inactive, Page::FIRST).await.unwrap();
    assert!(rows.is_empty());
}
