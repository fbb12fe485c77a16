//! Black-box tests of the import → persist → restore → scan flow.

use coletor_app::AppController;
use coletor_core::DomainError;
use coletor_infra::{CatalogStore, KvStore};

async fn memory_controller() -> AppController {
    let kv = KvStore::connect("sqlite::memory:").await.unwrap();
    AppController::new(CatalogStore::new(kv))
}

#[tokio::test]
async fn import_file_then_scan_accumulates_selected_products() {
    let mut controller = memory_controller().await;
    controller.init().await.unwrap();
    assert_eq!(controller.catalog_len(), 0);

    let path = std::env::temp_dir().join(format!("coletor-import-{}.csv", std::process::id()));
    std::fs::write(
        &path,
        "\"1\",\"7891000100103\",\"Soap\",\"Acme\",\"10\"\r\n2,790,Brush,Acme,4\r\n",
    )
    .unwrap();

    let count = controller.import_file(&path).await.unwrap();
    assert_eq!(count, 2);

    let product = controller.scan("7891000100103").unwrap();
    assert_eq!(product.description, "Soap");

    // Same code again: appended again, no dedup.
    controller.scan("7891000100103").unwrap();
    assert_eq!(controller.selected().len(), 2);

    // A miss leaves the selection untouched.
    assert_eq!(
        controller.scan("0000000000000").unwrap_err(),
        DomainError::NotFound
    );
    assert_eq!(controller.selected().len(), 2);

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn catalog_survives_a_restart_but_the_selection_does_not() {
    let kv = KvStore::connect("sqlite::memory:").await.unwrap();

    let mut first = AppController::new(CatalogStore::new(kv.clone()));
    first.init().await.unwrap();
    first.import_text("1,789,Soap,Acme,10").await.unwrap();
    first.scan("789").unwrap();
    assert_eq!(first.selected().len(), 1);
    drop(first);

    // A new controller over the same store sees the catalog, not the
    // previous session's selection list.
    let mut second = AppController::new(CatalogStore::new(kv));
    second.init().await.unwrap();
    assert_eq!(second.catalog_len(), 1);
    assert!(second.selected().is_empty());
    assert_eq!(second.scan("789").unwrap().description, "Soap");
}

#[tokio::test]
async fn missing_import_file_fails_and_keeps_the_catalog() {
    let mut controller = memory_controller().await;
    controller.init().await.unwrap();
    controller.import_text("1,789,Soap,Acme,10").await.unwrap();

    let missing = std::env::temp_dir().join("coletor-definitely-absent.csv");
    std::fs::remove_file(&missing).ok();
    assert!(controller.import_file(&missing).await.is_err());

    assert_eq!(controller.catalog_len(), 1);
    assert!(controller.scan("789").is_ok());
}
