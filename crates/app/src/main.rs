use anyhow::Context;

use coletor_app::AppController;
use coletor_infra::{CatalogStore, KvStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    coletor_observability::init();

    let kv = KvStore::open_default()
        .await
        .context("failed to open the local store")?;
    let mut controller = AppController::new(CatalogStore::new(kv));

    // Startup load must complete before the first lookup is possible.
    controller.init().await?;
    println!("products loaded: {}", controller.catalog_len());

    coletor_app::repl::run(&mut controller).await
}
