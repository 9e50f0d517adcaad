use warung_pos::core::logger;
use warung_pos::{AdminDirectory, ChefClient, Config, MenuCatalog, OrderLedger, SlotStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    logger::init_logger(&config.log_level, config.is_production())?;

    tracing::info!(data_dir = %config.data_dir, "Warung POS starting...");

    std::fs::create_dir_all(&config.data_dir)?;
    let store = SlotStore::open(config.store_path())?;

    let catalog = MenuCatalog::load(store.clone());
    let ledger = OrderLedger::load(store.clone());
    let directory = AdminDirectory::load(store);

    tracing::info!(
        menu_items = catalog.items().len(),
        available = catalog.available_items().len(),
        orders = ledger.orders().len(),
        pending = ledger.pending_count(),
        revenue = %ledger.revenue(),
        admins = directory.users().len(),
        authenticated = directory.is_authenticated(),
        "Stores loaded"
    );

    // Warm the chef copy for the house special; falls back to static copy
    // when no service is configured.
    if let Some(special) = catalog.available_items().into_iter().find(|i| i.is_popular) {
        let chef = ChefClient::new(&config.chef_service_url, config.chef_timeout());
        let suggestion = chef.describe(special).await;
        tracing::info!(
            dish = %special.name,
            description = %suggestion.description,
            pairing = %suggestion.pairing_suggestion,
            "Chef's take on the house special"
        );
    }

    Ok(())
}
