use std::sync::Arc;

use karuna_core::{
    campaigns::{seed_campaigns, CampaignCatalog, CampaignCatalogTrait},
    documents::{
        DocumentService, DocumentServiceTrait, GatewayContentStore, InMemoryContentStore,
        TieredContentStore,
    },
    donations::{DonationLedger, DonationLedgerTrait},
    events::DomainEventSink,
    snapshots::SnapshotService,
    web3::{
        JsonRpcWalletProvider, UnavailableWalletProvider, WalletProvider, Web3Service,
        Web3ServiceTrait,
    },
};
use karuna_storage_sqlite::{db, SqliteSnapshotStore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{config::Config, domain_events::WebDomainEventSink};

pub struct AppState {
    pub catalog: Arc<dyn CampaignCatalogTrait>,
    pub ledger: Arc<dyn DonationLedgerTrait>,
    pub web3_service: Arc<dyn Web3ServiceTrait>,
    pub document_service: Arc<dyn DocumentServiceTrait>,
    pub snapshot_service: Arc<SnapshotService>,
    /// Display currency for formatted amounts
    pub currency: String,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.as_ref().clone());
    let snapshot_store = Arc::new(SqliteSnapshotStore::new(pool, writer));

    let event_sink = Arc::new(WebDomainEventSink::new());
    let domain_event_sink: Arc<dyn DomainEventSink> = event_sink.clone();

    let catalog = if config.seed_catalog {
        CampaignCatalog::with_campaigns(seed_campaigns())?
    } else {
        CampaignCatalog::new()
    };
    let catalog = Arc::new(catalog.with_event_sink(domain_event_sink.clone()));

    let ledger: Arc<dyn DonationLedgerTrait> = Arc::new(
        DonationLedger::new(catalog.clone()).with_event_sink(domain_event_sink.clone()),
    );
    let catalog: Arc<dyn CampaignCatalogTrait> = catalog;

    let wallet: Arc<dyn WalletProvider> = match &config.rpc_url {
        Some(url) => {
            tracing::info!("Using JSON-RPC wallet at {}", url);
            Arc::new(JsonRpcWalletProvider::new(url.clone()))
        }
        None => Arc::new(UnavailableWalletProvider),
    };
    let web3_service = Arc::new(
        Web3Service::new(wallet, config.contracts.clone())
            .with_event_sink(domain_event_sink.clone()),
    );

    let content_store = Arc::new(TieredContentStore::new(
        Arc::new(InMemoryContentStore::new()),
        Arc::new(GatewayContentStore::new(config.ipfs_gateway.clone())),
    ));
    let document_service = Arc::new(
        DocumentService::new(content_store).with_event_sink(domain_event_sink.clone()),
    );

    let snapshot_service = Arc::new(SnapshotService::new(
        snapshot_store,
        ledger.clone(),
        web3_service.clone(),
        document_service.clone(),
    ));
    let restored = snapshot_service.load_all().await?;
    tracing::info!("Restored {} snapshot(s)", restored.len());

    let session = web3_service.initialize().await?;
    if session.is_connected {
        tracing::info!("Wallet session resumed on chain {:?}", session.chain_id);
    }

    event_sink.start_worker(snapshot_service.clone());

    Ok(Arc::new(AppState {
        catalog,
        ledger,
        web3_service,
        document_service,
        snapshot_service,
        currency: config.currency.clone(),
    }))
}
