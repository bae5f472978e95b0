// Application state management

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::MarketConfig;
use crate::error::{MarketError, MarketResult};
use crate::ledger::MarketLedger;
use crate::storage::MarketStorage;

pub type SharedState = Arc<Mutex<AppState>>;

pub struct AppState {
    pub ledger: MarketLedger,
    pub storage: Option<MarketStorage>,
    pub config: MarketConfig,
}

impl AppState {
    /// Build the catalog, then restore the ledger from storage when
    /// persistence is on. Keys missing on disk come from the seed world.
    pub fn new(config: MarketConfig) -> MarketResult<Self> {
        let catalog = Arc::new(Catalog::generate(config.catalog_seed));
        let seeded = MarketLedger::seeded(catalog.clone(), config.starting_balance, Utc::now());

        let (ledger, storage) = if config.persist {
            let storage = MarketStorage::open(&config.data_dir)?;
            if storage.is_empty() {
                info!("no persisted ledger found, starting fresh");
            } else {
                info!("restoring persisted ledger");
            }
            let snapshot = storage.load(seeded.snapshot())?;
            (MarketLedger::from_snapshot(catalog, snapshot), Some(storage))
        } else {
            info!("persistence disabled, ledger lives in memory only");
            (seeded, None)
        };

        info!(
            balance = %ledger.balance(),
            inventory = ledger.my_inventory().len(),
            listings = ledger.listings().len(),
            "nexus market initialized"
        );

        Ok(Self {
            ledger,
            storage,
            config,
        })
    }

    /// Fresh in-memory state
    pub fn ephemeral() -> Self {
        let config = MarketConfig::ephemeral();
        let catalog = Arc::new(Catalog::generate(config.catalog_seed));
        let ledger = MarketLedger::seeded(catalog, config.starting_balance, Utc::now());
        Self {
            ledger,
            storage: None,
            config,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    pub fn catalog(&self) -> &Catalog {
        self.ledger.catalog()
    }

    /// Write the whole ledger out; a no-op without storage
    pub fn save_to_disk(&self) -> MarketResult<()> {
        match &self.storage {
            Some(storage) => storage.save(&self.ledger.snapshot()),
            None => Ok(()),
        }
    }

    /// Called after every successful mutation. The in-memory ledger is
    /// authoritative; a failed write is logged and retried on the next save.
    pub fn persist(&self) {
        if let Err(e) = self.save_to_disk() {
            warn!(error = %e, "failed to persist ledger");
        }
    }
}

/// Lock the shared state without panicking on poison
pub fn lock(state: &SharedState) -> MarketResult<MutexGuard<'_, AppState>> {
    state.lock().map_err(|_| MarketError::StatePoisoned)
}
