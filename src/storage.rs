// ============================================================================
// Storage - sled-backed ledger persistence
// ============================================================================
//
// Four keys, each holding one JSON array / number, written together:
//   nexus_balance        Decimal
//   nexus_items_v2       Vec<ItemInstance>
//   nexus_listings_v2    Vec<MarketListing>
//   nexus_trade_history  Vec<Trade>
//
// A missing key falls back to the seeded value for that field only.
//
// ============================================================================

use crate::error::{MarketError, MarketResult};
use crate::ledger::LedgerSnapshot;
use serde::de::DeserializeOwned;
use sled::transaction::TransactionError;
use sled::IVec;
use std::path::Path;
use tracing::{debug, info};

pub const BALANCE_KEY: &str = "nexus_balance";
pub const ITEMS_KEY: &str = "nexus_items_v2";
pub const LISTINGS_KEY: &str = "nexus_listings_v2";
pub const TRADES_KEY: &str = "nexus_trade_history";

#[derive(Debug, Clone)]
pub struct MarketStorage {
    db: sled::Db,
}

impl MarketStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> MarketResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(sled::Error::Io)?;
            }
        }
        let db = sled::open(path)?;
        info!(path = %path.display(), "opened market storage");
        Ok(Self { db })
    }

    /// In-memory database removed on drop
    pub fn temporary() -> MarketResult<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Whether anything has been saved before
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Read the persisted ledger, using `seed` for every key not present.
    /// All four keys are read in one transaction, so a concurrent save is
    /// seen either entirely or not at all.
    pub fn load(&self, seed: LedgerSnapshot) -> MarketResult<LedgerSnapshot> {
        let [balance, items, listings, trades] = self
            .db
            .transaction::<_, _, sled::Error>(|tx| {
                Ok([
                    tx.get(BALANCE_KEY)?,
                    tx.get(ITEMS_KEY)?,
                    tx.get(LISTINGS_KEY)?,
                    tx.get(TRADES_KEY)?,
                ])
            })
            .map_err(storage_error)?;

        let snapshot = LedgerSnapshot {
            balance: decode(balance)?.unwrap_or(seed.balance),
            items: decode(items)?.unwrap_or(seed.items),
            listings: decode(listings)?.unwrap_or(seed.listings),
            trades: decode(trades)?.unwrap_or(seed.trades),
        };
        debug!(
            items = snapshot.items.len(),
            listings = snapshot.listings.len(),
            trades = snapshot.trades.len(),
            "ledger loaded"
        );
        Ok(snapshot)
    }

    /// Write all four keys as one transaction, then flush. A crash leaves
    /// either the previous snapshot or this one, never a mix.
    pub fn save(&self, snapshot: &LedgerSnapshot) -> MarketResult<()> {
        let balance = serde_json::to_vec(&snapshot.balance)?;
        let items = serde_json::to_vec(&snapshot.items)?;
        let listings = serde_json::to_vec(&snapshot.listings)?;
        let trades = serde_json::to_vec(&snapshot.trades)?;

        self.db
            .transaction::<_, _, sled::Error>(|tx| {
                tx.insert(BALANCE_KEY, balance.as_slice())?;
                tx.insert(ITEMS_KEY, items.as_slice())?;
                tx.insert(LISTINGS_KEY, listings.as_slice())?;
                tx.insert(TRADES_KEY, trades.as_slice())?;
                Ok(())
            })
            .map_err(storage_error)?;
        self.db.flush()?;

        debug!(balance = %snapshot.balance, "ledger saved");
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(bytes: Option<IVec>) -> MarketResult<Option<T>> {
    match bytes {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

fn storage_error(err: TransactionError<sled::Error>) -> MarketError {
    match err {
        TransactionError::Abort(e) | TransactionError::Storage(e) => MarketError::Storage(e),
    }
}
