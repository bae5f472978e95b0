//! Nexus Market - local virtual-item marketplace ledger
//! Exports all modules for use as a library crate

pub mod app_state;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod storage;

pub use app_state::{AppState, SharedState};
pub use catalog::{Catalog, WorldSeed, UNKNOWN_ITEM};
pub use config::MarketConfig;
pub use error::{MarketError, MarketResult};
pub use ledger::{LedgerSnapshot, LedgerStats, MarketLedger, TOP_UP_PACKAGES};
pub use models::{Game, ItemInstance, ItemTemplate, MarketListing, Rarity, Trade, TraitValue, Traits, ME};
pub use pricing::{
    buyer_pays_for, fee_split, from_display, generate_price_history, lowest_price, price_history,
    template_quotes, to_display, FeeBreakdown, PricePoint, TemplateQuote, MIN_LISTING_PRICE_NP,
};
pub use routes::router;
pub use storage::MarketStorage;
