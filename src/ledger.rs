//! Nexus Market Ledger
//!
//! Single source of truth for the local wallet:
//! - Balance (Nexus Points, internal decimal scale)
//! - Every item instance in the world, mine or not
//! - Active market listings
//! - Trade history, newest first
//!
//! Only two business transactions change ownership or money: `list_for_sale`
//! and `buy_item` (plus wallet `top_up`). Every check runs before the first
//! field is touched, so a failed call leaves the ledger exactly as it was.
//! Views (`my_inventory`, `my_listings`, ...) are recomputed on each call.

use crate::catalog::Catalog;
use crate::error::{MarketError, MarketResult};
use crate::models::{ItemInstance, MarketListing, Trade, ME};
use crate::pricing;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Wallet packages offered by the top-up screen, internal units
pub const TOP_UP_PACKAGES: [Decimal; 4] = [dec!(10), dec!(20), dec!(50), dec!(100)];

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Serializable ledger contents, one field per persisted key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub balance: Decimal,
    pub items: Vec<ItemInstance>,
    pub listings: Vec<MarketListing>,
    pub trades: Vec<Trade>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    pub balance: Decimal,
    pub items: usize,
    pub listings: usize,
    pub my_items: usize,
    pub my_listings: usize,
    pub trades: usize,
    /// Sum of my active listing prices, internal scale
    pub my_listed_value: Decimal,
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Clone)]
pub struct MarketLedger {
    catalog: Arc<Catalog>,
    balance: Decimal,
    items: Vec<ItemInstance>,
    listings: Vec<MarketListing>,
    trades: Vec<Trade>,
}

impl MarketLedger {
    pub fn from_snapshot(catalog: Arc<Catalog>, snapshot: LedgerSnapshot) -> Self {
        Self {
            catalog,
            balance: snapshot.balance,
            items: snapshot.items,
            listings: snapshot.listings,
            trades: snapshot.trades,
        }
    }

    /// Fresh wallet over the catalog's seed world
    pub fn seeded(catalog: Arc<Catalog>, starting_balance: Decimal, now: DateTime<Utc>) -> Self {
        let world = catalog.world_seed(now);
        info!(
            balance = %starting_balance,
            items = world.items.len(),
            listings = world.listings.len(),
            "seeded fresh ledger"
        );
        Self {
            catalog,
            balance: starting_balance,
            items: world.items,
            listings: world.listings,
            trades: world.trades,
        }
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            balance: self.balance,
            items: self.items.clone(),
            listings: self.listings.clone(),
            trades: self.trades.clone(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    pub fn listings(&self) -> &[MarketListing] {
        &self.listings
    }

    /// Newest first
    pub fn trade_history(&self) -> &[Trade] {
        &self.trades
    }

    pub fn item(&self, id: &str) -> Option<&ItemInstance> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn listing(&self, id: &str) -> Option<&MarketListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Items I own that are not currently listed
    pub fn my_inventory(&self) -> Vec<&ItemInstance> {
        let listed: HashSet<&str> = self
            .listings
            .iter()
            .map(|l| l.item_instance_id.as_str())
            .collect();

        self.items
            .iter()
            .filter(|i| i.is_mine() && !listed.contains(i.id.as_str()))
            .collect()
    }

    pub fn my_listings(&self) -> Vec<&MarketListing> {
        self.listings.iter().filter(|l| l.seller_id == ME).collect()
    }

    /// Active listings of one template, cheapest first
    pub fn listings_for_template(&self, template_id: &str) -> Vec<&MarketListing> {
        let mut found: Vec<&MarketListing> = self
            .listings
            .iter()
            .filter(|l| {
                self.item(&l.item_instance_id)
                    .map(|i| i.template_id == template_id)
                    .unwrap_or(false)
            })
            .collect();
        found.sort_by(|a, b| a.price.cmp(&b.price));
        found
    }

    pub fn lowest_price(&self, template_id: &str) -> MarketResult<Decimal> {
        let template = self
            .catalog
            .template(template_id)
            .ok_or_else(|| MarketError::TemplateNotFound(template_id.to_string()))?;
        Ok(pricing::lowest_price(template, &self.items, &self.listings))
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Put one of my unlisted items up for sale at `price` (internal scale)
    pub fn list_for_sale(&mut self, item_id: &str, price: Decimal) -> MarketResult<MarketListing> {
        if price <= Decimal::ZERO {
            return Err(MarketError::InvalidAmount(format!(
                "listing price must be positive, got {}",
                price
            )));
        }

        let item = self
            .item(item_id)
            .ok_or_else(|| MarketError::ItemNotFound(item_id.to_string()))?;
        if !item.is_mine() {
            return Err(MarketError::NotOwner(item_id.to_string()));
        }
        if self.listings.iter().any(|l| l.item_instance_id == item_id) {
            return Err(MarketError::AlreadyListed(item_id.to_string()));
        }

        let listing = MarketListing {
            id: short_id("l"),
            item_instance_id: item_id.to_string(),
            seller_id: ME.to_string(),
            price,
            listed_date: Utc::now(),
        };
        self.listings.push(listing.clone());

        info!(
            listing = %listing.id,
            item = item_id,
            price = %price,
            price_np = pricing::to_display(price),
            "listed item for sale"
        );
        Ok(listing)
    }

    /// Buy an active listing: debit, delist, take ownership, record trade
    pub fn buy_item(&mut self, listing_id: &str) -> MarketResult<Trade> {
        let position = self
            .listings
            .iter()
            .position(|l| l.id == listing_id)
            .ok_or_else(|| MarketError::ListingNotFound(listing_id.to_string()))?;

        let price = self.listings[position].price;
        if self.balance < price {
            debug!(listing = listing_id, price = %price, balance = %self.balance, "purchase refused");
            return Err(MarketError::InsufficientFunds {
                needed: price,
                available: self.balance,
            });
        }

        // All checks passed, apply as one unit
        let now = Utc::now();
        self.balance -= price;
        let listing = self.listings.remove(position);

        let item_name = match self.items.iter_mut().find(|i| i.id == listing.item_instance_id) {
            Some(item) => {
                item.owner_id = ME.to_string();
                item.acquired_date = now;
                self.catalog.template_name(&item.template_id).to_string()
            }
            None => {
                warn!(item = %listing.item_instance_id, "purchased listing points at a missing item");
                crate::catalog::UNKNOWN_ITEM.to_string()
            }
        };

        let trade = Trade {
            id: short_id("trade"),
            item_name,
            seller_id: listing.seller_id.clone(),
            buyer_id: ME.to_string(),
            price,
            date: now,
        };
        self.trades.insert(0, trade.clone());

        info!(
            listing = listing_id,
            item = %listing.item_instance_id,
            seller = %listing.seller_id,
            price = %price,
            balance = %self.balance,
            "bought item"
        );
        Ok(trade)
    }

    /// Credit the wallet (internal scale); returns the new balance
    pub fn top_up(&mut self, amount: Decimal) -> MarketResult<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(MarketError::InvalidAmount(format!(
                "top-up must be positive, got {}",
                amount
            )));
        }
        self.balance += amount;
        info!(amount = %amount, balance = %self.balance, "wallet topped up");
        Ok(self.balance)
    }

    pub fn stats(&self) -> LedgerStats {
        let my_listings = self.my_listings();
        LedgerStats {
            balance: self.balance,
            items: self.items.len(),
            listings: self.listings.len(),
            my_items: self.items.iter().filter(|i| i.is_mine()).count(),
            my_listed_value: my_listings.iter().map(|l| l.price).sum(),
            my_listings: my_listings.len(),
            trades: self.trades.len(),
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn short_id(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().simple().to_string()[..16])
}
