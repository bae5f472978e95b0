// Data models for the Nexus marketplace

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Owner / seller id of the local user
pub const ME: &str = "me";

// ============================================================================
// CATALOG TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

/// Item rarity tiers, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythical,
    Legendary,
    Ancient,
}

impl Rarity {
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Mythical,
        Rarity::Legendary,
        Rarity::Ancient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Mythical => "Mythical",
            Rarity::Legendary => "Legendary",
            Rarity::Ancient => "Ancient",
        }
    }

    /// Case-insensitive parse, used by the marketplace rarity filter
    pub fn parse(value: &str) -> Option<Rarity> {
        Rarity::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor of an item kind.
///
/// `base_price` is on the internal decimal scale (100 NP = 1.00), the same
/// scale as listing prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub image: String,
    pub rarity: Rarity,
    pub description: String,
    pub base_price: Decimal,
}

// ============================================================================
// WORLD STATE TYPES
// ============================================================================

/// Free-form per-instance trait value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for TraitValue {
    fn from(value: &str) -> Self {
        TraitValue::Text(value.to_string())
    }
}

impl From<String> for TraitValue {
    fn from(value: String) -> Self {
        TraitValue::Text(value)
    }
}

impl From<i64> for TraitValue {
    fn from(value: i64) -> Self {
        TraitValue::Int(value)
    }
}

impl From<bool> for TraitValue {
    fn from(value: bool) -> Self {
        TraitValue::Bool(value)
    }
}

pub type Traits = BTreeMap<String, TraitValue>;

/// A concrete owned unit of an item template.
/// Never duplicated or destroyed; a purchase only reassigns `owner_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInstance {
    pub id: String,
    pub template_id: String,
    pub owner_id: String,
    #[serde(default)]
    pub traits: Traits,
    pub acquired_date: DateTime<Utc>,
}

impl ItemInstance {
    pub fn is_mine(&self) -> bool {
        self.owner_id == ME
    }
}

/// An active sale offer. `price` is on the internal decimal scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: String,
    pub item_instance_id: String,
    pub seller_id: String,
    pub price: Decimal,
    pub listed_date: DateTime<Utc>,
}

/// Completed purchase record, kept newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub item_name: String,
    pub seller_id: String,
    pub buyer_id: String,
    pub price: Decimal,
    pub date: DateTime<Utc>,
}

// ============================================================================
// REQUEST / RESPONSE BODIES
// ============================================================================

/// POST /listings - price entered by the seller in display units (NP)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemRequest {
    pub item_id: String,
    pub buyer_pays: i64,
}

/// POST /wallet/top-up - one of the offered packages, internal units
#[derive(Debug, Deserialize)]
pub struct TopUpRequest {
    pub amount: Decimal,
}

/// GET /games/:id/items query
#[derive(Debug, Default, Deserialize)]
pub struct MarketQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
}

/// GET /fees/quote query, exactly one side is expected
#[derive(Debug, Default, Deserialize)]
pub struct FeeQuoteQuery {
    #[serde(default)]
    pub buyer_pays: Option<i64>,
    #[serde(default)]
    pub seller_receives: Option<i64>,
}
