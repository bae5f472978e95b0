// ============================================================================
// Catalog Module - Games, Item Templates and Seed World
// ============================================================================
//
// Immutable input to the ledger:
//   - data: hand-authored games, templates, inventory, listings, trades
//   - generate: procedural filler templates and market population
//
// Generation runs off a seeded StdRng, so a given seed always yields the same
// template ids and names. Persisted items keep resolving across restarts.
//
// ============================================================================

mod data;
mod generate;

use crate::models::{Game, ItemInstance, ItemTemplate, MarketListing, Trade, Traits, TraitValue, ME};
use crate::pricing::from_display;
use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

use data::{SeedItem, SeedTrait};

/// Fallback name for trades whose template cannot be resolved
pub const UNKNOWN_ITEM: &str = "Unknown Item";

#[derive(Debug, Clone)]
pub struct Catalog {
    seed: u64,
    games: Vec<Game>,
    templates: Vec<ItemTemplate>,
    index: HashMap<String, usize>,
}

/// Everything the ledger starts from on a fresh wallet
#[derive(Debug, Clone)]
pub struct WorldSeed {
    pub items: Vec<ItemInstance>,
    pub listings: Vec<MarketListing>,
    pub trades: Vec<Trade>,
}

impl Catalog {
    /// Hand-authored templates plus procedural filler for the given seed
    pub fn generate(seed: u64) -> Self {
        let games: Vec<Game> = data::GAMES
            .iter()
            .map(|g| Game {
                id: g.id.to_string(),
                name: g.name.to_string(),
                slug: g.slug.to_string(),
                image: g.image.to_string(),
                description: g.description.to_string(),
            })
            .collect();

        let mut templates: Vec<ItemTemplate> = data::MANUAL_TEMPLATES
            .iter()
            .map(|t| ItemTemplate {
                id: t.id.to_string(),
                game_id: t.game_id.to_string(),
                name: t.name.to_string(),
                image: generate::picsum(t.image_seed),
                rarity: t.rarity,
                description: t.description.to_string(),
                base_price: from_display(t.base_price_np),
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        templates.extend(generate::filler_templates(&games, &mut rng));

        let index = templates
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();

        info!(seed, games = games.len(), templates = templates.len(), "catalog generated");

        Self {
            seed,
            games,
            templates,
            index,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn templates(&self) -> &[ItemTemplate] {
        &self.templates
    }

    pub fn template(&self, id: &str) -> Option<&ItemTemplate> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    pub fn templates_for_game<'a>(&'a self, game_id: &'a str) -> impl Iterator<Item = &'a ItemTemplate> + 'a {
        self.templates.iter().filter(move |t| t.game_id == game_id)
    }

    pub fn template_name(&self, id: &str) -> &str {
        self.template(id).map(|t| t.name.as_str()).unwrap_or(UNKNOWN_ITEM)
    }

    /// Starting world: my inventory, hand-placed listings, the generated
    /// market population and the seed trade history.
    pub fn world_seed(&self, now: DateTime<Utc>) -> WorldSeed {
        let mut items: Vec<ItemInstance> = data::INITIAL_INVENTORY
            .iter()
            .chain(data::MARKET_ITEMS)
            .map(seed_item)
            .collect();

        let mut listings: Vec<MarketListing> = data::INITIAL_LISTINGS
            .iter()
            .map(|l| MarketListing {
                id: l.id.to_string(),
                item_instance_id: l.item_instance_id.to_string(),
                seller_id: l.seller_id.to_string(),
                price: Decimal::new(l.price_cents, 2),
                listed_date: utc(l.listed.0, l.listed.1, l.listed.2, 0, 0),
            })
            .collect();

        // Separate stream from template generation so the population does not
        // shift template names.
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(1));
        let (generated_items, generated_listings) =
            generate::market_population(&self.templates, now, &mut rng);
        items.extend(generated_items);
        listings.extend(generated_listings);

        let trades = data::SEED_TRADES
            .iter()
            .map(|t| Trade {
                id: t.id.to_string(),
                item_name: t.item_name.to_string(),
                seller_id: t.seller_id.to_string(),
                buyer_id: ME.to_string(),
                price: Decimal::new(t.price_cents, 2),
                date: utc(t.date.0, t.date.1, t.date.2, t.date.3, t.date.4),
            })
            .collect();

        WorldSeed {
            items,
            listings,
            trades,
        }
    }
}

fn seed_item(seed: &SeedItem) -> ItemInstance {
    let traits: Traits = seed
        .traits
        .iter()
        .map(|(key, value)| {
            let value = match *value {
                SeedTrait::Text(s) => TraitValue::from(s),
                SeedTrait::Int(n) => TraitValue::Int(n),
                SeedTrait::Bool(b) => TraitValue::Bool(b),
            };
            (key.to_string(), value)
        })
        .collect();

    ItemInstance {
        id: seed.id.to_string(),
        template_id: seed.template_id.to_string(),
        owner_id: seed.owner_id.to_string(),
        traits,
        acquired_date: utc(seed.acquired.0, seed.acquired.1, seed.acquired.2, 0, 0),
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}
