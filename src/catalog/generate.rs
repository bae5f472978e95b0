// Procedural filler templates and the generated market population.

use super::data::{AssetPool, ASSET_POOLS, MANUAL_TEMPLATES, TEMPLATES_PER_GAME};
use crate::models::{Game, ItemInstance, ItemTemplate, MarketListing, Rarity, Traits, TraitValue};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Base price band for generated templates, internal units
const BASE_PRICE_MIN: i64 = 5;
const BASE_PRICE_SPREAD: i64 = 150;
const ANCIENT_UPLIFT: i64 = 200;

/// Generated listings per template, inclusive
const LISTINGS_PER_TEMPLATE: std::ops::RangeInclusive<usize> = 3..=8;

/// Pad every game with generated templates up to the per-game target
pub(super) fn filler_templates<R: Rng + ?Sized>(games: &[Game], rng: &mut R) -> Vec<ItemTemplate> {
    let mut generated = Vec::new();

    for game in games {
        let existing = MANUAL_TEMPLATES.iter().filter(|t| t.game_id == game.id).count();
        let needed = TEMPLATES_PER_GAME.saturating_sub(existing);
        let Some(pool) = ASSET_POOLS.iter().find(|p| p.game_id == game.id) else {
            continue;
        };

        for i in 0..needed {
            if let Some(template) = filler_template(&game.id, i, pool, rng) {
                generated.push(template);
            }
        }
    }

    generated
}

fn filler_template<R: Rng + ?Sized>(
    game_id: &str,
    index: usize,
    pool: &AssetPool,
    rng: &mut R,
) -> Option<ItemTemplate> {
    let prefix = pool.prefixes.choose(rng)?;
    let noun = pool.nouns.choose(rng)?;
    let rarity = *pool.rarities.choose(rng)?;

    let name = format!("{} {}", prefix, noun);
    let image_seed: String = name.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let uplift = if rarity == Rarity::Ancient { ANCIENT_UPLIFT } else { 0 };
    let base_price = Decimal::from(rng.gen_range(0..BASE_PRICE_SPREAD) + BASE_PRICE_MIN + uplift);

    Some(ItemTemplate {
        id: format!("gen_{}_{}", game_id, index),
        game_id: game_id.to_string(),
        image: picsum(&image_seed),
        description: format!(
            "A highly sought-after {} {} from the {} collection.",
            rarity.as_str().to_lowercase(),
            noun.to_lowercase(),
            prefix
        ),
        name,
        rarity,
        base_price,
    })
}

pub(super) fn picsum(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/300/300", seed)
}

/// 3-8 listed instances per template, priced within 80-120% of base.
/// The generated seller also owns the listed instance.
pub(super) fn market_population<R: Rng + ?Sized>(
    templates: &[ItemTemplate],
    now: DateTime<Utc>,
    rng: &mut R,
) -> (Vec<ItemInstance>, Vec<MarketListing>) {
    let mut items = Vec::new();
    let mut listings = Vec::new();

    for template in templates {
        let count = rng.gen_range(LISTINGS_PER_TEMPLATE);
        for i in 0..count {
            let item_id = format!("gen_i_{}_{}", template.id, i);
            let owner = format!("User_{}", rng.gen_range(0..10_000));
            let spread = Decimal::from_f64(rng.gen::<f64>()).unwrap_or(dec!(0.5));
            let price = (template.base_price * (dec!(0.8) + spread * dec!(0.4)))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

            let mut traits = Traits::new();
            traits.insert("float".into(), TraitValue::Text(format!("{:.4}", rng.gen::<f64>())));
            traits.insert("seed".into(), TraitValue::Int(rng.gen_range(0..1000)));
            traits.insert("origin".into(), "Drop".into());

            items.push(ItemInstance {
                id: item_id.clone(),
                template_id: template.id.clone(),
                owner_id: owner.clone(),
                traits,
                acquired_date: now,
            });
            listings.push(MarketListing {
                id: format!("gen_l_{}_{}", template.id, i),
                item_instance_id: item_id,
                seller_id: owner,
                price,
                listed_date: now,
            });
        }
    }

    (items, listings)
}
