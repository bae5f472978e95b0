// ============================================================================
// Pricing Engine - Nexus Marketplace
// ============================================================================
//
// Pure functions over snapshots of the ledger. Nothing here mutates state.
//
// Unit Convention:
//   - Internal amounts are decimals (balances, listing prices, base prices)
//   - Display amounts are whole NP: display = round(internal * 100)
//   - Fee math is done in display units, on what the seller types in
//
// ============================================================================

pub mod fees;
pub mod history;

pub use fees::*;
pub use history::*;

use crate::models::{ItemInstance, ItemTemplate, MarketListing, Rarity};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

const NP_PER_UNIT: Decimal = dec!(100);

/// Internal decimal -> whole NP
pub fn to_display(internal: Decimal) -> i64 {
    fees::round_np(internal * NP_PER_UNIT)
}

/// Whole NP -> internal decimal
pub fn from_display(np: i64) -> Decimal {
    Decimal::from(np) / NP_PER_UNIT
}

/// Cheapest live listing for a template, or its base price when out of stock.
/// Both paths return the internal scale.
pub fn lowest_price(
    template: &ItemTemplate,
    items: &[ItemInstance],
    listings: &[MarketListing],
) -> Decimal {
    let template_of = template_index(items);
    listings
        .iter()
        .filter(|l| template_of.get(l.item_instance_id.as_str()) == Some(&template.id.as_str()))
        .map(|l| l.price)
        .min()
        .unwrap_or(template.base_price)
}

/// Marketplace grid entry for one template
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateQuote {
    pub template_id: String,
    pub name: String,
    pub rarity: Rarity,
    /// Internal scale
    pub lowest_price: Decimal,
    pub lowest_price_np: i64,
    pub stock: usize,
}

/// Lowest price and stock for every template given, in input order
pub fn template_quotes<'a, I>(
    templates: I,
    items: &[ItemInstance],
    listings: &[MarketListing],
) -> Vec<TemplateQuote>
where
    I: IntoIterator<Item = &'a ItemTemplate>,
{
    let template_of = template_index(items);

    let mut by_template: HashMap<&str, (usize, Decimal)> = HashMap::new();
    for listing in listings {
        if let Some(template_id) = template_of.get(listing.item_instance_id.as_str()) {
            let entry = by_template
                .entry(*template_id)
                .or_insert((0, listing.price));
            entry.0 += 1;
            entry.1 = entry.1.min(listing.price);
        }
    }

    templates
        .into_iter()
        .map(|t| {
            let (stock, lowest_price) = by_template
                .get(t.id.as_str())
                .copied()
                .unwrap_or((0, t.base_price));
            TemplateQuote {
                template_id: t.id.clone(),
                name: t.name.clone(),
                rarity: t.rarity,
                lowest_price,
                lowest_price_np: to_display(lowest_price),
                stock,
            }
        })
        .collect()
}

/// Marketplace search: case-insensitive name substring plus optional rarity
pub fn matches_filter(template: &ItemTemplate, search: Option<&str>, rarity: Option<Rarity>) -> bool {
    let name_ok = match search.map(str::trim) {
        Some(term) if !term.is_empty() => template
            .name
            .to_lowercase()
            .contains(&term.to_lowercase()),
        _ => true,
    };
    let rarity_ok = rarity.map(|r| template.rarity == r).unwrap_or(true);
    name_ok && rarity_ok
}

fn template_index(items: &[ItemInstance]) -> HashMap<&str, &str> {
    items
        .iter()
        .map(|i| (i.id.as_str(), i.template_id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn template(id: &str, base: Decimal) -> ItemTemplate {
        ItemTemplate {
            id: id.into(),
            game_id: "g1".into(),
            name: format!("Skin {}", id),
            image: String::new(),
            rarity: Rarity::Rare,
            description: String::new(),
            base_price: base,
        }
    }

    fn item(id: &str, template_id: &str) -> ItemInstance {
        ItemInstance {
            id: id.into(),
            template_id: template_id.into(),
            owner_id: "someone".into(),
            traits: Default::default(),
            acquired_date: Utc::now(),
        }
    }

    fn listing(id: &str, item_id: &str, price: Decimal) -> MarketListing {
        MarketListing {
            id: id.into(),
            item_instance_id: item_id.into(),
            seller_id: "someone".into(),
            price,
            listed_date: Utc::now(),
        }
    }

    #[test]
    fn test_display_conversion() {
        assert_eq!(to_display(dec!(10.00)), 1000);
        assert_eq!(to_display(dec!(32.5)), 3250);
        assert_eq!(to_display(dec!(0.125)), 13);
        assert_eq!(from_display(1000), dec!(10));
        assert_eq!(from_display(3), dec!(0.03));
    }

    #[test]
    fn test_lowest_price_picks_minimum_for_template() {
        let t1 = template("t1", dec!(25));
        let items = vec![item("a", "t1"), item("b", "t1"), item("c", "t2")];
        let listings = vec![
            listing("l1", "a", dec!(30.10)),
            listing("l2", "b", dec!(22.40)),
            listing("l3", "c", dec!(1.00)),
        ];

        assert_eq!(lowest_price(&t1, &items, &listings), dec!(22.40));
    }

    #[test]
    fn test_lowest_price_falls_back_to_base() {
        let t3 = template("t3", dec!(18));
        let items = vec![item("a", "t1")];
        let listings = vec![listing("l1", "a", dec!(5))];

        assert_eq!(lowest_price(&t3, &items, &listings), dec!(18));
        // listing whose instance is unknown does not count
        let orphan = vec![listing("l9", "ghost", dec!(0.5))];
        assert_eq!(lowest_price(&t3, &items, &orphan), dec!(18));
    }

    #[test]
    fn test_template_quotes_stock_and_min() {
        let templates = vec![template("t1", dec!(25)), template("t2", dec!(15))];
        let items = vec![item("a", "t1"), item("b", "t1")];
        let listings = vec![listing("l1", "a", dec!(24)), listing("l2", "b", dec!(26.5))];

        let quotes = template_quotes(&templates, &items, &listings);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].stock, 2);
        assert_eq!(quotes[0].lowest_price, dec!(24));
        assert_eq!(quotes[0].lowest_price_np, 2400);
        assert_eq!(quotes[1].stock, 0);
        assert_eq!(quotes[1].lowest_price, dec!(15));
        assert_eq!(quotes[1].lowest_price_np, 1500);
    }

    #[test]
    fn test_filter() {
        let t = template("t1", dec!(25));
        assert!(matches_filter(&t, Some("skin"), None));
        assert!(matches_filter(&t, Some("  "), Some(Rarity::Rare)));
        assert!(!matches_filter(&t, Some("cape"), None));
        assert!(!matches_filter(&t, None, Some(Rarity::Ancient)));
    }
}
