// HTTP request handlers for the Nexus marketplace API
//
// Amounts cross this boundary twice: internal decimals (`price`, `balance`)
// and whole NP (`priceNp`, `balanceNp`). Sellers type NP.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::app_state::{lock, SharedState};
use crate::error::{MarketError, MarketResult};
use crate::ledger::TOP_UP_PACKAGES;
use crate::models::*;
use crate::pricing::{self, MIN_LISTING_PRICE_NP};

type ApiResult = MarketResult<Json<Value>>;

// ===== HEALTH =====

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "nexus-market",
    }))
}

// ===== CATALOG / MARKETPLACE =====

pub async fn get_games(State(state): State<SharedState>) -> ApiResult {
    let app_state = lock(&state)?;
    let catalog = app_state.catalog();

    let games: Vec<Value> = catalog
        .games()
        .iter()
        .map(|g| {
            json!({
                "id": g.id,
                "name": g.name,
                "slug": g.slug,
                "image": g.image,
                "description": g.description,
                "itemCount": catalog.templates_for_game(&g.id).count(),
            })
        })
        .collect();

    Ok(Json(json!({ "success": true, "games": games })))
}

pub async fn get_game_items(
    State(state): State<SharedState>,
    Path(game_id): Path<String>,
    Query(query): Query<MarketQuery>,
) -> ApiResult {
    let app_state = lock(&state)?;
    let catalog = app_state.catalog();
    let game = catalog
        .game(&game_id)
        .ok_or_else(|| MarketError::GameNotFound(game_id.clone()))?;

    // "All" or anything unrecognised means no rarity filter
    let rarity = query.rarity.as_deref().and_then(Rarity::parse);
    let search = query.search.as_deref();
    let templates = catalog
        .templates_for_game(&game_id)
        .filter(|t| pricing::matches_filter(t, search, rarity));

    let ledger = &app_state.ledger;
    let quotes = pricing::template_quotes(templates, ledger.items(), ledger.listings());

    Ok(Json(json!({
        "success": true,
        "game": game,
        "items": quotes,
    })))
}

pub async fn get_item(
    State(state): State<SharedState>,
    Path(template_id): Path<String>,
) -> ApiResult {
    let app_state = lock(&state)?;
    let ledger = &app_state.ledger;
    let lowest = ledger.lowest_price(&template_id)?;
    let template = app_state
        .catalog()
        .template(&template_id)
        .ok_or_else(|| MarketError::TemplateNotFound(template_id.clone()))?;

    let listings: Vec<Value> = ledger
        .listings_for_template(&template_id)
        .into_iter()
        .map(|l| {
            json!({
                "id": l.id,
                "itemInstanceId": l.item_instance_id,
                "sellerId": l.seller_id,
                "price": l.price,
                "priceNp": pricing::to_display(l.price),
                "listedDate": l.listed_date,
                "traits": ledger.item(&l.item_instance_id).map(|i| &i.traits),
                "isMine": l.seller_id == ME,
            })
        })
        .collect();

    let history: Vec<Value> = pricing::price_history(template.base_price)
        .into_iter()
        .map(|p| {
            json!({
                "date": p.date,
                "price": p.price,
                "priceNp": pricing::to_display(p.price),
            })
        })
        .collect();

    Ok(Json(json!({
        "success": true,
        "template": template,
        "lowestPrice": lowest,
        "lowestPriceNp": pricing::to_display(lowest),
        "listings": listings,
        "priceHistory": history,
    })))
}

// ===== WALLET =====

pub async fn get_balance(State(state): State<SharedState>) -> ApiResult {
    let app_state = lock(&state)?;
    let balance = app_state.ledger.balance();
    Ok(Json(json!({
        "success": true,
        "balance": balance,
        "balanceNp": pricing::to_display(balance),
    })))
}

pub async fn top_up(
    State(state): State<SharedState>,
    Json(request): Json<TopUpRequest>,
) -> ApiResult {
    if !TOP_UP_PACKAGES.contains(&request.amount) {
        return Err(MarketError::InvalidAmount(format!(
            "{} is not an offered package",
            request.amount
        )));
    }

    let mut app_state = lock(&state)?;
    let balance = app_state.ledger.top_up(request.amount)?;
    app_state.persist();

    Ok(Json(json!({
        "success": true,
        "balance": balance,
        "balanceNp": pricing::to_display(balance),
    })))
}

pub async fn get_packages() -> Json<Value> {
    Json(json!({ "packages": TOP_UP_PACKAGES }))
}

// ===== INVENTORY / LISTINGS =====

pub async fn get_inventory(State(state): State<SharedState>) -> ApiResult {
    let app_state = lock(&state)?;
    let catalog = app_state.catalog();

    let items: Vec<Value> = app_state
        .ledger
        .my_inventory()
        .into_iter()
        .map(|i| {
            json!({
                "item": i,
                "template": catalog.template(&i.template_id),
            })
        })
        .collect();

    Ok(Json(json!({ "success": true, "items": items })))
}

pub async fn get_my_listings(State(state): State<SharedState>) -> ApiResult {
    let app_state = lock(&state)?;
    let ledger = &app_state.ledger;

    let listings: Vec<Value> = ledger
        .my_listings()
        .into_iter()
        .map(|l| {
            let price_np = pricing::to_display(l.price);
            let template_id = ledger.item(&l.item_instance_id).map(|i| i.template_id.as_str());
            json!({
                "listing": l,
                "itemName": template_id
                    .map(|id| app_state.catalog().template_name(id))
                    .unwrap_or(crate::catalog::UNKNOWN_ITEM),
                "priceNp": price_np,
                "fees": pricing::fee_split(price_np),
            })
        })
        .collect();

    Ok(Json(json!({ "success": true, "listings": listings })))
}

pub async fn create_listing(
    State(state): State<SharedState>,
    Json(request): Json<ListItemRequest>,
) -> ApiResult {
    let fees = pricing::fee_split(request.buyer_pays).ok_or_else(|| {
        MarketError::InvalidAmount(format!(
            "minimum listing price is {} NP",
            MIN_LISTING_PRICE_NP
        ))
    })?;

    let mut app_state = lock(&state)?;
    let listing = app_state
        .ledger
        .list_for_sale(&request.item_id, pricing::from_display(request.buyer_pays))?;
    app_state.persist();

    Ok(Json(json!({
        "success": true,
        "listing": listing,
        "fees": fees,
    })))
}

pub async fn buy_listing(
    State(state): State<SharedState>,
    Path(listing_id): Path<String>,
) -> ApiResult {
    let mut app_state = lock(&state)?;
    let trade = app_state.ledger.buy_item(&listing_id)?;
    app_state.persist();

    let balance = app_state.ledger.balance();
    info!(trade = %trade.id, item = %trade.item_name, "purchase completed");

    Ok(Json(json!({
        "success": true,
        "trade": trade,
        "balance": balance,
        "balanceNp": pricing::to_display(balance),
    })))
}

pub async fn get_trades(State(state): State<SharedState>) -> ApiResult {
    let app_state = lock(&state)?;
    Ok(Json(json!({
        "success": true,
        "trades": app_state.ledger.trade_history(),
    })))
}

pub async fn get_stats(State(state): State<SharedState>) -> ApiResult {
    let app_state = lock(&state)?;
    Ok(Json(json!({
        "success": true,
        "stats": app_state.ledger.stats(),
    })))
}

// ===== FEES =====

/// Quote either direction. `buyer_pays` wins when both are given; a price
/// under the minimum comes back with `fees: null`.
pub async fn fee_quote(Query(query): Query<FeeQuoteQuery>) -> ApiResult {
    let buyer_pays = match (query.buyer_pays, query.seller_receives) {
        (Some(buyer_pays), _) => Some(buyer_pays),
        (None, Some(seller_receives)) => pricing::buyer_pays_for(seller_receives),
        (None, None) => {
            return Err(MarketError::InvalidAmount(
                "provide buyer_pays or seller_receives".into(),
            ))
        }
    };

    Ok(Json(json!({
        "success": true,
        "buyerPays": buyer_pays,
        "fees": buyer_pays.and_then(pricing::fee_split),
        "minimumNp": MIN_LISTING_PRICE_NP,
    })))
}
