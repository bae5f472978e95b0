// Routes module - wires every HTTP endpoint to its handler

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::app_state::SharedState;
use crate::handlers::*;

/// Method + path of every endpoint, printed at startup
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Service health"),
    ("GET", "/games", "List games"),
    ("GET", "/games/:id/items", "Marketplace grid (?search=&rarity=)"),
    ("GET", "/items/:template_id", "Item detail, listings and price history"),
    ("GET", "/balance", "Wallet balance"),
    ("GET", "/wallet/packages", "Top-up packages"),
    ("POST", "/wallet/top-up", "Buy Nexus Points"),
    ("GET", "/inventory", "My unlisted items"),
    ("GET", "/listings/mine", "My active listings"),
    ("POST", "/listings", "List an item (price in NP)"),
    ("POST", "/listings/:id/buy", "Buy a listing"),
    ("GET", "/trades", "Trade history"),
    ("GET", "/stats", "Ledger stats"),
    ("GET", "/fees/quote", "Fee quote (?buyer_pays= or ?seller_receives=)"),
];

pub fn router(state: SharedState) -> Router {
    Router::new()
        // ===== HEALTH =====
        .route("/", get(health_check))
        .route("/health", get(health_check))

        // ===== CATALOG / MARKETPLACE =====
        .route("/games", get(get_games))
        .route("/games/:id/items", get(get_game_items))
        .route("/items/:template_id", get(get_item))

        // ===== WALLET =====
        .route("/balance", get(get_balance))
        .route("/wallet/packages", get(get_packages))
        .route("/wallet/top-up", post(top_up))

        // ===== INVENTORY / LISTINGS =====
        .route("/inventory", get(get_inventory))
        .route("/listings/mine", get(get_my_listings))
        .route("/listings", post(create_listing))
        .route("/listings/:id/buy", post(buy_listing))

        // ===== HISTORY / FEES =====
        .route("/trades", get(get_trades))
        .route("/stats", get(get_stats))
        .route("/fees/quote", get(fee_quote))

        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
