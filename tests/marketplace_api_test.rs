use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use nexus_market::{router, AppState, MarketConfig};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::ephemeral().shared())
}

fn app_with_balance(balance: rust_decimal::Decimal) -> Router {
    let config = MarketConfig {
        starting_balance: balance,
        ..MarketConfig::ephemeral()
    };
    router(AppState::new(config).unwrap().shared())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_games_and_marketplace_grid() {
    let app = app();

    let (status, body) = get(&app, "/games").await;
    assert_eq!(status, StatusCode::OK);
    let games = body["games"].as_array().unwrap();
    assert_eq!(games.len(), 6);
    assert!(games.iter().all(|g| g["itemCount"] == 30));

    let (status, body) = get(&app, "/games/g1/items?search=ahri").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert!(items.iter().any(|q| q["templateId"] == "t2"));
    assert!(items
        .iter()
        .all(|q| q["name"].as_str().unwrap().to_lowercase().contains("ahri")));

    let (_, body) = get(&app, "/games/g1/items?rarity=legendary").await;
    assert!(body["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["rarity"] == "Legendary"));

    // "All" is not a rarity, so nothing is filtered out
    let (_, body) = get(&app, "/games/g1/items?rarity=All").await;
    assert_eq!(body["items"].as_array().unwrap().len(), 30);

    let (status, body) = get(&app, "/games/g99/items").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_item_detail() {
    let app = app();
    let (status, body) = get(&app, "/items/t2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["template"]["name"], "K/DA All Out Ahri");

    let listings = body["listings"].as_array().unwrap();
    let prices: Vec<i64> = listings.iter().map(|l| l["priceNp"].as_i64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(body["lowestPriceNp"].as_i64().unwrap(), prices[0]);
    assert!(listings.iter().any(|l| l["id"] == "l4"));

    assert_eq!(body["priceHistory"].as_array().unwrap().len(), 31);

    let (status, _) = get(&app, "/items/t404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_buy_flow() {
    let app = app();

    let (_, body) = get(&app, "/balance").await;
    assert_eq!(body["balanceNp"], 100000);

    let (status, body) = post(&app, "/listings/l4/buy", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balanceNp"], 98350);
    assert_eq!(body["trade"]["itemName"], "K/DA All Out Ahri");
    assert_eq!(body["trade"]["sellerId"], "KPopFan");

    // same listing again
    let (status, body) = post(&app, "/listings/l4/buy", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Listing not found or already sold");

    let (_, body) = get(&app, "/inventory").await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.iter().any(|i| i["item"]["id"] == "i104"));

    let (_, body) = get(&app, "/trades").await;
    let trades = body["trades"].as_array().unwrap();
    assert_eq!(trades.len(), 4);
    assert_eq!(trades[0]["itemName"], "K/DA All Out Ahri");

    let (_, body) = get(&app, "/items/t2").await;
    assert!(body["listings"].as_array().unwrap().iter().all(|l| l["id"] != "l4"));
}

#[tokio::test]
async fn test_buy_without_funds() {
    let app = app_with_balance(dec!(10));

    let (status, body) = post(&app, "/listings/l1/buy", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Insufficient Nexus Points!");

    let (_, body) = get(&app, "/balance").await;
    assert_eq!(body["balanceNp"], 1000);
    let (_, body) = get(&app, "/trades").await;
    assert_eq!(body["trades"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_item() {
    let app = app();

    let (status, body) = post(&app, "/listings", json!({ "itemId": "i1", "buyerPays": 2 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = post(&app, "/listings", json!({ "itemId": "i1", "buyerPays": 1000 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fees"]["marketFee"], 50);
    assert_eq!(body["fees"]["developerFee"], 50);
    assert_eq!(body["fees"]["sellerReceives"], 900);
    assert_eq!(body["listing"]["sellerId"], "me");

    let (_, body) = get(&app, "/inventory").await;
    assert!(body["items"].as_array().unwrap().iter().all(|i| i["item"]["id"] != "i1"));

    let (_, body) = get(&app, "/listings/mine").await;
    let mine = body["listings"].as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["priceNp"], 1000);

    let (status, _) = post(&app, "/listings", json!({ "itemId": "i1", "buyerPays": 500 })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(&app, "/listings", json!({ "itemId": "i101", "buyerPays": 500 })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = post(&app, "/listings", json!({ "itemId": "ghost", "buyerPays": 500 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // balance untouched by listing
    let (_, body) = get(&app, "/balance").await;
    assert_eq!(body["balanceNp"], 100000);
}

#[tokio::test]
async fn test_fee_quote() {
    let app = app();

    let (_, body) = get(&app, "/fees/quote?buyer_pays=10").await;
    assert_eq!(body["fees"]["sellerReceives"], 8);

    let (_, body) = get(&app, "/fees/quote?seller_receives=900").await;
    assert_eq!(body["buyerPays"], 1000);
    assert_eq!(body["fees"]["sellerReceives"], 900);

    let (_, body) = get(&app, "/fees/quote?buyer_pays=2").await;
    assert!(body["fees"].is_null());

    let (status, _) = get(&app, "/fees/quote").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_top_up() {
    let app = app();

    let (status, body) = post(&app, "/wallet/top-up", json!({ "amount": 20 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balanceNp"], 102000);

    let (status, _) = post(&app, "/wallet/top-up", json!({ "amount": 7 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/balance").await;
    assert_eq!(body["balanceNp"], 102000);
}

#[tokio::test]
async fn test_list_then_buy_own_listing() {
    let app = app();

    let (status, body) = post(&app, "/listings", json!({ "itemId": "i1", "buyerPays": 1000 })).await;
    assert_eq!(status, StatusCode::OK);
    let listing_id = body["listing"]["id"].as_str().unwrap().to_string();
    assert!(listing_id.starts_with("l_"));
    assert_eq!(body["listing"]["price"].as_f64(), Some(10.0));

    let (status, body) = post(&app, &format!("/listings/{}/buy", listing_id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"].as_f64(), Some(990.0));
    assert_eq!(body["balanceNp"], 99000);
    assert_eq!(body["trade"]["itemName"], "Elementalist Lux");
    assert_eq!(body["trade"]["sellerId"], "me");
    assert_eq!(body["trade"]["price"].as_f64(), Some(10.0));

    let (_, body) = get(&app, "/trades").await;
    let trades = body["trades"].as_array().unwrap();
    assert_eq!(trades.len(), 4);
    assert_eq!(trades[0]["itemName"], "Elementalist Lux");
    assert_eq!(trades[1]["id"], "trade_1");

    let (_, body) = get(&app, "/listings/mine").await;
    assert!(body["listings"].as_array().unwrap().is_empty());

    let (_, body) = get(&app, "/inventory").await;
    assert!(body["items"].as_array().unwrap().iter().any(|i| i["item"]["id"] == "i1"));
}
