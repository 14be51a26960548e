mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{ADMIN_PASSWORD, ADMIN_USERNAME, laptop, test_state};
use laptop_storefront::{models::Laptop, routes};
use serde_json::{Value, json};
use tower::ServiceExt;

fn storefront() -> (Router, Vec<Laptop>) {
    let mut dell = laptop("Dell Latitude 5490", "Dell", 150_000, 2);
    dell.featured = true;
    let hp = laptop("HP ProBook 450", "HP", 90_000, 5);
    let sold_out = laptop("Asus VivoBook", "Asus", 95_000, 0);
    let laptops = vec![dell, hp, sold_out];
    (routes::app(test_state(laptops.clone())), laptops)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, cookie, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Logs in and returns the `name=value` part of the session cookie.
async fn login(app: &Router) -> String {
    let (status, cookie, body) = send(
        app,
        json_request(
            "POST",
            "/api/admin/login",
            json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["token"].is_string());

    let cookie = cookie.expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

fn laptop_payload(name: &str) -> Value {
    json!({
        "name": name,
        "brand": "Lenovo",
        "ram": "16GB",
        "processor": "AMD Ryzen 7",
        "storage": "1TB SSD",
        "graphics": "Radeon 680M",
        "display": "14-inch 2.8K OLED",
        "price": 210000,
        "condition": "New",
        "stock": 3,
        "image_url": "https://example.com/yoga.png",
        "images": [],
        "specs": "Ryzen 7 6800U, 16GB LPDDR5, 1TB NVMe",
        "new_arrival": true
    })
}

#[tokio::test]
async fn listing_applies_query_filters() {
    let (app, _) = storefront();

    let (status, _, body) = send(&app, get("/api/laptops?brand=Dell&max_price=200000")).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Dell Latitude 5490");
    assert_eq!(body["meta"]["total"], 1);

    let (_, _, body) = send(&app, get("/api/laptops?filter=featured")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, _, body) = send(&app, get("/api/laptops?per_page=2&page=2")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["total"], 3);
}

#[tokio::test]
async fn unknown_laptop_is_not_found() {
    let (app, _) = storefront();

    let (status, _, _) = send(&app, get(&format!("/api/laptops/{}", uuid::Uuid::new_v4()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn laptop_detail_and_summary() {
    let (app, laptops) = storefront();
    let id = laptops[0].id;

    let (status, _, body) = send(&app, get(&format!("/api/laptops/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], "Dell");

    let (status, _, body) = send(&app, get(&format!("/api/laptops/{id}/summary"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["summary"], "Summary: Dell Latitude 5490 specs");
}

#[tokio::test]
async fn brand_lists() {
    let (app, _) = storefront();

    let (_, _, body) = send(&app, get("/api/brands")).await;
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Dell", "HP", "Asus"]);

    let (_, _, body) = send(&app, get("/api/brands/popular")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][0]["name"], "Dell");
}

#[tokio::test]
async fn cart_quote_caps_stock_and_reports_unavailable() {
    let (app, laptops) = storefront();
    let payload = json!({
        "items": [
            { "laptop_id": laptops[0].id, "quantity": 5 },
            { "laptop_id": laptops[1].id, "quantity": 3 },
            { "laptop_id": laptops[2].id, "quantity": 1 }
        ]
    });

    let (status, _, body) = send(&app, json_request("POST", "/api/cart/quote", payload, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 2 * 150_000 + 3 * 90_000);
    assert_eq!(body["data"]["item_count"], 5);
    assert_eq!(body["data"]["unavailable"][0], laptops[2].id.to_string());
}

#[tokio::test]
async fn cart_checkout_returns_whatsapp_link() {
    let (app, laptops) = storefront();
    let payload = json!({
        "items": [{ "laptop_id": laptops[1].id, "quantity": 2 }],
        "customer": {
            "name": "Sara",
            "phone": "03001234567",
            "address": "Karachi"
        }
    });

    let (status, _, body) =
        send(&app, json_request("POST", "/api/cart/checkout", payload, None)).await;

    assert_eq!(status, StatusCode::OK);
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/+923090009022?text="));
    assert_eq!(body["data"]["total"], 180_000);
    assert!(
        body["data"]["message"]
            .as_str()
            .unwrap()
            .ends_with("Total: 180,000 PKR")
    );
}

#[tokio::test]
async fn cart_checkout_validates_customer_and_cart() {
    let (app, laptops) = storefront();

    let bad_customer = json!({
        "items": [{ "laptop_id": laptops[1].id, "quantity": 1 }],
        "customer": { "name": "", "phone": "abc", "address": "Karachi" }
    });
    let (status, _, body) =
        send(&app, json_request("POST", "/api/cart/checkout", bad_customer, None)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["fields"]["phone"].is_array());

    let empty = json!({
        "items": [{ "laptop_id": laptops[2].id, "quantity": 1 }],
        "customer": { "name": "Sara", "phone": "03001234567", "address": "Karachi" }
    });
    let (status, _, _) = send(&app, json_request("POST", "/api/cart/checkout", empty, None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_routes_require_a_session() {
    let (app, laptops) = storefront();

    let (status, _, _) = send(&app, get("/api/admin/laptops")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _, _) = send(
        &app,
        json_request(
            "DELETE",
            &format!("/api/admin/laptops/{}", laptops[0].id),
            Value::Null,
            Some("lapzen-admin-auth=forged"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, _, body) = send(&app, get("/api/admin/session")).await;
    assert_eq!(body["data"]["authenticated"], false);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let (app, _) = storefront();

    let (status, cookie, _) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/login",
            json!({ "username": ADMIN_USERNAME, "password": "nope" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(cookie.is_none());
}

#[tokio::test]
async fn admin_can_manage_the_catalog() {
    let (app, laptops) = storefront();
    let cookie = login(&app).await;

    let (_, _, body) = send(&app, {
        let mut req = get("/api/admin/session");
        req.headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
        req
    })
    .await;
    assert_eq!(body["data"]["authenticated"], true);

    let (status, _, body) = send(
        &app,
        json_request("POST", "/api/admin/laptops", laptop_payload("Yoga Slim 7"), Some(cookie.as_str())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["condition"], "New");

    let (status, _, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/admin/laptops/{id}"),
            json!({ "price": 199000, "featured": true }),
            Some(cookie.as_str()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 199_000);
    assert_eq!(body["data"]["name"], "Yoga Slim 7");

    let (_, _, body) = send(&app, get("/api/laptops/featured?limit=10")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let delete = |id: String| {
        json_request(
            "DELETE",
            &format!("/api/admin/laptops/{id}"),
            Value::Null,
            Some(cookie.as_str()),
        )
    };
    let (status, _, _) = send(&app, delete(laptops[1].id.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send(&app, delete(laptops[1].id.to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, _, body) = send(&app, {
        let mut req = get("/api/admin/laptops");
        req.headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
        req
    })
    .await;
    assert_eq!(body["meta"]["total"], 3);
}

#[tokio::test]
async fn invalid_laptop_payload_reports_fields() {
    let (app, _) = storefront();
    let cookie = login(&app).await;
    let mut payload = laptop_payload("XP");
    payload["price"] = json!(0);
    payload["image_url"] = json!("not a url");

    let (status, _, body) = send(
        &app,
        json_request("POST", "/api/admin/laptops", payload, Some(cookie.as_str())),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = &body["data"]["fields"];
    assert!(fields["name"].is_array());
    assert!(fields["price"].is_array());
    assert!(fields["image_url"].is_array());
}

#[tokio::test]
async fn bearer_token_works_like_the_cookie() {
    let (app, _) = storefront();
    let (_, _, body) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/login",
            json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
            None,
        ),
    )
    .await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let request = Request::builder()
        .uri("/api/admin/laptops")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn credential_change_and_logout() {
    let (app, _) = storefront();
    let cookie = login(&app).await;

    let (status, _, _) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/credentials",
            json!({
                "current_password": ADMIN_PASSWORD,
                "new_password": "longer-password",
                "confirm_new_password": "different"
            }),
            Some(cookie.as_str()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _, body) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/credentials",
            json!({
                "current_password": ADMIN_PASSWORD,
                "new_password": "longer-password",
                "confirm_new_password": "longer-password"
            }),
            Some(cookie.as_str()),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["password_changed"], true);

    let (status, cleared, _) = send(
        &app,
        json_request("POST", "/api/admin/logout", Value::Null, Some(cookie.as_str())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared.unwrap().contains("Max-Age=0"));

    let (status, _, _) = send(
        &app,
        json_request(
            "POST",
            "/api/admin/login",
            json!({ "username": ADMIN_USERNAME, "password": "longer-password" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_not_found() {
    let (app, _) = storefront();

    let (status, _, body) = send(&app, get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nope");
}

#[tokio::test]
async fn page_far_past_the_end_is_empty() {
    let (app, _) = storefront();

    let (status, _, body) = send(
        &app,
        get("/api/laptops?page=9223372036854775807&per_page=100"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["total"], 3);
}

#[tokio::test]
async fn condition_query_ignores_case() {
    let (app, laptops) = storefront();
    let mut refurbished = laptops.clone();
    refurbished[1].condition = laptop_storefront::models::LaptopCondition::Refurbished;
    let app_with_refurb = routes::app(test_state(refurbished));

    let (status, _, body) = send(&app, get("/api/laptops?condition=used")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (status, _, body) = send(&app_with_refurb, get("/api/laptops?condition=REFURBISHED")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "HP ProBook 450");

    let (status, _, _) = send(&app, get("/api/laptops?condition=broken")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_cart_items_are_merged() {
    let (app, laptops) = storefront();
    let payload = json!({
        "items": [
            { "laptop_id": laptops[1].id, "quantity": 2 },
            { "laptop_id": laptops[1].id, "quantity": 2 },
            { "laptop_id": laptops[1].id }
        ]
    });

    let (status, _, body) = send(&app, json_request("POST", "/api/cart/quote", payload, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["item_count"], 5);
    assert_eq!(body["data"]["total"], 5 * 90_000);
}

#[tokio::test]
async fn oversized_cart_request_is_rejected() {
    let (app, _) = storefront();
    let items: Vec<Value> = (0..=laptop_storefront::services::cart_service::MAX_CART_LINES)
        .map(|_| json!({ "laptop_id": uuid::Uuid::new_v4(), "quantity": 1 }))
        .collect();

    let (status, _, _) = send(
        &app,
        json_request("POST", "/api/cart/quote", json!({ "items": items }), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn price_above_the_ceiling_is_rejected() {
    let (app, _) = storefront();
    let cookie = login(&app).await;
    let mut payload = laptop_payload("Gold Plated Yoga");
    payload["price"] = json!(i64::MAX / 2);

    let (status, _, body) = send(
        &app,
        json_request("POST", "/api/admin/laptops", payload, Some(cookie.as_str())),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["fields"]["price"].is_array());
}

#[tokio::test]
async fn blank_description_on_update_clears_it() {
    let (app, _) = storefront();
    let cookie = login(&app).await;
    let mut payload = laptop_payload("Yoga Slim 7");
    payload["description"] = json!("Light and quick");
    payload["data_ai_hint"] = json!("silver laptop");

    let (_, _, body) = send(
        &app,
        json_request("POST", "/api/admin/laptops", payload, Some(cookie.as_str())),
    )
    .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["description"], "Light and quick");

    let (status, _, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/admin/laptops/{id}"),
            json!({ "description": "   ", "data_ai_hint": "" }),
            Some(cookie.as_str()),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["description"].is_null());
    assert!(body["data"]["data_ai_hint"].is_null());

    let (_, _, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/admin/laptops/{id}"),
            json!({ "stock": 1 }),
            Some(cookie.as_str()),
        ),
    )
    .await;
    assert!(body["data"]["description"].is_null());
    assert_eq!(body["data"]["stock"], 1);
}
