//! The actual end-to-end checks, one staged flow per public surface.

use anyhow::{Context as _, Result, anyhow, bail, ensure};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

pub struct Smoke {
    client: Client,
    base_url: String,
}

impl Smoke {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn health(&self) -> Result<()> {
        for path in ["/healthz", "/readyz"] {
            let status = self
                .client
                .get(self.url(path))
                .send()
                .await
                .with_context(|| format!("GET {path}"))?
                .status();
            ensure!(status == StatusCode::OK, "GET {path} returned {status}");
        }
        Ok(())
    }

    pub async fn catalog_flow(&self) -> Result<()> {
        // Unique name so reruns against the same instance don't collide in
        // search assertions.
        let name = format!("Smoke Lamp {}", Uuid::new_v4());

        let resp = self
            .client
            .post(self.url("/api/products"))
            .json(&json!({
                "name": name,
                "description": "smoke test product",
                "price": 19.99,
                "imageRef": "/img/smoke.png",
                "categoryRef": "smoke-tests",
            }))
            .send()
            .await
            .context("create product")?;
        ensure!(
            resp.status() == StatusCode::CREATED,
            "create product returned {}",
            resp.status()
        );
        let product: Value = resp.json().await.context("parse created product")?;
        let id = product["id"]
            .as_str()
            .ok_or_else(|| anyhow!("created product has no id"))?
            .to_owned();

        let found: Value = self
            .client
            .get(self.url(&format!("/api/products/search/{name}")))
            .send()
            .await
            .context("search products")?
            .json()
            .await
            .context("parse search results")?;
        let hits = found.as_array().map(Vec::len).unwrap_or(0);
        ensure!(hits == 1, "search found {hits} products, expected 1");

        let resp = self
            .client
            .put(self.url(&format!("/api/products/{id}")))
            .json(&json!({"price": 24.99}))
            .send()
            .await
            .context("update product")?;
        ensure!(
            resp.status() == StatusCode::OK,
            "update product returned {}",
            resp.status()
        );
        let updated: Value = resp.json().await.context("parse updated product")?;
        ensure!(
            updated["price"] == json!(24.99),
            "partial update did not change price"
        );
        ensure!(
            updated["description"] == json!("smoke test product"),
            "partial update clobbered an untouched field"
        );

        let resp = self
            .client
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await
            .context("delete product")?;
        ensure!(
            resp.status() == StatusCode::NO_CONTENT,
            "delete product returned {}",
            resp.status()
        );

        let status = self
            .client
            .get(self.url(&format!("/api/products/{id}")))
            .send()
            .await
            .context("get deleted product")?
            .status();
        ensure!(
            status == StatusCode::NOT_FOUND,
            "deleted product still resolves ({status})"
        );
        Ok(())
    }

    pub async fn basket_flow(&self) -> Result<()> {
        let user_id = format!("smoke-{}", Uuid::new_v4());

        // Absent basket reads as null, never 404.
        let body: Value = self
            .client
            .get(self.url(&format!("/api/baskets/{user_id}")))
            .send()
            .await
            .context("get absent basket")?
            .json()
            .await
            .context("parse absent basket")?;
        ensure!(body.is_null(), "absent basket was {body}, expected null");

        let add = |quantity: u32| {
            self.client
                .post(self.url("/api/baskets/add"))
                .json(&json!({
                    "userId": user_id,
                    "productName": "Smoke Lamp",
                    "quantity": quantity,
                    "unitPrice": 19.99,
                    "imageRef": "/img/smoke.png",
                }))
                .send()
        };

        let resp = add(1).await.context("first add")?;
        ensure!(
            resp.status() == StatusCode::CREATED,
            "first add returned {}",
            resp.status()
        );

        let basket: Value = add(2)
            .await
            .context("second add")?
            .json()
            .await
            .context("parse merged basket")?;
        ensure!(
            basket["items"][0]["quantity"] == json!(3),
            "merge-on-add produced {}, expected quantity 3",
            basket["items"][0]["quantity"]
        );

        let basket: Value = self
            .client
            .put(self.url("/api/baskets/update"))
            .json(&json!({
                "userId": user_id,
                "productName": "Smoke Lamp",
                "quantity": 5,
            }))
            .send()
            .await
            .context("set quantity")?
            .json()
            .await
            .context("parse updated basket")?;
        ensure!(
            basket["items"][0]["quantity"] == json!(5),
            "set-quantity produced {}, expected 5",
            basket["items"][0]["quantity"]
        );

        let resp = self
            .client
            .delete(self.url(&format!("/api/baskets/{user_id}")))
            .send()
            .await
            .context("clear basket")?;
        ensure!(
            resp.status() == StatusCode::NO_CONTENT,
            "clear basket returned {}",
            resp.status()
        );

        // Cleared basket survives as an empty document.
        let body: Value = self
            .client
            .get(self.url(&format!("/api/baskets/{user_id}")))
            .send()
            .await
            .context("get cleared basket")?
            .json()
            .await
            .context("parse cleared basket")?;
        let items = body["items"].as_array().map(Vec::len);
        ensure!(
            items == Some(0),
            "cleared basket items were {items:?}, expected Some(0)"
        );
        Ok(())
    }

    pub async fn order_flow(&self) -> Result<()> {
        let create = || {
            self.client
                .post(self.url("/api/orders"))
                .json(&json!({
                    "userId": format!("smoke-{}", Uuid::new_v4()),
                    "items": [{
                        "productName": "Smoke Lamp",
                        "quantity": 1,
                        "unitPrice": 19.99,
                        "imageRef": "/img/smoke.png",
                    }],
                    "name": "Smoke Tester",
                    "email": "smoke@example.com",
                    "phone": "+100000000",
                }))
                .send()
        };

        let resp = create().await.context("create first order")?;
        ensure!(
            resp.status() == StatusCode::CREATED,
            "create order returned {}",
            resp.status()
        );
        let first: Value = resp.json().await.context("parse first order")?;
        let first_number = first["orderNumber"]
            .as_i64()
            .ok_or_else(|| anyhow!("first order has no orderNumber"))?;
        ensure!(first_number >= 1, "order number {first_number} below 1");
        ensure!(
            first["status"] == json!("not ready"),
            "fresh order status was {}",
            first["status"]
        );

        let second: Value = create()
            .await
            .context("create second order")?
            .json()
            .await
            .context("parse second order")?;
        let second_number = second["orderNumber"]
            .as_i64()
            .ok_or_else(|| anyhow!("second order has no orderNumber"))?;
        ensure!(
            second_number > first_number,
            "order numbers not increasing: {first_number} then {second_number}"
        );

        let id = first["id"]
            .as_str()
            .ok_or_else(|| anyhow!("first order has no id"))?
            .to_owned();
        let updated: Value = self
            .client
            .put(self.url(&format!("/api/orders/{id}")))
            .json(&json!({"status": "ready"}))
            .send()
            .await
            .context("update order status")?
            .json()
            .await
            .context("parse updated order")?;
        ensure!(
            updated["status"] == json!("ready"),
            "status update produced {}",
            updated["status"]
        );
        ensure!(
            updated["orderNumber"] == json!(first_number),
            "update changed the order number"
        );

        for order in [&first, &second] {
            let id = order["id"].as_str().unwrap_or_default();
            let status = self
                .client
                .delete(self.url(&format!("/api/orders/{id}")))
                .send()
                .await
                .context("delete order")?
                .status();
            ensure!(
                status == StatusCode::NO_CONTENT,
                "delete order returned {status}"
            );
        }
        Ok(())
    }

    pub async fn auth_flow(&self, login: &str, password: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/api/admins/login"))
            .json(&json!({"login": login, "password": password}))
            .send()
            .await
            .context("login")?;
        ensure!(
            resp.status() == StatusCode::OK,
            "login returned {}",
            resp.status()
        );
        let cookie = session_cookie_from(&resp)?;
        let body: Value = resp.json().await.context("parse login response")?;
        ensure!(body["success"] == json!(true), "login body was {body}");

        let resp = self
            .client
            .get(self.url("/api/admins/check-auth"))
            .header("cookie", &cookie)
            .send()
            .await
            .context("check-auth")?;
        ensure!(
            resp.status() == StatusCode::OK,
            "check-auth returned {}",
            resp.status()
        );

        let resp = self
            .client
            .post(self.url("/api/admins/refresh-token"))
            .header("cookie", &cookie)
            .send()
            .await
            .context("refresh-token")?;
        ensure!(
            resp.status() == StatusCode::OK,
            "refresh-token returned {}",
            resp.status()
        );
        let refreshed = session_cookie_from(&resp)?;

        let resp = self
            .client
            .post(self.url("/api/admins/logout"))
            .header("cookie", &refreshed)
            .send()
            .await
            .context("logout")?;
        ensure!(
            resp.status() == StatusCode::OK,
            "logout returned {}",
            resp.status()
        );

        // Without any cookie the gate must refuse.
        let status = self
            .client
            .get(self.url("/api/admins/check-auth"))
            .send()
            .await
            .context("check-auth without cookie")?
            .status();
        ensure!(
            status == StatusCode::UNAUTHORIZED,
            "gate let an unauthenticated request through ({status})"
        );
        Ok(())
    }
}

/// Extract the `token=...` pair from a response's Set-Cookie headers,
/// formatted for sending back as a Cookie header.
fn session_cookie_from(resp: &reqwest::Response) -> Result<String> {
    for value in resp.headers().get_all("set-cookie") {
        let raw = value.to_str().unwrap_or_default();
        if let Some(pair) = raw.split(';').next() {
            if pair.trim_start().starts_with("token=") {
                return Ok(pair.trim().to_owned());
            }
        }
    }
    bail!("response carried no session cookie")
}
