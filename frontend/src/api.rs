use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::constants::*;
use shared::spin_api::{
    GiftActionRequest, GiftActionResponse, GiftListResponse, SpinRequest, SpinResponse, UpgradeRequest,
    UpgradeResponse,
};
use shared::validation::validate_auth_token;
use shared::{SpinError, SpinVariant};

use crate::config::{get_api_base_url, get_auth_token};

async fn post_json<B, R>(path: &str, body: &B) -> Result<R, SpinError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let token = get_auth_token().unwrap_or_default();
    validate_auth_token(&token)?;

    let response = Request::post(&format!("{}{}", get_api_base_url(), path))
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .json(body)
        .map_err(|e| SpinError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SpinError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SpinError::from_response(status, &body));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| SpinError::Malformed(e.to_string()))
}

pub async fn fetch_gifts(variant: SpinVariant) -> Result<GiftListResponse, SpinError> {
    let path = match variant {
        SpinVariant::Strip => ROULETTE_GIFTS_ENDPOINT,
        SpinVariant::Wheel => WHEEL_GIFTS_ENDPOINT,
        SpinVariant::Upgrade => UPGRADE_TARGETS_ENDPOINT,
    };
    post_json(path, &serde_json::json!({})).await
}

pub async fn fetch_inventory() -> Result<GiftListResponse, SpinError> {
    post_json(INVENTORY_ENDPOINT, &serde_json::json!({})).await
}

pub async fn spin(variant: SpinVariant) -> Result<SpinResponse, SpinError> {
    let path = match variant {
        SpinVariant::Wheel => WHEEL_SPIN_ENDPOINT,
        _ => ROULETTE_SPIN_ENDPOINT,
    };
    let request = SpinRequest {
        timestamp: js_sys::Date::now() as u64,
    };
    post_json(path, &request).await
}

pub async fn upgrade(request: &UpgradeRequest) -> Result<UpgradeResponse, SpinError> {
    post_json(UPGRADE_SPIN_ENDPOINT, request).await
}

pub async fn sell_gift(gift_id: &str) -> Result<Option<f64>, SpinError> {
    let request = GiftActionRequest::new(gift_id)?;
    post_json::<_, GiftActionResponse>(SELL_GIFT_ENDPOINT, &request)
        .await?
        .into_result()
}

pub async fn withdraw_gift(gift_id: &str) -> Result<Option<f64>, SpinError> {
    let request = GiftActionRequest::new(gift_id)?;
    post_json::<_, GiftActionResponse>(WITHDRAW_GIFT_ENDPOINT, &request)
        .await?
        .into_result()
}
