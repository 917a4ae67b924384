//! JSON fixtures shared by the view tests.

use nplace_client::NplaceClient;
use serde_json::{json, Value};
use uuid::Uuid;

pub(crate) const STORE_ID: &str = "0d8e3f55-3e1d-4f6c-8d0c-0b8f0e6a7c21";

pub(crate) fn store_id() -> Uuid {
    Uuid::parse_str(STORE_ID).unwrap()
}

pub(crate) fn keyword_uuid(n: u128) -> Uuid {
    Uuid::from_u128(0x6f1c_2b0e_0000_0000_0000_0000_0000_0000 + n)
}

pub(crate) fn client(base_url: &str) -> NplaceClient {
    NplaceClient::with_base_url(base_url, 5).expect("client construction should not fail")
}

pub(crate) fn store_json(id: &str, place_id: &str) -> Value {
    json!({
        "id": id,
        "naver_place_id": place_id,
        "name": format!("Store {place_id}"),
        "category": "Cafe",
        "address": null,
        "naver_place_url": null,
        "created_at": "2024-03-01T09:00:00+00:00",
        "updated_at": "2024-03-01T09:00:00+00:00"
    })
}

pub(crate) fn keyword_json(n: u128, text: &str, is_active: bool, alert_enabled: bool) -> Value {
    json!({
        "id": keyword_uuid(n).to_string(),
        "store_id": STORE_ID,
        "keyword": text,
        "is_active": is_active,
        "collection_time": "15:00:00",
        "alert_enabled": alert_enabled,
        "created_at": "2024-03-01T09:00:00+00:00",
        "updated_at": null
    })
}

pub(crate) fn dashboard_keyword_json(n: u128, text: &str, is_active: bool) -> Value {
    json!({
        "id": keyword_uuid(n).to_string(),
        "store_id": STORE_ID,
        "keyword": text,
        "is_active": is_active,
        "collection_time": "15:00:00",
        "alert_enabled": false,
        "latest_rank": 5,
        "prev_rank": 6,
        "rank_change": -1
    })
}

pub(crate) fn snapshot_json(
    id: u128,
    keyword: u128,
    rank: Option<i64>,
    collected_at: &str,
) -> Value {
    json!({
        "id": Uuid::from_u128(id).to_string(),
        "tracked_keyword_id": keyword_uuid(keyword).to_string(),
        "rank_position": rank,
        "total_results": 1200,
        "visitor_count": null,
        "blog_review_count": 15,
        "collected_at": collected_at
    })
}
