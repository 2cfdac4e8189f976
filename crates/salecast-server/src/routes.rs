//! API route handlers

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use salecast_core::ledger::{profit_series, sell_series, SaleRecord};
use salecast_core::trend::extrapolate_next;

use crate::config::ScopePolicy;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters carrying an optional owner identity.
#[derive(Debug, Default, Deserialize)]
pub struct OwnerQuery {
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /api/add-item`.
///
/// Monetary fields take whatever the client sent and coerce it to a number
/// the way the legacy clients expect: JSON numbers pass through, numeric
/// strings parse, anything else becomes NaN and is stored as-is.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default = "nan", deserialize_with = "money")]
    pub cost: f64,
    #[serde(default = "nan", deserialize_with = "money")]
    pub sell: f64,
    #[serde(default = "nan", deserialize_with = "money")]
    pub profit: f64,
}

#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub message: &'static str,
    pub item: SaleRecord,
}

/// Body of `POST /api/predict` under the body scoping policy.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub email: Option<String>,
}

fn nan() -> f64 {
    f64::NAN
}

fn money<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_money(&value))
}

fn coerce_money(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// `GET /api/sales` and `GET /api/admin/all-sales` — every record, insertion
/// order.
pub async fn list_sales(State(state): State<AppState>) -> Json<Vec<SaleRecord>> {
    let ledger = state.ledger.read();
    Json(ledger.all().to_vec())
}

/// `GET /api/my-data?email=E` — records owned by the query identity.
pub async fn my_data(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<SaleRecord>>> {
    let email = query.email.unwrap_or_default();
    let ledger = state.ledger.read();
    Ok(Json(ledger.by_owner(&email)?))
}

/// `GET /api/customer/history/{email}` — records owned by the path identity.
pub async fn customer_history(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<SaleRecord>>> {
    let ledger = state.ledger.read();
    Ok(Json(ledger.by_owner(&email)?))
}

/// `POST /api/add-item` — record a sale and echo the stored item.
pub async fn add_item(
    State(state): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> Json<AddItemResponse> {
    let item = state
        .ledger
        .write()
        .add(&req.email, req.cost, req.sell, req.profit);

    Json(AddItemResponse {
        message: "Saved successfully",
        item,
    })
}

/// `DELETE /api/delete-item/{id}` — idempotent delete by id.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<i64>) -> Json<Value> {
    state.ledger.write().remove(id);
    Json(json!({ "message": "Deleted successfully" }))
}

/// `POST /api/predict` — one-step forecast of sales and profit.
///
/// The owner identity comes from wherever the configured scoping policy says;
/// the body is optional so unscoped deployments can post an empty request.
pub async fn predict(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
    body: Bytes,
) -> Result<Json<Value>> {
    let identity = match state.scope {
        ScopePolicy::Query => Some(required(query.email)?),
        ScopePolicy::Body => {
            let req: PredictRequest = serde_json::from_slice(&body).unwrap_or_default();
            Some(required(req.email)?)
        }
        _ => None,
    };

    forecast_response(&state, identity.as_deref())
}

/// `POST /api/predict/{email}` — scoped forecast under the path policy.
pub async fn predict_for_owner(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>> {
    forecast_response(&state, Some(&email))
}

fn required(email: Option<String>) -> Result<String> {
    match email {
        Some(e) if !e.is_empty() => Ok(e),
        _ => Err(ApiError::MissingParameter("email")),
    }
}

fn forecast_response(state: &AppState, owner: Option<&str>) -> Result<Json<Value>> {
    let ledger = state.ledger.read();
    let records = match owner {
        Some(email) => ledger.by_owner(email)?,
        None => ledger.all().to_vec(),
    };

    // The regression needs two points; short histories answer with zeros
    // rather than an error.
    if records.len() < 2 {
        return Ok(Json(json!({
            "tomorrowSales": 0,
            "tomorrowProfit": 0,
            "message": "Not enough data",
        })));
    }

    let sales = extrapolate_next(&sell_series(&records));
    let profit = extrapolate_next(&profit_series(&records));

    Ok(Json(json!({
        "tomorrowSales": format!("{sales:.2}"),
        "tomorrowProfit": format!("{profit:.2}"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_money_number() {
        assert_eq!(coerce_money(&json!(12.5)), 12.5);
        assert_eq!(coerce_money(&json!(0)), 0.0);
    }

    #[test]
    fn test_coerce_money_numeric_string() {
        assert_eq!(coerce_money(&json!("12.5")), 12.5);
        assert_eq!(coerce_money(&json!(" 7 ")), 7.0);
    }

    #[test]
    fn test_coerce_money_garbage_is_nan() {
        assert!(coerce_money(&json!("twelve")).is_nan());
        assert!(coerce_money(&json!(null)).is_nan());
        assert!(coerce_money(&json!([1, 2])).is_nan());
    }

    #[test]
    fn test_add_item_request_coerces_fields() {
        let req: AddItemRequest =
            serde_json::from_str(r#"{"email":"a@shop.com","cost":"10","sell":15,"profit":"bad"}"#)
                .unwrap();

        assert_eq!(req.cost, 10.0);
        assert_eq!(req.sell, 15.0);
        assert!(req.profit.is_nan());
    }

    #[test]
    fn test_add_item_request_missing_fields_are_nan() {
        let req: AddItemRequest = serde_json::from_str(r#"{"email":"a@shop.com"}"#).unwrap();

        assert!(req.cost.is_nan());
        assert!(req.sell.is_nan());
        assert!(req.profit.is_nan());
    }

    #[test]
    fn test_required_rejects_missing_or_empty() {
        assert!(required(None).is_err());
        assert!(required(Some(String::new())).is_err());
        assert_eq!(required(Some("a@shop.com".into())).unwrap(), "a@shop.com");
    }
}
