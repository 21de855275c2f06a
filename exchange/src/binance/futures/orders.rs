use crate::binance::{
    errors::{BinanceError, Result},
    futures::{
        requests::PlaceOrderRequest,
        responses::OrderResponse,
        trade_api::FuturesTradeApi,
        validators::{
            validate_order_type, validate_price, validate_quantity, validate_side,
            validate_stop_price, validate_symbol, validate_time_in_force,
        },
    },
};
use log::{error, info};
use serde_json::Value;
use std::io::Write;

const RULE_WIDTH: usize = 50;

/// Raw order parameters as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct OrderInput {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: String,
    pub price: Option<String>,
    pub stop_price: Option<String>,
    pub time_in_force: Option<String>,
}

pub fn validate_order(input: &OrderInput) -> Result<PlaceOrderRequest> {
    let validated = build_request(input);
    if let Err(e) = &validated {
        error!("Validation failed: {}", e);
    }
    validated
}

// 固定顺序校验，遇到第一个错误即返回
fn build_request(input: &OrderInput) -> Result<PlaceOrderRequest> {
    let symbol = validate_symbol(&input.symbol)?;
    let side = validate_side(&input.side)?;
    let r#type = validate_order_type(&input.order_type)?;
    let quantity = validate_quantity(&input.quantity)?;
    let price = validate_price(input.price.as_deref(), r#type)?;
    let stop_price = validate_stop_price(input.stop_price.as_deref(), r#type)?;
    let time_in_force = validate_time_in_force(input.time_in_force.as_deref())?;
    Ok(PlaceOrderRequest {
        symbol,
        side,
        r#type,
        quantity,
        price,
        stop_price,
        time_in_force,
    })
}

pub fn format_order_summary(req: &PlaceOrderRequest) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "  ORDER REQUEST SUMMARY".to_string(),
        rule.clone(),
        format!("  Symbol     : {}", req.symbol),
        format!("  Side       : {}", req.side.as_str()),
        format!("  Type       : {}", req.r#type.as_str()),
        format!("  Quantity   : {}", req.quantity),
    ];
    if let Some(price) = req.price {
        lines.push(format!("  Price      : {}", price));
    }
    if let Some(stop_price) = req.stop_price {
        lines.push(format!("  Stop Price : {}", stop_price));
    }
    lines.push(rule);
    lines.join("\n")
}

pub fn format_order_response(response: &Value) -> String {
    let resp = OrderResponse::new(response);
    let rule = "─".repeat(RULE_WIDTH);
    [
        rule.clone(),
        "  ORDER RESPONSE".to_string(),
        rule.clone(),
        format!("  Order ID       : {}", resp.order_id()),
        format!("  Client OID     : {}", resp.client_order_id()),
        format!("  Status         : {}", resp.status()),
        format!("  Executed Qty   : {}", resp.executed_qty()),
        format!("  Avg Price      : {}", resp.avg_price()),
        format!("  Cumulative USD : {}", resp.cum_quote()),
        rule,
    ]
    .join("\n")
}

/// Validates `input`, submits it once and writes both summaries to `out`.
///
/// Nothing is sent when validation fails. Exchange and transport errors are
/// logged and returned as they are; there is no retry.
pub async fn place_order<W: Write>(
    api: &FuturesTradeApi,
    input: &OrderInput,
    out: &mut W,
) -> Result<Value> {
    let req = validate_order(input)?;

    let summary = format_order_summary(&req);
    info!("Placing order:\n{}", summary);
    write_block(out, &summary)?;

    let response = match api.place_order(&req).await {
        Ok(response) => response,
        Err(e @ BinanceError::ApiError { .. }) => {
            error!("API error placing order: {}", e);
            return Err(e);
        }
        Err(e) => {
            error!("Network error placing order: {}", e);
            return Err(e);
        }
    };

    let response_str = format_order_response(&response);
    info!("Order response:\n{}", response_str);
    write_block(out, &response_str)?;
    write_block(out, "  Order placed successfully!")?;

    Ok(response)
}

fn write_block<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text).map_err(|e| BinanceError::ClientError {
        message: format!("failed to write output: {}", e),
    })
}
