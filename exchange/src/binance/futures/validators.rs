//! Normalisation and validation of user supplied order parameters.
//!
//! Numeric inputs are parsed with `rust_decimal` so the value sent to the
//! exchange is exactly the value the user typed, scale included.

use crate::binance::{
    errors::{BinanceError, Result},
    futures::models::{OrderType, Side, TimeInForce, join_names},
};
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn validate_symbol(symbol: &str) -> Result<String> {
    let s = symbol.trim().to_uppercase();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BinanceError::validation(
            "symbol",
            format!("'{}'. Must be alphanumeric (e.g. BTCUSDT).", symbol),
        ));
    }
    Ok(s)
}

pub fn validate_side(side: &str) -> Result<Side> {
    Side::from_str(&side.trim().to_uppercase()).ok_or_else(|| {
        BinanceError::validation(
            "side",
            format!(
                "'{}'. Must be one of: {}.",
                side,
                join_names(&Side::ALL, Side::as_str)
            ),
        )
    })
}

pub fn validate_order_type(order_type: &str) -> Result<OrderType> {
    OrderType::from_str(&order_type.trim().to_uppercase()).ok_or_else(|| {
        BinanceError::validation(
            "order type",
            format!(
                "'{}'. Must be one of: {}.",
                order_type,
                join_names(&OrderType::ALL, OrderType::as_str)
            ),
        )
    })
}

pub fn validate_quantity(quantity: &str) -> Result<Decimal> {
    parse_positive_decimal("quantity", quantity)
}

/// MARKET orders carry no price. LIMIT orders require one. STOP_MARKET orders
/// accept an optional price which is validated but never submitted.
pub fn validate_price(price: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
    match (order_type, non_empty(price)) {
        (OrderType::Market, _) => Ok(None),
        (OrderType::Limit, None) => Err(BinanceError::validation(
            "price",
            format!("price is required for {} orders.", order_type.as_str()),
        )),
        (OrderType::StopMarket, None) => Ok(None),
        (_, Some(p)) => parse_positive_decimal("price", p).map(Some),
    }
}

pub fn validate_stop_price(
    stop_price: Option<&str>,
    order_type: OrderType,
) -> Result<Option<Decimal>> {
    if order_type != OrderType::StopMarket {
        return Ok(None);
    }
    match non_empty(stop_price) {
        Some(sp) => parse_positive_decimal("stop price", sp).map(Some),
        None => Err(BinanceError::validation(
            "stop price",
            format!("stop price is required for {} orders.", order_type.as_str()),
        )),
    }
}

pub fn validate_time_in_force(time_in_force: Option<&str>) -> Result<TimeInForce> {
    let Some(raw) = non_empty(time_in_force) else {
        return Ok(TimeInForce::default());
    };
    TimeInForce::from_str(&raw.trim().to_uppercase()).ok_or_else(|| {
        BinanceError::validation(
            "time in force",
            format!(
                "'{}'. Must be one of: {}.",
                raw,
                join_names(&TimeInForce::ALL, TimeInForce::as_str)
            ),
        )
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_positive_decimal(field: &'static str, raw: &str) -> Result<Decimal> {
    let value = Decimal::from_str(raw.trim()).map_err(|_| {
        BinanceError::validation(field, format!("'{}'. Must be a positive number.", raw))
    })?;
    // rust_decimal 超出 28 位精度时会静默舍入，必须原样提交
    if value.scale() < fractional_digits(raw.trim()) {
        return Err(BinanceError::validation(
            field,
            format!("'{}' has more digits than can be represented exactly.", raw),
        ));
    }
    if value <= Decimal::ZERO {
        return Err(BinanceError::validation(
            field,
            format!("must be greater than 0, got '{}'.", raw),
        ));
    }
    Ok(value)
}

fn fractional_digits(raw: &str) -> u32 {
    raw.split_once('.').map_or(0, |(_, frac)| {
        frac.chars()
            .take_while(|c| c.is_ascii_digit() || *c == '_')
            .filter(char::is_ascii_digit)
            .count() as u32
    })
}
