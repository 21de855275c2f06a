use rust_decimal::Decimal;

use crate::binance::futures::models::{OrderType, Side, TimeInForce};

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOrderRequest {
    pub symbol: String,
    pub side: Side,
    pub r#type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,      // LIMIT 必填；STOP_MARKET 可选，不发送
    pub stop_price: Option<Decimal>, // STOP_MARKET
    pub time_in_force: TimeInForce,  // LIMIT
}

impl PlaceOrderRequest {
    /// Wire parameters in transmission order, without timestamp or signature.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.r#type.as_str().to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        match self.r#type {
            OrderType::Limit => {
                if let Some(price) = self.price {
                    params.push(("price", price.to_string()));
                }
                params.push(("timeInForce", self.time_in_force.as_str().to_string()));
            }
            OrderType::StopMarket => {
                if let Some(stop_price) = self.stop_price {
                    params.push(("stopPrice", stop_price.to_string()));
                }
            }
            OrderType::Market => {}
        }
        params
    }
}
