use serde_json::Value;

pub const MISSING_FIELD: &str = "N/A";

/// Read-only view over the exchange's order payload.
///
/// The payload stays an opaque JSON mapping; only the fields the summary needs
/// are looked up, and any of them may be absent.
pub struct OrderResponse<'a> {
    raw: &'a Value,
}

impl<'a> OrderResponse<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn field(&self, key: &str) -> Option<String> {
        match self.raw.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn field_or_na(&self, key: &str) -> String {
        self.field(key).unwrap_or_else(|| MISSING_FIELD.to_string())
    }

    pub fn order_id(&self) -> String {
        self.field_or_na("orderId")
    }

    pub fn client_order_id(&self) -> String {
        self.field_or_na("clientOrderId")
    }

    pub fn status(&self) -> String {
        self.field_or_na("status")
    }

    pub fn executed_qty(&self) -> String {
        self.field_or_na("executedQty")
    }

    pub fn avg_price(&self) -> String {
        self.field_or_na("avgPrice")
    }

    pub fn cum_quote(&self) -> String {
        self.field_or_na("cumQuote")
    }
}
