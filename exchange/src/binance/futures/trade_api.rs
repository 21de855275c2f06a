use crate::binance::{
    consts::{
        ACCOUNT_ENDPOINT, API_KEY_HEADER, DEFAULT_TIMEOUT_MILLI_SECS, EXCHANGE_INFO_ENDPOINT,
        ORDER_ENDPOINT, RESPONSE_LOG_LIMIT, SUCCESS_CODE, TEST_FUTURE_BASE_URL,
    },
    errors::{BinanceError, Result},
    futures::requests::PlaceOrderRequest,
    utils::{encode_params, sign_params, truncate_for_log},
};
use log::{error, info};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use std::{error::Error as StdError, time::Duration};
use time::LatencyGuard;

#[derive(Debug, Clone)]
pub struct FuturesApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub timeout_milli_secs: u64,
    pub recv_window: Option<u64>,
}

impl FuturesApiConfig {
    pub fn new(api_key: String, api_secret: String) -> Self {
        FuturesApiConfig {
            base_url: TEST_FUTURE_BASE_URL.to_string(),
            api_key,
            api_secret,
            timeout_milli_secs: DEFAULT_TIMEOUT_MILLI_SECS,
            recv_window: None,
        }
    }
}

/// USDⓈ-M futures REST client. One `reqwest::Client` is kept for the
/// lifetime of the value so the connection can be reused between calls.
pub struct FuturesTradeApi {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
    recv_window: Option<u64>,
}

impl FuturesTradeApi {
    pub fn new(config: FuturesApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|e| BinanceError::ClientError {
                message: format!("api key is not a valid header value: {}", e),
            })?;
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_milli_secs))
            .build()
            .map_err(|e| BinanceError::ClientError {
                message: format!("failed to build http client: {}", e),
            })?;

        Ok(FuturesTradeApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            secret_key: config.api_secret,
            recv_window: config.recv_window,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_exchange_info(&self) -> Result<Value> {
        self.send_request(reqwest::Method::GET, EXCHANGE_INFO_ENDPOINT, vec![], false)
            .await
    }

    pub async fn get_account(&self) -> Result<Value> {
        self.send_request(reqwest::Method::GET, ACCOUNT_ENDPOINT, vec![], true)
            .await
    }

    pub async fn place_order(&self, req: &PlaceOrderRequest) -> Result<Value> {
        self.send_request(reqwest::Method::POST, ORDER_ENDPOINT, req.params(), true)
            .await
    }

    async fn send_request(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        mut params: Vec<(&str, String)>,
        signed: bool,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        // 签名前追加时间戳，签名串即发送串
        let payload = if signed {
            params.push(("timestamp", time::get_current_milli_timestamp().to_string()));
            if let Some(recv_window) = self.recv_window {
                params.push(("recvWindow", recv_window.to_string()));
            }
            sign_params(&self.secret_key, &params)?.body()
        } else {
            encode_params(&params)
        };

        info!("{} {} | params: {:?}", method, url, params);

        let _latency = LatencyGuard::new(format!("{} {}", method, endpoint));
        let builder = if method == reqwest::Method::GET {
            let full_url = if payload.is_empty() {
                url
            } else {
                format!("{}?{}", url, payload)
            };
            self.client.get(full_url)
        } else if method == reqwest::Method::POST {
            self.client.post(url).body(payload)
        } else {
            return Err(BinanceError::ClientError {
                message: format!("unsupported http method: {}", method),
            });
        };

        let resp = builder.send().await.map_err(classify_transport_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(classify_transport_error)?;

        handle_response(status, &text)
    }
}

pub(crate) fn handle_response(status: reqwest::StatusCode, text: &str) -> Result<Value> {
    info!(
        "Response {}: {}",
        status.as_u16(),
        truncate_for_log(text, RESPONSE_LOG_LIMIT)
    );

    let data: Value = match serde_json::from_str(text) {
        Ok(data) => data,
        Err(_) if !status.is_success() => {
            error!("Response error: status: {}, text: {}", status, text);
            return Err(BinanceError::HttpStatusError {
                status: status.as_u16(),
                body: text.to_string(),
            });
        }
        Err(_) => return Ok(Value::Object(Map::new())),
    };

    if let Some(code) = data.as_object().and_then(|obj| obj.get("code")) {
        if code.as_i64() != Some(SUCCESS_CODE) {
            let msg = data
                .get("msg")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            let code = code
                .as_i64()
                .or_else(|| code.as_str().and_then(|s| s.parse().ok()))
                .unwrap_or_default();
            error!("Binance API error {}: {}", code, msg);
            return Err(BinanceError::ApiError { code, msg });
        }
    }

    if !status.is_success() {
        error!("Response error: status: {}, text: {}", status, text);
        return Err(BinanceError::ApiError {
            code: i64::from(status.as_u16()),
            msg: data.to_string(),
        });
    }

    Ok(data)
}

/// Splits reqwest failures into TLS, timeout and connection errors.
pub(crate) fn classify_transport_error(e: reqwest::Error) -> BinanceError {
    let message = error_chain(&e);
    if is_tls_failure(&e) {
        error!("SSL error: {}", message);
        BinanceError::TlsError { message }
    } else if e.is_timeout() {
        error!("Request timed out: {}", message);
        BinanceError::TimeoutError { message }
    } else {
        error!("Network error: {}", message);
        BinanceError::ConnectionError { message }
    }
}

// tokio-rustls 把握手失败（证书、非 TLS 对端等）包装成
// InvalidData 的 io::Error
fn is_tls_failure(e: &reqwest::Error) -> bool {
    if !e.is_connect() {
        return false;
    }
    let mut source = e.source();
    while let Some(err) = source {
        if err
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::InvalidData)
        {
            return true;
        }
        source = err.source();
    }
    false
}

fn error_chain(e: &reqwest::Error) -> String {
    let mut parts = vec![e.to_string()];
    let mut source = e.source();
    while let Some(err) = source {
        parts.push(err.to_string());
        source = err.source();
    }
    parts.join(": ")
}
