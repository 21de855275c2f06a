use crate::cli::Cli;
use crate::config::BotConfig;
use crate::errors::{
    BotError, EXIT_API, EXIT_CONFIG, EXIT_NETWORK, EXIT_UNEXPECTED, EXIT_VALIDATION, exit_code,
    user_message,
};
use crate::execute;
use clap::Parser;
use exchange::binance::errors::BinanceError;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(base_url: &str, with_credentials: bool) -> BotConfig {
    let mut env = HashMap::new();
    env.insert("BINANCE_BASE_URL".to_string(), base_url.to_string());
    env.insert("BINANCE_TIMEOUT_MILLI_SECS".to_string(), "2000".to_string());
    if with_credentials {
        env.insert("BINANCE_API_KEY".to_string(), "key".to_string());
        env.insert("BINANCE_API_SECRET".to_string(), "secret".to_string());
    }
    BotConfig::load_with_env("does/not/exist.toml", Some(env)).unwrap()
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("trading_bot").chain(args.iter().copied())).unwrap()
}

#[tokio::test]
async fn test_execute_limit_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(body_string_contains("price=100000&timeInForce=GTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": 7,
            "status": "NEW",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cli = cli(&[
        "--symbol", "btcusdt", "--side", "sell", "--type", "limit", "--quantity", "0.001",
        "--price", "100000",
    ]);
    let mut out = Vec::new();
    let response = execute(&cli, &config_for(&server.uri(), true), &mut out)
        .await
        .unwrap();
    assert_eq!(response["orderId"], 7);
    assert!(String::from_utf8(out).unwrap().contains("Side       : SELL"));
}

#[tokio::test]
async fn test_execute_without_credentials_is_config_error() {
    let cli = cli(&["--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "1"]);
    let mut out = Vec::new();
    let err = execute(&cli, &config_for("http://127.0.0.1:9", false), &mut out)
        .await
        .unwrap_err();
    assert_eq!(exit_code(&err), EXIT_CONFIG);
    assert!(user_message(&err).contains("BINANCE_API_KEY"));
}

#[tokio::test]
async fn test_execute_validation_error_exit_code() {
    let cli = cli(&["--symbol", "BTCUSDT", "--side", "BUY", "--type", "MARKET", "--quantity", "0"]);
    let mut out = Vec::new();
    let err = execute(&cli, &config_for("http://127.0.0.1:9", true), &mut out)
        .await
        .unwrap_err();
    assert_eq!(exit_code(&err), EXIT_VALIDATION);
    assert!(user_message(&err).starts_with("Validation error"));
}

#[test]
fn test_exit_codes() {
    let api: BotError = BinanceError::ApiError {
        code: -1121,
        msg: "Invalid symbol.".to_string(),
    }
    .into();
    assert_eq!(exit_code(&api), EXIT_API);
    assert_eq!(user_message(&api), "Binance API error [-1121]: Invalid symbol.");

    for err in [
        BinanceError::TlsError { message: "bad cert".to_string() },
        BinanceError::ConnectionError { message: "refused".to_string() },
        BinanceError::TimeoutError { message: "slow".to_string() },
        BinanceError::HttpStatusError { status: 502, body: String::new() },
    ] {
        let err: BotError = err.into();
        assert_eq!(exit_code(&err), EXIT_NETWORK);
        assert!(user_message(&err).starts_with("Network error"));
    }

    let client: BotError = BinanceError::ClientError { message: "boom".to_string() }.into();
    assert_eq!(exit_code(&client), EXIT_UNEXPECTED);
    let logging = BotError::LoggingError { message: "read-only".to_string() };
    assert_eq!(exit_code(&logging), EXIT_UNEXPECTED);
    assert!(user_message(&logging).starts_with("Unexpected error"));
}
