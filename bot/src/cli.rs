use clap::{Parser, builder::PossibleValuesParser};
use exchange::binance::futures::orders::OrderInput;
use log::LevelFilter;

pub const DEFAULT_CONFIG_PATH: &str = "conf/bot_conf.toml";

/// Binance Futures Testnet order placement CLI.
///
/// Examples:
///   trading_bot --symbol BTCUSDT --side BUY --type MARKET --quantity 0.001
///   trading_bot --symbol BTCUSDT --side SELL --type LIMIT --quantity 0.001 --price 100000
///   trading_bot --symbol BTCUSDT --side BUY --type STOP_MARKET --quantity 0.001 --stop-price 95000
#[derive(Parser, Debug, Clone)]
#[command(name = "trading_bot", version, verbatim_doc_comment)]
pub struct Cli {
    /// Trading pair symbol, e.g. BTCUSDT
    #[arg(long)]
    pub symbol: String,

    /// Order side: BUY or SELL
    #[arg(long)]
    pub side: String,

    /// Order type: MARKET, LIMIT, or STOP_MARKET
    #[arg(long = "type")]
    pub order_type: String,

    /// Order quantity (base asset), e.g. 0.001
    #[arg(long)]
    pub quantity: String,

    /// Limit price (required for LIMIT orders)
    #[arg(long)]
    pub price: Option<String>,

    /// Stop trigger price (required for STOP_MARKET orders)
    #[arg(long = "stop-price")]
    pub stop_price: Option<String>,

    /// Time in force for LIMIT orders: GTC, IOC, FOK or GTX (default: GTC)
    #[arg(long = "time-in-force")]
    pub time_in_force: Option<String>,

    /// Logging verbosity
    #[arg(
        long = "log-level",
        default_value = "INFO",
        ignore_case = true,
        value_parser = PossibleValuesParser::new(["DEBUG", "INFO", "WARNING", "ERROR"])
    )]
    pub log_level: String,

    /// Optional TOML configuration file; environment variables override it
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

impl Cli {
    pub fn order_input(&self) -> OrderInput {
        OrderInput {
            symbol: self.symbol.clone(),
            side: self.side.clone(),
            order_type: self.order_type.clone(),
            quantity: self.quantity.clone(),
            price: self.price.clone(),
            stop_price: self.stop_price.clone(),
            time_in_force: self.time_in_force.clone(),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_log_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_uppercase().as_str() {
        "DEBUG" => Some(LevelFilter::Debug),
        "INFO" => Some(LevelFilter::Info),
        "WARNING" | "WARN" => Some(LevelFilter::Warn),
        "ERROR" => Some(LevelFilter::Error),
        _ => None,
    }
}
