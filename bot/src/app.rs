use crate::{
    cli::Cli,
    config::BotConfig,
    errors::Result,
    logger::init_logging,
};
use exchange::binance::futures::{orders::place_order, trade_api::FuturesTradeApi};
use log::info;
use serde_json::Value;
use std::{io::Write, path::Path};

/// Loads configuration, sets up logging and places the order from `cli`.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Value> {
    let config = BotConfig::load(&cli.config)?;
    let handle = init_logging(cli.level_filter(), Path::new(&config.log_file))?;
    info!(
        "trading_bot starting, logging to {} at {}",
        handle.log_file.display(),
        handle.level
    );
    // 日志初始化之后再输出配置，密钥已在 Debug 中屏蔽
    info!("config loaded: {:?}", config);
    execute(cli, &config, out).await
}

pub async fn execute<W: Write>(cli: &Cli, config: &BotConfig, out: &mut W) -> Result<Value> {
    let api = FuturesTradeApi::new(config.api_config()?)?;
    let response = place_order(&api, &cli.order_input(), out).await?;
    Ok(response)
}
