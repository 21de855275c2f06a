// 合约测试链接：https://testnet.binancefuture.com/zh-CN/futures/BTCUSDT

pub const TEST_FUTURE_BASE_URL: &str = "https://testnet.binancefuture.com";

pub const EXCHANGE_INFO_ENDPOINT: &str = "/fapi/v1/exchangeInfo";
pub const ACCOUNT_ENDPOINT: &str = "/fapi/v2/account";
pub const ORDER_ENDPOINT: &str = "/fapi/v1/order";

// HeaderName 要求小写，服务端对大小写不敏感
pub const API_KEY_HEADER: &str = "x-mbx-apikey";

pub const DEFAULT_TIMEOUT_MILLI_SECS: u64 = 10_000;

// 日志中响应体的最大长度
pub const RESPONSE_LOG_LIMIT: usize = 500;

// 响应中 code 字段的成功值
pub const SUCCESS_CODE: i64 = 200;
