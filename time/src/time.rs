use chrono::Utc;

// 毫秒级 unix 时间戳，签名请求的 timestamp 参数
pub fn get_current_milli_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
