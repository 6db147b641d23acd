use chrono::{DateTime, Datelike, FixedOffset, Utc};

/// 北京时间固定为 UTC+8，不依赖系统时区数据库
const BEIJING_OFFSET_SECS: i32 = 8 * 3600;

/// 中文星期标签，周一为 0
pub const WEEKDAY_LABELS: [&str; 7] = [
    "星期一",
    "星期二",
    "星期三",
    "星期四",
    "星期五",
    "星期六",
    "星期日",
];

/// 当前北京时间
pub fn now_cst() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(BEIJING_OFFSET_SECS).unwrap();
    Utc::now().with_timezone(&offset)
}

/// 给定时间对应的中文星期标签
pub fn weekday_label(datetime: &DateTime<FixedOffset>) -> &'static str {
    WEEKDAY_LABELS[datetime.weekday().num_days_from_monday() as usize]
}
