use thiserror::Error;

/// 课表读取与匹配阶段的错误，全部直接致命，不重试
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("读取课表文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析课表 JSON 失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("课程时间格式错误 {value:?}: {source}")]
    TimeFormat {
        value: String,
        source: chrono::ParseError,
    },
}
