use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 课表：星期标签（星期一～星期日）到当天课程列表的映射
pub type Timetable = HashMap<String, Vec<CourseEntry>>;

/// 课表中的一节课，字段与 schedule.json 完全对应
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CourseEntry {
    pub course: String,

    /// 上课时间，24 小时制 "HH:MM"
    #[serde(rename = "startTime")]
    pub start_time: String,

    /// 下课时间，24 小时制 "HH:MM"
    #[serde(rename = "endTime")]
    pub end_time: String,

    pub building: String,

    pub room: String,
}

/// 一次运行内的提醒决策：匹配到的课程和距开课的分钟数
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingCourse {
    pub course: CourseEntry,
    pub minutes_until_start: i64,
}
