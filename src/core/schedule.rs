use chrono::{DateTime, FixedOffset, NaiveTime};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::schedule::ScheduleError;
use crate::model::schedule::{Timetable, UpcomingCourse};
use crate::utils::time::weekday_label;

/// 提醒窗口上限（分钟）：开课前 (0, 60] 分钟内的课才提醒
const LEAD_TIME_WINDOW_MINUTES: i64 = 60;

/// 读取课表文件，文件缺失或格式错误直接报错，不重试、不兜底
pub fn load_timetable(path: &Path) -> Result<Timetable, ScheduleError> {
    let text = fs::read_to_string(path)?;
    parse_timetable(&text)
}

pub fn parse_timetable(text: &str) -> Result<Timetable, ScheduleError> {
    Ok(serde_json::from_str(text)?)
}

/// 在今天的课程里按文件顺序找第一节落在提醒窗口内的课
///
/// 每次运行最多提醒一节课：若多节课同时落在窗口内（例如连堂），只有文件中
/// 排在前面的那节会被提醒，课表文件按时间顺序书写即可保证连堂只提醒第一节。
pub fn find_due_course(
    timetable: &Timetable,
    now: DateTime<FixedOffset>,
) -> Result<Option<UpcomingCourse>, ScheduleError> {
    let today = weekday_label(&now);
    let Some(entries) = timetable.get(today) else {
        return Ok(None);
    };

    for entry in entries {
        let start = parse_wall_clock(&entry.start_time)?;
        // 开课时间按当天的钟面时间处理，已开始或恰好开始的课不再提醒
        let seconds_until_start = start.signed_duration_since(now.time()).num_seconds();
        debug!(course = %entry.course, start = %entry.start_time, seconds_until_start);
        if seconds_until_start > 0 && seconds_until_start <= LEAD_TIME_WINDOW_MINUTES * 60 {
            return Ok(Some(UpcomingCourse {
                course: entry.clone(),
                minutes_until_start: seconds_until_start / 60,
            }));
        }
    }
    Ok(None)
}

fn parse_wall_clock(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|source| ScheduleError::TimeFormat {
        value: value.to_string(),
        source,
    })
}
