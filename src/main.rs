use anyhow::Result;
use std::path::Path;
use tracing::info;

use class_reminder::config::WechatConfig;
use class_reminder::core::schedule::{find_due_course, load_timetable};
use class_reminder::core::wechat::WechatClient;
use class_reminder::utils::time::{now_cst, weekday_label};

const SCHEDULE_FILE: &str = "schedule.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let now = now_cst();
    info!(now = %now.format("%Y-%m-%d %H:%M"), today = weekday_label(&now), "开始检查课表");

    let timetable = load_timetable(Path::new(SCHEDULE_FILE))?;
    let Some(upcoming) = find_due_course(&timetable, now)? else {
        info!("当前无需要提醒的课程");
        return Ok(());
    };
    info!(
        course = %upcoming.course.course,
        start = %upcoming.course.start_time,
        minutes = upcoming.minutes_until_start,
        "找到即将开始的课程"
    );

    // 配置只在确实要推送时才读取，没课的运行不需要凭证
    let config = WechatConfig::from_env()?;
    let client = WechatClient::new(config);
    let delivered = client
        .send_reminder(&upcoming.course, upcoming.minutes_until_start)
        .await?;
    if !delivered {
        // 推送被微信侧拒绝时以非零状态退出，调度方可与"无课可提醒"区分开
        std::process::exit(1);
    }
    Ok(())
}
