pub mod schedule;
pub mod wechat;
