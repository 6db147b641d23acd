use anyhow::{Context, Result};
use std::env;

/// 微信测试号配置，全部来自环境变量
#[derive(Debug, Clone)]
pub struct WechatConfig {
    pub appid: String,
    pub appsecret: String,
    pub openid: String,
    pub template_id: String,
}

impl WechatConfig {
    /// 读取四个必需的环境变量，缺失时报错并指出变量名，
    /// 不把空值拼进请求让微信侧报错
    pub fn from_env() -> Result<Self> {
        Ok(WechatConfig {
            appid: require("WECHAT_APPID")?,
            appsecret: require("WECHAT_APPSECRET")?,
            openid: require("WECHAT_OPENID")?,
            template_id: require("WECHAT_TEMPLATE_ID")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("缺少环境变量 {name}"))
}
