use thiserror::Error;

/// 微信接口调用的错误
#[derive(Debug, Error)]
pub enum WechatError {
    /// 网络层失败（连接、超时、响应体不是合法 JSON 等）
    #[error("请求微信接口失败: {0}")]
    Network(#[from] reqwest::Error),

    /// access_token 换取失败，保留原始响应体便于排查
    #[error("获取 access_token 失败: {body}")]
    TokenExchange { body: String },
}
