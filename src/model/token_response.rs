use serde::{Deserialize, Serialize};

/// access_token 接口的响应体
///
/// 成功时带 access_token，失败时带 errcode/errmsg，两种形态共用一个结构
#[derive(Serialize, Deserialize, Debug)]
pub struct AccessTokenResponse {
    #[serde(rename = "access_token")]
    pub access_token: Option<String>,

    #[serde(rename = "expires_in")]
    pub expires_in: Option<i64>,

    #[serde(rename = "errcode")]
    pub errcode: Option<i64>,

    #[serde(rename = "errmsg")]
    pub errmsg: Option<String>,
}
