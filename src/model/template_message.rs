use serde::{Deserialize, Serialize};

/// 模板消息请求体
#[derive(Serialize, Deserialize, Debug)]
pub struct TemplateMessage {
    pub touser: String,

    #[serde(rename = "template_id")]
    pub template_id: String,

    pub data: TemplateData,
}

/// 模板中的四个展示字段
#[derive(Serialize, Deserialize, Debug)]
pub struct TemplateData {
    pub course: TemplateField,
    pub time: TemplateField,
    pub location: TemplateField,
    pub reminder: TemplateField,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TemplateField {
    pub value: String,
    pub color: String,
}

impl TemplateField {
    pub fn new(value: impl Into<String>, color: &str) -> Self {
        TemplateField {
            value: value.into(),
            color: color.to_string(),
        }
    }
}

/// 模板消息发送接口的响应体，errcode == 0 表示成功
#[derive(Serialize, Deserialize, Debug)]
pub struct SendResponse {
    #[serde(default)]
    pub errcode: i64,

    #[serde(default)]
    pub errmsg: String,
}
