use reqwest::Client;
use tracing::{error, info};
use url::Url;

use crate::config::WechatConfig;
use crate::error::wechat::WechatError;
use crate::model::schedule::CourseEntry;
use crate::model::template_message::{
    SendResponse, TemplateData, TemplateField, TemplateMessage,
};
use crate::model::token_response::AccessTokenResponse;

const TOKEN_URL: &str = "https://api.weixin.qq.com/cgi-bin/token";
const PUSH_URL: &str = "https://api.weixin.qq.com/cgi-bin/message/template/send";

/// 展示字段的常规颜色
const NORMAL_COLOR: &str = "#173177";
/// 开课前 30 分钟以内倒计时字段换用的醒目颜色
const URGENT_COLOR: &str = "#FF0000";

/// 倒计时文案切换催促语气的阈值（分钟）
const URGENT_THRESHOLD_MINUTES: i64 = 30;

pub struct WechatClient {
    client: Client,
    config: WechatConfig,
}

impl WechatClient {
    pub fn new(config: WechatConfig) -> Self {
        WechatClient {
            client: Client::new(),
            config,
        }
    }

    /// 用 appid/appsecret 换取接口调用凭证
    ///
    /// 每次运行重新获取，不做缓存；响应里没有 access_token 就带着原始
    /// 响应体直接报错，单次尝试，不重试
    pub async fn get_access_token(&self) -> Result<String, WechatError> {
        let mut url = Url::parse(TOKEN_URL).unwrap();
        url.query_pairs_mut()
            .append_pair("grant_type", "client_credential")
            .append_pair("appid", &self.config.appid)
            .append_pair("secret", &self.config.appsecret);

        let response = self.client.get(url).send().await?;
        let body = response.text().await?;

        match serde_json::from_str::<AccessTokenResponse>(&body) {
            Ok(AccessTokenResponse {
                access_token: Some(token),
                ..
            }) => Ok(token),
            _ => Err(WechatError::TokenExchange { body }),
        }
    }

    /// 发送上课提醒模板消息
    ///
    /// 返回 Ok(true)/Ok(false) 对应微信侧确认成功/拒绝，拒绝只记日志不报错；
    /// 网络失败和凭证换取失败照常作为错误向上传播
    pub async fn send_reminder(
        &self,
        course: &CourseEntry,
        minutes_until_start: i64,
    ) -> Result<bool, WechatError> {
        let access_token = self.get_access_token().await?;
        let message = build_reminder_message(&self.config, course, minutes_until_start);

        let url = format!("{PUSH_URL}?access_token={access_token}");
        let response = self.client.post(&url).json(&message).send().await?;
        let result: SendResponse = response.json().await?;

        if result.errcode == 0 {
            info!(course = %course.course, "推送成功");
            Ok(true)
        } else {
            error!(errcode = result.errcode, errmsg = %result.errmsg, "推送失败");
            Ok(false)
        }
    }
}

/// 组装模板消息的四个展示字段
pub fn build_reminder_message(
    config: &WechatConfig,
    course: &CourseEntry,
    minutes_until_start: i64,
) -> TemplateMessage {
    let (reminder, reminder_color) = countdown_text(minutes_until_start);
    TemplateMessage {
        touser: config.openid.clone(),
        template_id: config.template_id.clone(),
        data: TemplateData {
            course: TemplateField::new(&course.course, NORMAL_COLOR),
            time: TemplateField::new(
                format!("{}-{}", course.start_time, course.end_time),
                NORMAL_COLOR,
            ),
            location: TemplateField::new(
                format!("{}{}", course.building, course.room),
                NORMAL_COLOR,
            ),
            reminder: TemplateField::new(reminder, reminder_color),
        },
    }
}

/// 倒计时文案：30 分钟及以上平述，不足 30 分钟催促并换成醒目颜色
pub fn countdown_text(minutes_until_start: i64) -> (String, &'static str) {
    if minutes_until_start < URGENT_THRESHOLD_MINUTES {
        (
            format!("还有{minutes_until_start}分钟上课，抓紧去上课！"),
            URGENT_COLOR,
        )
    } else {
        (
            format!("距离上课还有{minutes_until_start}分钟"),
            NORMAL_COLOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WechatConfig {
        WechatConfig {
            appid: "wx0123456789".to_string(),
            appsecret: "secret".to_string(),
            openid: "oABCD1234".to_string(),
            template_id: "TPL_0001".to_string(),
        }
    }

    fn course() -> CourseEntry {
        CourseEntry {
            course: "高等数学".to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:40".to_string(),
            building: "文正楼".to_string(),
            room: "302".to_string(),
        }
    }

    #[test]
    fn thirty_minutes_keeps_plain_phrasing() {
        let (text, color) = countdown_text(30);
        assert_eq!(text, "距离上课还有30分钟");
        assert_eq!(color, NORMAL_COLOR);
    }

    #[test]
    fn twenty_nine_minutes_switches_to_urgent() {
        let (text, color) = countdown_text(29);
        assert_eq!(text, "还有29分钟上课，抓紧去上课！");
        assert_eq!(color, URGENT_COLOR);
    }

    #[test]
    fn message_carries_time_range_and_concatenated_location() {
        let message = build_reminder_message(&config(), &course(), 45);
        assert_eq!(message.touser, "oABCD1234");
        assert_eq!(message.template_id, "TPL_0001");
        assert_eq!(message.data.course.value, "高等数学");
        assert_eq!(message.data.time.value, "08:00-09:40");
        assert_eq!(message.data.location.value, "文正楼302");
        assert_eq!(message.data.reminder.value, "距离上课还有45分钟");
    }

    #[test]
    fn message_serializes_with_vendor_field_names() {
        let message = build_reminder_message(&config(), &course(), 20);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["touser"], "oABCD1234");
        assert_eq!(json["template_id"], "TPL_0001");
        assert_eq!(json["data"]["reminder"]["color"], "#FF0000");
        assert_eq!(json["data"]["location"]["value"], "文正楼302");
    }

    #[test]
    fn token_response_decodes_both_shapes() {
        let ok: AccessTokenResponse =
            serde_json::from_str(r#"{"access_token": "ACCESS", "expires_in": 7200}"#).unwrap();
        assert_eq!(ok.access_token.as_deref(), Some("ACCESS"));

        let err: AccessTokenResponse =
            serde_json::from_str(r#"{"errcode": 40013, "errmsg": "invalid appid"}"#).unwrap();
        assert_eq!(err.access_token, None);
        assert_eq!(err.errcode, Some(40013));
    }

    #[test]
    fn send_response_decodes_vendor_ack() {
        let ok: SendResponse =
            serde_json::from_str(r#"{"errcode": 0, "errmsg": "ok", "msgid": 200228332}"#).unwrap();
        assert_eq!(ok.errcode, 0);

        let rejected: SendResponse =
            serde_json::from_str(r#"{"errcode": 43004, "errmsg": "require subscribe"}"#).unwrap();
        assert_eq!(rejected.errcode, 43004);
        assert_eq!(rejected.errmsg, "require subscribe");
    }
}
