// Lambdaの応答エンベロープ
//
// ステータスコードとヘッダーは固定値。
// 本文は上流APIのレスポンスをそのまま保持する。

use std::collections::BTreeMap;

use serde::Serialize;

/// 応答のステータスコード（上流の結果に関わらず常に200）
pub const RESPONSE_STATUS_CODE: u16 = 200;

/// Content-typeヘッダー名
pub const CONTENT_TYPE_HEADER: &str = "Content-type";

/// Content-typeヘッダー値
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 応答エンベロープ
///
/// JSONでは`statusCode`、`headers`、`body`の3キーとしてシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    status_code: u16,
    headers: BTreeMap<String, String>,
    body: String,
}

impl ResponseEnvelope {
    /// 上流の本文を包んだエンベロープを作成
    pub fn json(body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());

        Self {
            status_code: RESPONSE_STATUS_CODE,
            headers,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}
