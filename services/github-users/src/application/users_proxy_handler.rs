/// GitHub Users API中継ハンドラー
///
/// 受信イベントから`user_id`を取り出して上流URLを組み立て、
/// 1回のGETの結果を固定のエンベロープに包んで返す。
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{InboundEvent, ResponseEnvelope, UpstreamUrl};
use crate::infrastructure::{GitHubClientError, UsersApi};

/// 中継ハンドラーのエラー型
///
/// 上流のHTTPステータスはエラーにならない。
/// トランスポート層の失敗のみがここに到達し、呼び出し元へ伝播する。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UsersProxyError {
    /// 上流APIへの通信に失敗
    #[error("上流APIへの通信に失敗: {0}")]
    Upstream(#[from] GitHubClientError),
}

/// GitHub Users API中継ハンドラー
pub struct UsersProxyHandler<U>
where
    U: UsersApi,
{
    /// 上流API
    api: U,
    /// Users APIのベースURL
    users_endpoint: String,
}

impl<U> UsersProxyHandler<U>
where
    U: UsersApi,
{
    /// 新しいハンドラーを作成
    pub fn new(api: U, users_endpoint: impl Into<String>) -> Self {
        Self {
            api,
            users_endpoint: users_endpoint.into(),
        }
    }

    /// 受信イベントから上流URLを決定
    pub fn resolve_url(&self, event: &InboundEvent) -> UpstreamUrl {
        UpstreamUrl::build(&self.users_endpoint, event.user_id())
    }

    /// イベントを処理して応答エンベロープを返す
    ///
    /// # 処理フロー
    /// 1. `queryStringParameters.user_id`を取得（なければベースURL）
    /// 2. 上流にGETを1回送信
    /// 3. 上流のステータスに関わらず200で本文をそのまま返す
    ///
    /// # 戻り値
    /// * `Ok(ResponseEnvelope)` - 上流が応答した（404や403も含む）
    /// * `Err(UsersProxyError)` - 通信自体に失敗
    pub async fn handle(&self, event: &Value) -> Result<ResponseEnvelope, UsersProxyError> {
        let inbound = InboundEvent::from_value(event);
        let url = self.resolve_url(&inbound);

        info!(user_id = ?inbound.user_id(), url = %url, "GitHub Users APIへ中継");

        let response = self.api.get(&url).await.map_err(|e| {
            error!(error = %e, url = %url, "GitHub Users APIへの中継に失敗");
            e
        })?;

        if response.is_success() {
            info!(status = response.status, "GitHub Users API応答");
        } else {
            // ステータスは変換せず本文のみ返す
            warn!(status = response.status, url = %url, "GitHub Users APIがエラーステータスを返却");
        }

        Ok(ResponseEnvelope::json(response.body))
    }
}
