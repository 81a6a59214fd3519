// GitHubUsersClient - GitHub Users API用HTTPクライアント
//
// 1回のGETで上流のレスポンス本文をそのまま取得する。
// ステータスコードの解釈、再試行、タイムアウトは行わない。

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, instrument};

use super::config::GitHubApiConfig;
use crate::domain::UpstreamUrl;

/// GitHubUsersClient用エラー型
///
/// いずれもトランスポート層の失敗で、上流のHTTPステータスはエラーにならない。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GitHubClientError {
    /// HTTPクライアントの構築に失敗
    #[error("HTTPクライアントの構築に失敗: {0}")]
    ClientBuild(String),

    /// リクエスト送信に失敗（DNS、接続、TLS等）
    #[error("リクエスト失敗: url={url}, message={message}")]
    Request {
        /// リクエスト先URL
        url: String,
        /// エラーメッセージ
        message: String,
    },

    /// レスポンス本文の読み取りに失敗
    #[error("レスポンス本文の読み取りに失敗: url={url}, message={message}")]
    Body {
        /// リクエスト先URL
        url: String,
        /// エラーメッセージ
        message: String,
    },
}

/// 上流APIのレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// HTTPステータスコード（ログ用、応答には反映しない）
    pub status: u16,
    /// レスポンス本文（無加工）
    pub body: String,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GitHub Users API呼び出し用トレイト
///
/// 実際のHTTPクライアントとテスト用モックを差し替えられるようにする。
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// 指定URLにGETを1回送信し、本文をそのまま返す
    ///
    /// # 戻り値
    /// * `Ok(UpstreamResponse)` - 上流が応答した（ステータスは問わない）
    /// * `Err(GitHubClientError)` - トランスポート層の失敗
    async fn get(&self, url: &UpstreamUrl) -> Result<UpstreamResponse, GitHubClientError>;
}

/// reqwestによるUsersApi実装
#[derive(Clone)]
pub struct GitHubUsersClient {
    client: Client,
}

impl std::fmt::Debug for GitHubUsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubUsersClient").finish_non_exhaustive()
    }
}

impl GitHubUsersClient {
    /// 設定からクライアントを作成
    ///
    /// タイムアウトは設定しない（Lambdaの実行時間制限に任せる）。
    pub fn new(config: &GitHubApiConfig) -> Result<Self, GitHubClientError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| GitHubClientError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UsersApi for GitHubUsersClient {
    #[instrument(skip_all, fields(url = %url))]
    async fn get(&self, url: &UpstreamUrl) -> Result<UpstreamResponse, GitHubClientError> {
        debug!("GitHub APIへリクエスト送信");

        let response = self.client.get(url.as_str()).send().await.map_err(|e| {
            error!(error = %e, "GitHub APIへのリクエストに失敗");
            GitHubClientError::Request {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            error!(error = %e, status, "GitHub APIレスポンス本文の読み取りに失敗");
            GitHubClientError::Body {
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        debug!(status, body_len = body.len(), "GitHub APIレスポンス受信");

        Ok(UpstreamResponse { status, body })
    }
}
