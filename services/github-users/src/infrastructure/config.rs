// GitHub API接続設定
//
// 上流エンドポイントとUser-Agentを環境変数から読み込む。
// どちらも任意で、未設定時はデフォルト値を使用する。

use crate::domain::GITHUB_USERS_ENDPOINT;

/// Users APIベースURLの環境変数名
pub const USERS_ENDPOINT_ENV: &str = "GITHUB_USERS_ENDPOINT";

/// User-Agentの環境変数名
pub const USER_AGENT_ENV: &str = "GITHUB_USER_AGENT";

/// デフォルトのUser-Agent
///
/// GitHub APIはUser-Agentのないリクエストを拒否する。
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GitHub API接続設定
///
/// # フィールド
/// - `users_endpoint`: Users APIのベースURL（末尾の`/`なし）
/// - `user_agent`: 上流に送るUser-Agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApiConfig {
    users_endpoint: String,
    user_agent: String,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self::new(GITHUB_USERS_ENDPOINT, DEFAULT_USER_AGENT)
    }
}

impl GitHubApiConfig {
    /// 新しい設定を作成
    ///
    /// # 引数
    /// - `users_endpoint`: Users APIのベースURL
    /// - `user_agent`: User-Agent
    pub fn new(users_endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        let users_endpoint = users_endpoint.into().trim_end_matches('/').to_string();
        Self {
            users_endpoint,
            user_agent: user_agent.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `GITHUB_USERS_ENDPOINT`: Users APIのベースURL（デフォルト: https://api.github.com/users）
    /// - `GITHUB_USER_AGENT`: User-Agent（デフォルト: github-users/<バージョン>）
    ///
    /// 空文字は未設定として扱う。
    pub fn from_env() -> Self {
        let users_endpoint =
            read_env(USERS_ENDPOINT_ENV).unwrap_or_else(|| GITHUB_USERS_ENDPOINT.to_string());
        let user_agent = read_env(USER_AGENT_ENV).unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Self::new(users_endpoint, user_agent)
    }

    /// Users APIのベースURLを取得
    pub fn users_endpoint(&self) -> &str {
        &self.users_endpoint
    }

    /// User-Agentを取得
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
