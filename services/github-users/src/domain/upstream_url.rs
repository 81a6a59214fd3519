// GitHub Users APIの呼び出し先URL
//
// ベースURLにユーザーIDを連結するだけの値オブジェクト。
// ユーザーIDはエンコードも検証もせずにそのまま連結する。

use std::fmt;

/// GitHub Users APIのデフォルトエンドポイント
pub const GITHUB_USERS_ENDPOINT: &str = "https://api.github.com/users";

/// 上流APIのリクエストURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamUrl(String);

impl UpstreamUrl {
    /// ベースURLとユーザーIDからURLを構築
    ///
    /// # 引数
    /// * `base` - Users APIのベースURL（末尾の`/`は除去される）
    /// * `user_id` - ユーザーID。`None`の場合はベースURLのみ
    ///
    /// # 戻り値
    /// * `Some(id)` - `{base}/{id}`（`id`は無加工）
    /// * `None` - `{base}`
    pub fn build(base: &str, user_id: Option<&str>) -> Self {
        let base = base.trim_end_matches('/');
        match user_id {
            Some(id) => Self(format!("{}/{}", base, id)),
            None => Self(base.to_string()),
        }
    }

    /// デフォルトエンドポイントを使ってURLを構築
    pub fn for_user(user_id: Option<&str>) -> Self {
        Self::build(GITHUB_USERS_ENDPOINT, user_id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UpstreamUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UpstreamUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_user_id_returns_base_endpoint() {
        let url = UpstreamUrl::for_user(None);
        assert_eq!(url.as_str(), "https://api.github.com/users");
    }

    #[test]
    fn test_with_user_id_appends_path_segment() {
        let url = UpstreamUrl::for_user(Some("skaasguru"));
        assert_eq!(url.as_str(), "https://api.github.com/users/skaasguru");
    }

    /// ユーザーIDはURLエンコードされずにそのまま連結される
    #[test]
    fn test_user_id_is_inserted_verbatim() {
        let url = UpstreamUrl::for_user(Some("a b/c?d=é"));
        assert_eq!(url.as_str(), "https://api.github.com/users/a b/c?d=é");
    }

    /// 空文字のユーザーIDでも`/`は付与される
    #[test]
    fn test_empty_user_id_keeps_trailing_slash() {
        let url = UpstreamUrl::for_user(Some(""));
        assert_eq!(url.as_str(), "https://api.github.com/users/");
    }

    #[test]
    fn test_build_trims_trailing_slash_of_base() {
        let url = UpstreamUrl::build("http://127.0.0.1:8080/users/", Some("octocat"));
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/users/octocat");

        let url = UpstreamUrl::build("http://127.0.0.1:8080/users/", None);
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/users");
    }

    #[test]
    fn test_display_matches_as_str() {
        let url = UpstreamUrl::for_user(Some("octocat"));
        assert_eq!(url.to_string(), url.as_str());
    }
}
