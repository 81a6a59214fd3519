/// 受信イベントの解析
///
/// API Gateway等から渡されるJSONイベントから`queryStringParameters`を取り出す。
/// 欠落・null・空オブジェクトのいずれもエラーにはせず、
/// ユーザーID未指定として扱う。
use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

/// クエリパラメータのキー名
pub const QUERY_STRING_PARAMETERS_KEY: &str = "queryStringParameters";

/// ユーザーIDのパラメータ名
pub const USER_ID_PARAM: &str = "user_id";

/// `queryStringParameters`の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParameters {
    /// キーが存在しない、またはnull
    Absent,
    /// 空のオブジェクト
    Empty,
    /// 1つ以上のパラメータを持つ
    Present(BTreeMap<String, String>),
}

/// 受信イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    query: QueryParameters,
}

impl InboundEvent {
    /// JSONイベントから解析する
    ///
    /// 失敗しない。想定外の型は警告ログを出したうえで無視する。
    /// - `queryStringParameters`がオブジェクト以外 → `Absent`
    /// - 値が文字列以外のパラメータ → 除外
    pub fn from_value(event: &Value) -> Self {
        let query = match event.get(QUERY_STRING_PARAMETERS_KEY) {
            None | Some(Value::Null) => QueryParameters::Absent,
            Some(Value::Object(map)) => {
                let params: BTreeMap<String, String> = map
                    .iter()
                    .filter_map(|(key, value)| match value.as_str() {
                        Some(s) => Some((key.clone(), s.to_string())),
                        None => {
                            warn!(param = %key, value = %value, "文字列以外のクエリパラメータを無視");
                            None
                        }
                    })
                    .collect();

                if map.is_empty() {
                    QueryParameters::Empty
                } else {
                    QueryParameters::Present(params)
                }
            }
            Some(other) => {
                warn!(value = %other, "queryStringParametersがオブジェクトではないため無視");
                QueryParameters::Absent
            }
        };

        Self { query }
    }

    pub fn query(&self) -> &QueryParameters {
        &self.query
    }

    /// `user_id`パラメータを取得
    pub fn user_id(&self) -> Option<&str> {
        match &self.query {
            QueryParameters::Present(params) => params.get(USER_ID_PARAM).map(String::as_str),
            QueryParameters::Absent | QueryParameters::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_query_parameters_is_absent() {
        let event = InboundEvent::from_value(&json!({}));
        assert_eq!(event.query(), &QueryParameters::Absent);
        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn test_null_query_parameters_is_absent() {
        let event = InboundEvent::from_value(&json!({ "queryStringParameters": null }));
        assert_eq!(event.query(), &QueryParameters::Absent);
        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn test_empty_query_parameters_is_empty() {
        let event = InboundEvent::from_value(&json!({ "queryStringParameters": {} }));
        assert_eq!(event.query(), &QueryParameters::Empty);
        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn test_user_id_is_extracted() {
        let event = InboundEvent::from_value(&json!({
            "queryStringParameters": { "user_id": "skaasguru" }
        }));
        assert_eq!(event.user_id(), Some("skaasguru"));
    }

    #[test]
    fn test_other_keys_without_user_id() {
        let event = InboundEvent::from_value(&json!({
            "queryStringParameters": { "other_key": "x" }
        }));
        assert!(matches!(event.query(), QueryParameters::Present(_)));
        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn test_empty_string_user_id_is_kept() {
        let event = InboundEvent::from_value(&json!({
            "queryStringParameters": { "user_id": "" }
        }));
        assert_eq!(event.user_id(), Some(""));
    }

    #[test]
    fn test_non_string_user_id_is_ignored() {
        let event = InboundEvent::from_value(&json!({
            "queryStringParameters": { "user_id": 42, "page": "2" }
        }));
        assert_eq!(event.user_id(), None);
        match event.query() {
            QueryParameters::Present(params) => {
                assert_eq!(params.len(), 1);
                assert_eq!(params.get("page").map(String::as_str), Some("2"));
            }
            other => panic!("Expected Present, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_query_parameters_is_absent() {
        let event = InboundEvent::from_value(&json!({ "queryStringParameters": "user_id=x" }));
        assert_eq!(event.query(), &QueryParameters::Absent);
    }

    /// API Gatewayプロキシイベントの他のフィールドは参照しない
    #[test]
    fn test_api_gateway_proxy_event() {
        let event = InboundEvent::from_value(&json!({
            "resource": "/users",
            "path": "/users",
            "httpMethod": "GET",
            "headers": { "Accept": "application/json" },
            "queryStringParameters": { "user_id": "octocat" },
            "pathParameters": null,
            "requestContext": { "requestId": "req-123", "stage": "prod" },
            "body": null,
            "isBase64Encoded": false
        }));
        assert_eq!(event.user_id(), Some("octocat"));
    }

    #[test]
    fn test_non_object_event_is_absent() {
        let event = InboundEvent::from_value(&json!("not an object"));
        assert_eq!(event.query(), &QueryParameters::Absent);
    }
}
