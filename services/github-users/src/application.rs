// アプリケーション層モジュール
pub mod users_proxy_handler;

// 再エクスポート
pub use users_proxy_handler::{UsersProxyError, UsersProxyHandler};
