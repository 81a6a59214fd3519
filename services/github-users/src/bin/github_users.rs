/// GitHub Users API中継Lambda関数
///
/// `queryStringParameters.user_id`に応じてGitHub Users APIを呼び出し、
/// 本文をそのまま200で返す。
///
/// # 環境変数
/// - GITHUB_USERS_ENDPOINT: Users APIのベースURL（デフォルト: https://api.github.com/users）
/// - GITHUB_USER_AGENT: 上流に送るUser-Agent（デフォルト: github-users/<バージョン>）
/// - RUST_LOG: ログレベル（デフォルト: info）
///
/// # ローカル実行
/// AWS_LAMBDA_FUNCTION_NAMEが未設定の場合、サンプルイベントで1回だけ実行して
/// 応答エンベロープを標準出力に表示する。
/// ```bash
/// # skaasguruを取得
/// cargo run --bin github_users
///
/// # ユーザー指定
/// cargo run --bin github_users -- --user-id octocat
///
/// # ユーザー一覧（queryStringParameters: null）
/// cargo run --bin github_users -- --no-user
/// ```
use clap::Parser;
use github_users::application::UsersProxyHandler;
use github_users::domain::ResponseEnvelope;
use github_users::infrastructure::{
    init_logging, GitHubApiConfig, GitHubClientError, GitHubUsersClient,
};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};
use tokio::sync::OnceCell;
use tracing::{info, info_span, Instrument};

/// ローカル実行時のデフォルトユーザー
const SAMPLE_USER_ID: &str = "skaasguru";

/// コマンドライン引数（ローカル実行用）
#[derive(Parser, Debug)]
#[command(name = "github_users")]
#[command(about = "GitHub Users APIの中継をローカルで1回実行")]
struct CliArgs {
    /// 取得するユーザーID
    #[arg(long, short = 'u', default_value = SAMPLE_USER_ID)]
    user_id: String,

    /// queryStringParametersをnullにしてユーザー一覧を取得
    #[arg(long, conflicts_with = "user_id")]
    no_user: bool,
}

impl CliArgs {
    /// 引数からサンプルイベントを作成
    fn to_event(&self) -> Value {
        if self.no_user {
            json!({ "queryStringParameters": null })
        } else {
            json!({ "queryStringParameters": { "user_id": self.user_id } })
        }
    }
}

/// UsersProxyHandlerの静的インスタンス
///
/// Lambda warm start時にHTTPクライアントを再利用する。
static PROXY: OnceCell<UsersProxyHandler<GitHubUsersClient>> = OnceCell::const_new();

/// UsersProxyHandlerを取得（初期化されていなければ初期化）
async fn get_proxy() -> Result<&'static UsersProxyHandler<GitHubUsersClient>, GitHubClientError> {
    PROXY
        .get_or_try_init(|| async { build_proxy(&GitHubApiConfig::from_env()) })
        .await
}

fn build_proxy(config: &GitHubApiConfig) -> Result<UsersProxyHandler<GitHubUsersClient>, GitHubClientError> {
    info!(
        users_endpoint = config.users_endpoint(),
        user_agent = config.user_agent(),
        "GitHubUsersClientを初期化"
    );
    let client = GitHubUsersClient::new(config)?;
    Ok(UsersProxyHandler::new(client, config.users_endpoint()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    if std::env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        info!("Lambda関数として起動");
        lambda_runtime::run(service_fn(handler)).await?;
    } else {
        run_local(CliArgs::parse()).await?;
    }

    Ok(())
}

/// Lambda関数のメインハンドラー
async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let proxy = get_proxy().await?;
    handle_invocation(proxy, event).await
}

/// 1回の呼び出しを処理
///
/// 通信エラーはエンベロープに変換せず、呼び出しエラーとしてランタイムに返す。
async fn handle_invocation(
    proxy: &UsersProxyHandler<GitHubUsersClient>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);

    let envelope = proxy.handle(&event.payload).instrument(span).await?;
    Ok(envelope)
}

/// サンプルイベントで1回実行して結果を表示
async fn run_local(args: CliArgs) -> Result<(), Error> {
    info!(args = ?args, "ローカルスクリプトとして起動");

    let proxy = build_proxy(&GitHubApiConfig::from_env())?;
    let envelope = proxy.handle(&args.to_event()).await?;

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
