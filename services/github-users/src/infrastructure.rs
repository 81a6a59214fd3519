// Infrastructure layer modules
pub mod config;
pub mod github_client;
pub mod logging;

// Re-exports
pub use config::{GitHubApiConfig, DEFAULT_USER_AGENT, USERS_ENDPOINT_ENV, USER_AGENT_ENV};
pub use github_client::{GitHubClientError, GitHubUsersClient, UpstreamResponse, UsersApi};
pub use logging::init_logging;
