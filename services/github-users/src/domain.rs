// Domain layer modules
pub mod inbound_event;
pub mod response_envelope;
pub mod upstream_url;

// Re-exports
pub use inbound_event::{InboundEvent, QueryParameters, USER_ID_PARAM};
pub use response_envelope::{ResponseEnvelope, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON, RESPONSE_STATUS_CODE};
pub use upstream_url::{UpstreamUrl, GITHUB_USERS_ENDPOINT};
