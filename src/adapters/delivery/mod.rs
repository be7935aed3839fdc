//! Submission gateway adapters. Deliver contact messages.

pub mod http_relay;
pub mod mock_gateway;

pub use http_relay::HttpRelayGateway;
pub use mock_gateway::MockSubmissionGateway;
