pub mod apigw;
pub mod get;
pub mod list;
pub mod publish;

pub use apigw::ApiGatewayResponse;
