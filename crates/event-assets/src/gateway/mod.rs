//! Asset gateway implementation

mod http;

pub use http::HttpAssetGateway;
