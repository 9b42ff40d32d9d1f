//! # Event Assets
//!
//! Outbound HTTP client for binary asset storage. Implements the
//! `AssetGateway` port from `event-core` against a Cloudinary-style
//! upload endpoint: images go out as multipart form data, the gateway
//! answers with the public URL the stored asset is served from.

pub mod gateway;

pub use gateway::HttpAssetGateway;
