//! Ports - repository and gateway traits implemented by infrastructure

mod gateway;
mod repositories;

pub use gateway::{AssetGateway, UploadedAsset};
pub use repositories::{EventRepository, RepoResult, UserRepository};
