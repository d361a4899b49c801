//! Infrastructure layer of the Teamfinder client: filesystem paths, local
//! storage, configuration loading, launch-environment capture and wire DTOs.

pub mod config_service;
pub mod dto;
pub mod launch_env;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::launch_env::{capture_launch_environment, capture_launch_environment_with};
pub use crate::storage::{FileLocalStorage, MemoryLocalStorage};
