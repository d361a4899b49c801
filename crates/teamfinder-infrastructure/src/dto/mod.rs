//! Wire DTOs (snake_case, as the backend speaks) and their mapping onto
//! the domain models.

mod achievement;
mod application;
mod auth;
mod hackathon;
mod page;
mod user;

pub use achievement::{AchievementCreateDto, AchievementDto, AchievementPatchDto};
pub use application::ApplicationDto;
pub use auth::{AuthResponseDto, TelegramInitDto};
pub use hackathon::{HackathonDto, parse_backend_datetime};
pub use page::PageDto;
pub use user::{SkillDto, UserDto, UserPatchDto};
