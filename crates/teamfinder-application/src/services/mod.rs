//! Resource services: cached reads, invalidation after writes.

mod achievement_service;
mod application_service;
mod hackathon_service;
mod profile_service;
mod skill_service;

pub use achievement_service::AchievementService;
pub use application_service::ApplicationService;
pub use hackathon_service::HackathonService;
pub use profile_service::ProfileService;
pub use skill_service::SkillService;
