//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod app_settings_repo;
pub mod booking_repo;
pub mod favorite_repo;
pub mod hotel_repo;
pub mod notification_repo;
pub mod role_repo;
pub mod room_repo;
pub mod session_repo;
pub mod stats_repo;
pub mod suite_repo;
pub mod user_repo;

pub use app_settings_repo::AppSettingsRepo;
pub use booking_repo::BookingRepo;
pub use favorite_repo::FavoriteRepo;
pub use hotel_repo::HotelRepo;
pub use notification_repo::NotificationRepo;
pub use role_repo::RoleRepo;
pub use room_repo::RoomRepo;
pub use session_repo::SessionRepo;
pub use stats_repo::StatsRepo;
pub use suite_repo::SuiteRepo;
pub use user_repo::UserRepo;
