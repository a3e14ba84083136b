pub mod app;
pub mod duration;

pub use app::AppConfig;
pub use duration::parse_duration;
