//! HTTP request handlers for API endpoints.

pub mod advice;
pub mod geocode;
pub mod health;
pub mod mock;
pub mod proxy;

pub use advice::advice_handler;
pub use geocode::geocode_handler;
pub use health::health_handler;
pub use mock::mock_compatibility_handler;
pub use proxy::{
    chart_chat_handler, chart_handler, chart_insights_handler, compatibility_chat_handler,
    compatibility_handler, compatibility_insights_handler,
};
