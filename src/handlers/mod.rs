// handlers/mod.rs - route handlers
//
// Public API (no auth):
//   GET /api/greeting          → greeting::greeting
//   GET /api/health/liveness   → health::liveness
//   GET /api/stop              → stop::stop

pub mod fallback;
pub mod greeting;
pub mod health;
pub mod stop;

pub use fallback::{handle_panic, not_found};
pub use greeting::greeting;
pub use health::liveness;
pub use stop::stop;
