mod health;
mod state;
mod status_check;

pub use health::{ApiInfo, HealthCheck, HealthStatus};
pub use state::AppState;
pub use status_check::{StatusCheck, StatusCheckCreate};
