#![forbid(unsafe_code)]

pub mod metrics;
pub mod model;
pub mod seed;
pub mod time;

pub use metrics::MonthStatus;
pub use time::Clock;
