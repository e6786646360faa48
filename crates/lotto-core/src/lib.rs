#![deny(warnings)]
pub mod combo;
pub mod filter;
pub mod model;
pub mod session;
pub mod stats;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "lotto-filter"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
