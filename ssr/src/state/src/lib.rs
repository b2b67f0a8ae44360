pub mod app_state;
pub mod history;
pub mod referral_tree;
pub mod session;

#[cfg(feature = "ssr")]
pub mod server;
