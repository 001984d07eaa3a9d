pub mod bot;
pub mod config;
pub mod logging;
pub mod session;
pub mod status;
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;
