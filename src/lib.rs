pub mod config;
pub mod console_interface;
pub mod core;
pub mod models;
pub mod session;
#[cfg(test)]
mod test;
