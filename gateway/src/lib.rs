pub mod args;
pub mod error;
pub mod index;
pub mod logger;
pub mod proxy;
pub mod route;
pub mod server;
