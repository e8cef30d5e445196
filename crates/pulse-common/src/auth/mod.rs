//! External platform identity and access checks

mod platform;

pub use platform::PlatformAccessClient;
