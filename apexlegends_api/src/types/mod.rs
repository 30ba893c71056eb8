mod endpoint;
pub use self::endpoint::Endpoint;

mod platform;
pub use self::platform::Platform;
