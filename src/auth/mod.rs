mod credentials_provider;
mod static_credentials_provider;

pub use credentials_provider::*;
pub use static_credentials_provider::*;
