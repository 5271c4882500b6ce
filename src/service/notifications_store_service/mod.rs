mod notifications_store_service;
mod notifications_store_service_impl;

pub use notifications_store_service::*;
pub use notifications_store_service_impl::*;
