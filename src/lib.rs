pub mod application;
pub mod auth;
pub mod dto;
pub mod repository;
pub mod service;
