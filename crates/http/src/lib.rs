//! HTTP client for the portfolio backend API

pub mod client;

pub use client::{
    error::ClientError,
    interceptor::{ResponseInterceptor, SessionInterceptor},
    ApiClient, ApiClientBuilder,
};
