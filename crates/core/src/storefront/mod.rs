//! Storefront module - one-call pricing and imagery for a cart line.

mod storefront_service;

pub use storefront_service::{LineQuote, Storefront};
