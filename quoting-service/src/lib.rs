//! Quoting Service - Product matching and price reconciliation for quotations and orders.

pub mod config;
pub mod models;
pub mod services;
