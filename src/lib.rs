//! Browser frontend for the Trancendos financial dashboard.
//!
//! A client-side-rendered Yew app that talks to the `/api` backend:
//! login, balance overview, internal cost approval, customer-service
//! catalog and spend history. The backend owns all business rules; this
//! crate fetches JSON, renders it and posts intents back.

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod store;
