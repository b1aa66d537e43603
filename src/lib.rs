//! quotebook - a server-rendered quotes catalogue backed by PostgreSQL
//!
//! Authors and their quotes live in two pre-provisioned tables. Each HTTP
//! route runs one parameterized statement through a [`store::QuoteStore`]
//! and answers with a page, a fragment, JSON or a redirect.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
pub mod view;
