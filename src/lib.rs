//! # Zenlink
//!
//! Zenlink is a thin client for the Zendesk REST API, built for one
//! integration: linking store accounts to support tickets.
//!
//! It authenticates, issues a handful of HTTP requests, validates status
//! codes, and reshapes JSON responses into flat records. Nothing more:
//! no retries, no caching, no persistence.
//!
//! ## Features
//!
//! - **Users**: look up the Zendesk user for a store by external ID,
//!   creating it on first contact
//! - **Tickets**: list a user's requested tickets, create tickets with
//!   custom fields and an optional file attachment
//! - **Uploads**: stage file content and attach it to a new ticket
//! - **Flattening**: project the integration's fixed custom fields into
//!   named attributes for easy downstream consumption
//! - **Sandbox mode**: substitute a placeholder store identity so tests
//!   can run against the live service without touching real customers
//! - **Security**: the API token is never logged or exposed in error
//!   messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Programmatic configuration and credential validation
//! - [`error`] - Error types with security-conscious message sanitization
//! - [`zendesk_client`] - HTTP client for the Zendesk API
//! - [`models`] - Data models for Zendesk responses and the flat projection
//!
//! ## Example
//!
//! ```ignore
//! use zenlink::config::Config;
//! use zenlink::zendesk_client::ZendeskClient;
//!
//! async fn example() -> Result<(), zenlink::error::ZenlinkError> {
//!     let config = Config::new("acme", "agent@example.com", "api-token")?;
//!     let client = ZendeskClient::new(&config)?;
//!
//!     let user = client.get_or_create_user("store-7", "Acme Grocery").await?;
//!     let tickets = client.get_tickets(user.id).await?;
//!
//!     for record in client.flatten_ticket_custom_fields(&tickets) {
//!         println!("#{}: {:?} ({:?})", record.id, record.subject, record.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Attaching files
//!
//! Uploads are staged server-side under a token, then consumed by ticket
//! creation:
//!
//! ```ignore
//! let upload = client.upload_file("crash.log", bytes, None).await?;
//! let ticket = client
//!     .create_ticket(user.id, "Crash", "See attached log", &fields, Some(&upload.token))
//!     .await?;
//! ```
//!
//! ## Error model
//!
//! Every remote failure surfaces as
//! [`UnexpectedStatus`](error::ZenlinkError::UnexpectedStatus) carrying the
//! actual status code and response body. There is no local recovery; every
//! failure propagates immediately to the caller.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod zendesk_client;

pub use config::Config;
pub use error::ZenlinkError;
pub use zendesk_client::ZendeskClient;
