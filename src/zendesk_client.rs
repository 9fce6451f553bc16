//! HTTP client for the Zendesk API.
//!
//! This module provides the `ZendeskClient` struct for making authenticated
//! requests to the Zendesk REST API on behalf of the store-ticket
//! integration.
//!
//! # Request model
//!
//! Every operation is an independent fire-once exchange: one request, one
//! status-code check, one decode. There are no retries, no idempotency
//! keys, and no local caching; each call re-fetches from the remote
//! service.
//!
//! # Security
//!
//! The API token is never logged. All error messages are sanitized before
//! being surfaced.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::config::Config;
use crate::error::ZenlinkError;
use crate::models::{
    flatten_tickets, CustomField, FlatTicket, SearchUsersResponse, Ticket, TicketField,
    TicketFieldsResponse, TicketResponse, TicketsResponse, Upload, UploadResponse, User,
    UserResponse,
};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Content type for binary file uploads.
const BINARY_CONTENT_TYPE: &str = "application/binary";

/// HTTP client for the Zendesk API.
///
/// Handles authentication, request formatting, status-code validation,
/// and response parsing for all operations the integration needs.
///
/// Holds only read-only credentials, so a single instance is safe to
/// reuse across sequential calls and to share across tasks (cloning is
/// cheap; the inner reqwest client is reference-counted).
///
/// # Example
///
/// ```ignore
/// let config = Config::new("acme", "agent@example.com", "token")?;
/// let client = ZendeskClient::new(&config)?;
///
/// let user = client.get_or_create_user("store-7", "Acme Grocery").await?;
/// let tickets = client.get_tickets(user.id).await?;
/// let flat = client.flatten_ticket_custom_fields(&tickets);
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the Zendesk API (e.g., `https://acme.zendesk.com/api/v2`).
    base_url: String,

    /// Agent email address; the Basic-auth username is `{email}/token`.
    email: String,

    /// API token for authentication.
    /// SECURITY: Never log this value!
    token: String,

    /// Whether sandbox mode is enabled.
    sandbox: bool,
}

impl ZendeskClient {
    /// Placeholder store identifier substituted for caller input in
    /// sandbox mode.
    pub const SANDBOX_EXTERNAL_ID: &'static str = "00000000-00000000-00000000-00000000";

    /// Placeholder store name substituted for caller input in sandbox mode.
    pub const SANDBOX_STORE_NAME: &'static str = "Sandbox Tester";

    /// Creates a new Zendesk client from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration containing base URL, credentials, and
    ///   the sandbox flag
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, ZenlinkError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ZenlinkError::HttpClient)?;

        // Ensure base_url ends with /api/v2
        let base_url = Self::normalize_base_url(&config.base_url);

        Ok(Self {
            http,
            base_url,
            email: config.email.clone(),
            token: config.token.clone(),
            sandbox: config.sandbox,
        })
    }

    /// Normalizes the base URL to ensure it includes the API path.
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim_end_matches('/');
        if url.ends_with("/api/v2") {
            url.to_string()
        } else if url.ends_with("/api") {
            format!("{}/v2", url)
        } else {
            format!("{}/api/v2", url)
        }
    }

    /// Resolves the store identity to send to the remote service.
    ///
    /// In sandbox mode every caller-supplied identity is replaced with the
    /// fixed placeholder, so integration tests can run against the live
    /// service without creating real customer records.
    fn effective_identity<'a>(&self, store_id: &'a str, store_name: &'a str) -> (&'a str, &'a str) {
        if self.sandbox {
            (Self::SANDBOX_EXTERNAL_ID, Self::SANDBOX_STORE_NAME)
        } else {
            (store_id, store_name)
        }
    }

    /// Sends a prepared request and validates its status code.
    ///
    /// Handles authentication and the single documented failure rule: any
    /// status other than `expected` becomes `UnexpectedStatus` carrying
    /// the actual status and (token-sanitized) body.
    ///
    /// # Arguments
    ///
    /// * `operation` - Label for logs and errors (e.g., "POST /tickets.json")
    /// * `request` - The request, fully built except for authentication
    /// * `expected` - The operation's documented success status
    async fn send(
        &self,
        operation: &str,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<String, ZenlinkError> {
        tracing::debug!(operation = operation, "Making Zendesk API request");

        let response = request
            .basic_auth(format!("{}/token", self.email), Some(&self.token))
            .send()
            .await
            .map_err(ZenlinkError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(ZenlinkError::Http)?;

        if status != expected {
            let body = ZenlinkError::sanitize_message(&body, &self.token);
            return Err(ZenlinkError::unexpected_status(operation, status, body));
        }

        tracing::trace!(operation = operation, body = %body, "Zendesk API response");

        Ok(body)
    }

    /// Makes a GET request and decodes the JSON response.
    async fn get_json<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        expected: StatusCode,
    ) -> Result<T, ZenlinkError>
    where
        T: serde::de::DeserializeOwned,
    {
        let operation = format!("GET {}", path);
        let request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query);

        let body = self.send(&operation, request, expected).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Makes a POST request with a JSON body and decodes the JSON response.
    async fn post_json<T>(
        &self,
        path: &str,
        payload: &serde_json::Value,
        expected: StatusCode,
    ) -> Result<T, ZenlinkError>
    where
        T: serde::de::DeserializeOwned,
    {
        let operation = format!("POST {}", path);
        let request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(payload);

        let body = self.send(&operation, request, expected).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Looks up the user for a store, creating it if it doesn't exist yet.
    ///
    /// Searches by external identifier (the calling system's own store
    /// ID). If there are zero matches, creates a new verified user with
    /// that external identifier and name; creation happens exactly once
    /// and only on a search miss.
    ///
    /// In sandbox mode the supplied identity is ignored and the fixed
    /// placeholder identity is used instead.
    ///
    /// # Arguments
    ///
    /// * `store_id` - The calling system's unique key for the store
    /// * `store_name` - Display name for the store
    ///
    /// # Returns
    ///
    /// The found or newly created user record.
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::UnexpectedStatus` if the search does not
    /// return 200 or creation does not return 201.
    pub async fn get_or_create_user(
        &self,
        store_id: &str,
        store_name: &str,
    ) -> Result<User, ZenlinkError> {
        let (store_id, store_name) = self.effective_identity(store_id, store_name);

        let response: SearchUsersResponse = self
            .get_json(
                "/users/search.json",
                &[("external_id", store_id)],
                StatusCode::OK,
            )
            .await?;

        if response.count == 0 {
            return self.create_user(store_id, store_name).await;
        }

        response.users.into_iter().next().ok_or_else(|| {
            // count > 0 but an empty users array is a malformed response
            ZenlinkError::unexpected_status(
                "GET /users/search.json",
                StatusCode::OK,
                format!("count was {} but no users were returned", response.count),
            )
        })
    }

    /// Creates a new verified user for a store.
    async fn create_user(&self, external_id: &str, name: &str) -> Result<User, ZenlinkError> {
        let payload = serde_json::json!({
            "user": {
                "name": name,
                "verified": true,
                "external_id": external_id,
            }
        });

        let response: UserResponse = self
            .post_json("/users.json", &payload, StatusCode::CREATED)
            .await?;

        Ok(response.user)
    }

    /// Returns all tickets the given user has requested.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The Zendesk user ID (from [`get_or_create_user`](Self::get_or_create_user))
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::UnexpectedStatus` if the request does not
    /// return 200.
    pub async fn get_tickets(&self, user_id: u64) -> Result<Vec<Ticket>, ZenlinkError> {
        let path = format!("/users/{}/tickets/requested.json", user_id);

        let response: TicketsResponse = self.get_json(&path, &[], StatusCode::OK).await?;

        Ok(response.tickets)
    }

    /// Creates a ticket with an initial comment and custom-field values.
    ///
    /// The description becomes the body of the ticket's first comment. If
    /// an attachment token from a prior [`upload_file`](Self::upload_file)
    /// call is supplied, the uploaded files are attached to that comment.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The requester's Zendesk user ID
    /// * `subject` - Ticket subject
    /// * `description` - Body of the initial comment
    /// * `custom_fields` - Custom-field values to set on the ticket
    /// * `attachment_token` - Optional upload token to attach
    ///
    /// # Returns
    ///
    /// The created ticket.
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::UnexpectedStatus` if the request does not
    /// return 201.
    pub async fn create_ticket(
        &self,
        user_id: u64,
        subject: &str,
        description: &str,
        custom_fields: &[CustomField],
        attachment_token: Option<&str>,
    ) -> Result<Ticket, ZenlinkError> {
        let mut comment = serde_json::Map::new();
        comment.insert("body".to_string(), serde_json::json!(description));
        if let Some(token) = attachment_token {
            comment.insert("uploads".to_string(), serde_json::json!([token]));
        }

        let payload = serde_json::json!({
            "ticket": {
                "subject": subject,
                "comment": comment,
                "custom_fields": custom_fields,
                "requester_id": user_id,
            }
        });

        let response: TicketResponse = self
            .post_json("/tickets.json", &payload, StatusCode::CREATED)
            .await?;

        Ok(response.ticket)
    }

    /// Returns all ticket custom-field definitions known to the account.
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::UnexpectedStatus` if the request does not
    /// return 200.
    pub async fn get_ticket_fields(&self) -> Result<Vec<TicketField>, ZenlinkError> {
        let response: TicketFieldsResponse = self
            .get_json("/ticket_fields.json", &[], StatusCode::OK)
            .await?;

        Ok(response.ticket_fields)
    }

    /// Uploads file content to be attached to a ticket.
    ///
    /// Each call uploads one file. To attach several files to the same
    /// ticket, pass the token returned by the first call to each
    /// subsequent call, then pass the final token to
    /// [`create_ticket`](Self::create_ticket).
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name to store the file under
    /// * `content` - Raw file bytes
    /// * `token` - Token of an upload batch to extend, if any
    ///
    /// # Returns
    ///
    /// The upload reference, including the batch token.
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::UnexpectedStatus` if the request does not
    /// return 201.
    pub async fn upload_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
        token: Option<&str>,
    ) -> Result<Upload, ZenlinkError> {
        let mut query = vec![("filename", file_name)];
        if let Some(token) = token {
            query.push(("token", token));
        }

        let request = self
            .http
            .post(format!("{}/uploads.json", self.base_url))
            .query(&query)
            .header("Content-Type", BINARY_CONTENT_TYPE)
            .body(content);

        let body = self
            .send("POST /uploads.json", request, StatusCode::CREATED)
            .await?;
        let response: UploadResponse = serde_json::from_str(&body)?;

        Ok(response.upload)
    }

    /// Flattens each ticket's custom fields into named attributes.
    ///
    /// Pure projection over data already fetched: no request is made, and
    /// tickets missing a known field yield null attributes rather than
    /// errors. See [`FlatTicket`] for the field mapping.
    #[must_use]
    pub fn flatten_ticket_custom_fields(&self, tickets: &[Ticket]) -> Vec<FlatTicket> {
        flatten_tickets(tickets)
    }

    /// Tests connectivity to the Zendesk API.
    ///
    /// Makes one cheap call to verify the server is reachable and the
    /// credentials are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::ConnectionTest` with details about the
    /// failure reason.
    pub async fn test_connection(&self) -> Result<(), ZenlinkError> {
        tracing::debug!("Testing connection to Zendesk");

        match self.get_ticket_fields().await {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(ZenlinkError::UnexpectedStatus { status, .. })
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                Err(ZenlinkError::connection_test(
                    "authentication failed - verify the agent email and API token",
                ))
            }
            Err(e) => {
                let message = e.sanitized_display(&self.token);
                Err(ZenlinkError::connection_test(message))
            }
        }
    }
}
