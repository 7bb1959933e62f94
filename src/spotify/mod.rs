//! # Spotify Integration Module
//!
//! This module talks to the Spotify Web API for the two calls the pipeline
//! needs: exchanging application credentials for a bearer token and finding
//! the album behind the currently playing track.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     └── Track Search (first-hit album resolution)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The tool uses the OAuth 2.0 client-credentials grant: application id and
//! secret are posted form-encoded to the token endpoint and the returned
//! bearer token authorizes the search call. There is no end-user context, no
//! refresh token, and no token cache; each invocation performs exactly one
//! exchange and discards the token when the process exits.
//!
//! ## Resolution Strategy
//!
//! [`search::resolve_album`] issues one authenticated search with
//! `type=track&limit=1` and accepts the first hit without scoring or
//! fallback. The use case is "what's playing right now", where the top match
//! is almost always correct; deliberately no fuzzy matching is layered on
//! top of what the search API already ranks.
//!
//! ## Error Handling
//!
//! Every call is single-attempt. Network and HTTP failures propagate as the
//! transparent `Http` variant; a token reply without an `access_token` and a
//! search reply without a usable album map to the `TokenAcquisition` and
//! `AlbumNotFound` variants of the shared taxonomy.

pub mod auth;
pub mod search;
