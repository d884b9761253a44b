//! HTTP clients for the Cisco EoX support-tools API.
//!
//! Two clients, both synchronous: [`AuthClient`] exchanges client
//! credentials for a short-lived bearer token, and [`EoxClient`] resolves
//! batches of serial numbers to lifecycle records. The token is requested
//! once per run and reused read-only for every lookup call; there is no
//! mid-run refresh.

pub mod auth;
pub mod error;
pub mod lookup;

pub use auth::AuthClient;
pub use error::{ClientError, Result};
pub use lookup::{EoxClient, MAX_SERIALS_PER_REQUEST};
