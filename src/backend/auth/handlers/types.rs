/**
 * Authentication Handler Types
 *
 * Request and response types used by the register and login handlers.
 * Both handlers accept [`Credentials`].
 */

use serde::{Deserialize, Serialize};

pub use crate::shared::users::{Credentials, UserSummary};

/// Login response
///
/// Contains the signed token and the id of the authenticated user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT token for authentication (60-minute expiration)
    pub token: String,
    /// Authenticated user's ID
    pub user_id: i64,
}
