//! Request context carrying the authenticated account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carebridge_entity::account::AccountRole;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token by the API layer and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The account role at the time the JWT was issued.
    pub role: AccountRole,
    /// The account email (convenience field from JWT claims).
    pub email: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, role: AccountRole, email: String) -> Self {
        Self {
            account_id,
            role,
            email,
        }
    }
}
