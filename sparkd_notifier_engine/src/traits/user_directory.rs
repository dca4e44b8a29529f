use crate::{db_types::User, traits::NotifierStoreError};

/// Read-only access to user records.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, NotifierStoreError>;
}
