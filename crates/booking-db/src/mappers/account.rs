//! Account entity <-> model mapper

use booking_core::entities::Account;
use booking_core::error::DomainError;
use booking_core::value_objects::{Role, Snowflake};

use crate::models::AccountModel;

/// Convert AccountModel to Account entity.
///
/// Fails if the stored role string is not a known role.
impl TryFrom<AccountModel> for Account {
    type Error = DomainError;

    fn try_from(model: AccountModel) -> Result<Self, Self::Error> {
        Ok(Account {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role: Role::parse(&model.role)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        })
    }
}
