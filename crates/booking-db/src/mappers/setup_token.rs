//! Setup token entity <-> model mapper

use booking_core::entities::SetupToken;
use booking_core::value_objects::Snowflake;

use crate::models::SetupTokenModel;

/// Convert SetupTokenModel to SetupToken entity
impl From<SetupTokenModel> for SetupToken {
    fn from(model: SetupTokenModel) -> Self {
        SetupToken {
            code: model.code,
            teacher_id: Snowflake::new(model.teacher_id),
            created_at: model.created_at,
            expires_at: model.expires_at,
            used_at: model.used_at,
        }
    }
}
