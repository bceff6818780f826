//! Teacher entity <-> model mapper

use booking_core::entities::Teacher;
use booking_core::value_objects::Snowflake;

use crate::models::TeacherModel;

/// Convert TeacherModel to Teacher entity
impl From<TeacherModel> for Teacher {
    fn from(model: TeacherModel) -> Self {
        Teacher {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            department: model.department,
            subject: model.subject,
            experience_years: model.experience_years,
            qualification: model.qualification,
            bio: model.bio,
            availability: model.availability,
            password_hash: model.password_hash,
            has_account: model.has_account,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
