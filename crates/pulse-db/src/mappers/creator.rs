//! Creator entity <-> model mapper

use pulse_core::entities::Creator;

use crate::models::CreatorModel;

/// Convert CreatorModel to Creator entity
impl From<CreatorModel> for Creator {
    fn from(model: CreatorModel) -> Self {
        Creator {
            id: model.id,
            company_id: model.company_id,
            name: model.name,
            email: model.email,
            feedback_link: model.feedback_link,
            created_at: model.created_at,
        }
    }
}
