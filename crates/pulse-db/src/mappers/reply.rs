//! Reply entity <-> model mapper

use pulse_core::entities::Reply;

use crate::models::ReplyModel;

/// Convert ReplyModel to Reply entity
impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: model.id,
            message_id: model.message_id,
            body: model.body,
            is_public: model.is_public,
            created_at: model.created_at,
        }
    }
}
