//! Reaction entity <-> model mapper

use pulse_core::entities::Reaction;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            message_id: model.message_id,
            reaction_type: model.reaction_type,
            user_hash: model.user_hash,
            created_at: model.created_at,
        }
    }
}
