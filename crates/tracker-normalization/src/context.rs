//! Per-run normalization context.

use uuid::Uuid;

use tracker_model::{TargetSchema, UserId};

/// Values shared by every row of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeContext {
    pub user_id: UserId,
    /// Generate a v4 key for each row (schemas with an `Id` column).
    pub assign_ids: bool,
}

impl NormalizeContext {
    pub fn new(user_id: UserId, schema: &TargetSchema) -> Self {
        Self {
            user_id,
            assign_ids: schema.has_id_column(),
        }
    }

    /// A fresh key when the schema needs one.
    pub fn next_id(&self) -> Option<Uuid> {
        self.assign_ids.then(Uuid::new_v4)
    }
}
