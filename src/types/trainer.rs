//! Trainers

use serde::{Deserialize, Serialize};

/// A gym trainer.
///
/// `assigned_members` is a display figure; it is not derived from member
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub assigned_members: u32,
    /// 0-100
    pub performance: u8,
    pub avatar: String,
}

/// Data for a new trainer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrainer {
    pub name: String,
    pub specialty: String,
}
