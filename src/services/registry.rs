//! In-memory activity registry.
//!
//! The registry owns every [`Activity`] and is the only place signups change.
//! Each mutation runs its checks and its write under one lock acquisition, so
//! two concurrent signups can never both pass the capacity check.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use thiserror::Error;

use crate::models::Activity;
use crate::services::seed;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound { activity: String },
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, participant: String },
    #[error("Activity is full")]
    Full { activity: String, max_participants: usize },
    #[error("Student is not signed up for this activity")]
    NotRegistered { activity: String, participant: String },
    #[error("Invalid input: {field} must not be empty")]
    InvalidInput { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfirmation {
    pub activity: String,
    pub participant: String,
}

impl SignupConfirmation {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.participant, self.activity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalConfirmation {
    pub activity: String,
    pub participant: String,
}

impl RemovalConfirmation {
    pub fn message(&self) -> String {
        format!("Removed {} from {}", self.participant, self.activity)
    }
}

pub struct ActivityRegistry {
    activities: Mutex<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Mutex::new(activities),
        }
    }

    /// Registry populated with the school's fixed startup roster.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    /// Snapshot of every activity. Callers get copies, never the live records.
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.activities.lock().clone()
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities.lock().get(activity_name).cloned()
    }

    pub fn signup(
        &self,
        activity_name: &str,
        participant_id: &str,
    ) -> Result<SignupConfirmation, RegistryError> {
        validate_inputs(activity_name, participant_id)?;

        let mut activities = self.activities.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::NotFound {
                activity: activity_name.to_string(),
            })?;

        if activity.is_registered(participant_id) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                participant: participant_id.to_string(),
            });
        }
        if activity.is_full() {
            return Err(RegistryError::Full {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(participant_id.to_string());
        Ok(SignupConfirmation {
            activity: activity_name.to_string(),
            participant: participant_id.to_string(),
        })
    }

    pub fn remove(
        &self,
        activity_name: &str,
        participant_id: &str,
    ) -> Result<RemovalConfirmation, RegistryError> {
        validate_inputs(activity_name, participant_id)?;

        let mut activities = self.activities.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::NotFound {
                activity: activity_name.to_string(),
            })?;

        let Some(pos) = activity
            .participants
            .iter()
            .position(|p| p == participant_id)
        else {
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                participant: participant_id.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(RemovalConfirmation {
            activity: activity_name.to_string(),
            participant: participant_id.to_string(),
        })
    }
}

fn validate_inputs(activity_name: &str, participant_id: &str) -> Result<(), RegistryError> {
    if activity_name.is_empty() {
        return Err(RegistryError::InvalidInput {
            field: "activity name",
        });
    }
    if participant_id.is_empty() {
        return Err(RegistryError::InvalidInput { field: "email" });
    }
    Ok(())
}
