use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

/// Process-wide activity catalog, seeded once at startup. The key set is
/// fixed for the process lifetime; only `participants` lists are mutated.
pub type SharedRegistry = Arc<RwLock<HashMap<String, Activity>>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

/// Outcome of a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity_name: String,
    pub email: String,
}

pub fn seed_registry() -> SharedRegistry {
    let mut activities = HashMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );

    Arc::new(RwLock::new(activities))
}

pub async fn list_activities(registry: &SharedRegistry) -> HashMap<String, Activity> {
    registry.read().await.clone()
}

/// Add `email` to the activity's participant list.
///
/// `max_participants` is not checked here; the catalog treats capacity as
/// advisory metadata. The check-then-append runs under a single write
/// lock acquisition.
pub async fn signup(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistryError> {
    let mut activities = registry.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(RegistryError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(RegistryError::AlreadySignedUp);
    }
    activity.participants.push(email.to_string());

    Ok(Confirmation {
        activity_name: activity_name.to_string(),
        email: email.to_string(),
    })
}

/// Remove `email` from the activity's participant list.
pub async fn unregister(
    registry: &SharedRegistry,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, RegistryError> {
    let mut activities = registry.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(RegistryError::ActivityNotFound)?;

    let pos = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(RegistryError::NotSignedUp)?;
    activity.participants.remove(pos);

    Ok(Confirmation {
        activity_name: activity_name.to_string(),
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_contains_expected_activities() {
        let registry = seed_registry();
        let activities = list_activities(&registry).await;

        let chess = activities.get("Chess Club").expect("Chess Club seeded");
        assert_eq!(chess.max_participants, 12);
        assert!(!chess.participants.is_empty());
        assert!(activities.contains_key("Programming Class"));
    }

    #[tokio::test]
    async fn signup_appends_in_order() {
        let registry = seed_registry();

        signup(&registry, "Chess Club", "a@mergington.edu")
            .await
            .unwrap();
        signup(&registry, "Chess Club", "b@mergington.edu")
            .await
            .unwrap();

        let activities = list_activities(&registry).await;
        let participants = &activities["Chess Club"].participants;
        let n = participants.len();
        assert_eq!(&participants[n - 2..], ["a@mergington.edu", "b@mergington.edu"]);
    }

    #[tokio::test]
    async fn signup_unknown_activity_is_not_found() {
        let registry = seed_registry();
        let err = signup(&registry, "Underwater Basket Weaving", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::ActivityNotFound);
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let registry = seed_registry();

        signup(&registry, "Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        let err = signup(&registry, "Chess Club", "new@mergington.edu")
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::AlreadySignedUp);

        // The failed attempt must not have appended a second entry.
        let activities = list_activities(&registry).await;
        let count = activities["Chess Club"]
            .participants
            .iter()
            .filter(|p| *p == "new@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn signup_then_unregister_round_trips() {
        let registry = seed_registry();
        let before = list_activities(&registry).await["Chess Club"]
            .participants
            .clone();

        signup(&registry, "Chess Club", "transient@mergington.edu")
            .await
            .unwrap();
        unregister(&registry, "Chess Club", "transient@mergington.edu")
            .await
            .unwrap();

        let after = list_activities(&registry).await["Chess Club"]
            .participants
            .clone();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn unregister_unknown_activity_is_not_found() {
        let registry = seed_registry();
        let err = unregister(&registry, "Underwater Basket Weaving", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::ActivityNotFound);
    }

    #[tokio::test]
    async fn unregister_unknown_email_is_not_signed_up() {
        let registry = seed_registry();
        let err = unregister(&registry, "Chess Club", "stranger@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, RegistryError::NotSignedUp);
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let registry = seed_registry();
        let max = list_activities(&registry).await["Chess Club"].max_participants;

        for i in 0..max + 5 {
            signup(&registry, "Chess Club", &format!("s{i}@mergington.edu"))
                .await
                .unwrap();
        }

        let activities = list_activities(&registry).await;
        assert!(activities["Chess Club"].participants.len() as i64 > max);
    }
}
