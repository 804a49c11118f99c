use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::commands::users::{
    BenefitsResult, LookupCommand, LookupResult, RegisterCommand, RegisterResult, VisitCommand,
};
use crate::domain::errors::ValidationError;
use crate::domain::loyalty::{classify, discount_percentage, recommendations_for};
use crate::domain::models::booking::BookingRecord;
use crate::domain::models::user::{normalize_email, UserProfile};
use crate::storage::ProfileStorage;

/// Service resolving returning guests and maintaining their profiles
///
/// Every read-modify-write sequence runs under `write_lock`, so two
/// registrations for the same unseen email cannot both create a profile.
pub struct UserService<S: ProfileStorage> {
    store: Arc<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S: ProfileStorage> Clone for UserService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<S: ProfileStorage> UserService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Match a visitor by email, then by phone. A match counts as a visit.
    pub async fn lookup(&self, command: LookupCommand) -> Result<LookupResult> {
        let email = non_blank(command.email);
        let phone = non_blank(command.phone);

        if email.is_none() && phone.is_none() {
            return Err(ValidationError::MissingContact.into());
        }

        let _guard = self.write_lock.lock().await;

        let found = self.find_existing(email.as_deref(), phone.as_deref()).await?;

        let Some(mut profile) = found else {
            info!(
                "No profile matched lookup (session: {}, device: {})",
                command.session_id, command.device_id
            );
            return Ok(LookupResult {
                profile: None,
                message: "User not found".to_string(),
            });
        };

        profile.record_visit(Utc::now());
        let key = profile.email.clone();
        self.store.put(&key, profile.clone()).await?;

        info!(
            "User visit logged: {}, Session: {}, Device: {}",
            profile.id, command.session_id, command.device_id
        );

        Ok(LookupResult {
            profile: Some(profile),
            message: "User found successfully".to_string(),
        })
    }

    /// Create a profile, or refresh the one matching the email or phone.
    pub async fn register(&self, command: RegisterCommand) -> Result<RegisterResult> {
        let (Some(email), Some(full_name)) =
            (non_blank(command.email), non_blank(command.full_name))
        else {
            return Err(ValidationError::MissingRegistrationFields.into());
        };
        let phone = non_blank(command.phone);
        let email_key = normalize_email(&email);

        let _guard = self.write_lock.lock().await;

        let now = Utc::now();
        let existing = self.find_existing(Some(&email_key), phone.as_deref()).await?;

        if let Some(mut profile) = existing {
            let previous_key = profile.email.clone();

            profile.full_name = full_name;
            if phone.is_some() {
                profile.phone = phone;
            }
            profile.record_visit(now);
            if let Some(update) = &command.preferences {
                profile.merge_preferences(update);
            }

            if previous_key != email_key {
                info!(
                    "Re-keying profile {} from '{}' to '{}'",
                    profile.id, previous_key, email_key
                );
                self.store.remove(&previous_key).await?;
                profile.email = email_key.clone();
            }
            self.store.put(&email_key, profile.clone()).await?;

            info!(
                "User updated: {}, Session: {}, Device: {}",
                profile.id, command.session_id, command.device_id
            );

            return Ok(RegisterResult {
                profile,
                created: false,
                success_message: "User updated successfully".to_string(),
            });
        }

        let profile = UserProfile::new_registration(
            email_key.clone(),
            full_name,
            phone,
            command.preferences.as_ref(),
            now,
        );
        self.store.put(&email_key, profile.clone()).await?;

        info!(
            "New user registered: {}, Session: {}, Device: {}",
            profile.id, command.session_id, command.device_id
        );

        Ok(RegisterResult {
            profile,
            created: true,
            success_message: "User registered successfully".to_string(),
        })
    }

    /// Acknowledge a visit. Only logged; visit counts are maintained by
    /// `lookup` and `register`.
    pub async fn record_visit(&self, command: VisitCommand) -> Result<()> {
        let known = self.find_by_id(&command.user_id).await?.is_some();
        let timestamp = command
            .timestamp
            .unwrap_or_else(|| Utc::now().to_rfc3339());

        if known {
            info!(
                "Visit logged for user {}: session={:?} device={:?} at {}",
                command.user_id, command.session_id, command.device_id, timestamp
            );
        } else {
            warn!(
                "Visit logged for unknown user {}: session={:?} device={:?} at {}",
                command.user_id, command.session_id, command.device_id, timestamp
            );
        }

        Ok(())
    }

    /// Loyalty tier, advertised discount and recommendations for a profile
    pub async fn benefits(&self, user_id: &str) -> Result<BenefitsResult> {
        let profile = self.find_by_id(user_id).await?;

        let Some(profile) = profile else {
            return Ok(BenefitsResult {
                user_id: user_id.to_string(),
                completed_bookings: 0,
                tier: classify(None),
                discount_percentage: 0,
                recommendations: None,
            });
        };

        let completed = profile.completed_bookings();
        let tier = classify(Some(completed));

        Ok(BenefitsResult {
            user_id: profile.id.clone(),
            completed_bookings: completed,
            tier,
            discount_percentage: discount_percentage(tier),
            recommendations: Some(recommendations_for(&profile)),
        })
    }

    /// Append a booking to a profile's history
    pub async fn append_booking(&self, user_id: &str, booking: BookingRecord) -> Result<UserProfile> {
        let _guard = self.write_lock.lock().await;

        let mut profile = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ValidationError::UnknownProfile(user_id.to_string()))?;

        info!("Recording booking {} for user {}", booking.id, profile.id);
        profile.booking_history.push(booking);

        let key = profile.email.clone();
        self.store.put(&key, profile.clone()).await?;
        Ok(profile)
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let matches = self.store.scan(&|p: &UserProfile| p.id == user_id).await?;
        Ok(matches.into_iter().next())
    }

    async fn find_existing(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Option<UserProfile>> {
        if let Some(email) = email {
            if let Some(profile) = self.store.get(&normalize_email(email)).await? {
                return Ok(Some(profile));
            }
        }

        if let Some(phone) = phone {
            let matches = self.store.scan(&|p: &UserProfile| p.matches_phone(phone)).await?;
            return Ok(matches.into_iter().next());
        }

        Ok(None)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
