//! Best-effort notification dispatch.

use std::sync::Arc;

use tracing::{info, warn};

use carebridge_core::traits::Mailer;
use carebridge_entity::donation::Donation;
use carebridge_entity::donor::DonorProfile;
use carebridge_entity::orphanage::OrphanageProfile;

use super::messages;

/// Dispatches workflow emails through the configured mail transport.
///
/// Every method is best-effort: a transport failure is logged and swallowed
/// so notification problems never surface in the caller's error channel.
#[derive(Debug, Clone)]
pub struct NotifyService {
    /// Mail transport.
    mailer: Arc<dyn Mailer>,
}

impl NotifyService {
    /// Creates a new notify service.
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Email a verification code to a freshly registered account.
    pub async fn verification_code(&self, to: &str, code: &str, validity_minutes: u64) {
        let (subject, body) = messages::verification_code(code, validity_minutes);
        self.dispatch(to, &subject, &body).await;
    }

    /// Tell an orphanage a new donation has been pledged.
    pub async fn donation_created(
        &self,
        orphanage: &OrphanageProfile,
        donation: &Donation,
        donor: &DonorProfile,
    ) {
        let (subject, body) = messages::donation_created(donation, donor);
        self.dispatch(&orphanage.email, &subject, &body).await;
    }

    /// Tell a donor their donation was accepted.
    pub async fn donation_accepted(
        &self,
        donor: &DonorProfile,
        donation: &Donation,
        orphanage: &OrphanageProfile,
    ) {
        let (subject, body) = messages::donation_accepted(donation, orphanage);
        self.dispatch(&donor.email, &subject, &body).await;
    }

    /// Catch-log-discard boundary around the transport.
    async fn dispatch(&self, to: &str, subject: &str, body: &str) {
        if to.trim().is_empty() {
            warn!(%subject, "Skipping notification: recipient address is blank");
            return;
        }

        match self.mailer.send(to, subject, body).await {
            Ok(()) => {
                info!(%to, %subject, transport = self.mailer.transport(), "Notification sent");
            }
            Err(e) => {
                warn!(%to, %subject, error = %e, "Notification delivery failed");
            }
        }
    }
}
