//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use carebridge_auth::jwt::{JwtDecoder, JwtEncoder};
use carebridge_auth::otp::OtpGenerator;
use carebridge_auth::password::{PasswordHasher, PasswordValidator};
use carebridge_core::config::AppConfig;
use carebridge_core::traits::Mailer;

use carebridge_database::repositories::account::AccountRepository;
use carebridge_database::repositories::donation::DonationRepository;
use carebridge_database::repositories::donor::DonorProfileRepository;
use carebridge_database::repositories::orphanage::OrphanageRepository;
use carebridge_database::repositories::otp::OtpRepository;
use carebridge_database::repositories::requirement::RequirementRepository;

use carebridge_service::auth::AuthService;
use carebridge_service::donation::DonationService;
use carebridge_service::donor::DonorProfileService;
use carebridge_service::notify::NotifyService;
use carebridge_service::orphanage::OrphanageService;
use carebridge_service::requirement::RequirementService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Registration, OTP verification, and token issuance.
    pub auth_service: Arc<AuthService>,
    /// Donor profile self-service.
    pub donor_service: Arc<DonorProfileService>,
    /// Orphanage profiles and public directory.
    pub orphanage_service: Arc<OrphanageService>,
    /// Requirement postings.
    pub requirement_service: Arc<RequirementService>,
    /// Donation workflow.
    pub donation_service: Arc<DonationService>,
}

impl AppState {
    /// Wires repositories and services around a pool and mail transport.
    pub fn build(config: AppConfig, db_pool: PgPool, mailer: Arc<dyn Mailer>) -> Self {
        let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
        let otp_repo = Arc::new(OtpRepository::new(db_pool.clone()));
        let donor_repo = Arc::new(DonorProfileRepository::new(db_pool.clone()));
        let orphanage_repo = Arc::new(OrphanageRepository::new(db_pool.clone()));
        let requirement_repo = Arc::new(RequirementRepository::new(db_pool.clone()));
        let donation_repo = Arc::new(DonationRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let otp_generator = Arc::new(OtpGenerator::new(&config.otp));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let notify = Arc::new(NotifyService::new(mailer));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&account_repo),
            Arc::clone(&otp_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
            Arc::clone(&otp_generator),
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
            Arc::clone(&notify),
            config.otp.validity_minutes,
        ));

        let donor_service = Arc::new(DonorProfileService::new(Arc::clone(&donor_repo)));
        let orphanage_service = Arc::new(OrphanageService::new(Arc::clone(&orphanage_repo)));
        let requirement_service = Arc::new(RequirementService::new(
            Arc::clone(&requirement_repo),
            Arc::clone(&orphanage_repo),
        ));
        let donation_service = Arc::new(DonationService::new(
            Arc::clone(&donation_repo),
            Arc::clone(&donor_repo),
            Arc::clone(&orphanage_repo),
            Arc::clone(&requirement_repo),
            Arc::clone(&notify),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_decoder,
            auth_service,
            donor_service,
            orphanage_service,
            requirement_service,
            donation_service,
        }
    }
}
