//! Account registration, OTP verification, and token issuance.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use carebridge_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use carebridge_auth::otp::OtpGenerator;
use carebridge_auth::password::{PasswordHasher, PasswordValidator};
use carebridge_core::error::AppError;
use carebridge_database::repositories::account::AccountRepository;
use carebridge_database::repositories::otp::OtpRepository;
use carebridge_entity::account::{Account, AccountRole, CreateAccount, UpdateAccount};

use crate::context::RequestContext;
use crate::notify::NotifyService;

/// Handles registration, email verification, and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Account repository.
    account_repo: Arc<AccountRepository>,
    /// OTP repository.
    otp_repo: Arc<OtpRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Verification code generator.
    otp_generator: Arc<OtpGenerator>,
    /// JWT encoder.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder.
    decoder: Arc<JwtDecoder>,
    /// Mail dispatch.
    notify: Arc<NotifyService>,
    /// Validity window advertised in the verification email.
    otp_validity_minutes: u64,
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Requested role.
    pub role: AccountRole,
}

impl AuthService {
    /// Creates a new auth service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_repo: Arc<AccountRepository>,
        otp_repo: Arc<OtpRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        otp_generator: Arc<OtpGenerator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        notify: Arc<NotifyService>,
        otp_validity_minutes: u64,
    ) -> Self {
        Self {
            account_repo,
            otp_repo,
            hasher,
            validator,
            otp_generator,
            encoder,
            decoder,
            notify,
            otp_validity_minutes,
        }
    }

    /// Registers a new account and issues its first verification code.
    ///
    /// The account starts inactive and unverified. Code delivery is
    /// best-effort: a mail transport failure is logged and registration
    /// still succeeds, since the resend endpoint can recover.
    pub async fn register(&self, req: RegisterRequest) -> Result<Account, AppError> {
        let email = req.email.trim().to_lowercase();

        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        self.validator.validate(&req.password)?;

        if !req.role.is_registrable() {
            return Err(AppError::validation(
                "Role must be either donor or orphanage",
            ));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let account = self
            .account_repo
            .create(&CreateAccount {
                email,
                password_hash,
                role: req.role,
            })
            .await?;

        info!(account_id = %account.id, role = %account.role, "Account registered");

        self.issue_code(&account).await?;

        Ok(account)
    }

    /// Issues a fresh verification code for an unverified account.
    pub async fn resend_otp(&self, email: &str) -> Result<(), AppError> {
        let account = self.find_by_email(email).await?;

        if account.is_verified {
            return Err(AppError::validation("Account is already verified"));
        }

        self.issue_code(&account).await
    }

    /// Verifies an account with a previously issued code.
    ///
    /// The candidate is the most recently created unused row matching the
    /// exact code. Consumption is race-safe: of two concurrent calls with
    /// the same code, at most one succeeds.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<Account, AppError> {
        let account = self.find_by_email(email).await?;

        let otp = self
            .otp_repo
            .find_latest_matching(account.id, code)
            .await?
            .ok_or_else(|| AppError::invalid_otp("Invalid verification code"))?;

        if otp.is_expired() {
            return Err(AppError::expired_otp("Verification code has expired"));
        }

        if !self.otp_repo.mark_used(otp.id).await? {
            return Err(AppError::invalid_otp("Invalid verification code"));
        }

        self.account_repo.activate(account.id).await?;

        info!(account_id = %account.id, "Account verified");

        self.account_repo
            .find_by_id(account.id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Authenticates credentials and issues an access + refresh pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let account = self
            .account_repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self
            .hasher
            .verify_password(password, &account.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        if !account.can_login() {
            return Err(AppError::authentication(
                "Account is not verified. Please verify your email first.",
            ));
        }

        let pair = self
            .encoder
            .generate_token_pair(account.id, account.role, &account.email)?;

        info!(account_id = %account.id, "Login successful");

        Ok(pair)
    }

    /// Exchanges a valid refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let account = self
            .account_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        if !account.can_login() {
            return Err(AppError::authentication("Account is not active"));
        }

        self.encoder
            .generate_token_pair(account.id, account.role, &account.email)
    }

    /// Gets the current account.
    pub async fn get_account(&self, ctx: &RequestContext) -> Result<Account, AppError> {
        self.account_repo
            .find_by_id(ctx.account_id)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }

    /// Updates the current account's name and phone fields.
    pub async fn update_account(
        &self,
        ctx: &RequestContext,
        mut data: UpdateAccount,
    ) -> Result<Account, AppError> {
        data.id = ctx.account_id;
        let account = self.account_repo.update(&data).await?;

        info!(account_id = %account.id, "Account profile updated");

        Ok(account)
    }

    /// Generate, persist, and best-effort deliver one verification code.
    async fn issue_code(&self, account: &Account) -> Result<(), AppError> {
        let code = self.otp_generator.generate_code();
        let expires_at = self.otp_generator.expires_at(Utc::now());

        self.otp_repo.create(account.id, &code, expires_at).await?;

        info!(account_id = %account.id, "Verification code issued");

        self.notify
            .verification_code(&account.email, &code, self.otp_validity_minutes)
            .await;

        Ok(())
    }

    /// Lookup by normalized email, mapping absence to NotFound.
    async fn find_by_email(&self, email: &str) -> Result<Account, AppError> {
        self.account_repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::not_found("No account with that email"))
    }
}
