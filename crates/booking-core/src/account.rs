//! Accounts
//!
//! Two-stage sign-in: the email is looked up first, then the password is
//! asked for. Account lookup goes through [`AccountDirectory`] so the flow
//! works against any backend. Invited users create their account through
//! [`CreateAccountInvite`] instead.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::basket::{BasketItem, Participant};
use crate::config::AccountEntry;
use crate::error::BookingResult;
use crate::validation::{checkbox_value, validate_fields, Rule, ValidationErrors};

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

const EMAIL_RULES: [Rule; 2] = [
    Rule::Email("Email address is not valid"),
    Rule::Required("Please enter your email address"),
];

pub const NEW_PASSWORD_FIELD: &str = "new-password";
pub const ACCEPT_TERMS_FIELD: &str = "accept_terms";

const NEW_PASSWORD_RULES: [Rule; 1] = [Rule::Required("Please enter a password")];
const ACCEPT_TERMS_RULES: [Rule; 1] = [Rule::Checked("Please accept terms to create an account")];

pub const INCORRECT_CREDENTIALS: &str = "Your email or password is incorrect";
pub const RESET_CONFIRMATION: &str =
    "Password reset email sent. Make sure to check your spam folder.";

/// Source of known accounts
#[async_trait(?Send)]
pub trait AccountDirectory {
    /// Whether an account exists for this email
    async fn has_account(&self, email: &str) -> BookingResult<bool>;

    /// Whether the password matches the account
    async fn verify(&self, email: &str, password: &str) -> BookingResult<bool>;
}

/// Directory backed by a fixed list, e.g. from storefront config
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    accounts: Vec<AccountEntry>,
}

impl InMemoryDirectory {
    pub fn new(accounts: Vec<AccountEntry>) -> Self {
        Self { accounts }
    }

    fn find(&self, email: &str) -> Option<&AccountEntry> {
        let email = email.trim();
        self.accounts.iter().find(|a| a.email.eq_ignore_ascii_case(email))
    }
}

#[async_trait(?Send)]
impl AccountDirectory for InMemoryDirectory {
    async fn has_account(&self, email: &str) -> BookingResult<bool> {
        Ok(self.find(email).is_some())
    }

    async fn verify(&self, email: &str, password: &str) -> BookingResult<bool> {
        Ok(self.find(email).is_some_and(|a| a.password == password))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInStage {
    #[default]
    Email,
    Password,
    SignedIn,
}

/// Result of pressing "Continue"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    Invalid(ValidationErrors),
    /// No account for the email; offer to create one
    NoAccount,
    AskPassword,
    WrongPassword,
    SignedIn,
}

#[derive(Debug, Clone, Default)]
pub struct SignInFlow {
    pub email: String,
    pub password: String,
    stage: SignInStage,
    no_account: bool,
    password_error: bool,
}

impl SignInFlow {
    pub fn stage(&self) -> SignInStage {
        self.stage
    }

    pub fn heading(&self) -> &'static str {
        match self.stage {
            SignInStage::Email => "Sign in or create a new account",
            _ => "Welcome back",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.stage {
            SignInStage::Email => "Enter your email to continue",
            _ => "Enter your password to continue",
        }
    }

    pub fn no_account(&self) -> bool {
        self.no_account
    }

    pub fn password_error(&self) -> Option<&'static str> {
        self.password_error.then_some(INCORRECT_CREDENTIALS)
    }

    /// Back to the email stage with empty fields
    pub fn change_email(&mut self) {
        *self = Self::default();
    }

    pub async fn submit<D: AccountDirectory + ?Sized>(&mut self, directory: &D) -> BookingResult<SignInOutcome> {
        if let Err(errors) = validate_email(&self.email) {
            return Ok(SignInOutcome::Invalid(errors));
        }

        if !directory.has_account(&self.email).await? {
            debug!("no account for email");
            self.stage = SignInStage::Email;
            self.no_account = true;
            self.password_error = false;
            return Ok(SignInOutcome::NoAccount);
        }

        self.no_account = false;
        if self.password.is_empty() {
            self.stage = SignInStage::Password;
            return Ok(SignInOutcome::AskPassword);
        }

        if directory.verify(&self.email, &self.password).await? {
            info!("signed in");
            self.stage = SignInStage::SignedIn;
            self.password_error = false;
            Ok(SignInOutcome::SignedIn)
        } else {
            self.stage = SignInStage::Password;
            self.password_error = true;
            Ok(SignInOutcome::WrongPassword)
        }
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationErrors> {
    validate_fields(&[(EMAIL_FIELD, email, &EMAIL_RULES[..])])
}

/// "Reset password" form; returns the confirmation to show
pub fn request_password_reset(email: &str) -> Result<&'static str, ValidationErrors> {
    validate_email(email)?;
    info!("password reset requested");
    Ok(RESET_CONFIRMATION)
}

/// A squad place someone was invited to take up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub email: String,
    pub club: String,
    pub squad: String,
    pub term: String,
    /// Monthly fee, e.g. `£20.00`
    pub price: String,
    pub image: String,
    pub player: Participant,
}

impl Invite {
    pub fn summary(&self) -> String {
        format!(
            "{} is invited to join the {} at {}",
            self.player.full_name(),
            self.squad,
            self.club
        )
    }

    /// Basket line for the squad place, carried into checkout
    pub fn to_basket_item(&self) -> BasketItem {
        let mut item = BasketItem::new(format!("invite-{}", self.player.id), self.squad.clone())
            .with_cost(self.price.clone())
            .with_participant(self.player.clone());
        item.sub_title = Some(self.term.clone());
        item.price_quantity = Some("month".to_string());
        item.billing = Some("Monthly on the 1st".to_string());
        item.image = Some(self.image.clone());
        item
    }
}

/// The invite shown on the accept-invite page
pub fn pending_invite() -> Invite {
    Invite {
        email: "jamestoone@gmail.com".to_string(),
        club: "North Shields FC".to_string(),
        squad: "U10 Girls Squad".to_string(),
        term: "12 months".to_string(),
        price: "£20.00".to_string(),
        image: "https://i.ibb.co/dWTrvXQ/ED3-NSn-XWw-AASf-K1.jpg".to_string(),
        player: Participant { id: 1, first_name: "Jacob".to_string(), last_name: "Toone".to_string() },
    }
}

/// Account created from an accepted invite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAccount {
    pub email: String,
    pub marketing_opt_in: bool,
}

/// "Create a JoinIn account" form for an invited user: set a password,
/// accept the terms, optionally opt in to updates.
#[derive(Debug, Clone)]
pub struct CreateAccountInvite {
    pub invite: Invite,
    pub password: String,
    pub accept_terms: bool,
    pub accept_marketing: bool,
}

impl CreateAccountInvite {
    pub fn new(invite: Invite) -> Self {
        Self { invite, password: String::new(), accept_terms: false, accept_marketing: false }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&[
            (NEW_PASSWORD_FIELD, self.password.as_str(), &NEW_PASSWORD_RULES[..]),
            (ACCEPT_TERMS_FIELD, checkbox_value(self.accept_terms), &ACCEPT_TERMS_RULES[..]),
        ])
    }

    pub fn submit(&self) -> Result<CreatedAccount, ValidationErrors> {
        self.validate()?;
        info!(marketing = self.accept_marketing, "account created from invite");
        Ok(CreatedAccount {
            email: self.invite.email.clone(),
            marketing_opt_in: self.accept_marketing,
        })
    }
}
