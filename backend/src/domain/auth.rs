//! Signup and signin inputs.
//!
//! Inbound adapters hand raw strings to the domain; validation happens here
//! in a fixed order so callers always see the first failing rule.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use super::{Email, EnterpriseId, UserName, UserValidationError};

/// Kind of account created at signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Creates a new enterprise owned by the user.
    #[default]
    Owner,
    /// Attaches the user to an existing enterprise.
    Employee,
}

impl AccountType {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = SignupValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "owner" => Ok(Self::Owner),
            "employee" => Ok(Self::Employee),
            _ => Err(SignupValidationError::UnknownAccountType),
        }
    }
}

/// Reasons a signup request is rejected.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    /// Name was blank once trimmed.
    #[error("name is required")]
    NameRequired,
    /// Name was longer than the stored column allows.
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    /// Email was blank.
    #[error("email is required")]
    EmailRequired,
    /// Email was longer than the stored column allows.
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    /// Password was empty.
    #[error("password is required")]
    PasswordRequired,
    /// Account type was neither `owner` nor `employee`.
    #[error("account type must be owner or employee")]
    UnknownAccountType,
    /// Employee signup without a company id.
    #[error("company id is required for employee signup")]
    CompanyIdRequired,
    /// Company id was present but not a valid identifier.
    #[error("company id must be a valid identifier")]
    InvalidCompanyId,
    /// Company id does not reference an existing enterprise.
    #[error("company not found")]
    CompanyNotFound,
    /// Another user already holds the email.
    #[error("email already registered")]
    EmailAlreadyRegistered,
}

impl SignupValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameRequired | Self::NameTooLong { .. } => "name",
            Self::EmailRequired | Self::EmailTooLong { .. } | Self::EmailAlreadyRegistered => {
                "email"
            }
            Self::PasswordRequired => "password",
            Self::UnknownAccountType => "accountType",
            Self::CompanyIdRequired | Self::InvalidCompanyId | Self::CompanyNotFound => {
                "companyId"
            }
        }
    }

    /// Stable machine-readable code for adapters.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::NameTooLong { .. } => "name_too_long",
            Self::EmailRequired => "email_required",
            Self::EmailTooLong { .. } => "email_too_long",
            Self::PasswordRequired => "password_required",
            Self::UnknownAccountType => "unknown_account_type",
            Self::CompanyIdRequired => "company_id_required",
            Self::InvalidCompanyId => "invalid_company_id",
            Self::CompanyNotFound => "company_not_found",
            Self::EmailAlreadyRegistered => "email_already_registered",
        }
    }
}

impl From<UserValidationError> for SignupValidationError {
    fn from(value: UserValidationError) -> Self {
        match value {
            UserValidationError::EmptyName => Self::NameRequired,
            UserValidationError::NameTooLong { max } => Self::NameTooLong { max },
            UserValidationError::EmptyEmail => Self::EmailRequired,
            UserValidationError::EmailTooLong { max } => Self::EmailTooLong { max },
        }
    }
}

/// Raw signup input as received from an inbound adapter.
///
/// `account_type` defaults to owner when absent. An empty `company_id` is
/// treated the same as a missing one.
#[derive(Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub account_type: Option<String>,
    pub company_id: Option<String>,
}

impl SignupRequest {
    /// Start an owner signup request.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
            account_type: None,
            company_id: None,
        }
    }

    /// Set the requested account type.
    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    /// Set the enterprise an employee signs up for.
    pub fn with_company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    /// Run the storage-independent checks in order.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{SignupRequest, SignupValidationError};
    ///
    /// let err = SignupRequest::new("Bea", "bea@x.com", "pw")
    ///     .with_account_type("employee")
    ///     .validate()
    ///     .expect_err("employees need a company");
    /// assert_eq!(err, SignupValidationError::CompanyIdRequired);
    /// ```
    pub fn validate(&self) -> Result<ValidatedSignup, SignupValidationError> {
        let name = UserName::new(&self.name)?;
        let email = Email::new(&self.email)?;
        if self.password.is_empty() {
            return Err(SignupValidationError::PasswordRequired);
        }

        let account_type = match self.account_type.as_deref() {
            None => AccountType::Owner,
            Some(raw) => raw.parse()?,
        };

        let account = match account_type {
            AccountType::Owner => SignupAccount::Owner,
            AccountType::Employee => {
                let raw = self
                    .company_id
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .ok_or(SignupValidationError::CompanyIdRequired)?;
                let company_id =
                    EnterpriseId::new(raw).map_err(|_| SignupValidationError::InvalidCompanyId)?;
                SignupAccount::Employee { company_id }
            }
        };

        Ok(ValidatedSignup {
            name,
            email,
            password: self.password.clone(),
            account,
        })
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("company_id", &self.company_id)
            .finish()
    }
}

/// Account shape chosen at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupAccount {
    /// New enterprise owner.
    Owner,
    /// Employee of an existing enterprise.
    Employee { company_id: EnterpriseId },
}

impl SignupAccount {
    /// The account type this shape corresponds to.
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Owner => AccountType::Owner,
            Self::Employee { .. } => AccountType::Employee,
        }
    }
}

/// Signup input that passed every storage-independent check.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedSignup {
    name: UserName,
    email: Email,
    password: Zeroizing<String>,
    account: SignupAccount,
}

impl ValidatedSignup {
    /// Trimmed user name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Requested account shape.
    pub fn account(&self) -> SignupAccount {
        self.account
    }
}

impl fmt::Debug for ValidatedSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedSignup")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

/// Email/password pair presented at signin.
///
/// No shape validation is applied: anything that does not match a stored
/// credential fails authentication with the same generic error.
#[derive(Clone, PartialEq, Eq)]
pub struct SigninCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl SigninCredentials {
    /// Capture the raw credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email as supplied.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as supplied.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for SigninCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigninCredentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
