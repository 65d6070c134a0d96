//! Credential checks over a priority-ordered list of identity providers.
//!
//! The built-in admin table is consulted first, then registered users. The
//! first provider that recognises a username decides the outcome.

use std::collections::HashMap;

use crate::config::ADMIN_ACCOUNTS;
use crate::crypto::{hash_password, verify_password};
use crate::db::{JsonStore, Role, User, UserRepository};
use crate::error::AppError;

/// Outcome of asking one provider about a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The provider has no such username; ask the next one.
    Unknown,
    /// The username exists here but the password does not match.
    Rejected,
    Accepted(Role),
}

pub trait IdentityProvider {
    fn name(&self) -> &'static str;

    fn verify(&self, username: &str, password: &str) -> Result<Verdict, AppError>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn verify(&self, username: &str, password: &str) -> Result<Verdict, AppError> {
        (**self).verify(username, password)
    }
}

/// Fixed administrator identities, held as password digests.
#[derive(Debug, Clone)]
pub struct AdminTable {
    accounts: HashMap<String, String>,
}

impl AdminTable {
    pub fn builtin() -> Self {
        Self::from_accounts(&ADMIN_ACCOUNTS)
    }

    pub fn from_accounts(accounts: &[(&str, &str)]) -> Self {
        let accounts = accounts
            .iter()
            .map(|(username, password)| (username.to_string(), hash_password(password)))
            .collect();
        Self { accounts }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }
}

impl IdentityProvider for AdminTable {
    fn name(&self) -> &'static str {
        "admin table"
    }

    fn verify(&self, username: &str, password: &str) -> Result<Verdict, AppError> {
        Ok(match self.accounts.get(username) {
            None => Verdict::Unknown,
            Some(hash) if verify_password(password, hash) => Verdict::Accepted(Role::Admin),
            Some(_) => Verdict::Rejected,
        })
    }
}

/// Registered users from the users file.
pub struct UserDirectory<'a> {
    store: &'a JsonStore,
}

impl<'a> UserDirectory<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }
}

impl IdentityProvider for UserDirectory<'_> {
    fn name(&self) -> &'static str {
        "user directory"
    }

    fn verify(&self, username: &str, password: &str) -> Result<Verdict, AppError> {
        Ok(match UserRepository::get_by_username(self.store, username)? {
            None => Verdict::Unknown,
            Some(user) if verify_password(password, &user.password_hash) => {
                Verdict::Accepted(user.role)
            }
            Some(_) => Verdict::Rejected,
        })
    }
}

pub struct CredentialService<'a> {
    admins: &'a AdminTable,
    store: &'a JsonStore,
    providers: Vec<Box<dyn IdentityProvider + 'a>>,
}

impl<'a> CredentialService<'a> {
    pub fn new(admins: &'a AdminTable, store: &'a JsonStore) -> Self {
        let mut providers: Vec<Box<dyn IdentityProvider + 'a>> = Vec::with_capacity(2);
        providers.push(Box::new(admins));
        providers.push(Box::new(UserDirectory::new(store)));

        Self {
            admins,
            store,
            providers,
        }
    }

    /// Resolve a login attempt to a role.
    ///
    /// Unknown usernames and wrong passwords both surface as
    /// `InvalidCredentials`; the distinction is only logged.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Role, AppError> {
        for provider in &self.providers {
            match provider.verify(username, password)? {
                Verdict::Unknown => continue,
                Verdict::Accepted(role) => return Ok(role),
                Verdict::Rejected => {
                    tracing::debug!("Wrong password for '{}' ({})", username, provider.name());
                    return Err(AppError::InvalidCredentials);
                }
            }
        }

        tracing::debug!("Unknown username '{}'", username);
        Err(AppError::InvalidCredentials)
    }

    /// Register a user. Admin names are not reserved.
    pub fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingFields(
                "Username and password are required".to_string(),
            ));
        }

        if self.admins.contains(username) {
            tracing::warn!("Registering '{}', which matches a built-in admin name", username);
        }

        UserRepository::create(self.store, username, hash_password(password))
    }
}
