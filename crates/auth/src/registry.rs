use super::*;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Stored record. The digest never leaves this module.
struct Account {
    member: Member,
    hashword: Hashword,
}

/// In-memory credential store keyed by email.
///
/// Lives only as long as the process. Registration takes the write lock only
/// for the final insert; hashing happens before it.
#[derive(Default)]
pub struct Registry {
    accounts: RwLock<HashMap<String, Account>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `password` and store a new member under `email`.
    pub fn register(
        &self,
        email: &str,
        name: &str,
        phone: &str,
        password: &str,
    ) -> Result<Member, AuthError> {
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if self.contains(email) {
            log::info!("[registry] duplicate registration for {}", email);
            return Err(AuthError::DuplicateIdentity);
        }
        let hashword = Hashword::new(password)?;
        let member = Member::new(email.to_string(), name.to_string(), phone.to_string());
        match self.accounts.write().entry(email.to_string()) {
            Entry::Occupied(_) => {
                log::info!("[registry] duplicate registration for {}", email);
                Err(AuthError::DuplicateIdentity)
            }
            Entry::Vacant(slot) => {
                slot.insert(Account {
                    member: member.clone(),
                    hashword,
                });
                log::info!("[registry] registered {}", email);
                Ok(member)
            }
        }
    }

    pub fn find(&self, email: &str) -> Option<Member> {
        self.accounts.read().get(email).map(|a| a.member.clone())
    }

    pub fn contains(&self, email: &str) -> bool {
        self.accounts.read().contains_key(email)
    }

    /// Member on a matching password, `None` otherwise. Unknown emails still
    /// pay for one verification so both failures take the same time.
    pub fn verify_credentials(&self, email: &str, password: &str) -> Option<Member> {
        let found = self
            .accounts
            .read()
            .get(email)
            .map(|a| (a.member.clone(), a.hashword.clone()));
        match found {
            Some((member, hashword)) if hashword.matches(password) => Some(member),
            Some(_) => {
                log::info!("[registry] rejected credentials for {}", email);
                None
            }
            None => {
                let _ = Hashword::decoy().matches(password);
                log::info!("[registry] rejected credentials for {}", email);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}
