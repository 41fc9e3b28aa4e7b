//! Simulated authentication backend
//!
//! Accounts live in process memory, keyed by lowercased email. Passwords are
//! stored as salted SHA-256 digests.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::{Credentials, Identity, Registration};
use crate::domain::ports::AuthGateway;
use crate::error::GatewayError;

struct Account {
    identity: Identity,
    salt: String,
    password_hash: String,
}

pub struct SimulatedAuthGateway {
    delay: Duration,
    accounts: RwLock<HashMap<String, Account>>,
}

impl SimulatedAuthGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..16).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl AuthGateway for SimulatedAuthGateway {
    async fn register(&self, registration: &Registration) -> Result<Identity, GatewayError> {
        tokio::time::sleep(self.delay).await;

        let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
        if accounts.contains_key(&registration.email) {
            return Err(GatewayError::Refused(format!(
                "An account already exists for {}",
                registration.email
            )));
        }

        let display_name = registration
            .business_name
            .clone()
            .unwrap_or_else(|| registration.full_name.clone());
        let identity = Identity {
            user_id: Uuid::new_v4(),
            display_name,
            email: registration.email.clone(),
            user_type: registration.user_type,
        };
        let salt = generate_salt();
        let password_hash = hash_password(&salt, &registration.password);

        accounts.insert(
            registration.email.clone(),
            Account {
                identity: identity.clone(),
                salt,
                password_hash,
            },
        );
        Ok(identity)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError> {
        tokio::time::sleep(self.delay).await;

        let accounts = self.accounts.read().unwrap_or_else(|e| e.into_inner());
        match accounts.get(&credentials.email) {
            Some(account)
                if hash_password(&account.salt, &credentials.password)
                    == account.password_hash =>
            {
                Ok(account.identity.clone())
            }
            _ => Err(GatewayError::Refused(
                "Invalid email or password".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::UserType;

    fn registration(email: &str) -> Registration {
        Registration {
            user_type: UserType::Visitor,
            full_name: "Asha Das".into(),
            email: email.into(),
            password: "brahmaputra".into(),
            business_name: None,
            business_category: None,
        }
    }

    #[tokio::test]
    async fn register_then_sign_in() {
        let gateway = SimulatedAuthGateway::new(Duration::ZERO);
        let identity = gateway.register(&registration("asha@example.com")).await.unwrap();
        assert_eq!(identity.display_name, "Asha Das");

        let signed_in = gateway
            .sign_in(&Credentials {
                email: "asha@example.com".into(),
                password: "brahmaputra".into(),
            })
            .await
            .unwrap();
        assert_eq!(signed_in.user_id, identity.user_id);
    }

    #[tokio::test]
    async fn duplicate_email_is_refused() {
        let gateway = SimulatedAuthGateway::new(Duration::ZERO);
        gateway.register(&registration("asha@example.com")).await.unwrap();
        let second = gateway.register(&registration("asha@example.com")).await;
        assert!(matches!(second, Err(GatewayError::Refused(_))));
    }

    #[tokio::test]
    async fn wrong_password_is_refused() {
        let gateway = SimulatedAuthGateway::new(Duration::ZERO);
        gateway.register(&registration("asha@example.com")).await.unwrap();

        let result = gateway
            .sign_in(&Credentials {
                email: "asha@example.com".into(),
                password: "wrong-password".into(),
            })
            .await;
        assert!(matches!(result, Err(GatewayError::Refused(_))));

        let unknown = gateway
            .sign_in(&Credentials {
                email: "nobody@example.com".into(),
                password: "brahmaputra".into(),
            })
            .await;
        assert!(unknown.is_err());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        assert_ne!(
            hash_password("aa", "secret123"),
            hash_password("bb", "secret123")
        );
    }
}
