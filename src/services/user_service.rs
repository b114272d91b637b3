//! User directory: registration and api_key lookup.

use uuid::Uuid;

use crate::{
    error::AppError,
    models::user::{User, UserRecord},
    store::RegistryStore,
};

const MAX_EMAIL_LEN: usize = 320;

/// Register a new user and issue their api_key.
///
/// # Process
///
/// 1. Validate the email
/// 2. Generate a random UUID v4 api_key
/// 3. Insert the user; the unique email constraint is the only duplicate check
///
/// # Errors
///
/// - `Validation`: email missing or malformed
/// - `Conflict`: email already registered
pub async fn register(store: &dyn RegistryStore, email: Option<&str>) -> Result<User, AppError> {
    let email = validate_email(email)?;
    let api_key = Uuid::new_v4();

    let user = store.insert_user(email, api_key).await?;
    tracing::info!(email = %user.email, "Registered user");

    Ok(user)
}

/// Look up the user holding `api_key`, together with their webhook URLs.
///
/// # Errors
///
/// - `UserNotFound`: no user holds this api_key
pub async fn lookup(store: &dyn RegistryStore, api_key: Uuid) -> Result<UserRecord, AppError> {
    let user = find(store, api_key).await?;

    let webhook_urls = store
        .list_subscriptions(api_key)
        .await?
        .into_iter()
        .map(|s| s.webhook_url)
        .collect();

    Ok(UserRecord { user, webhook_urls })
}

/// Existence check shared by every authenticated operation.
pub(crate) async fn find(store: &dyn RegistryStore, api_key: Uuid) -> Result<User, AppError> {
    store.find_user(api_key).await?.ok_or_else(|| {
        tracing::debug!(%api_key, "Unknown api_key");
        AppError::UserNotFound
    })
}

/// Validate an email address and return it trimmed.
///
/// # Rules
///
/// - Required and non-blank
/// - At most 320 characters
/// - Exactly one `@` with non-empty local part and domain
/// - No whitespace
fn validate_email(email: Option<&str>) -> Result<&str, AppError> {
    let email = email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::validation("email is required"))?;

    if email.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation("email exceeds 320 characters"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(AppError::validation("email must not contain whitespace"));
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(email)
        }
        _ => Err(AppError::validation("email is not a valid address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn email_validation() {
        assert_eq!(validate_email(Some(" a@x.com ")).unwrap(), "a@x.com");
        assert!(validate_email(None).is_err());
        assert!(validate_email(Some("   ")).is_err());
        assert!(validate_email(Some("no-at-sign")).is_err());
        assert!(validate_email(Some("@x.com")).is_err());
        assert!(validate_email(Some("a@")).is_err());
        assert!(validate_email(Some("a@b@c")).is_err());
        assert!(validate_email(Some("a b@x.com")).is_err());
    }

    #[tokio::test]
    async fn register_twice_conflicts() {
        let store = MemoryStore::new();
        register(&store, Some("a@x.com")).await.unwrap();

        let err = register(&store, Some("a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn distinct_emails_get_distinct_keys() {
        let store = MemoryStore::new();
        let a = register(&store, Some("a@x.com")).await.unwrap();
        let b = register(&store, Some("b@x.com")).await.unwrap();

        assert_ne!(a.api_key, b.api_key);
    }

    #[tokio::test]
    async fn lookup_returns_registered_email() {
        let store = MemoryStore::new();
        for email in ["a@x.com", "b@y.org", "c.d+tag@z.io"] {
            let user = register(&store, Some(email)).await.unwrap();
            let record = lookup(&store, user.api_key).await.unwrap();

            assert_eq!(record.user.email, email);
            assert!(record.webhook_urls.is_empty());
        }
    }

    #[tokio::test]
    async fn lookup_unknown_key_is_not_found() {
        let store = MemoryStore::new();
        let err = lookup(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound));
    }
}
