use crate::error::{PostError, Result};
use std::fmt;

pub const PAGE_ID_VAR: &str = "FACEBOOK_PAGE_ID";
pub const ACCESS_TOKEN_VAR: &str = "PAGE_ACCESS_TOKEN";

/// Page identifier and the page access token used to publish to it.
/// Values are not checked for emptiness.
#[derive(Clone, PartialEq, Eq)]
pub struct PageCredentials {
    pub page_id: String,
    pub access_token: String,
}

impl PageCredentials {
    /// Create credentials from a page id and page access token
    pub fn new(page_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        PageCredentials {
            page_id: page_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Read credentials from `FACEBOOK_PAGE_ID` and `PAGE_ACCESS_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_id = lookup(PAGE_ID_VAR)
            .ok_or_else(|| PostError::Config(format!("{} is not set", PAGE_ID_VAR)))?;
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .ok_or_else(|| PostError::Config(format!("{} is not set", ACCESS_TOKEN_VAR)))?;
        Ok(PageCredentials::new(page_id, access_token))
    }
}

impl fmt::Debug for PageCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCredentials")
            .field("page_id", &self.page_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_debug_redacts_token() {
        let creds = PageCredentials::new("123", "EAAB-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("123"));
        assert!(!printed.contains("EAAB-secret"));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> =
            [(PAGE_ID_VAR, "123"), (ACCESS_TOKEN_VAR, "tok")].into_iter().collect();
        let creds = PageCredentials::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(creds, PageCredentials::new("123", "tok"));
    }

    #[test]
    fn test_from_lookup_missing_token() {
        let err = PageCredentials::from_lookup(|k| {
            (k == PAGE_ID_VAR).then(|| "123".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, PostError::Config(ref msg) if msg.contains(ACCESS_TOKEN_VAR)));
    }
}
