use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user signs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Merchant,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Merchant => "merchant",
            Role::Employee => "employee",
        }
    }

    /// Parses the wire spelling; anything else is not a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "merchant" => Some(Role::Merchant),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which auth endpoint a form submits to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    /// Last path segment of `POST /auth/{mode}`
    pub fn path_segment(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Credentials of one submission; the variant decides the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthCredentials {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl AuthCredentials {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthCredentials::Login(_) => AuthMode::Login,
            AuthCredentials::Signup(_) => AuthMode::Signup,
        }
    }
}

/// Success body of `POST /auth/{mode}`.
///
/// Every field is optional on the wire: signup answers may carry none of
/// them, and a login answer is only usable once [`AuthResponse::into_grant`]
/// has checked it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(
        rename = "merchantId",
        default,
        deserialize_with = "crate::shared::serde_ext::optional_id"
    )]
    pub merchant_id: Option<String>,
    #[serde(
        rename = "employeeId",
        default,
        deserialize_with = "crate::shared::serde_ext::optional_id"
    )]
    pub employee_id: Option<String>,
}

/// A login answer that names a token, a known role and that role's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub role: Role,
    pub identity: String,
}

/// Why a 2xx login answer could not be turned into a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedAuth {
    #[error("response carries no access token")]
    MissingToken,
    #[error("unknown role {0:?}")]
    UnknownRole(Option<String>),
    #[error("response carries no {0} id")]
    MissingIdentity(Role),
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AuthResponse {
    pub fn into_grant(self) -> Result<LoginGrant, MalformedAuth> {
        let token = non_blank(self.access_token).ok_or(MalformedAuth::MissingToken)?;
        let role = match self.role.as_deref().and_then(Role::parse) {
            Some(role) => role,
            None => return Err(MalformedAuth::UnknownRole(self.role)),
        };
        let identity = match role {
            Role::Merchant => non_blank(self.merchant_id),
            Role::Employee => non_blank(self.employee_id),
        }
        .ok_or(MalformedAuth::MissingIdentity(role))?;

        Ok(LoginGrant {
            token,
            role,
            identity,
        })
    }
}
