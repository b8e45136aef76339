//! Explicit session lifecycle for the console.
//!
//! A `Session` is created by `login`, installed on the `ApiClient`, and torn
//! down by `logout` or when the backend answers 401. Nothing in the crate
//! reads ambient authentication state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::Role;

/// Profile of the signed-in operator, as returned next to the access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role_id: Role,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// An authenticated session: bearer token plus operator profile.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.user.role_id == Role::Admin
    }

    pub fn is_technician(&self) -> bool {
        self.user.role_id == Role::Technician
    }

    pub fn has_role(&self, allowed: &[Role]) -> bool {
        allowed.contains(&self.user.role_id)
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<UserInfo>,
}

/// Authenticates against `auth/login` and installs the resulting session on
/// the client. The backend must hand back both a token and a user profile;
/// anything less is treated as a failed login.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Session, ApiError> {
    let response: LoginResponse = client
        .post("auth/login", &LoginRequest { email, password })
        .await?;

    match (response.access_token, response.user) {
        (Some(token), Some(user)) => {
            info!(user_id = user.user_id, role = %user.role_id, "login succeeded");
            let session = Session { token, user };
            client.install_session(session.clone());
            Ok(session)
        }
        _ => Err(ApiError::AuthFailed(
            "login response missing token or user profile".to_string(),
        )),
    }
}

/// Drops the installed session. Purely client-side; the backend keeps no
/// session state beyond token expiry.
pub fn logout(client: &ApiClient) {
    info!("logging out");
    client.clear_session();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".to_string(),
            user: UserInfo {
                user_id: 1,
                name: "Op".to_string(),
                email: None,
                role_id: role,
                phone_number: None,
            },
        }
    }

    #[test]
    fn role_helpers() {
        assert!(session(Role::Admin).is_admin());
        assert!(session(Role::Technician).is_technician());
        assert!(!session(Role::Customer).is_admin());
        assert!(session(Role::Technician).has_role(&[Role::Admin, Role::Technician]));
        assert!(!session(Role::Customer).has_role(&[Role::Admin]));
    }
}
