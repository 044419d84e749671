use super::PhotoApi;
use super::client::{ApiRequest, Transport};
use super::types::{LoginData, decode, success_flag};
use crate::consts::UNAUTHENTICATED_SID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionToken {
    Authenticated(String),
    /// Login failed; requests still go out with the `-1` sid and the API
    /// is expected to reject them.
    Unauthenticated,
}

impl SessionToken {
    pub(crate) fn sid(&self) -> &str {
        match self {
            SessionToken::Authenticated(sid) => sid,
            SessionToken::Unauthenticated => UNAUTHENTICATED_SID,
        }
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        matches!(self, SessionToken::Authenticated(_))
    }
}

impl<T: Transport> PhotoApi<'_, T> {
    fn auth_request(&self, method: &str) -> ApiRequest {
        ApiRequest::new(self.settings.auth_url())
            .param("api", "SYNO.API.Auth")
            .param("method", method)
            .param("version", 3)
    }

    /// Never fails; any error yields `Unauthenticated`.
    pub(crate) fn login(&self) -> SessionToken {
        let request = self
            .auth_request("login")
            .param("account", &self.settings.account)
            .param("passwd", &self.settings.password);

        match self.transport.get_json(&request).and_then(decode::<LoginData>) {
            Ok(data) if !data.sid.is_empty() => {
                tracing::info!("Logged in as {}", self.settings.account);
                SessionToken::Authenticated(data.sid)
            }
            Ok(_) => {
                tracing::warn!("Login response carried an empty sid");
                SessionToken::Unauthenticated
            }
            Err(e) => {
                tracing::warn!("Login failed: {e}");
                SessionToken::Unauthenticated
            }
        }
    }

    /// Reported success flag, `false` on any failure.
    pub(crate) fn logout(&self, token: &SessionToken) -> bool {
        let mut request = self.auth_request("logout");
        if token.is_authenticated() {
            request = request.param("_sid", token.sid());
        }

        match self.transport.get_json(&request) {
            Ok(body) => success_flag(&body),
            Err(e) => {
                tracing::warn!("Logout failed: {e}");
                false
            }
        }
    }
}
