use serde_json::Value;
use ureq::tls::TlsConfig;

use crate::config::ApiSettings;
use crate::error::ApiError;

/// A GET request against one of the photo API's CGI endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiRequest {
    pub(crate) url: String,
    pub(crate) params: Vec<(String, String)>,
}

impl ApiRequest {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    pub(crate) fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// "api.method" for log lines; never includes credentials.
    pub(crate) fn describe(&self) -> String {
        format!(
            "{}.{}",
            self.get("api").unwrap_or("?"),
            self.get("method").unwrap_or("?")
        )
    }
}

/// Blocking HTTP seam; one outstanding request at a time.
pub(crate) trait Transport {
    fn get_json(&self, request: &ApiRequest) -> Result<Value, ApiError>;

    fn get_bytes(&self, request: &ApiRequest) -> Result<Vec<u8>, ApiError>;
}

pub(crate) struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub(crate) fn new(settings: &ApiSettings) -> Self {
        let mut builder = ureq::Agent::config_builder().timeout_global(Some(settings.timeout));
        if settings.insecure_tls {
            // NAS boxes usually serve a self-signed certificate
            builder = builder.tls_config(TlsConfig::builder().disable_verification(true).build());
        }
        Self {
            agent: builder.build().into(),
        }
    }

    fn call(&self, request: &ApiRequest) -> Result<ureq::http::Response<ureq::Body>, ApiError> {
        tracing::debug!("GET {} ({})", request.url, request.describe());
        let response = self
            .agent
            .get(request.url.as_str())
            .query_pairs(
                request
                    .params
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            )
            .call()?;
        Ok(response)
    }
}

impl Transport for UreqTransport {
    fn get_json(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let response = self.call(request)?;
        let mut body = response.into_body();
        Ok(serde_json::from_reader(body.as_reader())?)
    }

    fn get_bytes(&self, request: &ApiRequest) -> Result<Vec<u8>, ApiError> {
        let response = self.call(request)?;
        let mut body = response.into_body();
        Ok(body.read_to_vec()?)
    }
}
