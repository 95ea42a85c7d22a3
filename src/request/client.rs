use async_trait::async_trait;
use futures::FutureExt;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::FetchError;
use crate::poll::Fetcher;
use crate::data::{
    ActiveContract, CompositeAnalysis, ContractCandidate, PremiumSnapshot, PressureAnalysis,
    StrategyRecommendation,
};
use crate::third_party::gold_api::{api_path::*, data::*};

/// Status and body of a completed HTTP exchange, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Moves one request over the wire. Only transport failures are errors here;
/// status handling happens in [`decode_response`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, url: &str) -> Result<RawResponse, FetchError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, url: &str) -> Result<RawResponse, FetchError> {
        let response = self.client.request(method, url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// Client for the analysis backend. Cheap to clone; every view holds one.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
        }
    }

    /// Wraps one endpoint call as a [`Fetcher`] for a polling view.
    pub fn fetcher<T, F, Fut>(&self, call: F) -> Fetcher<T>
    where
        F: Fn(ApiClient) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let api = self.clone();
        Arc::new(move || call(api.clone()).boxed())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.request(Method::GET, path).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.request(Method::POST, path).await
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        log::debug!("{method} {url}");
        let raw = self.transport.send(method, &url).await?;
        decode_response(raw)
    }

    pub async fn gold_premium(&self) -> Result<PremiumSnapshot, FetchError> {
        self.get(GOLD_PREMIUM_PATH).await
    }

    pub async fn investment_strategy(&self) -> Result<StrategyRecommendation, FetchError> {
        self.get(INVESTMENT_STRATEGY_PATH).await
    }

    pub async fn gold_analysis(&self) -> Result<CompositeAnalysis, FetchError> {
        self.get(GOLD_ANALYSIS_PATH).await
    }

    pub async fn active_contract(&self) -> Result<ActiveContract, FetchError> {
        self.get(ACTIVE_CONTRACT_PATH).await
    }

    pub async fn futures_candidates(&self) -> Result<Vec<ContractCandidate>, FetchError> {
        let response: CandidatesResponse = self.get(FUTURES_CANDIDATES_PATH).await?;
        Ok(response.candidates)
    }

    pub async fn pressure_signal(&self) -> Result<PressureAnalysis, FetchError> {
        self.get(PRESSURE_SIGNAL_PATH).await
    }

    /// Asks the backend to re-select the active contract and returns the
    /// contract it settled on.
    pub async fn update_active_contract(&self) -> Result<ActiveContract, FetchError> {
        let response: UpdateContractResponse = self.post(UPDATE_ACTIVE_CONTRACT_PATH).await?;
        response
            .contract
            .ok_or_else(|| FetchError::Decode("response has no contract".to_string()))
    }
}

/// Maps a raw response to the decoded payload or a displayable error. A
/// non-success status uses the body's `error` field when there is one.
pub fn decode_response<T: DeserializeOwned>(raw: RawResponse) -> Result<T, FetchError> {
    if !(200..300).contains(&raw.status) {
        let message = serde_json::from_str::<ApiErrorBody>(&raw.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", raw.status));
        return Err(FetchError::Api {
            status: raw.status,
            message,
        });
    }
    Ok(serde_json::from_str(&raw.body)?)
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned responses keyed by method and path.
    #[derive(Default)]
    pub struct StubTransport {
        routes: Mutex<HashMap<(Method, String), Result<RawResponse, FetchError>>>,
        calls: Mutex<Vec<(Method, String)>>,
    }

    impl StubTransport {
        pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
            self.routes.lock().unwrap().insert(
                (method, path.to_string()),
                Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
            );
        }

        pub fn fail(&self, method: Method, path: &str, err: FetchError) {
            self.routes
                .lock()
                .unwrap()
                .insert((method, path.to_string()), Err(err));
        }

        pub fn calls_to(&self, method: &Method, path: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(m, p)| m == method && p == path)
                .count()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, method: Method, url: &str) -> Result<RawResponse, FetchError> {
            let path = url
                .find("/api")
                .map_or(url, |index| &url[index..])
                .to_string();
            self.calls.lock().unwrap().push((method.clone(), path.clone()));
            self.routes
                .lock()
                .unwrap()
                .get(&(method, path.clone()))
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Transport(format!("no route for {path}"))))
        }
    }

    pub fn client(transport: &Arc<StubTransport>) -> ApiClient {
        ApiClient::new("http://127.0.0.1:5000", Arc::clone(transport) as Arc<dyn Transport>)
    }
}
