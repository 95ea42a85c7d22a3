//! Response envelopes that wrap the view models.

use serde::Deserialize;

use crate::data::{ActiveContract, ContractCandidate};

/// Body attached to every non-success response.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatesResponse {
    #[serde(default, deserialize_with = "crate::data::nullable_vec")]
    pub candidates: Vec<ContractCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContractResponse {
    #[serde(default)]
    pub contract: Option<ActiveContract>,
}
