// Output module - Output formatting (JSON, Terminal)

use serde::Serialize;

pub mod json;
pub mod terminal;

/// Everything collected for one host: the final analyze record and, when
/// requested, the getEndpointData record of each endpoint
#[derive(Debug, Clone, Serialize)]
pub struct HostResult<H, E> {
    pub report: H,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoint_details: Vec<E>,
}
