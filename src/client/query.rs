// Analyze request parameters and query-string encoding

use crate::error::{LabError, Result};
use serde::{Deserialize, Serialize};
use url::form_urlencoded::Serializer;

/// Options accepted by the `analyze` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeParams {
    /// Publish results on the public SSL Labs boards
    pub publish: bool,
    /// Discard cached results and start a new assessment
    pub start_new: bool,
    /// Deliver cached results if available, never start a new assessment
    pub from_cache: bool,
    /// Maximum acceptable age of cached results, in hours
    pub max_age: Option<u32>,
    /// Include endpoint details in the analyze response
    pub all: bool,
    /// Proceed even when the certificate doesn't match the hostname
    pub ignore_mismatch: bool,
}

impl AnalyzeParams {
    /// Options as `key=value` pairs, in wire order
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.publish {
            pairs.push(("publish", "on".to_string()));
        }
        if self.start_new {
            pairs.push(("startNew", "on".to_string()));
        }
        if self.from_cache {
            pairs.push(("fromCache", "on".to_string()));
        }
        if let Some(max_age) = self.max_age {
            pairs.push(("maxAge", max_age.to_string()));
        }
        if self.all {
            pairs.push(("all", "on".to_string()));
        }
        if self.ignore_mismatch {
            pairs.push(("ignoreMismatch", "on".to_string()));
        }
        pairs
    }

    /// Encode the options only; empty when none are set
    pub fn to_query(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Reject option combinations the service refuses
    pub fn validate(&self) -> Result<()> {
        if self.start_new && self.from_cache {
            return Err(LabError::config(
                "startNew and fromCache can't be used together",
            ));
        }
        Ok(())
    }

    /// Options re-sent while polling a running assessment
    ///
    /// Anything that would restart or republish the assessment is dropped.
    pub fn for_polling(&self) -> Self {
        Self {
            all: self.all,
            ignore_mismatch: self.ignore_mismatch,
            ..Self::default()
        }
    }
}

/// Full analyze query: the url-encoded host followed by the options
pub fn analyze_query(host: &str, params: &AnalyzeParams) -> String {
    let mut serializer = Serializer::new(String::new());
    serializer.append_pair("host", host);
    for (key, value) in params.pairs() {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// getEndpointData query for one endpoint of a host
pub fn endpoint_query(host: &str, ip: &str) -> String {
    Serializer::new(String::new())
        .append_pair("host", host)
        .append_pair("s", ip)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params() {
        assert_eq!(AnalyzeParams::default().to_query(), "");
        assert_eq!(
            analyze_query("example.com", &AnalyzeParams::default()),
            "host=example.com"
        );
    }

    #[test]
    fn test_all_params_in_wire_order() {
        let params = AnalyzeParams {
            publish: true,
            start_new: true,
            from_cache: true,
            max_age: Some(24),
            all: true,
            ignore_mismatch: true,
        };
        assert_eq!(
            params.to_query(),
            "publish=on&startNew=on&fromCache=on&maxAge=24&all=on&ignoreMismatch=on"
        );
    }

    #[test]
    fn test_query_is_stable() {
        let params = AnalyzeParams {
            all: true,
            start_new: true,
            ..Default::default()
        };
        let first = analyze_query("example.com", &params);
        let second = analyze_query("example.com", &params);
        assert_eq!(first, second);
        assert_eq!(first, "host=example.com&startNew=on&all=on");
    }

    #[test]
    fn test_max_age_zero_is_sent() {
        let params = AnalyzeParams {
            from_cache: true,
            max_age: Some(0),
            ..Default::default()
        };
        assert_eq!(params.to_query(), "fromCache=on&maxAge=0");
    }

    #[test]
    fn test_host_is_encoded() {
        assert_eq!(
            analyze_query("bad host&x=1", &AnalyzeParams::default()),
            "host=bad+host%26x%3D1"
        );
    }

    #[test]
    fn test_endpoint_query() {
        assert_eq!(
            endpoint_query("example.com", "2001:db8::1"),
            "host=example.com&s=2001%3Adb8%3A%3A1"
        );
    }

    #[test]
    fn test_validate_rejects_start_new_with_from_cache() {
        let params = AnalyzeParams {
            start_new: true,
            from_cache: true,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(LabError::Config { .. })));
        assert!(AnalyzeParams::default().validate().is_ok());
    }

    #[test]
    fn test_for_polling_drops_restart_options() {
        let params = AnalyzeParams {
            publish: true,
            start_new: true,
            max_age: Some(12),
            all: true,
            ignore_mismatch: true,
            ..Default::default()
        };
        let polling = params.for_polling();
        assert_eq!(polling.to_query(), "all=on&ignoreMismatch=on");
    }
}
