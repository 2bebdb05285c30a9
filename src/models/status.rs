// Typed status values found in SSL Labs responses
//
// Integer-coded statuses keep unrecognised wire values in an `Other` variant so
// a response always decodes and re-encodes without loss.

use crate::constants::{STATUS_DNS, STATUS_ERROR, STATUS_IN_PROGRESS, STATUS_READY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level assessment status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum AssessmentStatus {
    /// Resolving the hostname
    Dns,
    InProgress,
    Ready,
    /// Assessment failed; see the status message
    Error,
    Unknown(String),
}

impl AssessmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AssessmentStatus::Dns => STATUS_DNS,
            AssessmentStatus::InProgress => STATUS_IN_PROGRESS,
            AssessmentStatus::Ready => STATUS_READY,
            AssessmentStatus::Error => STATUS_ERROR,
            AssessmentStatus::Unknown(s) => s,
        }
    }

    pub fn is_ready(&self) -> bool {
        *self == AssessmentStatus::Ready
    }

    /// READY or ERROR: polling further won't change anything
    pub fn is_finished(&self) -> bool {
        matches!(self, AssessmentStatus::Ready | AssessmentStatus::Error)
    }
}

impl Default for AssessmentStatus {
    fn default() -> Self {
        AssessmentStatus::Unknown(String::new())
    }
}

impl From<String> for AssessmentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            STATUS_DNS => AssessmentStatus::Dns,
            STATUS_IN_PROGRESS => AssessmentStatus::InProgress,
            STATUS_READY => AssessmentStatus::Ready,
            STATUS_ERROR => AssessmentStatus::Error,
            _ => AssessmentStatus::Unknown(value),
        }
    }
}

impl From<Option<String>> for AssessmentStatus {
    fn from(value: Option<String>) -> Self {
        value.map(AssessmentStatus::from).unwrap_or_default()
    }
}

impl From<AssessmentStatus> for String {
    fn from(status: AssessmentStatus) -> Self {
        match status {
            AssessmentStatus::Unknown(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentStatus::Unknown(s) if s.is_empty() => write!(f, "<none>"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Declares an integer-coded status enum with a lossless `Other` variant.
/// A JSON `null` decodes to the value for 0.
macro_rules! int_status {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "Option<i32>", into = "i32")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value not documented by the API at the time of writing
            Other(i32),
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Other(other),
                }
            }
        }

        impl From<Option<i32>> for $name {
            fn from(value: Option<i32>) -> Self {
                $name::from(value.unwrap_or(0))
            }
        }

        impl From<$name> for i32 {
            fn from(status: $name) -> i32 {
                match status {
                    $( $name::$variant => $value, )+
                    $name::Other(value) => value,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::from(0_i32)
            }
        }
    };
}

int_status! {
    /// Result of the CVE-2014-0224 (OpenSSL CCS injection) test
    OpenSslCcsStatus {
        Failed = -1,
        Unknown = 0,
        NotVulnerable = 1,
        PossiblyVulnerable = 2,
        Vulnerable = 3,
    }
}

int_status! {
    /// Result of the CVE-2016-2107 (OpenSSL padding oracle) test
    LuckyMinus20Status {
        Failed = -1,
        Unknown = 0,
        NotVulnerable = 1,
        Vulnerable = 2,
    }
}

int_status! {
    /// Result of the POODLE TLS test
    PoodleTlsStatus {
        Timeout = -3,
        TlsNotSupported = -2,
        Failed = -1,
        Unknown = 0,
        NotVulnerable = 1,
        Vulnerable = 2,
    }
}

int_status! {
    /// Certificate revocation status
    RevocationStatus {
        NotChecked = 0,
        Revoked = 1,
        NotRevoked = 2,
        CheckError = 3,
        NoRevocationInfo = 4,
        InternalInfo = 5,
    }
}

int_status! {
    /// Result of the Ticketbleed (CVE-2016-9244) test
    TicketbleedStatus {
        Failed = -1,
        Unknown = 0,
        NotVulnerable = 1,
        Vulnerable = 2,
    }
}

int_status! {
    /// Result of the ROBOT (Bleichenbacher oracle) test
    BleichenbacherStatus {
        Failed = -1,
        Unknown = 0,
        NotVulnerable = 1,
        WeakOracle = 2,
        StrongOracle = 3,
        Inconsistent = 4,
    }
}

int_status! {
    /// Result of the CBC padding oracle family of tests
    /// (Zombie POODLE, GOLDENDOODLE, 0-Length Padding Oracle, Sleeping POODLE)
    PaddingOracleStatus {
        Failed = -1,
        Unknown = 0,
        NotVulnerable = 1,
        Vulnerable = 2,
        Exploitable = 3,
    }
}

impl OpenSslCcsStatus {
    pub fn is_vulnerable(self) -> bool {
        matches!(self, Self::PossiblyVulnerable | Self::Vulnerable)
    }
}

impl LuckyMinus20Status {
    pub fn is_vulnerable(self) -> bool {
        self == Self::Vulnerable
    }
}

impl PoodleTlsStatus {
    pub fn is_vulnerable(self) -> bool {
        self == Self::Vulnerable
    }
}

impl RevocationStatus {
    pub fn is_revoked(self) -> bool {
        self == Self::Revoked
    }
}

impl TicketbleedStatus {
    pub fn is_vulnerable(self) -> bool {
        self == Self::Vulnerable
    }
}

impl BleichenbacherStatus {
    pub fn is_vulnerable(self) -> bool {
        matches!(self, Self::WeakOracle | Self::StrongOracle)
    }
}

impl PaddingOracleStatus {
    pub fn is_vulnerable(self) -> bool {
        matches!(self, Self::Vulnerable | Self::Exploitable)
    }
}

/// HSTS policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HstsStatus {
    Absent,
    Present,
    Invalid,
    Disabled,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// HPKP policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpkpStatus {
    Absent,
    Invalid,
    Disabled,
    Incomplete,
    Partial,
    ForbiddenPinned,
    Valid,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Status of a host sharing the server's RSA key (DROWN test)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrownStatus {
    Error,
    NotChecked,
    NotCheckedSameHost,
    HandshakeFailure,
    Sslv2,
    KeyMatch,
    HostnameMatch,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Protocol version intolerance bit set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolIntolerance(pub u32);

impl ProtocolIntolerance {
    pub const TLS1_0: u32 = 1 << 0;
    pub const TLS1_1: u32 = 1 << 1;
    pub const TLS1_2: u32 = 1 << 2;
    pub const TLS1_3: u32 = 1 << 3;
    pub const TLS1_152: u32 = 1 << 4;
    pub const TLS2_152: u32 = 1 << 5;

    const NAMES: [(u32, &'static str); 6] = [
        (Self::TLS1_0, "TLS 1.0"),
        (Self::TLS1_1, "TLS 1.1"),
        (Self::TLS1_2, "TLS 1.2"),
        (Self::TLS1_3, "TLS 1.3"),
        (Self::TLS1_152, "TLS 1.152"),
        (Self::TLS2_152, "TLS 2.152"),
    ];

    pub fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag && flag != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the versions the server is intolerant to, lowest first
    pub fn iter(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}
