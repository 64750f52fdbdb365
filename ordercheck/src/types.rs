use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token naming one broadcast request.
///
/// Ids are compared by exact string equality. The derived ordering exists
/// only so ids can sit in sorted collections; it carries no protocol
/// meaning.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId(s.to_string())
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId(s)
    }
}

/// Group token recovered from a log file name, e.g. `g2`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct GroupId(pub String);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        GroupId(s.to_string())
    }
}

/// One log file reduced to its milestone sequence.
///
/// `requests` holds the ids in file order, duplicates included. Nothing
/// mutates a `ParsedLog` after construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParsedLog {
    pub source_name: String,
    pub requests: Vec<RequestId>,
}
