use thiserror::Error;

/// A network specification that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing '/prefix' in network specification '{0}'")]
    MissingPrefix(String),
    #[error("invalid IPv4 address '{addr}' in '{input}'")]
    InvalidAddress { input: String, addr: String },
    #[error("invalid prefix length '{prefix}' in '{input}'")]
    InvalidPrefix { input: String, prefix: String },
    #[error("prefix length {0} is out of range (0-32)")]
    PrefixOutOfRange(u8),
}

/// A host list that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Collecting would need more memory than the host limit allows.
    #[error("{range} holds {hosts} hosts, above the limit of {limit}; iterate it lazily instead")]
    RangeTooLarge { range: String, hosts: u64, limit: u64 },
}

/// The OS did not report an interface configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("no network interfaces were reported by the system")]
    NoInterfaces,
    #[error("failed to enumerate network interfaces: {0}")]
    Os(String),
}

/// Failure of a lookup against the interface table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
    /// Enumeration worked, but no non-loopback IPv4 address is bound.
    #[error("no local IPv4 address found")]
    NoAddressFound,
    /// None of the candidate ranges contains a local address.
    #[error("no local address lies within any candidate range")]
    NoMatchingRanges,
}
