/// How the CSRF token travels between client and server.
///
/// Exactly one mode is active for the widget's lifetime. It is resolved once
/// at configuration time and drives both token retrieval and submission:
/// header mode reads a response header and echoes the token in a request
/// header; field mode reads a JSON body field and echoes the token as an
/// extra field of the submit body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsrfTransport {
    /// Token carried in the named HTTP header
    Header(String),
    /// Token carried under the named key of a JSON body
    Field(String),
}

impl CsrfTransport {
    /// Resolve the transport from the two optional config names. Header wins
    /// when both are set. Returns `None` when neither is usable.
    pub fn resolve(header_name: Option<&str>, field_name: Option<&str>) -> Option<Self> {
        if let Some(name) = header_name.filter(|n| !n.is_empty()) {
            return Some(CsrfTransport::Header(name.to_string()));
        }
        field_name
            .filter(|n| !n.is_empty())
            .map(|n| CsrfTransport::Field(n.to_string()))
    }

    /// The body key the token is injected under, when in field mode.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            CsrfTransport::Header(_) => None,
            CsrfTransport::Field(name) => Some(name),
        }
    }

    pub fn is_field_mode(&self) -> bool {
        matches!(self, CsrfTransport::Field(_))
    }
}
