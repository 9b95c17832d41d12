use std::fmt;

#[derive(Debug)]
pub enum AirportError {
    Timeout,
    ConnectionFailed(String),
    DnsResolution(String),
    ProxyError(String),
    RateLimited,
    Unauthorized,
    HttpStatus(u16),
    TlsError(String),
    Decode(String),
    NotFound(String),
    MissingAccessKey,
    Validation(String),
}

impl fmt::Display for AirportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(
                f,
                "request timed out — aviationstack may be slow or unreachable. \
                 Try increasing --timeout or check your connection"
            ),
            Self::ConnectionFailed(detail) => write!(
                f,
                "connection failed — check your internet connection ({detail})"
            ),
            Self::DnsResolution(host) => write!(
                f,
                "DNS resolution failed for {host} — check your internet connection"
            ),
            Self::ProxyError(detail) => write!(
                f,
                "proxy error — check your --proxy URL is correct ({detail})"
            ),
            Self::RateLimited => write!(
                f,
                "rate limited by aviationstack (HTTP 429) — the free plan allows a \
                 limited number of requests per month; wait before retrying"
            ),
            Self::Unauthorized => write!(
                f,
                "aviationstack rejected the access key (HTTP 401/403) — check \
                 --access-key or the AVIATIONSTACK_ACCESS_KEY environment variable"
            ),
            Self::HttpStatus(status) => write!(
                f,
                "unexpected HTTP status {status} from aviationstack"
            ),
            Self::TlsError(detail) => write!(
                f,
                "TLS/SSL error — connection to aviationstack failed ({detail})"
            ),
            Self::Decode(detail) => write!(
                f,
                "failed to decode aviationstack response — {detail}. \
                 This may indicate an API format change"
            ),
            Self::NotFound(code) => write!(f, "no airport found for code \"{code}\""),
            Self::MissingAccessKey => write!(
                f,
                "no access key — pass --access-key or set AVIATIONSTACK_ACCESS_KEY"
            ),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AirportError {}

pub fn from_http_error(err: wreq::Error) -> AirportError {
    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if err.is_timeout() {
        return AirportError::Timeout;
    }

    if err.is_connect() {
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("getaddrinfo") {
            return AirportError::DnsResolution(msg);
        }
        return AirportError::ConnectionFailed(msg);
    }

    if lower.contains("proxy") || lower.contains("socks") {
        return AirportError::ProxyError(msg);
    }

    if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        return AirportError::TlsError(msg);
    }

    if lower.contains("builder error") && lower.contains("uri") {
        return AirportError::ProxyError(msg);
    }

    AirportError::ConnectionFailed(msg)
}
