//! API base selection.

/// API base used when the client runs on a loopback host.
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:8000";

/// Production API base.
pub const PRODUCTION_API_BASE: &str = "https://prompt-scoring-app.onrender.com";

/// Pick the API base for the host the client runs on.
pub fn resolve_api_base(host: &str) -> &'static str {
    if is_loopback(host) {
        LOCAL_API_BASE
    } else {
        PRODUCTION_API_BASE
    }
}

fn is_loopback(host: &str) -> bool {
    let host = host.trim();
    // Strip a port, keeping bracketed IPv6 intact.
    let host = match host.strip_prefix('[') {
        Some(rest) => rest.split(']').next().unwrap_or(rest),
        None if host.matches(':').count() == 1 => host.split(':').next().unwrap_or(host),
        None => host,
    };
    host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" || host == "::1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loopback_hosts_use_local_base() {
        for host in ["localhost", "127.0.0.1", "LOCALHOST", "localhost:3000", "::1", "[::1]:8080"] {
            assert_eq!(resolve_api_base(host), LOCAL_API_BASE, "{host}");
        }
    }

    #[test]
    fn test_other_hosts_use_production() {
        for host in ["prompt-scoring-app.vercel.app", "", "10.0.0.5", "localhost.example.com"] {
            assert_eq!(resolve_api_base(host), PRODUCTION_API_BASE, "{host}");
        }
    }
}
