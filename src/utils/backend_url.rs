//! Resolution of the compute backend base URL from deployment state.

use std::env;
use url::{Host, Url};

/// Backend location used for local development.
pub const DEFAULT_LOCAL_BACKEND: &str = "http://localhost:8000/api/py";

/// Path the backend is mounted at on the managed platform.
pub const PLATFORM_BACKEND_PATH: &str = "/api/py";

/// Environment inputs of the resolver.
///
/// `platform_host` is set by the managed deployment platform (`VERCEL_URL`);
/// its presence means the gateway runs there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentEnv {
    pub python_api_url: Option<String>,
    pub platform_host: Option<String>,
}

impl DeploymentEnv {
    /// Reads `PYTHON_API_URL` and `VERCEL_URL`. Empty values count as unset.
    pub fn from_env() -> Self {
        let read = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            python_api_url: read("PYTHON_API_URL"),
            platform_host: read("VERCEL_URL"),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Whether `url` points at the local machine.
pub fn is_loopback(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => domain == "localhost" || domain.ends_with(".localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback() || ip.is_unspecified(),
        Some(Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
        None => false,
    }
}

/// Computes the backend base URL. Never fails.
///
/// 1. An explicit absolute URL is used verbatim, unless it points at
///    loopback while running on the platform.
/// 2. On the platform: `https://<host><path>`, where `<path>` is an explicit
///    relative path if one is configured, else `/api/py`.
/// 3. Locally: the explicit value, else [`DEFAULT_LOCAL_BACKEND`].
pub fn resolve_backend_url(env: &DeploymentEnv) -> String {
    let explicit = env.python_api_url.as_deref();
    let platform_host = env.platform_host.as_deref();

    if let Some(url) = explicit.filter(|u| is_absolute(u))
        && (platform_host.is_none() || !is_loopback(url))
    {
        return url.to_string();
    }

    if let Some(host) = platform_host {
        let path = explicit
            .filter(|u| !is_absolute(u))
            .unwrap_or(PLATFORM_BACKEND_PATH);
        let separator = if path.starts_with('/') { "" } else { "/" };

        return format!("https://{host}{separator}{path}");
    }

    explicit.unwrap_or(DEFAULT_LOCAL_BACKEND).to_string()
}
