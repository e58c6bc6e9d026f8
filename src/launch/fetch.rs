//! HTTP fetch of the launch configuration.

use std::io;
use std::time::Duration;

use super::logic::ConfigFetcher;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches the configuration string from a fixed endpoint with ureq.
#[derive(Debug, Clone)]
pub struct HttpConfigFetcher {
    endpoint: String,
}

/// Device details sent along as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub os: String,
    pub language: String,
    pub country: String,
    pub device_model: String,
}

impl DeviceInfo {
    /// Derive the details from the running platform and `LANG`.
    pub fn detect() -> Self {
        let (language, country) = locale_parts(std::env::var("LANG").ok().as_deref());
        Self {
            os: std::env::consts::OS.to_string(),
            language,
            country,
            device_model: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Split a POSIX locale like `en_US.UTF-8` into (`en`, `US`).
pub fn locale_parts(lang: Option<&str>) -> (String, String) {
    let base = lang
        .unwrap_or("")
        .split(['.', '@'])
        .next()
        .unwrap_or("");
    let mut parts = base.splitn(2, '_');
    let language = match parts.next() {
        Some(l) if !l.is_empty() && l != "C" && l != "POSIX" => l.to_lowercase(),
        _ => "en".to_string(),
    };
    let country = match parts.next() {
        Some(c) if !c.is_empty() => c.to_uppercase(),
        _ => "US".to_string(),
    };
    (language, country)
}

impl HttpConfigFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ConfigFetcher for HttpConfigFetcher {
    fn fetch_configuration(&self) -> io::Result<String> {
        let device = DeviceInfo::detect();
        log::debug!("fetching launch configuration from {}", self.endpoint);

        let response = ureq::get(&self.endpoint)
            .timeout(FETCH_TIMEOUT)
            .set("User-Agent", concat!("icefish/", env!("CARGO_PKG_VERSION")))
            .set("Cache-Control", "no-cache")
            .set("Pragma", "no-cache")
            .query("os", &device.os)
            .query("lng", &device.language)
            .query("country", &device.country)
            .query("devicemodel", &device.device_model)
            .call()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

        response.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parts() {
        assert_eq!(
            locale_parts(Some("de_AT.UTF-8")),
            ("de".to_string(), "AT".to_string())
        );
        assert_eq!(
            locale_parts(Some("fr_CA@euro")),
            ("fr".to_string(), "CA".to_string())
        );
        assert_eq!(locale_parts(Some("C")), ("en".to_string(), "US".to_string()));
        assert_eq!(locale_parts(None), ("en".to_string(), "US".to_string()));
        assert_eq!(locale_parts(Some("ja")), ("ja".to_string(), "US".to_string()));
    }

    #[test]
    fn test_unreachable_endpoint_is_an_error() {
        let fetcher = HttpConfigFetcher::new("http://127.0.0.1:9/config");
        assert!(fetcher.fetch_configuration().is_err());
    }
}
