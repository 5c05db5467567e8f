//! External configuration surface (C10, §4.7/§6).

use std::time::Duration;

/// External configuration for a session: server URL, timing, and the
/// version/agent strings sent in the `Init` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Template for the server WebSocket URL (the source picks a random
    /// `w1`..`w8` subdomain; the template carries a `{}` placeholder for it).
    pub server_url_template: String,
    /// Interval between outbound `"?,,"` keepalive frames.
    pub keepalive_interval: Duration,
    /// Timeout for the initial WebSocket handshake.
    pub handshake_timeout: Duration,
    /// `[major, minor, patch]` web-client version sent in the `Init` frame.
    pub web_version: [u16; 3],
    /// `[product, browser, browser_version]` agent strings sent in `Init`.
    pub web_agent: [String; 3],
    /// `Origin` header value used when dialing the WebSocket.
    pub origin_header: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url_template: "wss://web.whatsapp.com/ws".to_string(),
            keepalive_interval: Duration::from_secs(20),
            handshake_timeout: Duration::from_secs(15),
            web_version: [2, 2142, 12],
            web_agent: [
                "Kennan".to_string(),
                "Chrome".to_string(),
                "89.0.4389".to_string(),
            ],
            origin_header: "https://web.whatsapp.com".to_string(),
        }
    }
}

/// Consuming builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the server URL template.
    pub fn server_url_template(mut self, template: impl Into<String>) -> Self {
        self.config.server_url_template = template.into();
        self
    }

    /// Override the keepalive interval.
    pub fn keepalive_interval(mut self, interval: Duration) -> Self {
        self.config.keepalive_interval = interval;
        self
    }

    /// Override the handshake timeout.
    pub fn handshake_timeout(mut self, timeout: Duration) -> Self {
        self.config.handshake_timeout = timeout;
        self
    }

    /// Override the web-client version triple.
    pub fn web_version(mut self, version: [u16; 3]) -> Self {
        self.config.web_version = version;
        self
    }

    /// Override the agent string triple.
    pub fn web_agent(mut self, agent: [String; 3]) -> Self {
        self.config.web_agent = agent;
        self
    }

    /// Override the `Origin` header.
    pub fn origin_header(mut self, origin: impl Into<String>) -> Self {
        self.config.origin_header = origin.into();
        self
    }

    /// Finalize and return the built [`ClientConfig`].
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_external_interface_contract() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.keepalive_interval, Duration::from_secs(20));
        assert_eq!(cfg.handshake_timeout, Duration::from_secs(15));
        assert_eq!(cfg.web_version, [2, 2142, 12]);
    }

    #[test]
    fn builder_overrides_only_requested_fields() {
        let cfg = ClientConfigBuilder::new()
            .keepalive_interval(Duration::from_secs(5))
            .build();
        assert_eq!(cfg.keepalive_interval, Duration::from_secs(5));
        assert_eq!(cfg.handshake_timeout, ClientConfig::default().handshake_timeout);
    }
}
