use fsw_config::Config;

/// Operator-facing label + URL pair. Display only: never validated,
/// never probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub label: &'static str,
    pub url: String,
}

impl ServiceEndpoint {
    fn new(label: &'static str, url: String) -> Self {
        Self { label, url }
    }
}

/// Banner lines announcing where the running services can be reached.
/// The mobile line appears only when `display.mobile_host` is configured.
pub fn banner_endpoints(config: &Config) -> Vec<ServiceEndpoint> {
    let mut endpoints = vec![
        ServiceEndpoint::new(
            "Local Web Interface",
            format!("http://localhost:{}", config.web.port),
        ),
        ServiceEndpoint::new(
            "API Documentation",
            format!("http://localhost:{}/docs", config.backend.port),
        ),
        ServiceEndpoint::new(
            "API Health Check",
            format!("http://localhost:{}", config.backend.port),
        ),
    ];

    if let Some(ref host) = config.display.mobile_host {
        endpoints.push(ServiceEndpoint::new(
            "Mobile Web Interface",
            format!("http://{}:{}", host, config.web.port),
        ));
    }

    endpoints
}
