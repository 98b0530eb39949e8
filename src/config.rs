use anyhow::Result;
use serde::Deserialize;

/// Media region used when a request does not specify one.
pub const DEFAULT_MEDIA_REGION: &str = "ap-northeast-1";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub provider: ProviderConfig,
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Endpoints for the hosted conferencing provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub region: String,
    pub meetings_endpoint: String,
    pub media_pipelines_endpoint: String,
    pub identity_endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Storage target for capture pipeline output. Capture endpoints return
    /// a configuration error when this is absent.
    pub sink_arn: Option<String>,
}

impl Config {
    /// Load configuration from an optional file plus MEETING_BRIDGE__* env vars.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "meeting-bridge")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 8080)?
            .set_default("provider.region", DEFAULT_MEDIA_REGION)?
            .set_default(
                "provider.meetings_endpoint",
                format!("https://meetings-chime.{DEFAULT_MEDIA_REGION}.amazonaws.com"),
            )?
            .set_default(
                "provider.media_pipelines_endpoint",
                format!("https://media-pipelines-chime.{DEFAULT_MEDIA_REGION}.amazonaws.com"),
            )?
            .set_default(
                "provider.identity_endpoint",
                format!("https://sts.{DEFAULT_MEDIA_REGION}.amazonaws.com"),
            )?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("MEETING_BRIDGE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
