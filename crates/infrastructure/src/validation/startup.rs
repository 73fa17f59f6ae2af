//! Startup checks for the gateway configuration
//!
//! Hard errors (missing token, malformed URLs) are reported by
//! [`AppConfig::validate`]; this module flags settings that load fine but
//! are unsafe in production.

use std::fmt;

use crate::config::AppConfig;

/// Severity level for startup warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningSeverity {
    /// Informational - no action required
    Info,
    /// Warning - should be addressed but not critical
    Warning,
    /// Critical - blocks startup in production
    Critical,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A configuration issue found at startup
#[derive(Debug, Clone)]
pub struct StartupWarning {
    pub severity: WarningSeverity,
    /// Short code identifying the warning type
    pub code: &'static str,
    pub message: String,
    pub recommendation: &'static str,
}

impl StartupWarning {
    fn new(
        severity: WarningSeverity,
        code: &'static str,
        message: impl Into<String>,
        recommendation: &'static str,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            recommendation,
        }
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, WarningSeverity::Critical)
    }
}

impl fmt::Display for StartupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} - {}",
            self.severity, self.code, self.message, self.recommendation
        )
    }
}

/// Checks configuration for production hazards
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupValidator;

impl StartupValidator {
    /// All warnings, critical first
    #[must_use]
    pub fn validate(config: &AppConfig) -> Vec<StartupWarning> {
        let is_production = config.environment.is_production();
        let mut warnings = Vec::new();

        Self::check_cors(config, is_production, &mut warnings);
        Self::check_upstream_tls(config, is_production, &mut warnings);

        if !is_production {
            warnings.push(StartupWarning::new(
                WarningSeverity::Info,
                "CFG004",
                "Error responses include upstream details",
                "Set GBAKA_ENVIRONMENT=production to hide them",
            ));
        }

        warnings.sort_by(|a, b| b.severity.cmp(&a.severity));
        warnings
    }

    /// Whether the server should refuse to start
    #[must_use]
    pub fn should_block_startup(config: &AppConfig, warnings: &[StartupWarning]) -> bool {
        config.environment.is_production() && warnings.iter().any(StartupWarning::is_critical)
    }

    /// Log all warnings using tracing
    pub fn log_warnings(warnings: &[StartupWarning]) {
        for warning in warnings {
            match warning.severity {
                WarningSeverity::Critical => tracing::error!(
                    code = warning.code,
                    message = %warning.message,
                    recommendation = warning.recommendation,
                    "Configuration issue"
                ),
                WarningSeverity::Warning => tracing::warn!(
                    code = warning.code,
                    message = %warning.message,
                    recommendation = warning.recommendation,
                    "Configuration warning"
                ),
                WarningSeverity::Info => tracing::info!(
                    code = warning.code,
                    message = %warning.message,
                    recommendation = warning.recommendation,
                    "Configuration notice"
                ),
            }
        }
    }

    fn check_cors(config: &AppConfig, is_production: bool, warnings: &mut Vec<StartupWarning>) {
        let origins = &config.server.allowed_origins;

        if origins.is_empty() {
            let (severity, message) = if is_production {
                (
                    WarningSeverity::Critical,
                    "No CORS origins configured (cross-origin requests are refused)",
                )
            } else {
                (
                    WarningSeverity::Info,
                    "No CORS origins configured (any origin is allowed in development)",
                )
            };
            warnings.push(StartupWarning::new(
                severity,
                "CFG001",
                message,
                "Set server.allowed_origins to the frontend's origin",
            ));
        } else if is_production && origins.iter().any(|o| o.contains("localhost")) {
            warnings.push(StartupWarning::new(
                WarningSeverity::Warning,
                "CFG002",
                "CORS allows localhost origins in production",
                "Replace the development origins in server.allowed_origins",
            ));
        }
    }

    fn check_upstream_tls(
        config: &AppConfig,
        is_production: bool,
        warnings: &mut Vec<StartupWarning>,
    ) {
        if !is_production {
            return;
        }

        let upstreams = [
            ("mapbox.base_url", &config.mapbox.base_url),
            ("osm.nominatim_url", &config.osm.nominatim_url),
            ("osm.tile_url", &config.osm.tile_url),
        ];
        for (name, url) in upstreams {
            if url.starts_with("http://") {
                warnings.push(StartupWarning::new(
                    WarningSeverity::Warning,
                    "CFG003",
                    format!("{name} is not HTTPS ({url})"),
                    "Use an https:// upstream so the access token is not sent in clear text",
                ));
            }
        }
    }
}
