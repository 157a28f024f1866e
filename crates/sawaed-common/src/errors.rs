use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("dom error: {0}")]
    DomError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("missing page binding: {0}")]
    Binding(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/site.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/site.toml");

        let err = ConfigError::ParseError("expected `=`".into());
        assert_eq!(err.to_string(), "config parse error: expected `=`");

        let err = ConfigError::ValidationError("timing.overlay_delay_ms".into());
        assert_eq!(
            err.to_string(),
            "config validation error: timing.overlay_delay_ms"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ClipboardError("permission denied".into());
        assert_eq!(err.to_string(), "clipboard error: permission denied");

        let err = PlatformError::StorageError("quota exceeded".into());
        assert_eq!(err.to_string(), "storage error: quota exceeded");

        let err = PlatformError::NotSupported("navigator.clipboard".into());
        assert_eq!(err.to_string(), "not supported: navigator.clipboard");
    }

    #[test]
    fn site_error_from_config() {
        let err: SiteError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn site_error_from_platform() {
        let err: SiteError = PlatformError::DomError("detached node".into()).into();
        assert!(matches!(err, SiteError::Platform(_)));
        assert_eq!(err.to_string(), "dom error: detached node");
    }

    #[test]
    fn binding_variant_names_the_role() {
        let err = SiteError::Binding("nav_menu".into());
        assert_eq!(err.to_string(), "missing page binding: nav_menu");
    }
}
