//! Logging helpers
//!
//! Builds `tracing` filter directives from [`LoggingConfig`](crate::config::LoggingConfig).

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any component-specific log levels configured in the LoggingConfig.
///
/// # Returns
///
/// A filter string in the format: "base_level,keepalive::component1=level1,keepalive::component2=level2"
///
/// # Examples
///
/// ```
/// use keepalive::config::logging::{LogFormat, LoggingConfig};
/// use keepalive::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("ping".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Compact,
///     component_levels: Some(component_levels),
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "info,keepalive::ping=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",keepalive::{}={}", component, level));
        }
    }

    filter_str
}
