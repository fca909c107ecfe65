use loan_calc_core::application::ApplicationLimits;

use crate::input;

/// Load application limits from a YAML or JSON file, or use the defaults.
///
/// Keys missing from the file keep their default values.
pub fn load_limits(path: Option<&str>) -> Result<ApplicationLimits, Box<dyn std::error::Error>> {
    let limits = match path {
        Some(path) => {
            let contents = input::file::read_to_string(path)?;
            // YAML is a superset of JSON, so one parser covers both formats.
            let limits: ApplicationLimits = serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse limits '{}': {}", path, e))?;
            tracing::info!(path, ?limits, "loaded application limits");
            limits
        }
        None => ApplicationLimits::default(),
    };
    limits.validate()?;
    Ok(limits)
}
