use super::Logger;
use crate::settings::LogSettings;

/// Logger from the default settings, which use the dummy backend.
pub fn get_logger(name: &str) -> Box<dyn Logger> {
    get_logger_with(name, None)
}

pub fn get_logger_with(name: &str, settings: Option<&LogSettings>) -> Box<dyn Logger> {
    match settings {
        Some(settings) => settings.backend().logger(name, settings.max_depth()),
        None => {
            let settings = LogSettings::default();
            settings.backend().logger(name, settings.max_depth())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MaxDepth;

    #[test]
    fn test_default_logger_is_dummy() {
        let logger = get_logger("axe");
        assert_eq!(logger.backend_name(), "dummy");
        assert_eq!(logger.name(), "axe");
        assert_eq!(logger.max_depth(), MaxDepth::default());
    }

    #[test]
    fn test_settings_select_backend_and_depth() {
        let mut settings = LogSettings::default();
        settings.use_tracing_backend();
        settings.set_max_depth(3).unwrap();

        let logger = get_logger_with("axe", Some(&settings));

        assert_eq!(logger.backend_name(), "tracing");
        assert_eq!(logger.max_depth().get(), 3);
    }
}
