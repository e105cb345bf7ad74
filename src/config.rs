use crate::logging::LoggingConfig;

/// Where the widget finds its elements and how it styles them.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub display_id: String,
    pub start_stop_id: String,
    pub lap_reset_id: String,
    pub laps_list_id: String,
    /// Class on the primary button while stopped.
    pub start_class: String,
    /// Class on the primary button while running.
    pub stop_class: String,
    pub lap_label_class: String,
    pub logging: LoggingConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            display_id: "display".to_string(),
            start_stop_id: "start-stop-btn".to_string(),
            lap_reset_id: "lap-reset-btn".to_string(),
            laps_list_id: "laps-list".to_string(),
            start_class: "start".to_string(),
            stop_class: "stop".to_string(),
            lap_label_class: "lap-label".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Element ids paired with the role they play, in lookup order.
    pub fn element_ids(&self) -> [(&'static str, &str); 4] {
        [
            ("display", self.display_id.as_str()),
            ("start/stop button", self.start_stop_id.as_str()),
            ("lap/reset button", self.lap_reset_id.as_str()),
            ("lap list", self.laps_list_id.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let config = WidgetConfig::default();
        let ids: Vec<&str> = config.element_ids().iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["display", "start-stop-btn", "lap-reset-btn", "laps-list"]);
        assert_eq!(config.start_class, "start");
        assert_eq!(config.stop_class, "stop");
        assert_eq!(config.lap_label_class, "lap-label");
    }

    #[test]
    fn test_custom_ids() {
        let config = WidgetConfig {
            display_id: "sw-display".to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(config.element_ids()[0], ("display", "sw-display"));
        assert_eq!(config.element_ids()[3].1, "laps-list");
    }
}
