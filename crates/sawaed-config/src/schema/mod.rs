//! Configuration schema types for the site runtime.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the site ships with.

mod bindings;
mod dispatch;
mod layout;
mod logging;
mod messages;
mod messaging;
mod storage;
mod timing;

pub use bindings::*;
pub use dispatch::*;
pub use layout::*;
pub use logging::*;
pub use messages::*;
pub use messaging::*;
pub use storage::*;
pub use timing::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[derive(Default)]
pub struct SiteConfig {
    pub messaging: MessagingConfig,
    pub dispatch: DispatchConfig,
    pub timing: TimingConfig,
    pub layout: LayoutConfig,
    pub messages: MessagesConfig,
    pub storage: StorageConfig,
    pub bindings: BindingsConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messaging_targets_whatsapp() {
        let config = SiteConfig::default();
        assert_eq!(config.messaging.domain, "wa.me");
        assert_eq!(config.messaging.recipient, "201012448385");
        assert_eq!(config.messaging.target, "_blank");
    }

    #[test]
    fn default_dispatch_has_both_forms_in_order() {
        let config = SiteConfig::default();
        let names: Vec<&str> = config
            .dispatch
            .forms
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["volunteer", "contact"]);
        assert_eq!(config.dispatch.placeholder, "-");
    }

    #[test]
    fn volunteer_form_optional_fields() {
        let form = DispatchForm::volunteer();
        assert_eq!(form.fields.len(), 10);
        let optional: Vec<&str> = form
            .fields
            .iter()
            .filter(|f| f.optional)
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(optional, ["email", "experience", "skills"]);
    }

    #[test]
    fn contact_form_optional_fields() {
        let form = DispatchForm::contact();
        assert_eq!(form.fields.len(), 5);
        assert!(form.fields[2].optional);
        assert_eq!(form.fields[2].id, "contact-email");
    }

    #[test]
    fn default_timings() {
        let t = TimingConfig::default();
        assert_eq!(t.overlay_delay().as_millis(), 1500);
        assert_eq!(t.success_banner().as_millis(), 5000);
        assert_eq!(t.fade().as_millis(), 300);
        assert_eq!(t.fade_in_delay().as_millis(), 10);
        assert_eq!(t.copy_notice().as_millis(), 2000);
        assert_eq!(t.scroll_debounce().as_millis(), 20);
    }

    #[test]
    fn bound_messages_are_formatted() {
        let m = ValidationMessages {
            min_value: "at least {min}".into(),
            max_value: "at most {max}".into(),
            ..Default::default()
        };
        assert_eq!(m.min_value_for(10.0), "at least 10");
        assert_eq!(m.max_value_for("2.50"), "at most 2.50");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
[messaging]
recipient = "201000000000"
"#,
        )
        .unwrap();
        assert_eq!(config.messaging.recipient, "201000000000");
        assert_eq!(config.messaging.domain, "wa.me");
        assert_eq!(config.storage.amount_key, "selectedDonationAmount");
        assert_eq!(config.layout.mobile_breakpoint, 768.0);
    }

    #[test]
    fn dispatch_forms_parse_from_toml() {
        let config: SiteConfig = toml::from_str(
            r##"
[[dispatch.forms]]
name = "newsletter"
selector = "#newsletter"
intro = "New subscriber:"
fields = [
  { id = "nl-name", label = "Name" },
  { id = "nl-email", label = "Email", optional = true },
]
"##,
        )
        .unwrap();
        assert_eq!(config.dispatch.forms.len(), 1);
        let form = &config.dispatch.forms[0];
        assert_eq!(form.name, "newsletter");
        assert!(!form.fields[0].optional);
        assert!(form.fields[1].optional);
    }
}
