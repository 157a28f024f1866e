//! Default TOML config template with inline documentation comments.

use sawaed_common::ConfigError;
use std::path::Path;
use tracing::info;

/// The default config file content. Every value is commented out, so the
/// file documents the defaults without pinning them.
pub fn default_config_toml() -> &'static str {
    r##"# Sawa'ed Al-Khair site configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[messaging]
# domain = "wa.me"
# recipient = "201012448385"   # digits only, international format
# target = "_blank"

[dispatch]
# placeholder = "-"            # sent for empty optional fields
# Replace the volunteer/contact forms by declaring [[dispatch.forms]] tables:
# [[dispatch.forms]]
# name = "volunteer"
# selector = "#volunteer-form"
# intro = "طلب تطوع جديد:"
# fields = [
#   { id = "full-name", label = "الاسم الكامل" },
#   { id = "email", label = "البريد الإلكتروني", optional = true },
# ]

[timing]
# overlay_delay_ms = 1500      # 0-10000
# success_banner_ms = 5000     # 500-30000
# fade_ms = 300                # 0-2000
# fade_in_delay_ms = 10        # 0-1000
# copy_notice_ms = 2000        # 500-10000
# scroll_debounce_ms = 20      # 0-1000

[layout]
# mobile_breakpoint = 768.0    # 320-2560
# header_fallback_height = 80.0
# back_to_top_threshold = 300.0
# reveal_stagger_ms = 40       # 0-500
# reveal_duration_ms = 300     # 0-2000
# reveal_offset_px = 15.0      # 0-200

[messages]
# copy_success = "تم النسخ!"
# copy_failure = "فشل النسخ"
# copy_hint = "انقر للنسخ"
# submit_success = "تم الإرسال بنجاح! شكراً لك."
# back_to_top_label = "العودة للأعلى"

[messages.validation]
# required = "هذا الحقل مطلوب"
# invalid_email = "البريد الإلكتروني غير صحيح"
# invalid_phone = "رقم الهاتف غير صحيح (يجب أن يبدأ بـ 01 ويتكون من 11 رقم)"
# min_value = "القيمة يجب أن تكون {min} على الأقل"
# max_value = "القيمة يجب أن تكون {max} كحد أقصى"

[storage]
# amount_key = "selectedDonationAmount"
# category_key = "selectedCategory"
# frequency_key = "donationFrequency"

[bindings]
# menu_toggle = ".menu-toggle"
# nav_menu = ".nav-menu"
# site_header = ".site-header"
# form = "form"
# required_field = "input[required], textarea[required], select[required]"
# amount_button = ".amount-btn"
# custom_amount_class = "custom-amount"
# filter_tab = ".filter-tab"
# filterable_item = "[data-status]"
# copyable = ".account-number, .phone-number"

[logging]
# directive = "sawaed=info"
# lifecycle_events = true
"##
}

/// Write the default config template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
