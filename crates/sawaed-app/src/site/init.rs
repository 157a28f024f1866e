//! Page setup run once the document is ready.

use std::path::Path;

use sawaed_common::SiteError;
use sawaed_config::load_from_path;
use sawaed_dom::{BindingReport, Dom, Role, SessionStore};
use tracing::{debug, info, warn};

use super::core::Site;

impl<D: Dom> Site<D> {
    /// Loads and validates the TOML config at `path`, then builds the site.
    pub fn from_config_file(
        dom: D,
        store: Box<dyn SessionStore>,
        path: &Path,
    ) -> sawaed_common::Result<Self> {
        let config = load_from_path(path)?;
        Ok(Self::new(dom, store, config))
    }

    /// Fails on the first of `roles` with no element on the page.
    pub fn require(&self, roles: &[Role]) -> sawaed_common::Result<()> {
        match roles
            .iter()
            .find(|role| self.bindings.resolve(&self.dom, **role).is_none())
        {
            Some(role) => Err(SiteError::Binding(role.name().to_string())),
            None => Ok(()),
        }
    }

    /// Checks the binding table against the page and installs the widgets
    /// that need markup of their own. A second call does nothing.
    pub fn mount(&mut self) -> BindingReport {
        let report = self.bindings.check(&self.dom);
        if self.mounted {
            return report;
        }
        if !report.invalid.is_empty() {
            warn!(
                invalid = report.invalid.len(),
                "some behaviors are disabled by invalid selectors"
            );
        }

        let copyable = self.clipboard.prepare(&mut self.dom, &self.bindings);
        self.back_to_top.mount(&mut self.dom);
        self.animations.mount(&mut self.dom, &self.bindings);

        self.mounted = true;
        debug!(
            bound = report.bound.len(),
            unbound = report.unbound.len(),
            copyable,
            animations = self.animations.is_enabled(),
            "site mounted"
        );
        info!("Sawa'ed Al-Khair site initialized");
        report
    }

    /// Installs the global subscriber filtered by `[logging] directive`.
    /// Returns `false` if one was already set.
    pub fn init_logging(&self) -> bool {
        crate::logging::init(&self.config.logging.directive)
    }

    /// Installs the OS clipboard as the primary copy backend.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_system_clipboard(self) -> Self {
        match sawaed_widgets::SystemClipboard::new() {
            Ok(clipboard) => self.with_clipboard(Box::new(clipboard)),
            Err(e) => {
                warn!("system clipboard unavailable: {e}");
                self
            }
        }
    }
}
