//! Page events forwarded by the host into the site runtime.
//!
//! The host (a browser shim or a test harness) listens on the document and
//! forwards each event it cares about, tagged with the element it hit. `N`
//! is the host's element handle type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PageEvent<N> {
    Click { target: N },
    Input { target: N },
    Blur { target: N },
    Change { target: N },
    Submit { form: N },
    MouseEnter { target: N },
    MouseLeave { target: N },
    Scroll,
    Resize,
    AnimationFrame,
    VisibilityChange { hidden: bool },
    Online,
    Offline,
    #[serde(other)]
    Unknown,
}

impl<N: DeserializeOwned> PageEvent<N> {
    /// Parses one event message posted by the host.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<N> PageEvent<N> {
    /// Swaps the element handle, e.g. a JSON placeholder for a live element.
    /// `f` is only called for events that carry a target.
    pub fn try_map_target<M, E>(
        self,
        f: impl FnOnce(N) -> Result<M, E>,
    ) -> Result<PageEvent<M>, E> {
        Ok(match self {
            Self::Click { target } => PageEvent::Click { target: f(target)? },
            Self::Input { target } => PageEvent::Input { target: f(target)? },
            Self::Blur { target } => PageEvent::Blur { target: f(target)? },
            Self::Change { target } => PageEvent::Change { target: f(target)? },
            Self::Submit { form } => PageEvent::Submit { form: f(form)? },
            Self::MouseEnter { target } => PageEvent::MouseEnter { target: f(target)? },
            Self::MouseLeave { target } => PageEvent::MouseLeave { target: f(target)? },
            Self::Scroll => PageEvent::Scroll,
            Self::Resize => PageEvent::Resize,
            Self::AnimationFrame => PageEvent::AnimationFrame,
            Self::VisibilityChange { hidden } => PageEvent::VisibilityChange { hidden },
            Self::Online => PageEvent::Online,
            Self::Offline => PageEvent::Offline,
            Self::Unknown => PageEvent::Unknown,
        })
    }

    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::Input { .. } => "input",
            Self::Blur { .. } => "blur",
            Self::Change { .. } => "change",
            Self::Submit { .. } => "submit",
            Self::MouseEnter { .. } => "mouseenter",
            Self::MouseLeave { .. } => "mouseleave",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::AnimationFrame => "animationframe",
            Self::VisibilityChange { .. } => "visibilitychange",
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Unknown => "unknown",
        }
    }
}

/// What the host should do with the original browser event afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

impl EventOutcome {
    pub fn proceed() -> Self {
        Self {
            default_prevented: false,
        }
    }

    pub fn prevent() -> Self {
        Self {
            default_prevented: true,
        }
    }

    /// Serialized reply for the host page.
    pub fn to_json(&self) -> String {
        // Plain bool fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Combines two outcomes; any handler preventing the default wins.
    pub fn merge(self, other: Self) -> Self {
        Self {
            default_prevented: self.default_prevented || other.default_prevented,
        }
    }
}
