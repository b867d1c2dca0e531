//! Per-call accumulator.
//!
//! Each stage writes into a fresh `DetectionBuilder`; `build` freezes it into
//! the immutable [`Detection`]. Nothing is shared between calls.

use crate::api::Detection;
use crate::platform::{Platform, PlatformVersion};
use crate::rules::platform::PlatformMatch;
use crate::{Browser, BrowserMatch, CompatibilityView, Traits, Version};

#[derive(Debug, Default)]
pub struct DetectionBuilder {
    user_agent: String,
    browser: Browser,
    version: Version,
    traits: Traits,
    compatibility_view: Option<CompatibilityView>,
    platform: Platform,
    platform_version: PlatformVersion,
    aol: Option<Version>,
}

impl DetectionBuilder {
    pub fn new(user_agent: &str) -> Self {
        DetectionBuilder { user_agent: user_agent.to_string(), ..Default::default() }
    }

    /// Record the winning browser rule.
    pub fn browser(&mut self, m: BrowserMatch) -> &mut Self {
        self.browser = m.browser;
        self.version = m.version;
        self.traits |= m.traits;
        self.compatibility_view = m.compatibility_view;
        self
    }

    /// Record the platform stage. It may add `MOBILE` but never clears it.
    pub fn platform(&mut self, m: PlatformMatch) -> &mut Self {
        self.platform = m.platform;
        self.platform_version = m.version;
        self.traits.set(Traits::X64, m.x64);
        if m.mobile {
            self.traits |= Traits::MOBILE;
        }
        self
    }

    pub fn aol(&mut self, aol: Option<Version>) -> &mut Self {
        self.aol = aol;
        self
    }

    pub fn build(self) -> Detection {
        Detection {
            user_agent: self.user_agent,
            browser: self.browser,
            version: self.version,
            traits: self.traits,
            compatibility_view: self.compatibility_view,
            platform: self.platform,
            platform_version: self.platform_version,
            aol: self.aol,
        }
    }
}
