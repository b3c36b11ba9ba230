//! Publishing platforms and their length limits.

use serde::{Deserialize, Serialize};

/// A publishing target platform.
///
/// # Examples
///
/// ```
/// use penna_core::Platform;
///
/// assert_eq!(format!("{}", Platform::LinkedIn), "linkedin");
/// assert_ne!(Platform::LinkedIn, Platform::Medium);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Short-form post target
    #[display("linkedin")]
    LinkedIn,
    /// Long-form article target
    #[display("medium")]
    Medium,
}

/// Per-platform hard length ceilings.
///
/// Loaded once from configuration and treated as read-only for the life of
/// the process. The reserved margins are the headroom subtracted from the
/// ceiling when instructing the model, so that most outputs land under the
/// limit without trimming.
///
/// # Examples
///
/// ```
/// use penna_core::{Platform, PlatformLimits};
///
/// let limits = PlatformLimits::default();
/// assert_eq!(limits.max_length(Platform::LinkedIn), 3000);
/// assert_eq!(limits.target_length(Platform::LinkedIn), 2750);
/// assert_eq!(limits.target_length(Platform::Medium), 4500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformLimits {
    /// Hard character ceiling for LinkedIn posts
    pub linkedin: usize,
    /// Hard character ceiling for Medium articles
    pub medium: usize,
}

/// Prompt headroom for short-form content.
const SHORT_FORM_MARGIN: usize = 250;
/// Prompt headroom for long-form content.
const LONG_FORM_MARGIN: usize = 500;

impl Default for PlatformLimits {
    fn default() -> Self {
        Self {
            linkedin: 3000,
            medium: 5000,
        }
    }
}

impl PlatformLimits {
    /// Hard character ceiling for the given platform.
    pub fn max_length(&self, platform: Platform) -> usize {
        match platform {
            Platform::LinkedIn => self.linkedin,
            Platform::Medium => self.medium,
        }
    }

    /// Reserved margin subtracted from the ceiling in generation prompts.
    pub fn margin(&self, platform: Platform) -> usize {
        match platform {
            Platform::LinkedIn => SHORT_FORM_MARGIN,
            Platform::Medium => LONG_FORM_MARGIN,
        }
    }

    /// Character budget passed to the model as an instruction.
    pub fn target_length(&self, platform: Platform) -> usize {
        self.max_length(platform)
            .saturating_sub(self.margin(platform))
    }
}
