use serde::{Deserialize, Serialize};

/// Social platforms the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Twitter,
    Tiktok,
    Youtube,
}

impl SocialPlatform {
    /// All recognized platforms.
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
        SocialPlatform::Twitter,
        SocialPlatform::Tiktok,
        SocialPlatform::Youtube,
    ];
}

/// Up to one discovered account URL per social platform.
///
/// Absence is `None`, never an empty string. [`SocialHandles::set_if_absent`]
/// is the only mutator: the first anchor matching a platform wins and later
/// matches are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandles {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
}

impl SocialHandles {
    /// Stores `url` for `platform` only if no URL is recorded for it yet.
    ///
    /// Returns `true` if this call stored the URL.
    pub fn set_if_absent(&mut self, platform: SocialPlatform, url: String) -> bool {
        let entry = self.slot_mut(platform);
        if entry.is_none() {
            *entry = Some(url);
            true
        } else {
            false
        }
    }

    /// Returns the URL recorded for `platform`, if any.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Instagram => self.instagram.as_deref(),
            SocialPlatform::Facebook => self.facebook.as_deref(),
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Tiktok => self.tiktok.as_deref(),
            SocialPlatform::Youtube => self.youtube.as_deref(),
        }
    }

    fn slot_mut(&mut self, platform: SocialPlatform) -> &mut Option<String> {
        match platform {
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Tiktok => &mut self.tiktok,
            SocialPlatform::Youtube => &mut self.youtube,
        }
    }
}
