use serde::{Deserialize, Serialize};

/// The fixed set of well-known informational pages a storefront is expected
/// to expose.
///
/// Used to address slots in [`ImportantLinks`] without giving callers a way
/// to invent new keys at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSlot {
    ContactUs,
    PrivacyPolicy,
    RefundPolicy,
    Blogs,
    TrackOrder,
    Faqs,
}

impl LinkSlot {
    /// All slots, in the order they are serialized.
    pub const ALL: [LinkSlot; 6] = [
        LinkSlot::ContactUs,
        LinkSlot::PrivacyPolicy,
        LinkSlot::RefundPolicy,
        LinkSlot::Blogs,
        LinkSlot::TrackOrder,
        LinkSlot::Faqs,
    ];
}

/// Discovered URLs for the fixed set of well-known storefront pages.
///
/// The key set is the field set: a slot that was never matched stays `None`
/// (explicit absence), and no key can be added or removed at runtime.
/// [`ImportantLinks::set_if_absent`] is the only mutator, so the
/// first-match-wins merge policy is enforced structurally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantLinks {
    pub contact_us: Option<String>,
    pub privacy_policy: Option<String>,
    pub refund_policy: Option<String>,
    pub blogs: Option<String>,
    pub track_order: Option<String>,
    pub faqs: Option<String>,
}

impl ImportantLinks {
    /// Fills `slot` with `url` only if the slot is still empty.
    ///
    /// Returns `true` if the slot was filled by this call. A filled slot is
    /// never overwritten, so the first discovered link for a slot wins.
    pub fn set_if_absent(&mut self, slot: LinkSlot, url: String) -> bool {
        let entry = self.slot_mut(slot);
        if entry.is_none() {
            *entry = Some(url);
            true
        } else {
            false
        }
    }

    /// Returns the URL stored in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: LinkSlot) -> Option<&str> {
        match slot {
            LinkSlot::ContactUs => self.contact_us.as_deref(),
            LinkSlot::PrivacyPolicy => self.privacy_policy.as_deref(),
            LinkSlot::RefundPolicy => self.refund_policy.as_deref(),
            LinkSlot::Blogs => self.blogs.as_deref(),
            LinkSlot::TrackOrder => self.track_order.as_deref(),
            LinkSlot::Faqs => self.faqs.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: LinkSlot) -> &mut Option<String> {
        match slot {
            LinkSlot::ContactUs => &mut self.contact_us,
            LinkSlot::PrivacyPolicy => &mut self.privacy_policy,
            LinkSlot::RefundPolicy => &mut self.refund_policy,
            LinkSlot::Blogs => &mut self.blogs,
            LinkSlot::TrackOrder => &mut self.track_order,
            LinkSlot::Faqs => &mut self.faqs,
        }
    }
}
