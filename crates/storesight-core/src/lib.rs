mod contact;
mod insights;
mod links;
mod product;
mod social;

pub use contact::ContactDetails;
pub use insights::{BrandInsights, FaqItem};
pub use links::{ImportantLinks, LinkSlot};
pub use product::Product;
pub use social::{SocialHandles, SocialPlatform};
