pub mod category;
pub mod profile;
pub mod sample;
pub mod seed;

pub use category::{CATEGORIES, SortKey};
pub use profile::{SocialLinks, UserProfile};
pub use sample::{
    AuthorCard, Comment, FaqEntry, RelatedSample, SampleDetail, SampleLanguage, SampleRecord,
};
pub use seed::SampleStore;
