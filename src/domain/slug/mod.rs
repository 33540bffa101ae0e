pub mod repository;
pub mod services;
pub mod value_objects;

pub use repository::SlugRepository;
pub use services::UniqueSlugService;
pub use value_objects::{Slug, SlugFields};
