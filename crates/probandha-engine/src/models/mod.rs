pub mod blog_post;
pub mod post_file;

pub use blog_post::*;
pub use post_file::*;
