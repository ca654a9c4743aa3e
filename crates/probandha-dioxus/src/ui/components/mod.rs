pub mod callout;
pub mod code_block;
pub mod content_block;
pub mod error_screen;
pub mod gallery;
pub mod image_block;
pub mod post_list;
pub mod post_view;
pub mod text_block;

pub use callout::Callout;
pub use code_block::CodeBlock;
pub use content_block::ContentBlockView;
pub use error_screen::ErrorScreen;
pub use gallery::Gallery;
pub use image_block::ImageBlock;
pub use post_list::PostList;
pub use post_view::PostView;
pub use text_block::TextBlock;
