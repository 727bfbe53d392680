pub mod content_page;

pub use content_page::ContentPage;
