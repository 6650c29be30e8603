mod html;
mod summary;
pub mod views;

pub use html::render_html;
