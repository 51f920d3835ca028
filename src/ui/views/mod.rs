//! View components
//!
//! Each view represents a screen in the application.

mod editor;
mod media;
mod post;
mod posts;

pub use editor::{EditorAction, EditorPurpose, EditorView};
pub use media::{MediaAction, MediaView};
pub use post::{PostAction, PostView};
pub use posts::{PostsAction, PostsView};
