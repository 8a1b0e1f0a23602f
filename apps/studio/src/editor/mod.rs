// Form component: edits in, replacement documents out.
// Rendering and persistence live elsewhere; handlers only route through the session.

pub mod edits;
pub mod handlers;

pub use edits::{apply_edit, EditError, FormEdit};
