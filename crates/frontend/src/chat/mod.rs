pub mod api;
pub mod language_select;
pub mod share_dialog;
pub mod shared_page;
pub mod sidebar;
pub mod store;
pub mod upload;
pub mod view;

pub use view::ChatPage;
