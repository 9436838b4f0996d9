// Simple standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod checkbox;
pub mod page_header;
pub mod search_bar;
pub mod separator;

// Overlay and list machinery
pub mod dialog;
pub mod toast;
pub mod virtual_list;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use checkbox::*;
pub use dialog::*;
pub use page_header::*;
pub use search_bar::*;
pub use separator::*;
pub use toast::*;
pub use virtual_list::*;
