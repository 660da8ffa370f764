// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod modal;
pub mod page_header;
pub mod responsive;
pub mod search_bar;
pub mod text_field;

// Primitive wrappers
pub mod switch;
pub mod toast;

// Shell chrome
pub mod bottom_nav;
pub mod sidebar;
pub mod top_bar;

pub use badge::*;
pub use bottom_nav::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use modal::*;
pub use page_header::*;
pub use responsive::*;
pub use search_bar::*;
pub use sidebar::*;
pub use switch::*;
pub use text_field::*;
pub use toast::*;
pub use top_bar::*;
