pub mod health;
pub mod list;
pub mod lookup;
pub mod page;
pub mod resolve;

pub use health::health_handler;
pub use list::list_handler;
pub use lookup::lookup_handler;
pub use page::page_handler;
pub use resolve::resolve_handler;
