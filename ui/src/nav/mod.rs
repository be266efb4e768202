//! Navigation model shared by every platform shell: entries, icons, the
//! route provider registry and the router host capability.

mod entry;
mod error;
mod host;
mod icon;
mod provider;

pub use entry::NavEntry;
pub use error::NavError;
pub use host::{NavHost, RoutedHost, RouterHost};
pub use icon::Icon;
pub use provider::{register_routes, validate_entries, RouteProvider};
