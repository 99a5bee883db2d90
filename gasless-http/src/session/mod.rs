mod session;
mod store;

pub use session::Session;
pub use store::SessionStore;
