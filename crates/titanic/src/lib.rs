//! Facade crate for the Titanic API shared modules.
//! Re-exports domain/kernel primitives so applications import from one place.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use titanic_domain as domain;
pub use titanic_kernel as kernel;

pub mod server {
    pub mod router {
        pub use titanic_kernel::server::router::system_router;
    }
}
