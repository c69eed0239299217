mod login;
pub use login::Login;

mod protected;
pub use protected::Protected;

mod surfaces;
pub use surfaces::Surfaces;

mod not_found;
pub use not_found::NotFound;
