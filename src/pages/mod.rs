pub mod ceremony;
pub mod clearance;
pub mod home;
pub mod unauthorized;

pub use ceremony::CeremonyPage;
pub use clearance::ClearancePage;
pub use home::HomePage;
pub use unauthorized::UnauthorizedPage;
