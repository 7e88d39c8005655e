mod documents;
mod error;
pub mod login;
mod owner_dashboard;
mod payments;
mod properties;
mod rentals;
mod tenant_dashboard;
mod tenants;

pub use documents::DocumentsPage;
pub use error::NotFoundPage;
pub use login::LoginPage;
pub use owner_dashboard::OwnerDashboardPage;
pub use payments::PaymentsPage;
pub use properties::PropertiesPage;
pub use rentals::RentalsPage;
pub use tenant_dashboard::TenantDashboardPage;
pub use tenants::TenantsPage;
