pub mod model;
pub mod repository;

pub use model::Tenant;
pub use repository::TenantRepository;
