pub mod model;
pub mod repository;

pub use model::House;
pub use repository::HouseRepository;
