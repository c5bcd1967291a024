pub mod trends;

pub mod prelude {
    pub use super::trends::Entity as Trends;
}
