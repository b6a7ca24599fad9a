pub use super::sport::Entity as Sport;
