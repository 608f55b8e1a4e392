pub use super::soldier::Entity as Soldier;
