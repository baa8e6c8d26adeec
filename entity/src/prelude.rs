pub use super::car::Entity as Car;
pub use super::customer::Entity as Customer;
pub use super::location::Entity as Location;
pub use super::message::Entity as Message;
pub use super::order::Entity as Order;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
