pub use super::asset::Entity as Asset;
pub use super::deployment_id::Entity as DeploymentId;
pub use super::location::Entity as Location;
pub use super::role::Entity as Role;
pub use super::token::Entity as Token;
pub use super::tracking_device::Entity as TrackingDevice;
pub use super::tracking_point::Entity as TrackingPoint;
pub use super::trip::Entity as Trip;
pub use super::trip_leg::Entity as TripLeg;
pub use super::user::Entity as User;
