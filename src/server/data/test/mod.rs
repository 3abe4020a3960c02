mod asset;
mod location;
mod tracking_device;
mod tracking_point;
mod trip;
mod user;
