// Author: Dustin Pilgrim
// License: MIT

pub mod action;
pub mod calibration;
pub mod controller;
pub mod direction;
pub mod error;
pub mod frame;
pub mod handle;
pub mod hit;
pub mod mapper;
pub mod mode;
pub mod rect;
pub mod view;

pub use action::{CropRequest, DeviceSize, SnapRequest, Swipe, crop_request, snap_request};
pub use calibration::Calibration;
pub use controller::SelectionController;
pub use direction::Direction;
pub use error::{Result, SelectError};
pub use frame::ImageFrame;
pub use handle::Handle;
pub use hit::{Hit, hit_test};
pub use mapper::map_to_native;
pub use mode::Interaction;
pub use rect::{NativePoint, NativeRect, Point, Rect};
pub use view::View;
