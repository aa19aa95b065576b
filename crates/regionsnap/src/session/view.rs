// Author: Dustin Pilgrim
// License: MIT

use eventline::{debug, error, info, warn};

use regionsnap_core::{
    Calibration, CropRequest, ImageFrame, SelectError, SelectionController, SnapRequest, View,
    crop_request, snap_request,
};

use super::script::Step;

/// Something the view wants sent to the capture service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Snap(SnapRequest),
    Crop(CropRequest),
}

/// One image view: its own selection plus whatever the image currently
/// reports about its size.
#[derive(Debug)]
pub struct ViewSession {
    view: View,
    filename: String,
    calibration: Calibration,
    controller: SelectionController,
    frame: ImageFrame,
}

impl ViewSession {
    pub fn new(
        view: View,
        filename: String,
        live_calibration: Calibration,
        handle_radius: f64,
    ) -> Self {
        Self {
            view,
            filename,
            calibration: view.calibration(live_calibration),
            controller: SelectionController::new().with_handle_radius(handle_radius),
            // Nothing loaded until a frame event arrives.
            frame: ImageFrame::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Feed one event. Recoverable conditions are logged and swallowed the
    /// way the UI would show a message and carry on.
    pub fn apply(&mut self, step: &Step) -> Option<Outgoing> {
        debug!("{:?} view: {:?}", self.view, step);

        match step {
            Step::Frame {
                displayed_width,
                displayed_height,
                native_width,
                native_height,
            } => {
                self.frame = ImageFrame::new(
                    *displayed_width,
                    *displayed_height,
                    *native_width,
                    *native_height,
                );
            }

            Step::Down(p) => {
                let hit = self.controller.pointer_down(*p);
                debug!("pointer-down hit {:?}", hit);
            }

            Step::Draw(p) => self.controller.begin_draw(*p),

            Step::Grab(p) => {
                if let Err(e) = self.controller.begin_move(*p) {
                    warn!("move ignored: {e}");
                }
            }

            Step::Resize(handle, p) => match self.controller.begin_resize_named(handle, *p) {
                Ok(()) => {}
                Err(e @ SelectError::InvalidHandle(_)) => error!("resize ignored: {e}"),
                Err(e) => warn!("resize ignored: {e}"),
            },

            Step::Move(p) => self.controller.on_pointer_move(*p),

            Step::Up => self.controller.end(),

            Step::Key { dir, shift } => {
                if let Err(e) = self.controller.nudge(*dir, *shift) {
                    warn!("nudge ignored: {e}");
                }
            }

            Step::Clear => self.controller.clear(),

            Step::Snap => return self.snap().map(Outgoing::Snap),

            Step::Crop => return self.crop().map(Outgoing::Crop),
        }

        None
    }

    fn snap(&self) -> Option<SnapRequest> {
        let sel = self.controller.rect();
        match snap_request(&self.filename, sel.as_ref(), &self.frame, &self.calibration) {
            Ok(req) => {
                match req.region {
                    Some(r) => info!("snap {} region {:?}", req.filename, r),
                    None => info!("snap {} full frame", req.filename),
                }
                Some(req)
            }
            Err(e) => {
                warn!("snap skipped: {e}");
                None
            }
        }
    }

    fn crop(&mut self) -> Option<CropRequest> {
        let sel = self.controller.rect();
        match crop_request(&self.filename, sel.as_ref(), &self.frame, &self.calibration) {
            Ok(req) => {
                info!("crop {} region {:?}", req.filename, req.region);
                // the old selection doesn't describe the cropped image
                self.controller.clear();
                Some(req)
            }
            Err(e) => {
                warn!("crop skipped: {e}");
                None
            }
        }
    }
}
