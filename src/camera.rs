// Opens the default camera and converts frames into a buffer suitable for the window.
// Visual expectation: every frame comes back as a Vec<u32> of 0x00RRGGBB pixels,
// flipped left-right so moving your hand right moves it right on screen.

use log::{info, warn};

use crate::error::Error;
use crate::io::FrameSource;
use crate::types::FrameBuffer;

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

use image::{RgbImage, imageops};

// A small wrapper around nokhwa::Camera so our main loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
    mirror: bool, // selfie view
}

impl CameraCapture {
    /// Open camera `index` near the requested resolution (falls back if not exact).
    /// On success nothing is shown yet; we just hold an open stream.
    pub fn new(index: u32, width: u32, height: u32, mirror: bool) -> Result<Self, Error> {
        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        // Ask for RGB frames at the format closest to our request.
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(CameraIndex::Index(index), req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();
        info!(
            "Camera {index} streaming at {}x{} (asked for {width}x{height})",
            actual.width(),
            actual.height()
        );

        Ok(Self { cam, width: actual.width(), height: actual.height(), mirror })
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Grab and decode one frame; blocks until the camera has one.
    fn grab(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::FrameUnavailable(format!("Fetch frame: {e}")))?;

        let decoded = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::FrameUnavailable(format!("Decode RGB: {e}")))?;

        // Rebuild as our own `image` buffer from raw bytes; nokhwa may pin another version.
        let (w, h) = (decoded.width(), decoded.height());
        let mut rgb = RgbImage::from_raw(w, h, decoded.into_raw())
            .ok_or_else(|| Error::FrameUnavailable(format!("Short RGB buffer for {w}x{h}")))?;

        if self.mirror {
            imageops::flip_horizontal_in_place(&mut rgb);
        }
        Ok(pack_rgb(&rgb))
    }
}

impl FrameSource for CameraCapture {
    fn next_frame(&mut self) -> Option<FrameBuffer> {
        match self.grab() {
            Ok(fb) => Some(fb),
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }
}

/// Pack an RGB image as 0x00RRGGBB, row-major.
pub fn pack_rgb(img: &RgbImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect();
    FrameBuffer { width: w as usize, height: h as usize, pixels }
}
