// GC9A01 240x240 round panel.
//
// The vendor registers (0x62..0x98 etc.) are only writable after the
// 0xFE/0xEF inter-register unlock, so the unlock pair must stay first.

use crate::command::*;
use crate::orientation::ColorOrder;
use crate::profile::{ControllerProfile, PixelFormat, Resolution};
use crate::sequence::RegisterStep;

const RES_240X240: Resolution = Resolution::new(240, 240);

const INIT: &[RegisterStep] = &[
    RegisterStep::new(0xEF, &[0x00]),
    RegisterStep::new(0xEB, &[0x14]),
    RegisterStep::new(0xFE, &[0x00]), // inter register enable 1
    RegisterStep::new(0xEF, &[0x00]), // inter register enable 2
    RegisterStep::new(0xEB, &[0x14]),
    RegisterStep::new(0x84, &[0x40]),
    RegisterStep::new(0x85, &[0xFF]),
    RegisterStep::new(0x86, &[0xFF]),
    RegisterStep::new(0x87, &[0xFF]),
    RegisterStep::new(0x88, &[0x0A]),
    RegisterStep::new(0x89, &[0x21]),
    RegisterStep::new(0x8A, &[0x00]),
    RegisterStep::new(0x8B, &[0x80]),
    RegisterStep::new(0x8C, &[0x01]),
    RegisterStep::new(0x8D, &[0x01]),
    RegisterStep::new(0x8E, &[0xFF]),
    RegisterStep::new(0x8F, &[0xFF]),
    RegisterStep::new(DFUNCTR, &[0x00, 0x00]),
    RegisterStep::new(MADCTL, &[0x48]),
    RegisterStep::new(COLMOD, &[0x05]),
    RegisterStep::new(0x90, &[0x08, 0x08, 0x08, 0x08]),
    RegisterStep::new(0xBD, &[0x06]),
    RegisterStep::new(0xBC, &[0x00]),
    RegisterStep::new(0xFF, &[0x60, 0x01, 0x04]),
    RegisterStep::new(0xC3, &[0x13]), // VREG1A
    RegisterStep::new(0xC4, &[0x13]), // VREG1B
    RegisterStep::new(0xC9, &[0x22]), // VREG2A
    RegisterStep::new(0xBE, &[0x11]),
    RegisterStep::new(0xE1, &[0x10, 0x0E]),
    RegisterStep::new(0xDF, &[0x21, 0x0C, 0x02]),
    RegisterStep::new(0xF0, &[0x45, 0x09, 0x08, 0x08, 0x26, 0x2A]), // gamma 1
    RegisterStep::new(0xF1, &[0x43, 0x70, 0x72, 0x36, 0x37, 0x6F]), // gamma 2
    RegisterStep::new(0xF2, &[0x45, 0x09, 0x08, 0x08, 0x26, 0x2A]), // gamma 3
    RegisterStep::new(0xF3, &[0x43, 0x70, 0x72, 0x36, 0x37, 0x6F]), // gamma 4
    RegisterStep::new(0xED, &[0x1B, 0x0B]),
    RegisterStep::new(0xAE, &[0x77]),
    RegisterStep::new(0xCD, &[0x63]),
    RegisterStep::new(0x70, &[0x07, 0x07, 0x04, 0x0E, 0x0F, 0x09, 0x07, 0x08, 0x03]),
    RegisterStep::new(0xE8, &[0x34]), // frame rate
    RegisterStep::new(
        0x62,
        &[0x18, 0x0D, 0x71, 0xED, 0x70, 0x70, 0x18, 0x0F, 0x71, 0xEF, 0x70, 0x70],
    ),
    RegisterStep::new(
        0x63,
        &[0x18, 0x11, 0x71, 0xF1, 0x70, 0x70, 0x18, 0x13, 0x71, 0xF3, 0x70, 0x70],
    ),
    RegisterStep::new(0x64, &[0x28, 0x29, 0xF1, 0x01, 0xF1, 0x00, 0x07]),
    RegisterStep::new(0x66, &[0x3C, 0x00, 0xCD, 0x67, 0x45, 0x45, 0x10, 0x00, 0x00, 0x00]),
    RegisterStep::new(0x67, &[0x00, 0x3C, 0x00, 0x00, 0x00, 0x01, 0x54, 0x10, 0x32, 0x98]),
    RegisterStep::new(0x74, &[0x10, 0x85, 0x80, 0x00, 0x00, 0x4E, 0x00]),
    RegisterStep::new(0x98, &[0x3E, 0x07]),
    RegisterStep::new(TEON, &[0x00]),
    RegisterStep::new(INVON, &[]),
    RegisterStep::with_delay(SLPOUT, &[], 20),
    RegisterStep::with_delay(DISPON, &[], 120),
];

pub const GC9A01: ControllerProfile = ControllerProfile {
    name: "GC9A01",
    native_resolution: RES_240X240,
    supported_resolutions: &[RES_240X240],
    color_order: ColorOrder::Bgr,
    pixel_format: PixelFormat::Rgb565,
    supported_pixel_formats: &[PixelFormat::Rgb565, PixelFormat::Rgb666],
    init_sequence: INIT,
    window_offsets: &[],
};
