// ILI9341 240x320, common on 2.4"/2.8"/3.2" SPI modules.

use crate::command::*;
use crate::orientation::ColorOrder;
use crate::profile::{ControllerProfile, PixelFormat, Resolution};
use crate::sequence::RegisterStep;

const RES_240X320: Resolution = Resolution::new(240, 320);

const INIT: &[RegisterStep] = &[
    RegisterStep::with_delay(SWRESET, &[], 120),
    RegisterStep::new(PWCTRB, &[0x00, 0xC1, 0x30]),
    RegisterStep::new(POSC, &[0x64, 0x03, 0x12, 0x81]),
    RegisterStep::new(DTCA, &[0x85, 0x00, 0x78]),
    RegisterStep::new(PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    RegisterStep::new(PUMPRC, &[0x20]),
    RegisterStep::new(DTCB, &[0x00, 0x00]),
    RegisterStep::new(PWCTR1, &[0x23]),
    RegisterStep::new(PWCTR2, &[0x10]),
    RegisterStep::new(VMCTR1, &[0x3E, 0x28]),
    RegisterStep::new(VMCTR2, &[0x86]),
    RegisterStep::new(MADCTL, &[0x48]),
    RegisterStep::new(VSCRSADD, &[0x00]),
    RegisterStep::new(COLMOD, &[0x55]),
    RegisterStep::new(FRMCTR1, &[0x00, 0x18]),
    RegisterStep::new(DFUNCTR, &[0x08, 0x82, 0x27]),
    RegisterStep::new(ENABLE3G, &[0x00]), // 3-gamma off
    RegisterStep::new(GAMMASET, &[0x01]),
    RegisterStep::new(
        GMCTRP1,
        &[0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09, 0x00],
    ),
    RegisterStep::new(
        GMCTRN1,
        &[0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36, 0x0F],
    ),
    RegisterStep::with_delay(SLPOUT, &[], 120),
    RegisterStep::with_delay(DISPON, &[], 100),
];

pub const ILI9341: ControllerProfile = ControllerProfile {
    name: "ILI9341",
    native_resolution: RES_240X320,
    supported_resolutions: &[RES_240X320],
    color_order: ColorOrder::Bgr,
    pixel_format: PixelFormat::Rgb565,
    supported_pixel_formats: &[PixelFormat::Rgb565, PixelFormat::Rgb666],
    init_sequence: INIT,
    window_offsets: &[],
};
