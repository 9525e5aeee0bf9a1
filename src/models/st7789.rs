// ST7789 / ST7789V. Controller RAM is 240x320; smaller glass (240x240,
// 135x240) sits at an offset inside it that depends on the scan direction.

use crate::command::*;
use crate::orientation::ColorOrder;
use crate::profile::{ControllerProfile, Offset, PixelFormat, Resolution, WindowOffsets};
use crate::sequence::RegisterStep;

const RES_240X320: Resolution = Resolution::new(240, 320);
const RES_240X240: Resolution = Resolution::new(240, 240);
const RES_135X240: Resolution = Resolution::new(135, 240);

const INIT: &[RegisterStep] = &[
    RegisterStep::with_delay(SWRESET, &[], 150),
    RegisterStep::with_delay(COLMOD, &[0x55], 10),
    RegisterStep::new(MADCTL, &[0x00]),
    RegisterStep::new(PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    RegisterStep::new(GCTRL, &[0x35]),
    RegisterStep::new(VCOMS, &[0x19]),
    RegisterStep::new(LCMCTRL, &[0x2C]),
    RegisterStep::new(VDVVRHEN, &[0x01]),
    RegisterStep::new(VRHS, &[0x12]),
    RegisterStep::new(VDVS, &[0x20]),
    RegisterStep::new(FRCTRL2, &[0x0F]), // 60 Hz
    RegisterStep::new(PWCTRL1, &[0xA4, 0xA1]),
    RegisterStep::new(
        PVGAMCTRL,
        &[0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23],
    ),
    RegisterStep::new(
        NVGAMCTRL,
        &[0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23],
    ),
    RegisterStep::new(INVON, &[]), // IPS glass
    RegisterStep::with_delay(NORON, &[], 10),
    RegisterStep::with_delay(SLPOUT, &[], 120),
    RegisterStep::with_delay(DISPON, &[], 120),
];

const OFFSETS: &[WindowOffsets] = &[
    WindowOffsets {
        resolution: RES_240X240,
        by_rotation: [Offset::new(0, 0), Offset::new(0, 0), Offset::new(0, 80), Offset::new(80, 0)],
    },
    WindowOffsets {
        resolution: RES_135X240,
        by_rotation: [
            Offset::new(52, 40),
            Offset::new(40, 53),
            Offset::new(53, 40),
            Offset::new(40, 52),
        ],
    },
];

pub const ST7789: ControllerProfile = ControllerProfile {
    name: "ST7789",
    native_resolution: RES_240X320,
    supported_resolutions: &[RES_240X320, RES_240X240, RES_135X240],
    color_order: ColorOrder::Rgb,
    pixel_format: PixelFormat::Rgb565,
    supported_pixel_formats: &[PixelFormat::Rgb565, PixelFormat::Rgb666],
    init_sequence: INIT,
    window_offsets: OFFSETS,
};
