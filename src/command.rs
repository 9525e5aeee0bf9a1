// MIPI DCS / ILI9xxx command opcodes shared by every profile.
//
// Only the registers the driver itself issues (or that the shipped
// profiles name) are listed; vendor unlock registers stay as literals in
// the profile tables.

pub const NOP: u8 = 0x00;
pub const SWRESET: u8 = 0x01; // Software reset
pub const SLPIN: u8 = 0x10; // Enter sleep mode
pub const SLPOUT: u8 = 0x11; // Exit sleep mode
pub const PTLON: u8 = 0x12; // Partial mode on
pub const NORON: u8 = 0x13; // Normal display mode on
pub const INVOFF: u8 = 0x20; // Display inversion off
pub const INVON: u8 = 0x21; // Display inversion on
pub const GAMMASET: u8 = 0x26;
pub const DISPOFF: u8 = 0x28;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A; // Column address set
pub const RASET: u8 = 0x2B; // Page (row) address set
pub const RAMWR: u8 = 0x2C; // Memory write
pub const TEON: u8 = 0x35; // Tearing effect line on
pub const MADCTL: u8 = 0x36; // Memory access control
pub const VSCRSADD: u8 = 0x37; // Vertical scrolling start address
pub const COLMOD: u8 = 0x3A; // Pixel format set

// ILI9341 extended set
pub const FRMCTR1: u8 = 0xB1;
pub const DFUNCTR: u8 = 0xB6;
pub const PWCTR1: u8 = 0xC0;
pub const PWCTR2: u8 = 0xC1;
pub const VMCTR1: u8 = 0xC5;
pub const VMCTR2: u8 = 0xC7;
pub const PWCTRA: u8 = 0xCB;
pub const PWCTRB: u8 = 0xCF;
pub const GMCTRP1: u8 = 0xE0;
pub const GMCTRN1: u8 = 0xE1;
pub const DTCA: u8 = 0xE8;
pub const DTCB: u8 = 0xEA;
pub const POSC: u8 = 0xED;
pub const ENABLE3G: u8 = 0xF2;
pub const PUMPRC: u8 = 0xF7;

// ST7789 extended set
pub const PORCTRL: u8 = 0xB2;
pub const GCTRL: u8 = 0xB7;
pub const VCOMS: u8 = 0xBB;
pub const LCMCTRL: u8 = 0xC0;
pub const VDVVRHEN: u8 = 0xC2;
pub const VRHS: u8 = 0xC3;
pub const VDVS: u8 = 0xC4;
pub const FRCTRL2: u8 = 0xC6;
pub const PWCTRL1: u8 = 0xD0;
pub const PVGAMCTRL: u8 = 0xE0;
pub const NVGAMCTRL: u8 = 0xE1;

/// MADCTL bits.
pub mod madctl {
    pub const MY: u8 = 0x80; // page address order (1: bottom to top)
    pub const MX: u8 = 0x40; // column address order (1: right to left)
    pub const MV: u8 = 0x20; // page/column exchange
    pub const ML: u8 = 0x10; // line refresh order
    pub const BGR: u8 = 0x08; // BGR colour filter panel
    pub const MH: u8 = 0x04; // horizontal refresh order
}
