/*
 * Font attribute constants from wingdi.h, together with the stock object,
 * background mode and device capability indices the bindings accept.
 */

pub const LF_FACESIZE: usize = 32;

// Font weight constants
pub const FW_DONTCARE: i32 = 0;
pub const FW_THIN: i32 = 100;
pub const FW_EXTRALIGHT: i32 = 200;
pub const FW_ULTRALIGHT: i32 = FW_EXTRALIGHT;
pub const FW_LIGHT: i32 = 300;
pub const FW_NORMAL: i32 = 400;
pub const FW_REGULAR: i32 = 400;
pub const FW_MEDIUM: i32 = 500;
pub const FW_SEMIBOLD: i32 = 600;
pub const FW_DEMIBOLD: i32 = FW_SEMIBOLD;
pub const FW_BOLD: i32 = 700;
pub const FW_EXTRABOLD: i32 = 800;
pub const FW_ULTRABOLD: i32 = FW_EXTRABOLD;
pub const FW_HEAVY: i32 = 900;
pub const FW_BLACK: i32 = FW_HEAVY;

// Charset constants
pub const ANSI_CHARSET: u8 = 0;
pub const DEFAULT_CHARSET: u8 = 1;
pub const SYMBOL_CHARSET: u8 = 2;
pub const SHIFTJIS_CHARSET: u8 = 128;
pub const HANGEUL_CHARSET: u8 = 129;
pub const HANGUL_CHARSET: u8 = 129;
pub const GB2312_CHARSET: u8 = 134;
pub const CHINESEBIG5_CHARSET: u8 = 136;
pub const GREEK_CHARSET: u8 = 161;
pub const TURKISH_CHARSET: u8 = 162;
pub const HEBREW_CHARSET: u8 = 177;
pub const ARABIC_CHARSET: u8 = 178;
pub const BALTIC_CHARSET: u8 = 186;
pub const RUSSIAN_CHARSET: u8 = 204;
pub const THAI_CHARSET: u8 = 222;
pub const EASTEUROPE_CHARSET: u8 = 238;
pub const OEM_CHARSET: u8 = 255;
pub const JOHAB_CHARSET: u8 = 130;
pub const VIETNAMESE_CHARSET: u8 = 163;
pub const MAC_CHARSET: u8 = 77;

// Font output precision constants
pub const OUT_DEFAULT_PRECIS: u8 = 0;
pub const OUT_STRING_PRECIS: u8 = 1;
pub const OUT_CHARACTER_PRECIS: u8 = 2;
pub const OUT_STROKE_PRECIS: u8 = 3;
pub const OUT_TT_PRECIS: u8 = 4;
pub const OUT_DEVICE_PRECIS: u8 = 5;
pub const OUT_RASTER_PRECIS: u8 = 6;
pub const OUT_TT_ONLY_PRECIS: u8 = 7;
pub const OUT_OUTLINE_PRECIS: u8 = 8;
pub const OUT_PS_ONLY_PRECIS: u8 = 10;

// Font clipping precision constants
pub const CLIP_DEFAULT_PRECIS: u8 = 0;
pub const CLIP_CHARACTER_PRECIS: u8 = 1;
pub const CLIP_STROKE_PRECIS: u8 = 2;
pub const CLIP_MASK: u8 = 15;
pub const CLIP_LH_ANGLES: u8 = 16;
pub const CLIP_TT_ALWAYS: u8 = 32;
pub const CLIP_EMBEDDED: u8 = 128;

// Font output quality constants
pub const DEFAULT_QUALITY: u8 = 0;
pub const DRAFT_QUALITY: u8 = 1;
pub const PROOF_QUALITY: u8 = 2;
pub const NONANTIALIASED_QUALITY: u8 = 3;
pub const ANTIALIASED_QUALITY: u8 = 4;
pub const CLEARTYPE_QUALITY: u8 = 5;

// Font pitch constants
pub const DEFAULT_PITCH: u8 = 0;
pub const FIXED_PITCH: u8 = 1;
pub const VARIABLE_PITCH: u8 = 2;

// Font family constants
pub const FF_DECORATIVE: u8 = 80;
pub const FF_DONTCARE: u8 = 0;
pub const FF_MODERN: u8 = 48;
pub const FF_ROMAN: u8 = 16;
pub const FF_SCRIPT: u8 = 64;
pub const FF_SWISS: u8 = 32;

// Stock objects
pub const WHITE_BRUSH: i32 = 0;
pub const LTGRAY_BRUSH: i32 = 1;
pub const GRAY_BRUSH: i32 = 2;
pub const DKGRAY_BRUSH: i32 = 3;
pub const BLACK_BRUSH: i32 = 4;
pub const NULL_BRUSH: i32 = 5;
pub const HOLLOW_BRUSH: i32 = NULL_BRUSH;
pub const WHITE_PEN: i32 = 6;
pub const BLACK_PEN: i32 = 7;
pub const NULL_PEN: i32 = 8;
pub const OEM_FIXED_FONT: i32 = 10;
pub const ANSI_FIXED_FONT: i32 = 11;
pub const ANSI_VAR_FONT: i32 = 12;
pub const SYSTEM_FONT: i32 = 13;
pub const DEVICE_DEFAULT_FONT: i32 = 14;
pub const DEFAULT_PALETTE: i32 = 15;
pub const SYSTEM_FIXED_FONT: i32 = 16;
pub const DEFAULT_GUI_FONT: i32 = 17;

// Background modes
pub const TRANSPARENT: i32 = 1;
pub const OPAQUE: i32 = 2;

// GetDeviceCaps indices
pub const HORZRES: i32 = 8;
pub const VERTRES: i32 = 10;
pub const BITSPIXEL: i32 = 12;
pub const LOGPIXELSX: i32 = 88;
pub const LOGPIXELSY: i32 = 90;

// Returned by SelectObject when selecting a region fails.
pub const HGDI_ERROR: usize = usize::MAX;
// Returned by SetTextColor and SetBkColor on failure.
pub const CLR_INVALID: u32 = 0xffff_ffff;
