/*
 * Locale identifiers and locale information types from winnls.h, plus the
 * language id building blocks from winnt.h.
 */

use crate::kernel32::{LcType, Lcid};
use crate::types::Langid;

// Predefined locale ids
pub const LOCALE_CUSTOM_DEFAULT: Lcid = 0x0c00;
pub const LOCALE_CUSTOM_UI_DEFAULT: Lcid = 0x1400;
pub const LOCALE_CUSTOM_UNSPECIFIED: Lcid = 0x1000;
pub const LOCALE_INVARIANT: Lcid = 0x007f;
pub const LOCALE_USER_DEFAULT: Lcid = 0x0400;
pub const LOCALE_SYSTEM_DEFAULT: Lcid = 0x0800;

// Predefined locale information types
pub const LOCALE_SISO3166CTRYNAME: LcType = 0x5a;
pub const LOCALE_SISO3166CTRYNAME2: LcType = 0x68;
pub const LOCALE_SISO639LANGNAME: LcType = 0x59;
pub const LOCALE_SISO639LANGNAME2: LcType = 0x67;
pub const LOCALE_SNAME: LcType = 0x5c;
pub const LOCALE_SENGLISHLANGUAGENAME: LcType = 0x1001;
pub const LOCALE_SENGLISHCOUNTRYNAME: LcType = 0x1002;

// Language and sort ids
pub const LANG_NEUTRAL: Langid = 0x00;
pub const LANG_ENGLISH: Langid = 0x09;
pub const LANG_GERMAN: Langid = 0x07;
pub const SUBLANG_NEUTRAL: Langid = 0x00;
pub const SUBLANG_DEFAULT: Langid = 0x01;
pub const SUBLANG_SYS_DEFAULT: Langid = 0x02;
pub const SUBLANG_ENGLISH_US: Langid = 0x01;
pub const SORT_DEFAULT: u32 = 0x0;
