/*
 * Constant tables from winuser.h: window messages, styles, ShowWindow and
 * MessageBox flags, predefined resources and system metrics.
 */
#![allow(clippy::identity_op)]

// Window message constants
pub const WM_APP: u32 = 32768;
pub const WM_ACTIVATE: u32 = 6;
pub const WM_ACTIVATEAPP: u32 = 28;
pub const WM_AFXFIRST: u32 = 864;
pub const WM_AFXLAST: u32 = 895;
pub const WM_ASKCBFORMATNAME: u32 = 780;
pub const WM_CANCELJOURNAL: u32 = 75;
pub const WM_CANCELMODE: u32 = 31;
pub const WM_CAPTURECHANGED: u32 = 533;
pub const WM_CHANGECBCHAIN: u32 = 781;
pub const WM_CHAR: u32 = 258;
pub const WM_CHARTOITEM: u32 = 47;
pub const WM_CHILDACTIVATE: u32 = 34;
pub const WM_CLEAR: u32 = 771;
pub const WM_CLOSE: u32 = 16;
pub const WM_COMMAND: u32 = 273;
pub const WM_COMMNOTIFY: u32 = 68; // obsolete
pub const WM_COMPACTING: u32 = 65;
pub const WM_COMPAREITEM: u32 = 57;
pub const WM_CONTEXTMENU: u32 = 123;
pub const WM_COPY: u32 = 769;
pub const WM_COPYDATA: u32 = 74;
pub const WM_CREATE: u32 = 1;
pub const WM_CTLCOLORBTN: u32 = 309;
pub const WM_CTLCOLORDLG: u32 = 310;
pub const WM_CTLCOLOREDIT: u32 = 307;
pub const WM_CTLCOLORLISTBOX: u32 = 308;
pub const WM_CTLCOLORMSGBOX: u32 = 306;
pub const WM_CTLCOLORSCROLLBAR: u32 = 311;
pub const WM_CTLCOLORSTATIC: u32 = 312;
pub const WM_CUT: u32 = 768;
pub const WM_DEADCHAR: u32 = 259;
pub const WM_DELETEITEM: u32 = 45;
pub const WM_DESTROY: u32 = 2;
pub const WM_DESTROYCLIPBOARD: u32 = 775;
pub const WM_DEVICECHANGE: u32 = 537;
pub const WM_DEVMODECHANGE: u32 = 27;
pub const WM_DISPLAYCHANGE: u32 = 126;
pub const WM_DRAWCLIPBOARD: u32 = 776;
pub const WM_DRAWITEM: u32 = 43;
pub const WM_DROPFILES: u32 = 563;
pub const WM_ENABLE: u32 = 10;
pub const WM_ENDSESSION: u32 = 22;
pub const WM_ENTERIDLE: u32 = 289;
pub const WM_ENTERMENULOOP: u32 = 529;
pub const WM_ENTERSIZEMOVE: u32 = 561;
pub const WM_ERASEBKGND: u32 = 20;
pub const WM_EXITMENULOOP: u32 = 530;
pub const WM_EXITSIZEMOVE: u32 = 562;
pub const WM_FONTCHANGE: u32 = 29;
pub const WM_GETDLGCODE: u32 = 135;
pub const WM_GETFONT: u32 = 49;
pub const WM_GETHOTKEY: u32 = 51;
pub const WM_GETICON: u32 = 127;
pub const WM_GETMINMAXINFO: u32 = 36;
pub const WM_GETTEXT: u32 = 13;
pub const WM_GETTEXTLENGTH: u32 = 14;
pub const WM_HANDHELDFIRST: u32 = 856;
pub const WM_HANDHELDLAST: u32 = 863;
pub const WM_HELP: u32 = 83;
pub const WM_HOTKEY: u32 = 786;
pub const WM_HSCROLL: u32 = 276;
pub const WM_HSCROLLCLIPBOARD: u32 = 782;
pub const WM_ICONERASEBKGND: u32 = 39;
pub const WM_INITDIALOG: u32 = 272;
pub const WM_INITMENU: u32 = 278;
pub const WM_INITMENUPOPUP: u32 = 279;
pub const WM_INPUT: u32 = 0x00FF;
pub const WM_INPUTLANGCHANGE: u32 = 81;
pub const WM_INPUTLANGCHANGEREQUEST: u32 = 80;
pub const WM_KEYDOWN: u32 = 256;
pub const WM_KEYUP: u32 = 257;
pub const WM_KILLFOCUS: u32 = 8;
pub const WM_MDIACTIVATE: u32 = 546;
pub const WM_MDICASCADE: u32 = 551;
pub const WM_MDICREATE: u32 = 544;
pub const WM_MDIDESTROY: u32 = 545;
pub const WM_MDIGETACTIVE: u32 = 553;
pub const WM_MDIICONARRANGE: u32 = 552;
pub const WM_MDIMAXIMIZE: u32 = 549;
pub const WM_MDINEXT: u32 = 548;
pub const WM_MDIREFRESHMENU: u32 = 564;
pub const WM_MDIRESTORE: u32 = 547;
pub const WM_MDISETMENU: u32 = 560;
pub const WM_MDITILE: u32 = 550;
pub const WM_MEASUREITEM: u32 = 44;
pub const WM_GETOBJECT: u32 = 0x003D;
pub const WM_CHANGEUISTATE: u32 = 0x0127;
pub const WM_UPDATEUISTATE: u32 = 0x0128;
pub const WM_QUERYUISTATE: u32 = 0x0129;
pub const WM_UNINITMENUPOPUP: u32 = 0x0125;
pub const WM_MENURBUTTONUP: u32 = 290;
pub const WM_MENUCOMMAND: u32 = 0x0126;
pub const WM_MENUGETOBJECT: u32 = 0x0124;
pub const WM_MENUDRAG: u32 = 0x0123;
pub const WM_APPCOMMAND: u32 = 0x0319;
pub const WM_MENUCHAR: u32 = 288;
pub const WM_MENUSELECT: u32 = 287;
pub const WM_MOVE: u32 = 3;
pub const WM_MOVING: u32 = 534;
pub const WM_NCACTIVATE: u32 = 134;
pub const WM_NCCALCSIZE: u32 = 131;
pub const WM_NCCREATE: u32 = 129;
pub const WM_NCDESTROY: u32 = 130;
pub const WM_NCHITTEST: u32 = 132;
pub const WM_NCLBUTTONDBLCLK: u32 = 163;
pub const WM_NCLBUTTONDOWN: u32 = 161;
pub const WM_NCLBUTTONUP: u32 = 162;
pub const WM_NCMBUTTONDBLCLK: u32 = 169;
pub const WM_NCMBUTTONDOWN: u32 = 167;
pub const WM_NCMBUTTONUP: u32 = 168;
pub const WM_NCXBUTTONDOWN: u32 = 171;
pub const WM_NCXBUTTONUP: u32 = 172;
pub const WM_NCXBUTTONDBLCLK: u32 = 173;
pub const WM_NCMOUSEHOVER: u32 = 0x02A0;
pub const WM_NCMOUSELEAVE: u32 = 0x02A2;
pub const WM_NCMOUSEMOVE: u32 = 160;
pub const WM_NCPAINT: u32 = 133;
pub const WM_NCRBUTTONDBLCLK: u32 = 166;
pub const WM_NCRBUTTONDOWN: u32 = 164;
pub const WM_NCRBUTTONUP: u32 = 165;
pub const WM_NEXTDLGCTL: u32 = 40;
pub const WM_NEXTMENU: u32 = 531;
pub const WM_NOTIFY: u32 = 78;
pub const WM_NOTIFYFORMAT: u32 = 85;
pub const WM_NULL: u32 = 0;
pub const WM_PAINT: u32 = 15;
pub const WM_PAINTCLIPBOARD: u32 = 777;
pub const WM_PAINTICON: u32 = 38;
pub const WM_PALETTECHANGED: u32 = 785;
pub const WM_PALETTEISCHANGING: u32 = 784;
pub const WM_PARENTNOTIFY: u32 = 528;
pub const WM_PASTE: u32 = 770;
pub const WM_PENWINFIRST: u32 = 896;
pub const WM_PENWINLAST: u32 = 911;
pub const WM_POWER: u32 = 72;
pub const WM_POWERBROADCAST: u32 = 536;
pub const WM_PRINT: u32 = 791;
pub const WM_PRINTCLIENT: u32 = 792;
pub const WM_QUERYDRAGICON: u32 = 55;
pub const WM_QUERYENDSESSION: u32 = 17;
pub const WM_QUERYNEWPALETTE: u32 = 783;
pub const WM_QUERYOPEN: u32 = 19;
pub const WM_QUEUESYNC: u32 = 35;
pub const WM_QUIT: u32 = 18;
pub const WM_RENDERALLFORMATS: u32 = 774;
pub const WM_RENDERFORMAT: u32 = 773;
pub const WM_SETCURSOR: u32 = 32;
pub const WM_SETFOCUS: u32 = 7;
pub const WM_SETFONT: u32 = 48;
pub const WM_SETHOTKEY: u32 = 50;
pub const WM_SETICON: u32 = 128;
pub const WM_SETREDRAW: u32 = 11;
pub const WM_SETTEXT: u32 = 12;
pub const WM_SETTINGCHANGE: u32 = 26;
pub const WM_SHOWWINDOW: u32 = 24;
pub const WM_SIZE: u32 = 5;
pub const WM_SIZECLIPBOARD: u32 = 779;
pub const WM_SIZING: u32 = 532;
pub const WM_SPOOLERSTATUS: u32 = 42;
pub const WM_STYLECHANGED: u32 = 125;
pub const WM_STYLECHANGING: u32 = 124;
pub const WM_SYSCHAR: u32 = 262;
pub const WM_SYSCOLORCHANGE: u32 = 21;
pub const WM_SYSCOMMAND: u32 = 274;
pub const WM_SYSDEADCHAR: u32 = 263;
pub const WM_SYSKEYDOWN: u32 = 260;
pub const WM_SYSKEYUP: u32 = 261;
pub const WM_TCARD: u32 = 82;
pub const WM_THEMECHANGED: u32 = 794;
pub const WM_TIMECHANGE: u32 = 30;
pub const WM_TIMER: u32 = 275;
pub const WM_UNDO: u32 = 772;
pub const WM_USER: u32 = 1024;
pub const WM_USERCHANGED: u32 = 84;
pub const WM_VKEYTOITEM: u32 = 46;
pub const WM_VSCROLL: u32 = 277;
pub const WM_VSCROLLCLIPBOARD: u32 = 778;
pub const WM_WINDOWPOSCHANGED: u32 = 71;
pub const WM_WINDOWPOSCHANGING: u32 = 70;
pub const WM_WININICHANGE: u32 = 26;
pub const WM_KEYFIRST: u32 = 256;
pub const WM_KEYLAST: u32 = 264;
pub const WM_SYNCPAINT: u32 = 136;
pub const WM_MOUSEACTIVATE: u32 = 33;
pub const WM_MOUSEMOVE: u32 = 512;
pub const WM_LBUTTONDOWN: u32 = 513;
pub const WM_LBUTTONUP: u32 = 514;
pub const WM_LBUTTONDBLCLK: u32 = 515;
pub const WM_RBUTTONDOWN: u32 = 516;
pub const WM_RBUTTONUP: u32 = 517;
pub const WM_RBUTTONDBLCLK: u32 = 518;
pub const WM_MBUTTONDOWN: u32 = 519;
pub const WM_MBUTTONUP: u32 = 520;
pub const WM_MBUTTONDBLCLK: u32 = 521;
pub const WM_MOUSEWHEEL: u32 = 522;
pub const WM_MOUSEFIRST: u32 = 512;
pub const WM_XBUTTONDOWN: u32 = 523;
pub const WM_XBUTTONUP: u32 = 524;
pub const WM_XBUTTONDBLCLK: u32 = 525;
pub const WM_MOUSELAST: u32 = 525;
pub const WM_MOUSEHOVER: u32 = 0x2A1;
pub const WM_MOUSELEAVE: u32 = 0x2A3;

// Mouse button constants
pub const MK_CONTROL: u32 = 0x0008;
pub const MK_LBUTTON: u32 = 0x0001;
pub const MK_MBUTTON: u32 = 0x0010;
pub const MK_RBUTTON: u32 = 0x0002;
pub const MK_SHIFT: u32 = 0x0004;
pub const MK_XBUTTON1: u32 = 0x0020;
pub const MK_XBUTTON2: u32 = 0x0040;

// Window style constants
pub const WS_OVERLAPPED: u32 = 0x00000000;
pub const WS_POPUP: u32 = 0x80000000;
pub const WS_CHILD: u32 = 0x40000000;
pub const WS_MINIMIZE: u32 = 0x20000000;
pub const WS_VISIBLE: u32 = 0x10000000;
pub const WS_DISABLED: u32 = 0x08000000;
pub const WS_CLIPSIBLINGS: u32 = 0x04000000;
pub const WS_CLIPCHILDREN: u32 = 0x02000000;
pub const WS_MAXIMIZE: u32 = 0x01000000;
pub const WS_CAPTION: u32 = 0x00C00000;
pub const WS_BORDER: u32 = 0x00800000;
pub const WS_DLGFRAME: u32 = 0x00400000;
pub const WS_VSCROLL: u32 = 0x00200000;
pub const WS_HSCROLL: u32 = 0x00100000;
pub const WS_SYSMENU: u32 = 0x00080000;
pub const WS_THICKFRAME: u32 = 0x00040000;
pub const WS_GROUP: u32 = 0x00020000;
pub const WS_TABSTOP: u32 = 0x00010000;
pub const WS_MINIMIZEBOX: u32 = 0x00020000;
pub const WS_MAXIMIZEBOX: u32 = 0x00010000;
pub const WS_TILED: u32 = 0x00000000;
pub const WS_ICONIC: u32 = 0x20000000;
pub const WS_SIZEBOX: u32 = 0x00040000;
pub const WS_OVERLAPPEDWINDOW: u32 = WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_THICKFRAME | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;
pub const WS_POPUPWINDOW: u32 = WS_POPUP | WS_BORDER | WS_SYSMENU;
pub const WS_CHILDWINDOW: u32 = WS_CHILD;

// Extended window style constants
pub const WS_EX_DLGMODALFRAME: u32 = 0x00000001;
pub const WS_EX_NOPARENTNOTIFY: u32 = 0x00000004;
pub const WS_EX_TOPMOST: u32 = 0x00000008;
pub const WS_EX_ACCEPTFILES: u32 = 0x00000010;
pub const WS_EX_TRANSPARENT: u32 = 0x00000020;
pub const WS_EX_MDICHILD: u32 = 0x00000040;
pub const WS_EX_TOOLWINDOW: u32 = 0x00000080;
pub const WS_EX_WINDOWEDGE: u32 = 0x00000100;
pub const WS_EX_CLIENTEDGE: u32 = 0x00000200;
pub const WS_EX_CONTEXTHELP: u32 = 0x00000400;
pub const WS_EX_RIGHT: u32 = 0x00001000;
pub const WS_EX_LEFT: u32 = 0x00000000;
pub const WS_EX_RTLREADING: u32 = 0x00002000;
pub const WS_EX_LTRREADING: u32 = 0x00000000;
pub const WS_EX_LEFTSCROLLBAR: u32 = 0x00004000;
pub const WS_EX_RIGHTSCROLLBAR: u32 = 0x00000000;
pub const WS_EX_CONTROLPARENT: u32 = 0x00010000;
pub const WS_EX_STATICEDGE: u32 = 0x00020000;
pub const WS_EX_APPWINDOW: u32 = 0x00040000;
pub const WS_EX_OVERLAPPEDWINDOW: u32 = WS_EX_WINDOWEDGE | WS_EX_CLIENTEDGE;
pub const WS_EX_PALETTEWINDOW: u32 = WS_EX_WINDOWEDGE | WS_EX_TOOLWINDOW | WS_EX_TOPMOST;
pub const WS_EX_LAYERED: u32 = 0x00080000;
pub const WS_EX_NOINHERITLAYOUT: u32 = 0x00100000;
pub const WS_EX_LAYOUTRTL: u32 = 0x00400000;
pub const WS_EX_NOACTIVATE: u32 = 0x08000000;

// ShowWindow constants
pub const SW_HIDE: i32 = 0;
pub const SW_NORMAL: i32 = 1;
pub const SW_SHOWNORMAL: i32 = 1;
pub const SW_SHOWMINIMIZED: i32 = 2;
pub const SW_MAXIMIZE: i32 = 3;
pub const SW_SHOWMAXIMIZED: i32 = 3;
pub const SW_SHOWNOACTIVATE: i32 = 4;
pub const SW_SHOW: i32 = 5;
pub const SW_MINIMIZE: i32 = 6;
pub const SW_SHOWMINNOACTIVE: i32 = 7;
pub const SW_SHOWNA: i32 = 8;
pub const SW_RESTORE: i32 = 9;
pub const SW_SHOWDEFAULT: i32 = 10;
pub const SW_FORCEMINIMIZE: i32 = 11;

// MessageBox constants
pub const MB_OK: u32 = 0x00000000;
pub const MB_OKCANCEL: u32 = 0x00000001;
pub const MB_ABORTRETRYIGNORE: u32 = 0x00000002;
pub const MB_YESNOCANCEL: u32 = 0x00000003;
pub const MB_YESNO: u32 = 0x00000004;
pub const MB_RETRYCANCEL: u32 = 0x00000005;
pub const MB_CANCELTRYCONTINUE: u32 = 0x00000006;
pub const MB_ICONHAND: u32 = 0x00000010;
pub const MB_ICONQUESTION: u32 = 0x00000020;
pub const MB_ICONEXCLAMATION: u32 = 0x00000030;
pub const MB_ICONASTERISK: u32 = 0x00000040;
pub const MB_USERICON: u32 = 0x00000080;
pub const MB_ICONWARNING: u32 = MB_ICONEXCLAMATION;
pub const MB_ICONERROR: u32 = MB_ICONHAND;
pub const MB_ICONINFORMATION: u32 = MB_ICONASTERISK;
pub const MB_ICONSTOP: u32 = MB_ICONHAND;
pub const MB_DEFBUTTON1: u32 = 0x00000000;
pub const MB_DEFBUTTON2: u32 = 0x00000100;
pub const MB_DEFBUTTON3: u32 = 0x00000200;
pub const MB_DEFBUTTON4: u32 = 0x00000300;

// Button state constants
pub const BST_CHECKED: u32 = 1;
pub const BST_INDETERMINATE: u32 = 2;
pub const BST_UNCHECKED: u32 = 0;
pub const BST_FOCUS: u32 = 8;
pub const BST_PUSHED: u32 = 4;

// Predefined brushes constants
pub const COLOR_3DDKSHADOW: i32 = 21;
pub const COLOR_3DFACE: i32 = 15;
pub const COLOR_3DHILIGHT: i32 = 20;
pub const COLOR_3DHIGHLIGHT: i32 = 20;
pub const COLOR_3DLIGHT: i32 = 22;
pub const COLOR_BTNHILIGHT: i32 = 20;
pub const COLOR_3DSHADOW: i32 = 16;
pub const COLOR_ACTIVEBORDER: i32 = 10;
pub const COLOR_ACTIVECAPTION: i32 = 2;
pub const COLOR_APPWORKSPACE: i32 = 12;
pub const COLOR_BACKGROUND: i32 = 1;
pub const COLOR_DESKTOP: i32 = 1;
pub const COLOR_BTNFACE: i32 = 15;
pub const COLOR_BTNHIGHLIGHT: i32 = 20;
pub const COLOR_BTNSHADOW: i32 = 16;
pub const COLOR_BTNTEXT: i32 = 18;
pub const COLOR_CAPTIONTEXT: i32 = 9;
pub const COLOR_GRAYTEXT: i32 = 17;
pub const COLOR_HIGHLIGHT: i32 = 13;
pub const COLOR_HIGHLIGHTTEXT: i32 = 14;
pub const COLOR_INACTIVEBORDER: i32 = 11;
pub const COLOR_INACTIVECAPTION: i32 = 3;
pub const COLOR_INACTIVECAPTIONTEXT: i32 = 19;
pub const COLOR_INFOBK: i32 = 24;
pub const COLOR_INFOTEXT: i32 = 23;
pub const COLOR_MENU: i32 = 4;
pub const COLOR_MENUTEXT: i32 = 7;
pub const COLOR_SCROLLBAR: i32 = 0;
pub const COLOR_WINDOW: i32 = 5;
pub const COLOR_WINDOWFRAME: i32 = 6;
pub const COLOR_WINDOWTEXT: i32 = 8;
pub const COLOR_HOTLIGHT: i32 = 26;
pub const COLOR_GRADIENTACTIVECAPTION: i32 = 27;
pub const COLOR_GRADIENTINACTIVECAPTION: i32 = 28;

// Dialog box command ids
pub const IDOK: i32 = 1;
pub const IDCANCEL: i32 = 2;
pub const IDABORT: i32 = 3;
pub const IDRETRY: i32 = 4;
pub const IDIGNORE: i32 = 5;
pub const IDYES: i32 = 6;
pub const IDNO: i32 = 7;
pub const IDCLOSE: i32 = 8;
pub const IDHELP: i32 = 9;
pub const IDTRYAGAIN: i32 = 10;
pub const IDCONTINUE: i32 = 11;
pub const IDTIMEOUT: i32 = 32000;

// System commands
pub const SC_SIZE: u32 = 0xF000;
pub const SC_MOVE: u32 = 0xF010;
pub const SC_MINIMIZE: u32 = 0xF020;
pub const SC_MAXIMIZE: u32 = 0xF030;
pub const SC_NEXTWINDOW: u32 = 0xF040;
pub const SC_PREVWINDOW: u32 = 0xF050;
pub const SC_CLOSE: u32 = 0xF060;
pub const SC_VSCROLL: u32 = 0xF070;
pub const SC_HSCROLL: u32 = 0xF080;
pub const SC_MOUSEMENU: u32 = 0xF090;
pub const SC_KEYMENU: u32 = 0xF100;
pub const SC_ARRANGE: u32 = 0xF110;
pub const SC_RESTORE: u32 = 0xF120;
pub const SC_TASKLIST: u32 = 0xF130;
pub const SC_SCREENSAVE: u32 = 0xF140;
pub const SC_HOTKEY: u32 = 0xF150;
pub const SC_DEFAULT: u32 = 0xF160;
pub const SC_MONITORPOWER: u32 = 0xF170;
pub const SC_CONTEXTHELP: u32 = 0xF180;
pub const SC_SEPARATOR: u32 = 0xF00F;

// Static control styles
pub const SS_BITMAP: u32 = 14;
pub const SS_BLACKFRAME: u32 = 7;
pub const SS_BLACKRECT: u32 = 4;
pub const SS_CENTER: u32 = 1;
pub const SS_CENTERIMAGE: u32 = 512;
pub const SS_EDITCONTROL: u32 = 0x2000;
pub const SS_ENHMETAFILE: u32 = 15;
pub const SS_ETCHEDFRAME: u32 = 18;
pub const SS_ETCHEDHORZ: u32 = 16;
pub const SS_ETCHEDVERT: u32 = 17;
pub const SS_GRAYFRAME: u32 = 8;
pub const SS_GRAYRECT: u32 = 5;
pub const SS_ICON: u32 = 3;
pub const SS_LEFT: u32 = 0;
pub const SS_LEFTNOWORDWRAP: u32 = 0xC;
pub const SS_NOPREFIX: u32 = 128;
pub const SS_NOTIFY: u32 = 256;
pub const SS_OWNERDRAW: u32 = 0xD;
pub const SS_REALSIZECONTROL: u32 = 0x040;
pub const SS_REALSIZEIMAGE: u32 = 0x800;
pub const SS_RIGHT: u32 = 2;
pub const SS_RIGHTJUST: u32 = 0x400;
pub const SS_SIMPLE: u32 = 11;
pub const SS_SUNKEN: u32 = 4096;
pub const SS_WHITEFRAME: u32 = 9;
pub const SS_WHITERECT: u32 = 6;
pub const SS_USERITEM: u32 = 10;
pub const SS_TYPEMASK: u32 = 0x0000001F;
pub const SS_ENDELLIPSIS: u32 = 0x00004000;
pub const SS_PATHELLIPSIS: u32 = 0x00008000;
pub const SS_WORDELLIPSIS: u32 = 0x0000C000;
pub const SS_ELLIPSISMASK: u32 = 0x0000C000;

// Button message constants
pub const BM_CLICK: u32 = 245;
pub const BM_GETCHECK: u32 = 240;
pub const BM_GETIMAGE: u32 = 246;
pub const BM_GETSTATE: u32 = 242;
pub const BM_SETCHECK: u32 = 241;
pub const BM_SETIMAGE: u32 = 247;
pub const BM_SETSTATE: u32 = 243;
pub const BM_SETSTYLE: u32 = 244;

// Button notifications
pub const BN_CLICKED: u32 = 0;
pub const BN_PAINT: u32 = 1;
pub const BN_HILITE: u32 = 2;
pub const BN_PUSHED: u32 = BN_HILITE;
pub const BN_UNHILITE: u32 = 3;
pub const BN_UNPUSHED: u32 = BN_UNHILITE;
pub const BN_DISABLE: u32 = 4;
pub const BN_DOUBLECLICKED: u32 = 5;
pub const BN_DBLCLK: u32 = BN_DOUBLECLICKED;
pub const BN_SETFOCUS: u32 = 6;
pub const BN_KILLFOCUS: u32 = 7;

// Button style constants
pub const BS_3STATE: u32 = 5;
pub const BS_AUTO3STATE: u32 = 6;
pub const BS_AUTOCHECKBOX: u32 = 3;
pub const BS_AUTORADIOBUTTON: u32 = 9;
pub const BS_BITMAP: u32 = 128;
pub const BS_BOTTOM: u32 = 0x800;
pub const BS_CENTER: u32 = 0x300;
pub const BS_CHECKBOX: u32 = 2;
pub const BS_DEFPUSHBUTTON: u32 = 1;
pub const BS_GROUPBOX: u32 = 7;
pub const BS_ICON: u32 = 64;
pub const BS_LEFT: u32 = 256;
pub const BS_LEFTTEXT: u32 = 32;
pub const BS_MULTILINE: u32 = 0x2000;
pub const BS_NOTIFY: u32 = 0x4000;
pub const BS_OWNERDRAW: u32 = 0xB;
pub const BS_PUSHBUTTON: u32 = 0;
pub const BS_PUSHLIKE: u32 = 4096;
pub const BS_RADIOBUTTON: u32 = 4;
pub const BS_RIGHT: u32 = 512;
pub const BS_RIGHTBUTTON: u32 = 32;
pub const BS_TEXT: u32 = 0;
pub const BS_TOP: u32 = 0x400;
pub const BS_USERBUTTON: u32 = 8;
pub const BS_VCENTER: u32 = 0xC00;
pub const BS_FLAT: u32 = 0x8000;

// Predefined icon constants
pub const IDI_APPLICATION: u16 = 32512;
pub const IDI_HAND: u16 = 32513;
pub const IDI_QUESTION: u16 = 32514;
pub const IDI_EXCLAMATION: u16 = 32515;
pub const IDI_ASTERISK: u16 = 32516;
pub const IDI_WINLOGO: u16 = 32517;
pub const IDI_WARNING: u16 = IDI_EXCLAMATION;
pub const IDI_ERROR: u16 = IDI_HAND;
pub const IDI_INFORMATION: u16 = IDI_ASTERISK;

// Predefined cursor constants
pub const IDC_ARROW: u16 = 32512;
pub const IDC_IBEAM: u16 = 32513;
pub const IDC_WAIT: u16 = 32514;
pub const IDC_CROSS: u16 = 32515;
pub const IDC_UPARROW: u16 = 32516;
pub const IDC_SIZENWSE: u16 = 32642;
pub const IDC_SIZENESW: u16 = 32643;
pub const IDC_SIZEWE: u16 = 32644;
pub const IDC_SIZENS: u16 = 32645;
pub const IDC_SIZEALL: u16 = 32646;
pub const IDC_NO: u16 = 32648;
pub const IDC_HAND: u16 = 32649;
pub const IDC_APPSTARTING: u16 = 32650;
pub const IDC_HELP: u16 = 32651;
pub const IDC_ICON: u16 = 32641;
pub const IDC_SIZE: u16 = 32640;

// GetSystemMetrics constants
pub const SM_CXSCREEN: i32 = 0;
pub const SM_CYSCREEN: i32 = 1;
pub const SM_CXVSCROLL: i32 = 2;
pub const SM_CYHSCROLL: i32 = 3;
pub const SM_CYCAPTION: i32 = 4;
pub const SM_CXBORDER: i32 = 5;
pub const SM_CYBORDER: i32 = 6;
pub const SM_CXDLGFRAME: i32 = 7;
pub const SM_CYDLGFRAME: i32 = 8;
pub const SM_CYVTHUMB: i32 = 9;
pub const SM_CXHTHUMB: i32 = 10;
pub const SM_CXICON: i32 = 11;
pub const SM_CYICON: i32 = 12;
pub const SM_CXCURSOR: i32 = 13;
pub const SM_CYCURSOR: i32 = 14;
pub const SM_CYMENU: i32 = 15;
pub const SM_CXFULLSCREEN: i32 = 16;
pub const SM_CYFULLSCREEN: i32 = 17;
pub const SM_CYKANJIWINDOW: i32 = 18;
pub const SM_MOUSEPRESENT: i32 = 19;
pub const SM_CYVSCROLL: i32 = 20;
pub const SM_CXHSCROLL: i32 = 21;
pub const SM_DEBUG: i32 = 22;
pub const SM_SWAPBUTTON: i32 = 23;
pub const SM_RESERVED1: i32 = 24;
pub const SM_RESERVED2: i32 = 25;
pub const SM_RESERVED3: i32 = 26;
pub const SM_RESERVED4: i32 = 27;
pub const SM_CXMIN: i32 = 28;
pub const SM_CYMIN: i32 = 29;
pub const SM_CXSIZE: i32 = 30;
pub const SM_CYSIZE: i32 = 31;
pub const SM_CXFRAME: i32 = 32;
pub const SM_CYFRAME: i32 = 33;
pub const SM_CXMINTRACK: i32 = 34;
pub const SM_CYMINTRACK: i32 = 35;
pub const SM_CXDOUBLECLK: i32 = 36;
pub const SM_CYDOUBLECLK: i32 = 37;
pub const SM_CXICONSPACING: i32 = 38;
pub const SM_CYICONSPACING: i32 = 39;
pub const SM_MENUDROPALIGNMENT: i32 = 40;
pub const SM_PENWINDOWS: i32 = 41;
pub const SM_DBCSENABLED: i32 = 42;
pub const SM_CMOUSEBUTTONS: i32 = 43;
pub const SM_CXFIXEDFRAME: i32 = SM_CXDLGFRAME;
pub const SM_CYFIXEDFRAME: i32 = SM_CYDLGFRAME;
pub const SM_CXSIZEFRAME: i32 = SM_CXFRAME;
pub const SM_CYSIZEFRAME: i32 = SM_CYFRAME;
pub const SM_SECURE: i32 = 44;
pub const SM_CXEDGE: i32 = 45;
pub const SM_CYEDGE: i32 = 46;
pub const SM_CXMINSPACING: i32 = 47;
pub const SM_CYMINSPACING: i32 = 48;
pub const SM_CXSMICON: i32 = 49;
pub const SM_CYSMICON: i32 = 50;
pub const SM_CYSMCAPTION: i32 = 51;
pub const SM_CXSMSIZE: i32 = 52;
pub const SM_CYSMSIZE: i32 = 53;
pub const SM_CXMENUSIZE: i32 = 54;
pub const SM_CYMENUSIZE: i32 = 55;
pub const SM_ARRANGE: i32 = 56;
pub const SM_CXMINIMIZED: i32 = 57;
pub const SM_CYMINIMIZED: i32 = 58;
pub const SM_CXMAXTRACK: i32 = 59;
pub const SM_CYMAXTRACK: i32 = 60;
pub const SM_CXMAXIMIZED: i32 = 61;
pub const SM_CYMAXIMIZED: i32 = 62;
pub const SM_NETWORK: i32 = 63;
pub const SM_CLEANBOOT: i32 = 67;
pub const SM_CXDRAG: i32 = 68;
pub const SM_CYDRAG: i32 = 69;
pub const SM_SHOWSOUNDS: i32 = 70;
pub const SM_CXMENUCHECK: i32 = 71;
pub const SM_CYMENUCHECK: i32 = 72;
pub const SM_SLOWMACHINE: i32 = 73;
pub const SM_MIDEASTENABLED: i32 = 74;
pub const SM_MOUSEWHEELPRESENT: i32 = 75;
pub const SM_XVIRTUALSCREEN: i32 = 76;
pub const SM_YVIRTUALSCREEN: i32 = 77;
pub const SM_CXVIRTUALSCREEN: i32 = 78;
pub const SM_CYVIRTUALSCREEN: i32 = 79;
pub const SM_CMONITORS: i32 = 80;
pub const SM_SAMEDISPLAYFORMAT: i32 = 81;
pub const SM_IMMENABLED: i32 = 82;
pub const SM_CXFOCUSBORDER: i32 = 83;
pub const SM_CYFOCUSBORDER: i32 = 84;
pub const SM_TABLETPC: i32 = 86;
pub const SM_MEDIACENTER: i32 = 87;
pub const SM_STARTER: i32 = 88;
pub const SM_SERVERR2: i32 = 89;
pub const SM_CMETRICS: i32 = 91;
pub const SM_REMOTESESSION: i32 = 0x1000;
pub const SM_SHUTTINGDOWN: i32 = 0x2000;
pub const SM_REMOTECONTROL: i32 = 0x2001;
pub const SM_CARETBLINKINGENABLED: i32 = 0x2002;

// Window class styles
pub const CS_VREDRAW: u32 = 0x00000001;
pub const CS_HREDRAW: u32 = 0x00000002;
pub const CS_KEYCVTWINDOW: u32 = 0x00000004;
pub const CS_DBLCLKS: u32 = 0x00000008;
pub const CS_OWNDC: u32 = 0x00000020;
pub const CS_CLASSDC: u32 = 0x00000040;
pub const CS_PARENTDC: u32 = 0x00000080;
pub const CS_NOKEYCVT: u32 = 0x00000100;
pub const CS_NOCLOSE: u32 = 0x00000200;
pub const CS_SAVEBITS: u32 = 0x00000800;
pub const CS_BYTEALIGNCLIENT: u32 = 0x00001000;
pub const CS_BYTEALIGNWINDOW: u32 = 0x00002000;
pub const CS_GLOBALCLASS: u32 = 0x00004000;
pub const CS_IME: u32 = 0x00010000;
pub const CS_DROPSHADOW: u32 = 0x00020000;

// GetWindowLong and GetWindowLongPtr constants
pub const GWL_EXSTYLE: i32 = -20;
pub const GWL_STYLE: i32 = -16;
pub const GWL_WNDPROC: i32 = -4;
pub const GWLP_WNDPROC: i32 = -4;
pub const GWL_HINSTANCE: i32 = -6;
pub const GWLP_HINSTANCE: i32 = -6;
pub const GWL_HWNDPARENT: i32 = -8;
pub const GWLP_HWNDPARENT: i32 = -8;
pub const GWL_ID: i32 = -12;
pub const GWLP_ID: i32 = -12;
pub const GWL_USERDATA: i32 = -21;
pub const GWLP_USERDATA: i32 = -21;

// CreateWindowEx default position/size
pub const CW_USEDEFAULT: i32 = 0x8000_0000_u32 as i32;
