//! The 128 fixed block masks selected by the keyed Walsh index.
//!
//! Each row is a (word 0, word 1) pair XORed with a block before the
//! interleave and after the deinterleave. Row 0 is all zeros, so an unkeyed
//! cascade applies no mask; keying never selects it. Rows below 64 carry the
//! same value in both words.

/// Number of rows in [`WALSH_MASKS`].
pub const WALSH_ROWS: usize = 128;

#[rustfmt::skip]
pub const WALSH_MASKS: [[u64; 2]; WALSH_ROWS] = [
    [0x0000000000000000, 0x0000000000000000],
    [0xD555555555554FE0, 0xD555555555554FE0],
    [0xB333333333332190, 0xB333333333332190],
    [0x66666666666663E0, 0x66666666666663E0],
    [0x8F0F0F0F0F0EFE50, 0x8F0F0F0F0F0EFE50],
    [0x5A5A5A5A5A5A5820, 0x5A5A5A5A5A5A5820],
    [0x3C3C3C3C3C3C3AC0, 0x3C3C3C3C3C3C3AC0],
    [0xE969696969697D80, 0xE969696969697D80],
    [0x80FF00FF00FEF1D0, 0x80FF00FF00FEF1D0],
    [0x55AA55AA55AA46F0, 0x55AA55AA55AA46F0],
    [0x33CC33CC33CC23A0, 0x33CC33CC33CC23A0],
    [0xE699669966995BC0, 0xE699669966995BC0],
    [0x0FF00FF00FF02300, 0x0FF00FF00FF02300],
    [0xDAA55AA55AA56890, 0xDAA55AA55AA56890],
    [0xBCC33CC33CC34E00, 0xBCC33CC33CC34E00],
    [0x69966996699672B0, 0x69966996699672B0],
    [0x8000FFFF0000F3F0, 0x8000FFFF0000F3F0],
    [0x5555AAAA5555AA00, 0x5555AAAA5555AA00],
    [0x3333CCCC3333DDC0, 0x3333CCCC3333DDC0],
    [0xE66699996666A6D0, 0xE66699996666A6D0],
    [0x0F0FF0F00F0FF460, 0x0F0FF0F00F0FF460],
    [0xDA5AA5A55A5A9450, 0xDA5AA5A55A5A9450],
    [0xBC3CC3C33C3CB430, 0xBC3CC3C33C3CB430],
    [0x69699696696994C0, 0x69699696696994C0],
    [0x00FFFF0000FFFEEC, 0x00FFFF0000FFFEEC],
    [0xD5AAAA5555AAA8A0, 0xD5AAAA5555AAA8A0],
    [0xB3CCCC3333CCC920, 0xB3CCCC3333CCC920],
    [0x669999666699A8C0, 0x669999666699A8C0],
    [0x8FF0F00F0FF0DDC0, 0x8FF0F00F0FF0DDC0],
    [0x5AA5A55A5AA5AFA0, 0x5AA5A55A5AA5AFA0],
    [0x3CC3C33C3CC3C0D0, 0x3CC3C33C3CC3C0D0],
    [0xE996966969968320, 0xE996966969968320],
    [0x80000000FFFFFA30, 0x80000000FFFFFA30],
    [0x55555555AAAA9F10, 0x55555555AAAA9F10],
    [0x33333333CCCCCA10, 0x33333333CCCCCA10],
    [0xE66666669999A040, 0xE66666669999A040],
    [0x0F0F0F0FF0F0FC30, 0x0F0F0F0FF0F0FC30],
    [0xDA5A5A5AA5A5A3F0, 0xDA5A5A5AA5A5A3F0],
    [0xBC3C3C3CC3C3C0B0, 0xBC3C3C3CC3C3C0B0],
    [0x696969699696A5F0, 0x696969699696A5F0],
    [0x00FF00FFFF00FEEC, 0x00FF00FFFF00FEEC],
    [0xD5AA55AAAA55A0D0, 0xD5AA55AAAA55A0D0],
    [0xB3CC33CCCC33BB10, 0xB3CC33CCCC33BB10],
    [0x669966999966A410, 0x669966999966A410],
    [0x8FF00FF0F00FDDC0, 0x8FF00FF0F00FDDC0],
    [0x5AA55AA5A55AAFA0, 0x5AA55AA5A55AAFA0],
    [0x3CC33CC3C33CB900, 0x3CC33CC3C33CB900],
    [0xE996699696699A90, 0xE996699696699A90],
    [0x0000FFFFFFFF0000, 0x0000FFFFFFFF0000],
    [0xD555AAAAAAAA6340, 0xD555AAAAAAAA6340],
    [0xB333CCCCCCCC2D00, 0xB333CCCCCCCC2D00],
    [0x66669999999967B0, 0x66669999999967B0],
    [0x8F0FF0F0F0EFFCC0, 0x8F0FF0F0F0EFFCC0],
    [0x5A5AA5A5A5A564A0, 0x5A5AA5A5A5A564A0],
    [0x3C3CC3C3C3C34970, 0x3C3CC3C3C3C34970],
    [0xE969969696967560, 0xE969969696967560],
    [0x80FFFF00FEFFEEB0, 0x80FFFF00FEFFEEB0],
    [0x55AAAA55AA555FF0, 0x55AAAA55AA555FF0],
    [0x33CCCC33CC3321C0, 0x33CCCC33CC3321C0],
    [0xE699996699665B20, 0xE699996699665B20],
    [0x0FF0F00FF00F0B90, 0x0FF0F00FF00F0B90],
    [0xDAA5A55AA55A60C0, 0xDAA5A55AA55A60C0],
    [0xBCC3C33CC33C47C0, 0xBCC3C33CC33C47C0],
    [0x6996966996695690, 0x6996966996695690],
    [0x0000000000000000, 0x8000000000000000],
    [0xD555555555554FE0, 0x5555555555556040],
    [0xB333333333332190, 0x33333333333331F0],
    [0x66666666666663E0, 0xE666666666665380],
    [0x8F0F0F0F0F0EFE50, 0x0F0F0F0F0F0F0EB0],
    [0x5A5A5A5A5A5A5820, 0xDA5A5A5A5A5A47C0],
    [0x3C3C3C3C3C3C3AC0, 0xBC3C3C3C3C3C2A60],
    [0xE969696969697D80, 0x69696969696966D0],
    [0x80FF00FF00FEF1D0, 0x00FF00FF00FF0104],
    [0x55AA55AA55AA46F0, 0xD5AA55AA55AA5DA0],
    [0x33CC33CC33CC23A0, 0xB3CC33CC33CC3A50],
    [0xE699669966995BC0, 0x6699669966996C20],
    [0x0FF00FF00FF02300, 0x8FF00FF00FF012A0],
    [0xDAA55AA55AA56890, 0x5AA55AA55AA551E0],
    [0xBCC33CC33CC34E00, 0x3CC33CC33CC33750],
    [0x69966996699672B0, 0xE996699669966250],
    [0x8000FFFF0000F3F0, 0x0000FFFF0000FFFF],
    [0x5555AAAA5555AA00, 0xD555AAAA555599A0],
    [0x3333CCCC3333DDC0, 0xB333CCCC3333CD60],
    [0xE66699996666A6D0, 0x6666999966669020],
    [0x0F0FF0F00F0FF460, 0x8F0FF0F00F0FE400],
    [0xDA5AA5A55A5A9450, 0x5A5AA5A55A5AA4B0],
    [0xBC3CC3C33C3CB430, 0x3C3CC3C33C3CC490],
    [0x69699696696994C0, 0xE969969669698460],
    [0x00FFFF0000FFFEEC, 0x80FFFF0000FFF9E0],
    [0xD5AAAA5555AAA8A0, 0x55AAAA5555AAB900],
    [0xB3CCCC3333CCC920, 0x33CCCC3333CCD980],
    [0x669999666699A8C0, 0xE699996666999860],
    [0x8FF0F00F0FF0DDC0, 0x0FF0F00F0FF0EE20],
    [0x5AA5A55A5AA5AFA0, 0xDAA5A55A5AA59F40],
    [0x3CC3C33C3CC3C0D0, 0xBCC3C33C3CC3D780],
    [0xE996966969968320, 0x6996966969969380],
    [0x80000000FFFFFA30, 0x00000000FFFFFFFF],
    [0x55555555AAAA9F10, 0xD5555555AAAAB5C0],
    [0x33333333CCCCCA10, 0xB3333333CCCCB9B0],
    [0xE66666669999A040, 0x6666666699998990],
    [0x0F0F0F0FF0F0FC30, 0x8F0F0F0FF0F0EBD0],
    [0xDA5A5A5AA5A5A3F0, 0x5A5A5A5AA5A5B450],
    [0xBC3C3C3CC3C3C0B0, 0x3C3C3C3CC3C3D110],
    [0x696969699696A5F0, 0xE969696996969590],
    [0x00FF00FFFF00FEEC, 0x80FF00FFFF010980],
    [0xD5AA55AAAA55A0D0, 0x55AA55AAAA55B130],
    [0xB3CC33CCCC33BB10, 0x33CC33CCCC33CB70],
    [0x669966999966A410, 0xE6996699996693B0],
    [0x8FF00FF0F00FDDC0, 0x0FF00FF0F00FEE20],
    [0x5AA55AA5A55AAFA0, 0xDAA55AA5A55A9F40],
    [0x3CC33CC3C33CB900, 0xBCC33CC3C33CCFB0],
    [0xE996699696699A90, 0x699669969669AAF0],
    [0x0000FFFFFFFF0000, 0x8000FFFFFFFF02B0],
    [0xD555AAAAAAAA6340, 0x5555AAAAAAAA4C90],
    [0xB333CCCCCCCC2D00, 0x3333CCCCCCCC3D60],
    [0x66669999999967B0, 0xE666999999995750],
    [0x8F0FF0F0F0EFFCC0, 0x0F0FF0F0F0F00D20],
    [0x5A5AA5A5A5A564A0, 0xDA5AA5A5A5A55440],
    [0x3C3CC3C3C3C34970, 0xBC3CC3C3C3C33910],
    [0xE969969696967560, 0x6969969696965EB0],
    [0x80FFFF00FEFFEEB0, 0x00FFFF00FF000104],
    [0x55AAAA55AA555FF0, 0xD5AAAA55AA554F90],
    [0x33CCCC33CC3321C0, 0xB3CCCC33CC333870],
    [0xE699996699665B20, 0x6699996699666B80],
    [0x0FF0F00FF00F0B90, 0x8FF0F00FF00F2240],
    [0xDAA5A55AA55A60C0, 0x5AA5A55AA55A4A10],
    [0xBCC3C33CC33C47C0, 0x3CC3C33CC33C3110],
    [0x6996966996695690, 0xE996966996696D40],
];

/// Mask pair for `index`; the zero mask for indices past the table.
#[inline]
pub fn mask(index: usize) -> [u64; 2] {
    WALSH_MASKS.get(index).copied().unwrap_or([0, 0])
}
