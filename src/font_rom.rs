//! HD44780U character generator ROM (A00, Japanese standard font), 5x8 cells.
//!
//! Each entry holds eight row masks, top row first; bit 4 is the leftmost
//! dot. Only seven rows are used by the ROM, the eighth is the cursor line.

#[rustfmt::skip]
pub const CHAR_ROM: [[u8; 8]; 256] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 00
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 01
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 02
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 03
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 04
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 05
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 06
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 07
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 08
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 09
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0a
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0c
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0e
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 10
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 11
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 12
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 13
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 14
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 15
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 16
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 17
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 18
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 19
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1a
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1c
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1e
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 1f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 20 ' '
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // 21 '!'
    [0x0a, 0x0a, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00], // 22 '"'
    [0x0a, 0x0a, 0x1f, 0x0a, 0x1f, 0x0a, 0x0a, 0x00], // 23 '#'
    [0x04, 0x0f, 0x14, 0x0e, 0x05, 0x1e, 0x04, 0x00], // 24 '$'
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03, 0x00], // 25 '%'
    [0x0c, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0d, 0x00], // 26 '&'
    [0x0c, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 27 '''
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00], // 28 '('
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // 29 ')'
    [0x00, 0x04, 0x15, 0x0e, 0x15, 0x04, 0x00, 0x00], // 2a '*'
    [0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x00, 0x00], // 2b '+'
    [0x00, 0x00, 0x00, 0x00, 0x0c, 0x04, 0x08, 0x00], // 2c ','
    [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, 0x00], // 2d '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, 0x00], // 2e '.'
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // 2f '/'
    [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e, 0x00], // 30 '0'
    [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e, 0x00], // 31 '1'
    [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f, 0x00], // 32 '2'
    [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e, 0x00], // 33 '3'
    [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02, 0x00], // 34 '4'
    [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e, 0x00], // 35 '5'
    [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e, 0x00], // 36 '6'
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00], // 37 '7'
    [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e, 0x00], // 38 '8'
    [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c, 0x00], // 39 '9'
    [0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x0c, 0x00, 0x00], // 3a ':'
    [0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x04, 0x08, 0x00], // 3b ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, 0x00], // 3c '<'
    [0x00, 0x00, 0x1f, 0x00, 0x1f, 0x00, 0x00, 0x00], // 3d '='
    [0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00], // 3e '>'
    [0x0e, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04, 0x00], // 3f '?'
    [0x0e, 0x11, 0x01, 0x0d, 0x15, 0x15, 0x0e, 0x00], // 40 '@'
    [0x0e, 0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x00], // 41 'A'
    [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e, 0x00], // 42 'B'
    [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e, 0x00], // 43 'C'
    [0x1e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1e, 0x00], // 44 'D'
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f, 0x00], // 45 'E'
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10, 0x00], // 46 'F'
    [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f, 0x00], // 47 'G'
    [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11, 0x00], // 48 'H'
    [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e, 0x00], // 49 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c, 0x00], // 4a 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, 0x00], // 4b 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f, 0x00], // 4c 'L'
    [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11, 0x00], // 4d 'M'
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x00], // 4e 'N'
    [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e, 0x00], // 4f 'O'
    [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10, 0x00], // 50 'P'
    [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d, 0x00], // 51 'Q'
    [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11, 0x00], // 52 'R'
    [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e, 0x00], // 53 'S'
    [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 54 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e, 0x00], // 55 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04, 0x00], // 56 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a, 0x00], // 57 'W'
    [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11, 0x00], // 58 'X'
    [0x11, 0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x00], // 59 'Y'
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f, 0x00], // 5a 'Z'
    [0x0e, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0e, 0x00], // 5b '['
    [0x11, 0x0a, 0x1f, 0x04, 0x1f, 0x04, 0x04, 0x00], // 5c
    [0x0e, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0e, 0x00], // 5d ']'
    [0x04, 0x0a, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00], // 5e '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f, 0x00], // 5f '_'
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 60 '`'
    [0x00, 0x00, 0x0e, 0x01, 0x0f, 0x11, 0x0f, 0x00], // 61 'a'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1e, 0x00], // 62 'b'
    [0x00, 0x00, 0x0e, 0x10, 0x10, 0x11, 0x0e, 0x00], // 63 'c'
    [0x01, 0x01, 0x0d, 0x13, 0x11, 0x11, 0x0f, 0x00], // 64 'd'
    [0x00, 0x00, 0x0e, 0x11, 0x1f, 0x10, 0x0e, 0x00], // 65 'e'
    [0x06, 0x09, 0x08, 0x1c, 0x08, 0x08, 0x08, 0x00], // 66 'f'
    [0x00, 0x00, 0x0f, 0x11, 0x0f, 0x01, 0x0e, 0x00], // 67 'g'
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 68 'h'
    [0x04, 0x00, 0x0c, 0x04, 0x04, 0x04, 0x0e, 0x00], // 69 'i'
    [0x02, 0x06, 0x02, 0x02, 0x02, 0x12, 0x0c, 0x00], // 6a 'j'
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12, 0x00], // 6b 'k'
    [0x0c, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e, 0x00], // 6c 'l'
    [0x00, 0x00, 0x1a, 0x15, 0x15, 0x11, 0x11, 0x00], // 6d 'm'
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 6e 'n'
    [0x00, 0x00, 0x0e, 0x11, 0x11, 0x11, 0x0e, 0x00], // 6f 'o'
    [0x00, 0x00, 0x1e, 0x11, 0x1e, 0x10, 0x10, 0x00], // 70 'p'
    [0x00, 0x00, 0x0d, 0x13, 0x0f, 0x01, 0x01, 0x00], // 71 'q'
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00], // 72 'r'
    [0x00, 0x00, 0x0f, 0x10, 0x0e, 0x01, 0x1e, 0x00], // 73 's'
    [0x08, 0x08, 0x1c, 0x08, 0x08, 0x09, 0x06, 0x00], // 74 't'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0d, 0x00], // 75 'u'
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0a, 0x04, 0x00], // 76 'v'
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0a, 0x00], // 77 'w'
    [0x00, 0x00, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x00], // 78 'x'
    [0x00, 0x00, 0x11, 0x11, 0x0f, 0x01, 0x0e, 0x00], // 79 'y'
    [0x00, 0x00, 0x1f, 0x02, 0x04, 0x08, 0x1f, 0x00], // 7a 'z'
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, 0x00], // 7b '{'
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 7c '|'
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, 0x00], // 7d '}'
    [0x00, 0x04, 0x02, 0x1f, 0x02, 0x04, 0x00, 0x00], // 7e '~'
    [0x00, 0x04, 0x08, 0x1f, 0x08, 0x04, 0x00, 0x00], // 7f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 80
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 81
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 82
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 83
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 84
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 85
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 86
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 87
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 88
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 89
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 8a
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 8b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 8c
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 8d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 8e
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 8f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 90
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 91
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 92
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 93
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 94
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 95
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 96
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 97
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 98
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 99
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 9a
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 9b
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 9c
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 9d
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 9e
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 9f
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // a0
    [0x00, 0x00, 0x00, 0x00, 0x1c, 0x14, 0x1c, 0x00], // a1
    [0x07, 0x04, 0x04, 0x04, 0x00, 0x00, 0x00, 0x00], // a2
    [0x00, 0x00, 0x00, 0x04, 0x04, 0x04, 0x1c, 0x00], // a3
    [0x00, 0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x00], // a4
    [0x00, 0x00, 0x00, 0x0c, 0x0c, 0x00, 0x00, 0x00], // a5
    [0x00, 0x1f, 0x01, 0x1f, 0x01, 0x02, 0x04, 0x00], // a6
    [0x00, 0x00, 0x1f, 0x01, 0x06, 0x04, 0x08, 0x00], // a7
    [0x00, 0x00, 0x02, 0x04, 0x0c, 0x14, 0x04, 0x00], // a8
    [0x00, 0x00, 0x04, 0x1f, 0x11, 0x01, 0x06, 0x00], // a9
    [0x00, 0x00, 0x00, 0x1f, 0x04, 0x04, 0x1f, 0x00], // aa
    [0x00, 0x00, 0x02, 0x1f, 0x06, 0x0a, 0x12, 0x00], // ab
    [0x00, 0x00, 0x08, 0x1f, 0x09, 0x0a, 0x08, 0x00], // ac
    [0x00, 0x00, 0x00, 0x0e, 0x02, 0x02, 0x1f, 0x00], // ad
    [0x00, 0x00, 0x1e, 0x02, 0x1e, 0x02, 0x1e, 0x00], // ae
    [0x00, 0x00, 0x00, 0x15, 0x15, 0x01, 0x06, 0x00], // af
    [0x00, 0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00], // b0
    [0x1f, 0x01, 0x05, 0x06, 0x04, 0x04, 0x08, 0x00], // b1
    [0x01, 0x02, 0x04, 0x0c, 0x14, 0x04, 0x04, 0x00], // b2
    [0x04, 0x1f, 0x11, 0x11, 0x01, 0x02, 0x04, 0x00], // b3
    [0x00, 0x00, 0x1f, 0x04, 0x04, 0x04, 0x1f, 0x00], // b4
    [0x02, 0x1f, 0x02, 0x06, 0x0a, 0x12, 0x02, 0x00], // b5
    [0x08, 0x1f, 0x09, 0x09, 0x09, 0x09, 0x12, 0x00], // b6
    [0x04, 0x1f, 0x04, 0x1f, 0x04, 0x04, 0x04, 0x00], // b7
    [0x00, 0x0f, 0x09, 0x11, 0x01, 0x02, 0x0c, 0x00], // b8
    [0x08, 0x0f, 0x12, 0x02, 0x02, 0x02, 0x04, 0x00], // b9
    [0x00, 0x1f, 0x01, 0x01, 0x01, 0x01, 0x1f, 0x00], // ba
    [0x0a, 0x1f, 0x0a, 0x0a, 0x02, 0x04, 0x08, 0x00], // bb
    [0x00, 0x18, 0x01, 0x19, 0x01, 0x02, 0x1c, 0x00], // bc
    [0x00, 0x1f, 0x01, 0x02, 0x04, 0x0a, 0x11, 0x00], // bd
    [0x08, 0x1f, 0x09, 0x0a, 0x08, 0x08, 0x07, 0x00], // be
    [0x00, 0x11, 0x11, 0x09, 0x01, 0x02, 0x0c, 0x00], // bf
    [0x00, 0x0f, 0x09, 0x15, 0x03, 0x02, 0x0c, 0x00], // c0
    [0x02, 0x1c, 0x04, 0x1f, 0x04, 0x04, 0x08, 0x00], // c1
    [0x00, 0x15, 0x15, 0x01, 0x01, 0x02, 0x04, 0x00], // c2
    [0x0e, 0x00, 0x1f, 0x04, 0x04, 0x04, 0x08, 0x00], // c3
    [0x08, 0x08, 0x08, 0x0c, 0x0a, 0x08, 0x08, 0x00], // c4
    [0x04, 0x04, 0x1f, 0x04, 0x04, 0x08, 0x10, 0x00], // c5
    [0x00, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x1f, 0x00], // c6
    [0x00, 0x1f, 0x01, 0x0a, 0x04, 0x0a, 0x10, 0x00], // c7
    [0x04, 0x1f, 0x02, 0x04, 0x0e, 0x15, 0x04, 0x00], // c8
    [0x02, 0x02, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // c9
    [0x00, 0x04, 0x02, 0x11, 0x11, 0x11, 0x11, 0x00], // ca
    [0x10, 0x10, 0x1f, 0x10, 0x10, 0x10, 0x0f, 0x00], // cb
    [0x00, 0x1f, 0x01, 0x01, 0x01, 0x02, 0x0c, 0x00], // cc
    [0x00, 0x08, 0x14, 0x02, 0x01, 0x01, 0x00, 0x00], // cd
    [0x04, 0x1f, 0x04, 0x04, 0x15, 0x15, 0x04, 0x00], // ce
    [0x00, 0x1f, 0x01, 0x01, 0x0a, 0x04, 0x02, 0x00], // cf
    [0x00, 0x0e, 0x00, 0x0e, 0x00, 0x0e, 0x01, 0x00], // d0
    [0x00, 0x04, 0x08, 0x10, 0x11, 0x1f, 0x01, 0x00], // d1
    [0x00, 0x01, 0x01, 0x0a, 0x04, 0x0a, 0x10, 0x00], // d2
    [0x00, 0x1f, 0x08, 0x1f, 0x08, 0x08, 0x07, 0x00], // d3
    [0x08, 0x08, 0x1f, 0x09, 0x0a, 0x08, 0x08, 0x00], // d4
    [0x00, 0x0e, 0x02, 0x02, 0x02, 0x02, 0x1f, 0x00], // d5
    [0x00, 0x1f, 0x01, 0x1f, 0x01, 0x01, 0x1f, 0x00], // d6
    [0x0e, 0x00, 0x1f, 0x01, 0x01, 0x02, 0x04, 0x00], // d7
    [0x12, 0x12, 0x12, 0x12, 0x02, 0x04, 0x08, 0x00], // d8
    [0x00, 0x04, 0x14, 0x14, 0x15, 0x15, 0x16, 0x00], // d9
    [0x00, 0x10, 0x10, 0x11, 0x12, 0x14, 0x18, 0x00], // da
    [0x00, 0x1f, 0x11, 0x11, 0x11, 0x11, 0x1f, 0x00], // db
    [0x00, 0x1f, 0x11, 0x11, 0x01, 0x02, 0x04, 0x00], // dc
    [0x00, 0x18, 0x00, 0x01, 0x01, 0x02, 0x1c, 0x00], // dd
    [0x04, 0x12, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // de
    [0x1c, 0x14, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00], // df
    [0x00, 0x00, 0x09, 0x15, 0x12, 0x12, 0x0d, 0x00], // e0
    [0x0a, 0x00, 0x0e, 0x01, 0x0f, 0x11, 0x0f, 0x00], // e1
    [0x00, 0x0e, 0x11, 0x1e, 0x11, 0x1e, 0x10, 0x00], // e2
    [0x00, 0x00, 0x0e, 0x10, 0x0c, 0x11, 0x0e, 0x00], // e3
    [0x00, 0x11, 0x11, 0x11, 0x13, 0x1d, 0x10, 0x00], // e4
    [0x00, 0x00, 0x0f, 0x14, 0x12, 0x11, 0x0e, 0x00], // e5
    [0x00, 0x06, 0x09, 0x11, 0x11, 0x1e, 0x10, 0x00], // e6
    [0x00, 0x0f, 0x11, 0x11, 0x11, 0x0f, 0x01, 0x00], // e7
    [0x00, 0x00, 0x07, 0x04, 0x04, 0x14, 0x08, 0x00], // e8
    [0x02, 0x1a, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // e9
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x02, 0x02, 0x00], // ea
    [0x00, 0x14, 0x08, 0x14, 0x00, 0x00, 0x00, 0x00], // eb
    [0x04, 0x0e, 0x14, 0x15, 0x0e, 0x04, 0x00, 0x00], // ec
    [0x08, 0x08, 0x1c, 0x08, 0x1c, 0x08, 0x0f, 0x00], // ed
    [0x0e, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // ee
    [0x0a, 0x00, 0x0e, 0x11, 0x11, 0x11, 0x0e, 0x00], // ef
    [0x00, 0x16, 0x19, 0x11, 0x11, 0x1e, 0x10, 0x00], // f0
    [0x00, 0x0d, 0x13, 0x11, 0x11, 0x0f, 0x01, 0x00], // f1
    [0x0e, 0x11, 0x1f, 0x11, 0x11, 0x0e, 0x00, 0x00], // f2
    [0x00, 0x00, 0x00, 0x00, 0x0b, 0x15, 0x1a, 0x00], // f3
    [0x00, 0x0e, 0x11, 0x11, 0x0a, 0x1b, 0x00, 0x00], // f4
    [0x0a, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0d, 0x00], // f5
    [0x1f, 0x10, 0x08, 0x04, 0x08, 0x10, 0x1f, 0x00], // f6
    [0x00, 0x1f, 0x0a, 0x0a, 0x0a, 0x13, 0x00, 0x00], // f7
    [0x1f, 0x00, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x00], // f8
    [0x00, 0x11, 0x11, 0x11, 0x11, 0x0f, 0x01, 0x00], // f9
    [0x01, 0x1e, 0x04, 0x1f, 0x04, 0x04, 0x00, 0x00], // fa
    [0x00, 0x1f, 0x08, 0x0f, 0x09, 0x11, 0x00, 0x00], // fb
    [0x00, 0x1f, 0x15, 0x1f, 0x11, 0x11, 0x00, 0x00], // fc
    [0x00, 0x00, 0x04, 0x00, 0x1f, 0x00, 0x04, 0x00], // fd
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // fe
    [0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x1f, 0x00], // ff
];
