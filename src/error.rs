use std::fmt;
use std::io;

/// Errors raised by the visualization layer. None of them are fatal to the
/// machine: a failed render keeps the previous surface, a rejected page keeps
/// the previous page.
#[derive(Debug)]
pub enum VisError {
    /// Peripheral buffer does not reach the highest DDRAM address the grid
    /// mapping reads.
    BufferTooSmall {
        /// bytes the mapping needs
        needed: usize,
        /// bytes actually supplied
        actual: usize,
    },

    /// Memory page outside 0x00-0xff.
    PageOutOfRange(u16),

    /// A colour in the configuration wasn't `RRGGBB` hex.
    InvalidColour(String),

    /// Terminal backend or file I/O failed.
    Io(io::Error),
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VisError::BufferTooSmall { needed, actual } => write!(
                f,
                "peripheral buffer too small: need {} bytes, got {}",
                needed, actual
            ),
            VisError::PageOutOfRange(page) => {
                write!(f, "memory page 0x{:X} is outside 0x00-0xFF", page)
            }
            VisError::InvalidColour(s) => write!(f, "invalid colour {:?}, expected RRGGBB", s),
            VisError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VisError {
    fn from(e: io::Error) -> Self {
        VisError::Io(e)
    }
}
