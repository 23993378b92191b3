use std::io;
use std::io::Read;
use std::sync::{Arc, PoisonError, RwLock};

// NB. addresses are u16 as per the 6502 bus; lengths are usize to stop endless casting

/// Read-only view of the machine's address space, as the viewers see it.
pub trait MemoryMap {
    /// copy `buf.len()` bytes starting at `addr`; anything past the end of
    /// memory reads as zero
    fn read_into(&self, addr: u16, buf: &mut [u8]);
}

/// full 64K of the buri address space
pub const RAM_SIZE_BYTES: usize = 0x10000;

/// Plain byte-addressable RAM, owned by the machine.
pub struct FlatMemory {
    bytes: Box<[u8]>,
}

impl FlatMemory {
    pub fn new() -> Self {
        FlatMemory {
            bytes: vec![0u8; RAM_SIZE_BYTES].into_boxed_slice(),
        }
    }

    /// write unknown len of data into memory at a particular address
    pub fn write_any(&mut self, reader: &mut impl io::Read, addr: u16) -> Result<usize, io::Error> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        self.write(&buf, addr)?;
        Ok(buf.len())
    }

    /// write a chunk of bytes; fails rather than wrapping past the top of memory
    pub fn write(&mut self, data: &[u8], addr: u16) -> Result<(), io::Error> {
        let a = addr as usize;
        if a + data.len() > self.bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{} bytes at 0x{:04X} runs past the end of memory",
                    data.len(),
                    addr
                ),
            ));
        }
        let mut d: &[u8] = data;
        d.read_exact(&mut self.bytes[a..a + data.len()])?;
        Ok(())
    }

    pub fn set_byte(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMap for FlatMemory {
    fn read_into(&self, addr: u16, buf: &mut [u8]) {
        let a = addr as usize;
        let n = buf.len().min(self.bytes.len().saturating_sub(a));
        buf[..n].copy_from_slice(&self.bytes[a..a + n]);
        for b in &mut buf[n..] {
            *b = 0;
        }
    }
}

/// Memory shared between the machine thread (writer) and the UI (reader).
/// Each read is one snapshot under the lock; consecutive reads may differ.
#[derive(Clone, Default)]
pub struct SharedMemory(Arc<RwLock<FlatMemory>>);

impl SharedMemory {
    pub fn new(memory: FlatMemory) -> Self {
        SharedMemory(Arc::new(RwLock::new(memory)))
    }

    /// run `f` with the machine's write access
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut FlatMemory) -> T) -> T {
        let mut m = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut m)
    }
}

impl MemoryMap for SharedMemory {
    fn read_into(&self, addr: u16, buf: &mut [u8]) {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .read_into(addr, buf)
    }
}
