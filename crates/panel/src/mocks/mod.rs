//! Mock implementations for testing
//!
//! [`MockDsiHost`] records every write and answers register reads from
//! preset contents, so panel bring-up can be exercised without hardware.

use crate::dsi::DsiHost;

/// Longest payload the mock records.
pub const MAX_PAYLOAD: usize = 40;

/// Writes the mock keeps before dropping new ones.
pub const MAX_WRITES: usize = 64;

const MAX_REGISTERS: usize = 8;

/// Error injected by [`MockDsiHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MockError {
    /// Injected link failure.
    Link,
}

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "mock DSI link failure")
    }
}

/// Mock DSI host
#[derive(Debug, Default)]
pub struct MockDsiHost {
    registers: heapless::Vec<(u8, heapless::Vec<u8, MAX_PAYLOAD>), MAX_REGISTERS>,
    writes: heapless::Vec<heapless::Vec<u8, MAX_PAYLOAD>, MAX_WRITES>,
    reads: usize,
    fail_reads: bool,
    fail_writes: bool,
    short_read: Option<usize>,
}

impl MockDsiHost {
    /// Host whose registers all read back as zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset what `register` reads back; longer reads are zero-filled.
    #[must_use]
    pub fn with_register(mut self, register: u8, data: &[u8]) -> Self {
        let data = heapless::Vec::from_slice(data.get(..MAX_PAYLOAD).unwrap_or(data))
            .unwrap_or_default();
        self.registers.retain(|(r, _)| *r != register);
        let _ = self.registers.push((register, data));
        self
    }

    /// Make every read fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every write fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Cap the bytes each read reports.
    pub fn set_short_read(&mut self, len: Option<usize>) {
        self.short_read = len;
    }

    /// Recorded writes, oldest first.
    pub fn writes(&self) -> &[heapless::Vec<u8, MAX_PAYLOAD>] {
        &self.writes
    }

    /// Number of reads served.
    pub fn read_count(&self) -> usize {
        self.reads
    }
}

impl DsiHost for MockDsiHost {
    type Error = MockError;

    async fn write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockError::Link);
        }
        // Record writes for verification
        if let Ok(bytes) = heapless::Vec::from_slice(payload) {
            let _ = self.writes.push(bytes);
        }
        Ok(())
    }

    async fn read(&mut self, register: u8, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_reads {
            return Err(MockError::Link);
        }
        self.reads = self.reads.saturating_add(1);
        buf.fill(0);
        if let Some((_, data)) = self.registers.iter().find(|(r, _)| *r == register) {
            for (dst, src) in buf.iter_mut().zip(data.iter()) {
                *dst = *src;
            }
        }
        Ok(self.short_read.map_or(buf.len(), |n| n.min(buf.len())))
    }
}
