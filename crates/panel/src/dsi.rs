//! DSI host abstraction.

/// Manufacturer register holding the MTP calibration dump.
pub const MTP_REGISTER: u8 = 0xC8;

/// Driver IC ID register (three bytes: ID1, ID2, ID3).
pub const ID_REGISTER: u8 = 0x04;

/// Gamma control register written with each table.
pub const GAMMA_REGISTER: u8 = 0xCA;

/// Bytes returned by [`ID_REGISTER`].
pub const ID_LEN: usize = 3;

/// Command-mode DSI link to the panel's driver IC.
pub trait DsiHost {
    /// Error type for link operations
    type Error: core::fmt::Debug;

    /// Send one long packet; the first byte is the register.
    fn write(&mut self, payload: &[u8]) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Read `buf.len()` bytes from `register`, returning how many arrived.
    fn read(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, Self::Error>>;
}
