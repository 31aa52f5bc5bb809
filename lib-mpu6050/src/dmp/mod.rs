pub mod packet;
pub use packet::*;

/// The DMP memory is organised in banks of 256 bytes.
pub const DMP_MEMORY_BANK_SIZE: u16 = 256;

/// Amount of bytes written to the DMP memory per i2c transaction.
pub const DMP_MEMORY_CHUNK_SIZE: usize = 16;

/// Total DMP memory, 8 banks.
pub const DMP_MEMORY_SIZE: usize = 8 * DMP_MEMORY_BANK_SIZE as usize;

/// Special configuration command that enables the DMP interrupt.
pub const CONFIG_COMMAND_ENABLE_INTERRUPT: u8 = 0x01;

/// A DMP firmware image. The program and configuration blobs are InvenSense's and are supplied by
/// the caller, this crate only knows how to upload them.
///
#[derive(Debug, Clone, Copy)]
pub struct DmpImage<'a>
{
    /// Program loaded at bank 0, address 0.
    pub program: &'a [u8],

    /// Configuration set, a sequence of records in the format described by [`ConfigRecords`].
    pub config: &'a [u8],

    /// Updates applied after the configuration, same record format.
    pub updates: &'a [u8],

    /// Size of one FIFO packet produced by this firmware.
    pub packet_size: u16,
}

/// One record of a DMP configuration set.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRecord<'a>
{
    /// Write `data` to memory `bank` starting at `address`.
    Write { bank: u8, address: u8, data: &'a [u8] },

    /// Zero length record, the byte following the header selects a special command.
    Command { bank: u8, address: u8, command: u8 },
}

/// Iterator over the records of a DMP configuration blob. Every record starts with a
/// `[bank, address, length]` header followed by `length` data bytes, or by a single command byte
/// when the length is zero.
///
/// Yields `Err(())` once and stops if the blob is truncated.
///
pub struct ConfigRecords<'a>
{
    data: &'a [u8],
    position: usize,
    failed: bool,
}

impl<'a> ConfigRecords<'a>
{
    pub fn new(data: &'a [u8]) -> Self {
        ConfigRecords { data, position: 0, failed: false }
    }
}

impl<'a> Iterator for ConfigRecords<'a>
{
    type Item = Result<ConfigRecord<'a>, ()>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.data.len() {
            return None;
        }

        let rest = &self.data[self.position..];
        if rest.len() < 3 {
            self.failed = true;
            return Some(Err(()));
        }
        let (bank, address, length) = (rest[0], rest[1], rest[2] as usize);

        if length == 0 {
            let Some(&command) = rest.get(3) else {
                self.failed = true;
                return Some(Err(()));
            };
            self.position += 4;
            return Some(Ok(ConfigRecord::Command { bank, address, command }));
        }

        let Some(data) = rest.get(3..3 + length) else {
            self.failed = true;
            return Some(Err(()));
        };
        self.position += 3 + length;
        Some(Ok(ConfigRecord::Write { bank, address, data }))
    }
}
