//! Layout of the default MotionApps v2.0 FIFO packet.
//!
//! ```text
//! [QUAT W][      ][QUAT X][      ][QUAT Y][      ][QUAT Z][      ][GYRO X][      ][GYRO Y][      ]
//!   0   1   2   3   4   5   6   7   8   9  10  11  12  13  14  15  16  17  18  19  20  21  22  23
//!
//! [GYRO Z][      ][ACC X ][      ][ACC Y ][      ][ACC Z ][      ][      ]
//!  24  25  26  27  28  29  30  31  32  33  34  35  36  37  38  39  40  41
//! ```
//!
//! Every field is a 32 bit big endian word, only the upper 16 bits are used.

/// Packet size reported by the MotionApps v2.0 firmware.
pub const DMP_PACKET_SIZE: u16 = 42;

/// Largest packet the pipeline will buffer.
pub const MAX_PACKET_SIZE: usize = 64;

/// Byte offsets of the quaternion components (w, x, y, z).
pub const QUATERNION_OFFSETS: [usize; 4] = [0, 4, 8, 12];

/// Byte offsets of the accelerometer components (x, y, z).
pub const ACCEL_OFFSETS: [usize; 3] = [28, 32, 36];

/// Smallest packet that still contains every field we decode.
pub const MIN_PACKET_SIZE: usize = ACCEL_OFFSETS[2] + 2;
