//! Register map of the MPU6050, limited to the registers the DMP pipeline touches. Addresses and
//! bit positions are from the MPU6000/MPU6050 register map revision 4.2 and, for the undocumented
//! DMP registers, from the `i2cdevlib` C++ library.

pub const XG_OFFS_TC: u8 = 0x00; //[7] PWR_MODE, [6:1] XG_OFFS_TC, [0] OTP_BNK_VLD

pub const SMPLRT_DIV: u8 = 0x19;
pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;

pub const MOT_THR: u8 = 0x1F;
pub const MOT_DUR: u8 = 0x20;
pub const ZERO_MOT_THR: u8 = 0x21;
pub const ZERO_MOT_DUR: u8 = 0x22;

pub const I2C_SLV0_ADDR: u8 = 0x25;

pub const INT_ENABLE: u8 = 0x38;
pub const INT_STATUS: u8 = 0x3A;

pub const TEMP_OUT_H: u8 = 0x41;
pub const GYRO_XOUT_H: u8 = 0x43;

pub const USER_CTRL: u8 = 0x6A;
pub const PWR_MGMT_1: u8 = 0x6B;

pub const DMP_BANK_SEL: u8 = 0x6D;
pub const DMP_MEM_START_ADDR: u8 = 0x6E;
pub const DMP_MEM_R_W: u8 = 0x6F;
pub const DMP_CFG_1: u8 = 0x70;
pub const DMP_CFG_2: u8 = 0x71;

pub const FIFO_COUNT_H: u8 = 0x72;
pub const FIFO_R_W: u8 = 0x74;

pub const WHO_AM_I: u8 = 0x75;

// INT_STATUS bits
pub const INT_STATUS_FIFO_OFLOW: u8 = 0b0001_0000;
pub const INT_STATUS_DMP_INT: u8 = 0b0000_0010;

// INT_ENABLE values
pub const INT_ENABLE_FIFO_OFLOW_DMP: u8 = 0b0001_0010;
pub const INT_ENABLE_DMP_CONFIG: u8 = 0x32;

// USER_CTRL bits
pub const USER_CTRL_DMP_EN: u8 = 0b1000_0000;
pub const USER_CTRL_FIFO_EN: u8 = 0b0100_0000;
pub const USER_CTRL_I2C_MST_EN: u8 = 0b0010_0000;
pub const USER_CTRL_DMP_RESET: u8 = 0b0000_1000;
pub const USER_CTRL_FIFO_RESET: u8 = 0b0000_0100;
pub const USER_CTRL_I2C_MST_RESET: u8 = 0b0000_0010;

// PWR_MGMT_1 bits
pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0b1000_0000;
pub const PWR_MGMT_1_SLEEP: u8 = 0b0100_0000;
pub const PWR_MGMT_1_CLKSEL: u8 = 0b0000_0111;

// DMP_BANK_SEL bits
pub const BANK_SEL_PREFETCH: u8 = 0b0100_0000;
pub const BANK_SEL_USER: u8 = 0b0010_0000;

/// Size of the hardware FIFO, a FIFO count equal to this means the queue is full and has very
/// likely overflowed.
pub const FIFO_CAPACITY: u16 = 1024;
