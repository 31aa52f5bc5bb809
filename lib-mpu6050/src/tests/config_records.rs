use crate::dmp::*;

#[test]
fn parses_writes_and_commands() {
    let blob = [
        0x03, 0x7B, 0x03, 0x4C, 0xCD, 0x6C,
        0x00, 0x00, 0x00, 0x01,
        0x07, 0x46, 0x01, 0x9A,
    ];
    let records: Vec<_> = ConfigRecords::new(&blob).collect();

    assert_eq!(records, vec![
        Ok(ConfigRecord::Write { bank: 0x03, address: 0x7B, data: &[0x4C, 0xCD, 0x6C] }),
        Ok(ConfigRecord::Command { bank: 0x00, address: 0x00, command: CONFIG_COMMAND_ENABLE_INTERRUPT }),
        Ok(ConfigRecord::Write { bank: 0x07, address: 0x46, data: &[0x9A] }),
    ]);
}

#[test]
fn empty_blob_has_no_records() {
    assert_eq!(ConfigRecords::new(&[]).count(), 0);
}

#[test]
fn truncated_data_fails_once() {
    // Header claims four bytes, only two follow.
    let blob = [0x01, 0x00, 0x02, 0xAA, 0xBB, 0x02, 0x10, 0x04, 0x01, 0x02];
    let records: Vec<_> = ConfigRecords::new(&blob).collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], Ok(ConfigRecord::Write { bank: 0x01, address: 0x00, data: &[0xAA, 0xBB] }));
    assert_eq!(records[1], Err(()));
}

#[test]
fn truncated_header_fails() {
    let records: Vec<_> = ConfigRecords::new(&[0x01, 0x02]).collect();
    assert_eq!(records, vec![Err(())]);

    // Command record without its command byte.
    let records: Vec<_> = ConfigRecords::new(&[0x00, 0x00, 0x00]).collect();
    assert_eq!(records, vec![Err(())]);
}
