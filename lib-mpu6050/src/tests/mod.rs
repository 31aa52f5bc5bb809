mod config_records;
