use std::fs;
use std::path::Path;

/// DMP tables `src/sensor.rs` embeds, with the sizes of the MotionApps v2.0 release.
const DMP_TABLES: [(&str, u64); 3] = [
    ("dmp/program.bin", 1929),
    ("dmp/config.bin", 192),
    ("dmp/updates.bin", 47),
];

fn main() {
    let mut missing = Vec::new();

    for (path, size) in DMP_TABLES {
        println!("cargo:rerun-if-changed={}", path);

        match fs::metadata(Path::new(path)) {
            Ok(meta) if meta.len() == size => {},
            Ok(meta) => {
                println!("cargo:warning={} is {} bytes, MotionApps v2.0 has {}", path, meta.len(), size);
            },
            Err(_) => missing.push(path),
        }
    }

    if !missing.is_empty() {
        panic!(
            "missing DMP firmware table(s): {}\nThe MotionApps image is not redistributed, see dmp/README.md for how to extract it.",
            missing.join(", ")
        );
    }
}
