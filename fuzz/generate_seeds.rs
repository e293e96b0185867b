#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Minimal 2x1 truecolor dump: 100-byte header, no name, no colormap
    let mut xwd = vec![0u8; 100];
    xwd[0..4].copy_from_slice(&100u32.to_be_bytes()); // header_size
    xwd[4..8].copy_from_slice(&7u32.to_be_bytes()); // file_version
    xwd[8..12].copy_from_slice(&2u32.to_be_bytes()); // ZPixmap
    xwd[12..16].copy_from_slice(&24u32.to_be_bytes()); // depth
    xwd[16..20].copy_from_slice(&2u32.to_be_bytes()); // width
    xwd[20..24].copy_from_slice(&1u32.to_be_bytes()); // height
    xwd[44..48].copy_from_slice(&32u32.to_be_bytes()); // bits_per_pixel
    xwd[48..52].copy_from_slice(&8u32.to_be_bytes()); // bytes_per_line
    xwd[52..56].copy_from_slice(&4u32.to_be_bytes()); // TrueColor
    xwd.extend_from_slice(&[10, 20, 30, 0, 40, 50, 60, 0]);
    fs::write(format!("{dir}/xwd_2x1.xwd"), &xwd).unwrap();

    // Same dump with a window name and a small colormap table
    let mut named = xwd[..100].to_vec();
    named[0..4].copy_from_slice(&106u32.to_be_bytes()); // header_size
    named[76..80].copy_from_slice(&2u32.to_be_bytes()); // colormap_entries
    named.extend_from_slice(b"xterm\0");
    named.extend_from_slice(&[0u8; 24]); // 2 colormap records
    named.extend_from_slice(&[10, 20, 30, 0, 40, 50, 60, 0]);
    fs::write(format!("{dir}/xwd_named.xwd"), &named).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/header_only.bin"), &xwd[..100]).unwrap();
    fs::write(format!("{dir}/half_header.bin"), &xwd[..50]).unwrap();
    fs::write(format!("{dir}/one_pixel_short.bin"), &xwd[..xwd.len() - 1]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
