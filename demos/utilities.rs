//! Shows the clamping, piping and guard helpers side by side.
//!
//! Run with: cargo run --example utilities

use sovran_typedict::{ensure, require, require_or, Clamp, Pipe, PipeOption};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Volume {
    Muted,
    Level(u8),
}

#[derive(Debug)]
struct InvalidVolume(String);

fn parse_volume(raw: Option<&str>) -> Result<Volume, InvalidVolume> {
    let raw = require_or(raw, || InvalidVolume("missing".to_string()))?;
    let level = raw
        .parse::<i64>()
        .map_err(|e| InvalidVolume(format!("{}: {}", raw, e)))?;
    ensure(level >= 0, || InvalidVolume(format!("{} is negative", level)))?;

    Ok(match level.clamped(0..=100) {
        0 => Volume::Muted,
        n => Volume::Level(n as u8),
    })
}

fn main() {
    for raw in [Some("35"), Some("250"), Some("0"), Some("-4"), Some("loud"), None] {
        match parse_volume(raw) {
            Ok(volume) => println!("{:?} -> {:?}", raw, volume),
            Err(e) => println!("{:?} -> rejected ({})", raw, e.0),
        }
    }

    // Optional chaining through plain functions
    let percent = Some("0.75")
        .pipe_some(|s| s.parse::<f64>().ok())
        .map(|f| f * 100.0)
        .unwrap_or(0.0);
    println!("percent: {}", percent);

    // Fallible steps skip cleanly on None
    let parsed: Result<Option<u16>, _> = None::<&str>.try_pipe(str::parse::<u16>);
    println!("parsed nothing: {:?}", parsed);

    let width = 1280i32.bounded(1920, 640).pipe(|w| w / 2);
    println!("half width: {}", width);

    let first = require(vec![3, 1, 2].into_iter().min());
    println!("smallest: {}", first);
}
