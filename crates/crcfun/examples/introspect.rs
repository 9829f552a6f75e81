//! Print what each fold does on this host.
//!
//! Run with: `cargo run --example introspect -p crcfun`

use crcfun::{Bits, Direction, EngineInfo, introspect};

fn main() {
  let layout = crcfun::init();
  let info = EngineInfo::current();

  println!("=== CRC Fold Introspection ===\n");
  println!("Engine:     {info}");
  println!("Containers: {layout}\n");

  for bits in Bits::ALL {
    for direction in Direction::ALL {
      println!("  {}", introspect::plan(bits, direction));
    }
  }
}
