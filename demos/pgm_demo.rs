// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Example: pattern → save → load → rotate → negate → hide and recover a message.
//!
//! ```text
//! cargo run --example pgm_demo -- [image.pgm] [message]
//! RUST_LOG=debug cargo run --example pgm_demo
//! ```
//!
//! Without arguments the generated test pattern is used as the working image.
use std::error::Error;

use pgmkit::{decode_text, embed_text, negate, pattern, pgm, rotate};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if wants_help(&args) {
        println!("Usage: pgm_demo [image.pgm] [message]");
        return Ok(());
    }

    let test = pattern::feep()?;
    pgm::save(&test, "input.pgm")?;
    println!("Test pattern written to: input.pgm");

    let source = args.get(1).map(String::as_str).unwrap_or("input.pgm");
    let img = pgm::load(source)?;
    println!("Image info: {}", img.info());

    let rotated = rotate(&img, 1.5708);
    pgm::save(&rotated, "rotated.pgm")?;
    println!("Rotated image written to: rotated.pgm");

    let negated = negate(&img);
    pgm::save(&negated, "negated.pgm")?;
    println!("Negated image written to: negated.pgm");

    let secret = args.get(2).map(String::as_str).unwrap_or("hello feep");
    println!("Message to hide: {secret}");
    let mut stego = img.clone();
    match embed_text(&mut stego, secret) {
        Ok(()) => {
            pgm::save(&stego, "secret.pgm")?;
            println!("Stego image written to: secret.pgm");
            println!("Decoded message: {}", decode_text(&stego)?);
        }
        Err(e) => eprintln!("Embedding failed: {e}"),
    }

    Ok(())
}

fn wants_help(args: &[String]) -> bool {
    args.iter().skip(1).any(|a| a == "-h" || a == "--help")
}
