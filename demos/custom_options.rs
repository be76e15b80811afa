//! Customizing TOON output with `EncodeOptions`.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use toon::{to_string_with_options, Delimiter, EncodeOptions};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct DataRow {
    id: u32,
    value: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let data = vec![
        DataRow {
            id: 1,
            value: "test".to_string(),
            active: true,
        },
        DataRow {
            id: 2,
            value: "prod".to_string(),
            active: false,
        },
    ];

    // Default format (comma delimiter)
    println!("Default (comma):");
    let default = toon::to_string(&data)?;
    println!("{}\n", default);

    // Tab delimiter (useful for spreadsheets)
    println!("Tab delimiter:");
    let tab_options = EncodeOptions::new().delimiter(Delimiter::Tab);
    let tab_format = to_string_with_options(&data, &tab_options)?;
    println!("{}\n", tab_format);

    // Pipe delimiter (useful for markdown-style tables)
    println!("Pipe delimiter:");
    let pipe_options = EncodeOptions::new().delimiter(Delimiter::Pipe);
    let pipe_format = to_string_with_options(&data, &pipe_options)?;
    println!("{}\n", pipe_format);

    // Explicit length marker
    println!("Length marker (#):");
    let marked_options = EncodeOptions::new().length_marker(true);
    let marked = to_string_with_options(&data, &marked_options)?;
    println!("{}", marked);

    Ok(())
}
