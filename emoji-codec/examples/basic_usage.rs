//! Basic usage example for emoji-codec

use emoji_codec::{convert, Config, Direction, EmojiConverter, Grouping};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let encoded = convert("👋Hello World!🌎", Direction::Encode);
    println!("Encoded: {encoded}");
    println!("Decoded: {}\n", convert(&encoded, Direction::Decode));

    // Method 2: Builder with a custom delimiter
    println!("=== Method 2: Builder ===");
    let converter = EmojiConverter::builder()
        .delimiter('~')
        .grouping(Grouping::SurrogatePairs)
        .build()?;
    println!("Encoded: {}\n", converter.encode("launch 🚀"));

    // Method 3: TOML configuration and detailed output
    println!("=== Method 3: TOML Configuration ===");
    let config = Config::from_toml_str("word_separator = \",\"")?;
    let converter = EmojiConverter::with_config(config)?;
    let output = converter.convert_detailed("tea,☕,now", Direction::Encode);
    println!("{}", output.to_json()?);

    Ok(())
}
