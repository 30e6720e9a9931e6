use rs_markov_core::io::read_source;
use rs_markov_core::{GenerateError, GenerateOptions, generate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows table size and dead ends
    env_logger::init();

    // Load the corpus from the "data" directory
    let source = read_source("./data/example.txt")?;

    // Number of tokens to draw from the chain (dead ends count too)
    // and window width: 10 tokens means 9 tokens of context per prediction
    let options = GenerateOptions::new(source)
        .with_words_count(150)
        .with_sample_size(10);

    println!("{}", generate(&options)?);

    // A shorter context makes the text wander further from the source
    let options = options.with_sample_size(3).with_words_count(60);
    println!("\n{}", generate(&options)?);

    // Seeding with an explicit start text
    let options = options.with_start("The river");
    println!("\n{}", generate(&options)?);

    // Invalid configurations are rejected before any work is done
    match generate(&options.clone().with_sample_size(1)) {
        Err(GenerateError::InvalidSampleSize(size)) => println!("\nSample size {} is invalid, must be at least 2", size),
        _ => println!("Should not happen"),
    }
    match generate(&GenerateOptions::new("")) {
        Err(GenerateError::EmptySource) => println!("An empty source is rejected"),
        _ => println!("Should not happen"),
    }

    Ok(())
}
