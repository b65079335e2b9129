use std::error::Error as StdErr;
use std::fs;

use clap::Parser;
use codegen::proof::{load_proof, load_public_inputs};
use codegen::sway;

/// Generate Sway call data from snarkjs output
///
/// # Example:
/// ```sh
/// ./sway_gen --proof "proof.json" --public "public.json"
/// ```
///
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The snarkjs proof file
    #[clap(long, value_name = "proof", default_value = "proof.json")]
    proof: String,

    /// The snarkjs public signals file
    #[clap(long, value_name = "public", default_value = "public.json")]
    public: String,

    /// Write the fragment to a file instead of stdout
    #[clap(long, value_name = "output")]
    output: Option<String>,
}

fn main() -> Result<(), Box<dyn StdErr>> {
    // Parse command-line arguments
    let args = Args::parse();

    let proof = load_proof(&args.proof)?;
    let public = load_public_inputs(&args.public)?;

    // The fragment is fully built before anything is written, so a bad
    // input never leaves partial output behind.
    let fragment = sway::generate(&proof, &public);

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", fragment))?;
            eprintln!("Sway call data generated successfully! Output path: {:#?}", path);
        }
        None => println!("{}", fragment),
    }

    Ok(())
}
