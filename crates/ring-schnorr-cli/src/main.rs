use num_bigint::BigUint;
use rand::rngs::OsRng;
use std::path::PathBuf;
use std::process::exit;

use ring_schnorr_core::curve::{fq_to_biguint, G1Affine};
use ring_schnorr_core::{nr_sign, nr_verify, KeyPair, KeyRegistry, InMemoryRegistry, Message};

mod export;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut message = String::from("123");
    let mut n_decoys = 2usize;
    let mut output = PathBuf::from("build/ring_signature.json");

    // Simple argument parsing
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--message" | "-m" => {
                i += 1;
                if i < args.len() {
                    message = args[i].clone();
                }
            }
            "--decoys" | "-d" => {
                i += 1;
                if i < args.len() {
                    n_decoys = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("--decoys expects a count, got: {}", args[i]);
                        exit(1);
                    });
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output = PathBuf::from(&args[i]);
                }
            }
            "--help" | "-h" => {
                eprintln!("Usage: ring-schnorr-cli [OPTIONS]");
                eprintln!("  --message, -m  Message to sign, a decimal uint256 (default: 123)");
                eprintln!("  --decoys,  -d  Number of decoy keys in the ring (default: 2)");
                eprintln!("  --output,  -o  Output JSON path (default: build/ring_signature.json)");
                exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                exit(1);
            }
        }
        i += 1;
    }

    let message_value: BigUint = message.parse().unwrap_or_else(|_| {
        eprintln!("--message expects a decimal integer, got: {message:?}");
        exit(1);
    });
    let message_word = Message::from_biguint(&message_value).unwrap_or_else(|| {
        eprintln!("--message does not fit in 256 bits: {message}");
        exit(1);
    });

    eprintln!("[1/4] Generating signer and {n_decoys} decoy keypair(s)...");
    let signer = KeyPair::generate(&mut OsRng).expect("keypair generation failed");
    let mut registry = InMemoryRegistry::new();
    for id in 0..n_decoys as u64 {
        let decoy = KeyPair::generate(&mut OsRng).expect("keypair generation failed");
        registry.insert(id, decoy.pk);
    }
    let ids: Vec<u64> = (0..n_decoys as u64).collect();
    let decoys: Vec<G1Affine> = registry
        .public_keys(&ids)
        .expect("registry lookup failed")
        .into_iter()
        .map(|pk| pk.point)
        .collect();
    let (pk_x, pk_y) = signer.pk.coords().expect("public key has coordinates");
    eprintln!("  PK.x = {}", fq_to_biguint(&pk_x));
    eprintln!("  PK.y = {}", fq_to_biguint(&pk_y));

    eprintln!("[2/4] Producing ring signature over message {message_value}...");
    let sig = nr_sign(&signer.sk, &message_word, &decoys, &mut OsRng)
        .unwrap_or_else(|e| {
            eprintln!("signing failed: {e}");
            exit(1);
        });
    eprintln!("  ring size = {}", sig.len());

    eprintln!("[3/4] Verifying ring signature...");
    match nr_verify(&message_word, &sig) {
        Ok(true) => eprintln!("  signature valid"),
        Ok(false) => {
            eprintln!("verification failed on a freshly produced signature");
            exit(1);
        }
        Err(e) => {
            eprintln!("verification error: {e}");
            exit(1);
        }
    }

    eprintln!("[4/4] Exporting signature JSON to {output:?}...");
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).expect("failed to create output directory");
    }
    export::export_signature_json(&sig, &output).expect("failed to write signature JSON");

    // Also print the JSON to stdout for inspection
    let payload = export::build_signature_json(&sig).expect("signature renders as JSON");
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
}
