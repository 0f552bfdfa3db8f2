// JSON export for ring signatures.
//
// On-chain verifiers take flat decimal-string arguments (Solidity has no
// tuple ABI for nested structs here), so every field element is rendered
// as a decimal string and points as [x, y] pairs.

use serde_json::{json, Value};
use std::path::Path;

use ring_schnorr_core::curve::{fq_to_biguint, fr_to_biguint, point_coords, G1Affine};
use ring_schnorr_core::{NodeRingSig, RingSchnorrError, SchnorrSig};

fn point_to_json(p: &G1Affine) -> Result<Value, RingSchnorrError> {
    let (x, y) = point_coords(p)?;
    Ok(json!([
        fq_to_biguint(&x).to_string(),
        fq_to_biguint(&y).to_string()
    ]))
}

fn inner_sig_to_json(sig: &SchnorrSig) -> Result<Value, RingSchnorrError> {
    Ok(json!({
        "R": point_to_json(&sig.r)?,
        "s": fr_to_biguint(&sig.s).to_string(),
    }))
}

/// Render a ring signature as the decimal-string JSON payload the contract
/// call consumes.
pub fn build_signature_json(sig: &NodeRingSig) -> Result<Value, RingSchnorrError> {
    let r_list = sig
        .r_list
        .iter()
        .map(point_to_json)
        .collect::<Result<Vec<_>, _>>()?;
    let sig_list = sig
        .sig_list
        .iter()
        .map(inner_sig_to_json)
        .collect::<Result<Vec<_>, _>>()?;
    let ring = sig
        .ring
        .iter()
        .map(point_to_json)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(json!({
        "ephemeralPub": point_to_json(&sig.ephemeral_pub)?,
        "rList":        r_list,
        "sigList":      sig_list,
        "masterSum":    fr_to_biguint(&sig.master_sum).to_string(),
        "ring":         ring,
    }))
}

/// Build the signature JSON and write it to a file.
pub fn export_signature_json(sig: &NodeRingSig, output_path: &Path) -> std::io::Result<()> {
    let payload = build_signature_json(sig)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let json_str = serde_json::to_string_pretty(&payload).expect("JSON serialization failed");
    std::fs::write(output_path, json_str)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
