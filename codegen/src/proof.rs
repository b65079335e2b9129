use std::fmt;
use std::fs;
use std::path::Path;

use num_bigint::BigUint;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Error;

/// A single field element as snarkjs emits it: a decimal string or, for
/// small values, a bare JSON integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValue(pub BigUint);

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue(BigUint::from(value))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or a non-negative integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                BigUint::parse_bytes(value.as_bytes(), 10)
                    .map(FieldValue)
                    .ok_or_else(|| E::custom(format!("invalid decimal value: {:?}", value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                Ok(FieldValue(BigUint::from(value)))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// An affine G1 point as a snarkjs 3-tuple. The third coordinate is the
/// unity z of the projective encoding and is never emitted.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct G1Tuple(pub FieldValue, pub FieldValue, pub FieldValue);

impl G1Tuple {
    pub fn x(&self) -> &FieldValue {
        &self.0
    }

    pub fn y(&self) -> &FieldValue {
        &self.1
    }
}

/// PLONK proof object as written by `snarkjs plonk prove`.
#[derive(Clone, Debug, Deserialize)]
pub struct PlonkProof {
    #[serde(rename = "A")]
    pub a: G1Tuple,
    #[serde(rename = "B")]
    pub b: G1Tuple,
    #[serde(rename = "C")]
    pub c: G1Tuple,
    #[serde(rename = "Z")]
    pub z: G1Tuple,
    #[serde(rename = "T1")]
    pub t1: G1Tuple,
    #[serde(rename = "T2")]
    pub t2: G1Tuple,
    #[serde(rename = "T3")]
    pub t3: G1Tuple,
    #[serde(rename = "Wxi")]
    pub wxi: G1Tuple,
    #[serde(rename = "Wxiw")]
    pub wxiw: G1Tuple,
    pub eval_a: FieldValue,
    pub eval_b: FieldValue,
    pub eval_c: FieldValue,
    pub eval_s1: FieldValue,
    pub eval_s2: FieldValue,
    pub eval_zw: FieldValue,
}

/// Groth16 proof object as written by `snarkjs groth16 prove`.
#[derive(Clone, Debug, Deserialize)]
pub struct Groth16Proof {
    pub pi_a: [FieldValue; 3],
    pub pi_b: [[FieldValue; 2]; 3],
    pub pi_c: [FieldValue; 3],
}

#[derive(Clone, Debug, Deserialize)]
pub struct FflonkPolynomials {
    #[serde(rename = "C1")]
    pub c1: G1Tuple,
    #[serde(rename = "C2")]
    pub c2: G1Tuple,
    #[serde(rename = "W1")]
    pub w1: G1Tuple,
    #[serde(rename = "W2")]
    pub w2: G1Tuple,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FflonkEvaluations {
    pub ql: FieldValue,
    pub qr: FieldValue,
    pub qm: FieldValue,
    pub qo: FieldValue,
    pub qc: FieldValue,
    pub s1: FieldValue,
    pub s2: FieldValue,
    pub s3: FieldValue,
    pub a: FieldValue,
    pub b: FieldValue,
    pub c: FieldValue,
    pub z: FieldValue,
    pub zw: FieldValue,
    pub t1w: FieldValue,
    pub t2w: FieldValue,
    pub inv: FieldValue,
}

/// FFLONK proof object as written by `snarkjs fflonk prove`.
#[derive(Clone, Debug, Deserialize)]
pub struct FflonkProof {
    pub polynomials: FflonkPolynomials,
    pub evaluations: FflonkEvaluations,
}

/// A parsed proof, dispatched on the `protocol` field of the JSON object.
#[derive(Clone, Debug)]
pub enum Proof {
    Plonk(PlonkProof),
    Groth16(Groth16Proof),
    Fflonk(FflonkProof),
}

/// Ordered public signals from `public.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct PublicInputs(pub Vec<FieldValue>);

/// Parse a proof JSON document.
///
/// snarkjs tags its output with a `protocol` field; older PLONK fixtures
/// omit it, so an absent tag means PLONK.
pub fn parse_proof(json: &str) -> Result<Proof, Error> {
    let value: Value = serde_json::from_str(json)?;
    let protocol = value
        .get("protocol")
        .and_then(Value::as_str)
        .unwrap_or("plonk")
        .to_string();

    match protocol.as_str() {
        "plonk" => Ok(Proof::Plonk(serde_json::from_value(value)?)),
        "groth16" => Ok(Proof::Groth16(serde_json::from_value(value)?)),
        "fflonk" => Ok(Proof::Fflonk(serde_json::from_value(value)?)),
        _ => Err(Error::UnsupportedProtocol(protocol)),
    }
}

pub fn parse_public_inputs(json: &str) -> Result<PublicInputs, Error> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_proof<P: AsRef<Path>>(path: P) -> Result<Proof, Error> {
    let json = fs::read_to_string(path)?;
    parse_proof(&json)
}

pub fn load_public_inputs<P: AsRef<Path>>(path: P) -> Result<PublicInputs, Error> {
    let json = fs::read_to_string(path)?;
    parse_public_inputs(&json)
}
