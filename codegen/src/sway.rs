use crate::proof::{
    FflonkProof, FieldValue, G1Tuple, Groth16Proof, PlonkProof, Proof, PublicInputs,
};

/// Render a field element as a Sway `bn` literal: lowercase hex, zero-padded
/// to 64 digits. Values past 256 bits keep their full width instead of being
/// truncated, so the literal always parses back to the same integer.
pub fn bn_format(value: &FieldValue) -> String {
    format!("bn(\"0x{:064x}\", \"hex\")", value.0)
}

/// Body of the `proof` record for a PLONK proof. Field order matches the
/// Sway verifier's struct layout and must not change.
pub fn format_plonk_proof(proof: &PlonkProof) -> String {
    let points: [(&str, &G1Tuple); 9] = [
        ("A", &proof.a),
        ("B", &proof.b),
        ("C", &proof.c),
        ("Z", &proof.z),
        ("T1", &proof.t1),
        ("T2", &proof.t2),
        ("T3", &proof.t3),
        ("Wxi", &proof.wxi),
        ("Wxiw", &proof.wxiw),
    ];
    let scalars: [(&str, &FieldValue); 6] = [
        ("eval_a", &proof.eval_a),
        ("eval_b", &proof.eval_b),
        ("eval_c", &proof.eval_c),
        ("eval_s1", &proof.eval_s1),
        ("eval_s2", &proof.eval_s2),
        ("eval_zw", &proof.eval_zw),
    ];

    let mut lines = Vec::new();
    for (name, point) in points {
        lines.push(format!("    proof_{}: {{", name));
        lines.push(format!("      x: {},", bn_format(point.x())));
        lines.push(format!("      y: {}", bn_format(point.y())));
        lines.push("    },".to_string());
    }
    for (name, value) in scalars {
        lines.push(format!("    {}: {},", name, bn_format(value)));
    }
    strip_last_comma(&mut lines);

    lines.join("\n")
}

/// Body of the `pubInput` array: one `bn` literal per signal, no trailing
/// comma.
pub fn format_pub_input(inputs: &PublicInputs) -> String {
    inputs
        .0
        .iter()
        .map(bn_format)
        .collect::<Vec<String>>()
        .join(",\n    ")
}

/// Body of the `proof` record for an FFLONK proof. The four commitments keep
/// both coordinates; the sixteen evaluations are single-coordinate blocks.
pub fn format_fflonk_proof(proof: &FflonkProof) -> String {
    let points: [(&str, &G1Tuple); 4] = [
        ("C1", &proof.polynomials.c1),
        ("C2", &proof.polynomials.c2),
        ("W", &proof.polynomials.w1),
        ("W_dash", &proof.polynomials.w2),
    ];
    let evals = &proof.evaluations;
    let scalars: [(&str, &FieldValue); 16] = [
        ("q_L", &evals.ql),
        ("q_R", &evals.qr),
        ("q_M", &evals.qm),
        ("q_O", &evals.qo),
        ("q_C", &evals.qc),
        ("S_sigma_1", &evals.s1),
        ("S_sigma_2", &evals.s2),
        ("S_sigma_3", &evals.s3),
        ("a", &evals.a),
        ("b", &evals.b),
        ("c", &evals.c),
        ("z", &evals.z),
        ("z_omega", &evals.zw),
        ("T_1_omega", &evals.t1w),
        ("T_2_omega", &evals.t2w),
        ("batch_inv", &evals.inv),
    ];

    let mut lines = Vec::new();
    for (name, point) in points {
        lines.push(format!("    {}: {{", name));
        lines.push(format!("      x: {},", bn_format(point.x())));
        lines.push(format!("      y: {}", bn_format(point.y())));
        lines.push("    },".to_string());
    }
    for (name, value) in scalars {
        lines.push(format!("    {}: {{", name));
        lines.push(format!("      x: {}", bn_format(value)));
        lines.push("    },".to_string());
    }
    strip_last_comma(&mut lines);

    lines.join("\n")
}

fn strip_last_comma(lines: &mut [String]) {
    if let Some(last) = lines.last_mut() {
        if let Some(stripped) = last.strip_suffix(',') {
            *last = stripped.to_string();
        }
    }
}

/// The complete Sway fragment for any supported proof.
pub fn generate(proof: &Proof, inputs: &PublicInputs) -> String {
    match proof {
        Proof::Plonk(p) => generate_plonk(p, inputs),
        Proof::Groth16(p) => generate_groth16(p, inputs),
        Proof::Fflonk(p) => generate_fflonk(p, inputs),
    }
}

pub fn generate_plonk(proof: &PlonkProof, inputs: &PublicInputs) -> String {
    format!(
        "const proof = {{\n{}\n}};\n\nconst pubInput = [\n    {}\n];",
        format_plonk_proof(proof),
        format_pub_input(inputs)
    )
}

/// Groth16 call data: `a` and `c` keep the first two coordinates, `b` keeps
/// the first two rows with each pair reversed (imaginary limb first, the
/// operand order the Fuel verifier expects).
pub fn generate_groth16(proof: &Groth16Proof, inputs: &PublicInputs) -> String {
    let a = format!(
        "    {},\n    {}",
        bn_format(&proof.pi_a[0]),
        bn_format(&proof.pi_a[1])
    );
    let b = format!(
        "    [{}, {}],\n    [{}, {}]",
        bn_format(&proof.pi_b[0][1]),
        bn_format(&proof.pi_b[0][0]),
        bn_format(&proof.pi_b[1][1]),
        bn_format(&proof.pi_b[1][0])
    );
    let c = format!(
        "    {},\n    {}",
        bn_format(&proof.pi_c[0]),
        bn_format(&proof.pi_c[1])
    );

    format!(
        "const a = [\n{}\n];\n\nconst b = [\n{}\n];\n\nconst c = [\n{}\n];\n\nconst pubInput = [\n    {}\n];",
        a,
        b,
        c,
        format_pub_input(inputs)
    )
}

pub fn generate_fflonk(proof: &FflonkProof, inputs: &PublicInputs) -> String {
    format!(
        "const proof = {{\n{}\n}};\n\nconst pubInput = [\n    {}\n];",
        format_fflonk_proof(proof),
        format_pub_input(inputs)
    )
}
