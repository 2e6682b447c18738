use crate::fixture::{BinaryOpFixture, REFERENCE_LOOPS};
use crate::verification::verify_loops;
use anyhow::{Context, Result};

/// Execute verify command
pub fn execute_verify(loops: Vec<usize>, length: usize) -> Result<()> {
    let loops = if loops.is_empty() {
        REFERENCE_LOOPS.to_vec()
    } else {
        loops
    };

    println!("🔍 計算結果の検証 (配列長: {length})");

    let mut fixture = BinaryOpFixture::with_length(length);
    let reports = verify_loops(&mut fixture, &loops).context("計算結果が一致しません")?;

    for report in &reports {
        let strategies: Vec<&str> = report.strategies.iter().map(|s| s.name()).collect();
        println!(
            "   ✅ loops={}: {} が一致",
            report.loops,
            strategies.join(", ")
        );
    }

    Ok(())
}
