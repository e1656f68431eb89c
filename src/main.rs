use anyhow::Result;

// Use library instead of local modules
use coinbank::{Coinbank, DIME_VALUE, NICKEL_VALUE, PENNY_VALUE, QUARTER_VALUE};

fn main() -> Result<()> {
    println!("🏦 Coinbank v{} - demo run", coinbank::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut bank = Coinbank::new();

    // 1. Deposit a handful of coins
    println!("\n💰 Depositing coins...");
    for denomination in [
        PENNY_VALUE,
        PENNY_VALUE,
        NICKEL_VALUE,
        DIME_VALUE,
        QUARTER_VALUE,
        QUARTER_VALUE,
    ] {
        bank.deposit(denomination);
    }
    println!("✓ Bank now holds {} cents", bank.total_cents());

    // 2. An unbankable coin is rejected
    if !bank.deposit(3) {
        println!("✓ Rejected a 3-cent coin (not bankable)");
    }

    // 3. Withdraw more quarters than we have; the bank clamps
    let removed = bank.withdraw(QUARTER_VALUE, 10);
    println!("✓ Asked for 10 quarters, got {}", removed);

    // 4. Report
    println!("\n📊 Report:");
    print!("{}", bank.describe());

    println!("\n📋 Summary (JSON):");
    println!("{}", serde_json::to_string_pretty(&bank.summary())?);

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Demo complete");

    Ok(())
}
