use valuekit_demo::run;

fn main() -> anyhow::Result<()> {
    valuekit_observability::init();

    let report = run()?;

    tracing::info!(
        same_amount_equal = report.same_amount_equal,
        different_amount_equal = report.different_amount_equal,
        money = %report.money_display,
        total = %report.total_display,
        "money walkthrough"
    );
    tracing::info!(
        same_address_equal = report.same_address_equal,
        different_address_equal = report.different_address_equal,
        "email walkthrough"
    );
    tracing::info!(
        kilometers = %report.converted_kilometers,
        miles = %report.converted_miles,
        "distance walkthrough"
    );
    if let Some(err) = &report.rejected_addition {
        tracing::info!(error = %err, "mismatched addition rejected");
    }

    Ok(())
}
