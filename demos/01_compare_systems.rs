/// compare SAC and PRICE side by side, with tracing output enabled
use financing_simulator::{AmortizationEngine, Decimal, Money, SimulationInput, SimulationPolicy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let engine = AmortizationEngine::new(SimulationPolicy::default())?;

    let input = SimulationInput::builder()
        .property_value(Money::from_major(450_000))
        .down_payment(Money::from_major(90_000))
        .term_years(25)
        .annual_rate_percent(Decimal::new(1049, 2))
        .gross_monthly_income(Money::from_major(15_000))
        .build()?;

    let comparison = engine.compare(&input)?;

    for result in [&comparison.sac, &comparison.price] {
        let last = result.last_installment().map(|r| r.installment_value).unwrap_or(Money::ZERO);
        println!(
            "{:<5} first {:>10}  last {:>10}  interest {:>12}  approved {}",
            result.system.code(),
            result.representative_installment.to_cents(),
            last.to_cents(),
            result.total_interest.to_cents(),
            result.approved,
        );
    }
    println!("interest saved with SAC: {}", comparison.interest_savings_with_sac().to_cents());

    Ok(())
}
