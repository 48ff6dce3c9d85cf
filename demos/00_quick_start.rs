/// quick start - one simulation with the default policy
use financing_simulator::{simulate, AmortizationSystem, Decimal, Money, SimulationInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = SimulationInput::builder()
        .property_value(Money::from_major(300_000))
        .down_payment(Money::from_major(60_000))
        .term_years(30)
        .annual_rate_percent(Decimal::new(95, 1))
        .system(AmortizationSystem::Sac)
        .gross_monthly_income(Money::from_major(8_000))
        .build()?;

    let result = simulate(&input)?;

    println!("financed:        {}", result.financed_amount.to_cents());
    println!("first installment: {}", result.representative_installment.to_cents());
    println!("total interest:  {}", result.total_interest.to_cents());
    println!("income committed: {}%", result.income_commitment_ratio.round_dp(2));
    println!("approved:        {}", result.approved);

    Ok(())
}
