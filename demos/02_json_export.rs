/// json export - policy loaded from json, schedule with due dates exported as json
use financing_simulator::chrono::NaiveDate;
use financing_simulator::{
    AmortizationEngine, AmortizationSystem, Decimal, Money, SimulationInput, SimulationPolicy,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = SimulationPolicy::from_json(r#"{ "approval_threshold_percent": "28", "max_term_years": 30 }"#)?;
    let engine = AmortizationEngine::new(policy)?;

    let first_due = NaiveDate::from_ymd_opt(2025, 1, 31).ok_or("invalid date")?;
    let input = SimulationInput::builder()
        .property_value(Money::from_major(200_000))
        .down_payment(Money::from_major(50_000))
        .term_years(1)
        .annual_rate_percent(Decimal::new(12, 0))
        .system(AmortizationSystem::Price)
        .gross_monthly_income(Money::from_major(60_000))
        .first_due_date(first_due)
        .build()?;

    let result = engine.simulate(&input)?;
    println!("{}", result.to_json_pretty()?);

    Ok(())
}
