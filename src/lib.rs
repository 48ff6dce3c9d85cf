pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod interest;
pub mod schedule;
pub mod summary;
pub mod types;
pub mod validation;
pub mod views;

// re-export key types
pub use config::SimulationPolicy;
pub use decimal::{Money, Rate};
pub use engine::{simulate, AmortizationEngine, SimulationResult, SystemComparison};
pub use errors::{Result, SimulationError};
pub use interest::MonthlyRateConverter;
pub use schedule::{AmortizationCalculator, PriceCalculator, SacCalculator, ScheduleCalculator};
pub use summary::{Affordability, AffordabilityEvaluator, SummaryAggregator, Totals};
pub use types::{
    AmortizationSystem, InstallmentRow, Schedule, SimulationInput, SimulationInputBuilder,
};
pub use validation::InputValidator;
pub use views::{ComparisonView, SimulationView, SummaryView};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
