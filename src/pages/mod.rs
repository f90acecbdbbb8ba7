//! Routed Pages

mod calculator;
mod login;
mod records;

pub use calculator::CalculatorPage;
pub use login::LoginPage;
pub use records::RecordsPage;
