mod valuation;

pub use valuation::ValuationScreen;
