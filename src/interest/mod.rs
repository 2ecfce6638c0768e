/// Final principal after `years` of compound growth.
///
/// `rate` is the annual rate in decimal form (5% = 0.05);
/// `compounds_per_year` must be at least 1 (not validated here; callers
/// sanitize form input first).
///
/// Each elapsed year multiplies the running principal by
/// `(1 + rate/compounds_per_year)^compounds_per_year` in a single step.
/// The sub-year periods are deliberately folded into one annual factor
/// rather than accrued across the full `years * compounds_per_year`
/// span; the savings screen has always projected with this recurrence,
/// so the exact operation order is load-bearing for displayed balances.
pub fn compound_interest(principal: f64, rate: f64, compounds_per_year: u32, years: u32) -> f64 {
    accrue(principal, rate, compounds_per_year, years, 0)
}

fn accrue(principal: f64, rate: f64, compounds_per_year: u32, years: u32, current_year: u32) -> f64 {
    if current_year >= years {
        return principal;
    }
    let factor = (1.0 + rate / f64::from(compounds_per_year)).powi(compounds_per_year as i32);
    accrue(principal * factor, rate, compounds_per_year, years, current_year + 1)
}
