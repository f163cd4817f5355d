//! Native extension module, mirroring the original string-in/string-out
//! interface: sentinel "Unknown" results stay strings, malformed input
//! raises `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::CardNumberError;

fn value_error(err: CardNumberError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Vendor name for a card number, or "Unknown".
#[pyfunction]
fn get_credit_card_vendor(number: &str) -> PyResult<String> {
    crate::vendor(number)
        .map(|vendor| vendor.name().to_owned())
        .map_err(value_error)
}

/// True iff the card number passes the Luhn checksum.
#[pyfunction]
fn is_credit_card_number_valid(number: &str) -> PyResult<bool> {
    crate::is_valid(number).map_err(value_error)
}

/// Next valid card number under the same IIN, or "Unknown" if none exists.
#[pyfunction]
fn generate_next_credit_card_number(number: &str) -> PyResult<String> {
    crate::next_card_number(number)
        .map(|next| next.unwrap_or_else(|| "Unknown".to_owned()))
        .map_err(value_error)
}

/// Luhn-validate a batch of candidates in parallel, releasing the GIL.
/// Malformed entries report False instead of raising.
#[pyfunction]
fn validate_batch(py: Python<'_>, numbers: Vec<String>) -> Vec<bool> {
    py.allow_threads(|| crate::validate_batch(&numbers))
}

/// Check if the native extension is working.
#[pyfunction]
fn is_native_available() -> bool {
    true
}

#[pymodule]
fn cardnum(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_credit_card_vendor, m)?)?;
    m.add_function(wrap_pyfunction!(is_credit_card_number_valid, m)?)?;
    m.add_function(wrap_pyfunction!(generate_next_credit_card_number, m)?)?;
    m.add_function(wrap_pyfunction!(validate_batch, m)?)?;
    m.add_function(wrap_pyfunction!(is_native_available, m)?)?;
    m.add("IIN_DIGITS", crate::IIN_DIGITS)?;
    Ok(())
}
