#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

/// Coerce the Python-side infection series into a contiguous 1-D `f64`
/// buffer.
///
/// Accepts, in order of preference: a contiguous float64 numpy array
/// (zero-copy), anything with a `to_numpy` method yielding one (pandas
/// Series), or a plain sequence of floats (copied into a fresh array).
/// Non-contiguous arrays fall through to the copying path rather than
/// erroring here; the caller's `as_slice` reports the final failure.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    // pandas Series: to_numpy(copy=False) hands back the underlying block
    // when the dtype already matches.
    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "infection series must be a 1-D numpy.ndarray, pandas.Series, \
             or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}
