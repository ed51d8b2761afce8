#![allow(unsafe_op_in_unsafe_fn, non_local_definitions)]

mod greeter;
mod util;

use pyo3::prelude::*;

#[pymodule(name = "mymodule")]
fn mymodule_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(greeter::hello_world, m)?)?;

    Ok(())
}
