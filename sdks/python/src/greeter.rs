use pyo3::prelude::*;

use crate::util::map_err;

#[pyfunction]
pub(crate) fn hello_world() -> PyResult<()> {
    tracing::debug!("mymodule.hello_world called");
    mymodule_greeter::hello_world().map_err(map_err)
}
