//! Python bindings for the Hearts round engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_hearts as hearts
//!
//! game = hearts.Hearts(player_count=4, seed=42)
//! p0 = hearts.PlayerId(0)
//! game.pass_cards(p0, game.hand(p0)[:3])
//!
//! try:
//!     game.take_trick(p0)
//! except hearts.RestrictionFailure as err:
//!     print(err)  # The trick isn't finished
//! ```
//!
//! The bindings are built with the `python` feature through a Python build
//! tool such as maturin, so `cargo test` never links them. Exception mapping
//! follows `ActionError::restriction`: errors that carry a restriction
//! failure raise `RestrictionFailure` with its message, and every other
//! error raises `ValueError`. That split is covered by the `error` tests.

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

#[pymodule]
fn rust_hearts(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyHearts>()?;
    m.add("RestrictionFailure", m.py().get_type_bound::<RestrictionFailure>())?;

    Ok(())
}
