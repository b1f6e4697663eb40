//! Browser helpers kept out of the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These wrap the JS globals the page relies on (`Date`, `Plotly`) so
//! components stay free of `wasm_bindgen` details.

pub mod clock;
pub mod plotly;
