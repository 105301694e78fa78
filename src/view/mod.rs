//! Report rendering (impure shell output formats)

pub mod report;

pub use report::{
    render_frame, render_layout, render_outcome, render_structures, to_json, CapacityReport,
    LayoutReport, SimulationStep,
};
