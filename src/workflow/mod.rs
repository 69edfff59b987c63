pub mod protein_ctx;
pub mod protein_flow;

pub use protein_ctx::ProteinCtx;
pub use protein_flow::ProteinFlow;
