use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Fetch;

#[derive(Copy, Clone, Debug)]
pub enum Phase {
    Navigate,
    AwaitOperator,
    Verify,
    Extract,
    Render,
    LogQuery,
}

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Navigate => "navigate",
            Phase::AwaitOperator => "await_operator",
            Phase::Verify => "verify",
            Phase::Extract => "extract",
            Phase::Render => "render",
            Phase::LogQuery => "log_query",
        }
    }
    fn span(&self) -> Span {
        match self {
            Phase::Navigate => info_span!("navigate"),
            Phase::AwaitOperator => info_span!("await_operator"),
            Phase::Verify => info_span!("verify"),
            Phase::Extract => info_span!("extract"),
            Phase::Render => info_span!("render"),
            Phase::LogQuery => info_span!("log_query"),
        }
    }
}

impl OpMarker for Fetch {
    const NAME: &'static str = "fetch";
    type Phase = Phase;
    fn root_span() -> Span {
        info_span!("fetch")
    }
}
