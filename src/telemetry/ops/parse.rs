use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Parse;

#[derive(Copy, Clone, Debug)]
pub enum Phase {
    ReadFile,
    Extract,
    Render,
}

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::ReadFile => "read_file",
            Phase::Extract => "extract",
            Phase::Render => "render",
        }
    }
    fn span(&self) -> Span {
        match self {
            Phase::ReadFile => info_span!("read_file"),
            Phase::Extract => info_span!("extract"),
            Phase::Render => info_span!("render"),
        }
    }
}

impl OpMarker for Parse {
    const NAME: &'static str = "parse";
    type Phase = Phase;
    fn root_span() -> Span {
        info_span!("parse")
    }
}
