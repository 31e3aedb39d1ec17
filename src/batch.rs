//! Data-parallel evaluation of independent synthesis requests.
//!
//! Every synthesis call is a pure function of its inputs, so a batch of
//! requests over unrelated descriptors needs no coordination at all;
//! results come back positionally aligned with the requests.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::describe::synthesize_description;
use crate::descriptor::TypeDescriptor;
use crate::diagnostic::Diagnostic;
use crate::expr::Expr;
use crate::keymap::synthesize_key_mapping;
use crate::render::GeneratedMember;

/// One self-contained synthesis request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum SynthesisRequest {
    KeyMapping {
        descriptor: TypeDescriptor,
        #[serde(default)]
        raw_policy: Option<Expr>,
    },
    Description {
        descriptor: TypeDescriptor,
    },
}

impl SynthesisRequest {
    pub fn run(&self) -> Result<GeneratedMember, Diagnostic> {
        match self {
            SynthesisRequest::KeyMapping { descriptor, raw_policy } => {
                synthesize_key_mapping(descriptor, raw_policy.as_ref())
            }
            SynthesisRequest::Description { descriptor } => synthesize_description(descriptor),
        }
    }
}

/// Evaluate a batch of requests in parallel.
pub fn run_batch(requests: &[SynthesisRequest]) -> Vec<Result<GeneratedMember, Diagnostic>> {
    debug!("evaluating {} synthesis request(s)", requests.len());
    requests.par_iter().map(SynthesisRequest::run).collect()
}
