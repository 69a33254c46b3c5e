//! Named transpose implementations for the evaluation driver.
//!
//! Functions are stored as plain `fn` pointers over `dyn TransposeMemory`
//! so the driver can run any of them under the cache simulator.

use crate::blocked::{self, SUBMISSION_DESC};
use crate::error::{Result, TransposeError};
use crate::matrix::memory::TransposeMemory;
use crate::matrix::transpose::{self, BASELINE_DESC};

/// A transpose the driver can evaluate.
pub type TransposeFn = fn(&mut dyn TransposeMemory);

/// One registered implementation.
#[derive(Clone, Copy)]
pub struct Registered {
    pub description: &'static str,
    pub func: TransposeFn,
}

impl Registered {
    pub fn run(&self, mem: &mut dyn TransposeMemory) {
        (self.func)(mem)
    }
}

impl std::fmt::Debug for Registered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registered")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered list of registered implementations.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Registered>,
}

impl Registry {
    /// Most functions the driver will evaluate.
    pub const MAX_FUNCS: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the submission and the baseline, in that order.
    pub fn with_defaults() -> Self {
        Self {
            entries: vec![
                Registered {
                    description: SUBMISSION_DESC,
                    func: submit,
                },
                Registered {
                    description: BASELINE_DESC,
                    func: baseline,
                },
            ],
        }
    }

    pub fn register(&mut self, func: TransposeFn, description: &'static str) -> Result<()> {
        if self.entries.len() >= Self::MAX_FUNCS {
            return Err(TransposeError::RegistryFull {
                limit: Self::MAX_FUNCS,
            });
        }
        log::debug!("registered transpose function {:?}", description);
        self.entries.push(Registered { description, func });
        Ok(())
    }

    pub fn entries(&self) -> &[Registered] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry registered under exactly `description`.
    pub fn find(&self, description: &str) -> Result<&Registered> {
        self.entries
            .iter()
            .find(|e| e.description == description)
            .ok_or_else(|| TransposeError::UnknownFunction(description.to_string()))
    }

    /// The entry graded by the driver.
    pub fn submission(&self) -> Result<&Registered> {
        self.find(SUBMISSION_DESC)
    }
}

fn submit(mem: &mut dyn TransposeMemory) {
    blocked::transpose_submit(mem);
}

fn baseline(mem: &mut dyn TransposeMemory) {
    transpose::trans_in(mem);
}

/// Register the submission and the baseline.
pub fn register_functions(registry: &mut Registry) -> Result<()> {
    registry.register(submit, SUBMISSION_DESC)?;
    registry.register(baseline, BASELINE_DESC)?;
    Ok(())
}
