#[derive(Clone, Debug)]
pub struct TuningParams {
    pub threads: usize,
    pub input_len: usize,
    pub passes: usize,
    pub radix: usize,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg(feature = "multi-threaded")]
pub enum Algorithm {
    MtLsb,
    Comparative,
    LrLsb,
    Lsb,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg(not(feature = "multi-threaded"))]
pub enum Algorithm {
    Comparative,
    LrLsb,
    Lsb,
}

pub trait Tuner {
    /// `counts` holds the per-digit counts of the first pass that sorts anything.
    fn pick_algorithm(&self, p: &TuningParams, counts: &[usize]) -> Algorithm;
}
