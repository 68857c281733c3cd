/// Estimated value of a joint action in a state, as reported by a
/// [`QSource`](crate::q_source::QSource).
///
/// Only the value `q` takes part in backup computation; `confidence` is
/// carried through for estimators that report it (exact lookup tables report
/// full confidence).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "speedy", derive(speedy::Writable, speedy::Readable))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QValue{
    pub q: f64,
    pub confidence: f64,
}

impl QValue{
    pub fn new(q: f64, confidence: f64) -> Self{
        Self{q, confidence}
    }

    /// Q-value known exactly, e.g. read from a lookup table.
    pub fn exact(q: f64) -> Self{
        Self{q, confidence: 1.0}
    }
}
