/// Identifies one full draw setup in a deterministic, stable way.
///
/// A small, copyable handle so async results can carry it without
/// heap allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

/// Monotonically increasing draw-generation counter.
///
/// Every full draw setup begins a new generation; an async result is applied
/// only while its generation is still current. Results that lose the race
/// are discarded, never merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Generations {
    current: u64,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all earlier ones.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}
